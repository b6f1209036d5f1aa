pub mod chart;
pub mod metric;
pub mod series;
pub mod settings;
pub mod summary;
pub mod table;
