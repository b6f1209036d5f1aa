pub mod aggregation_service;
pub mod chart_service;
pub mod series_service;
pub mod table_service;
