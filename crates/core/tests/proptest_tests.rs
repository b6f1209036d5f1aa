//! Property-based tests for sorting and aggregation using proptest

use proptest::prelude::*;
use vehicle_analysis_core::models::metric::Metric;
use vehicle_analysis_core::models::table::{SortDirection, SortState, TableRow};
use vehicle_analysis_core::services::aggregation_service::AggregationService;
use vehicle_analysis_core::services::series_service::SeriesService;
use vehicle_analysis_core::services::table_service::TableService;

// Strategies for generating test data

prop_compose! {
    // Small key range so ties are common
    fn arb_rows()(keys in prop::collection::vec(0u8..5, 0..40)) -> Vec<TableRow> {
        keys.into_iter()
            .enumerate()
            .map(|(i, k)| TableRow::new(i.to_string()).with_key("cost", f64::from(k)))
            .collect()
    }
}

fn original_index(row: &TableRow) -> usize {
    row.id.parse().unwrap()
}

proptest! {
    #[test]
    fn ascending_sort_is_ordered_and_stable(rows in arb_rows()) {
        let (sorted, state) = TableService::new()
            .sort(&rows, "cost", &SortState::default())
            .unwrap();
        prop_assert_eq!(sorted.len(), rows.len());
        prop_assert_eq!(state.direction, SortDirection::Ascending);
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0].key("cost").unwrap(), pair[1].key("cost").unwrap());
            prop_assert!(a <= b);
            if a == b {
                prop_assert!(original_index(&pair[0]) < original_index(&pair[1]));
            }
        }
    }

    #[test]
    fn descending_sort_is_ordered_and_stable(rows in arb_rows()) {
        let current = SortState {
            active_column: Some("cost".into()),
            direction: SortDirection::Ascending,
        };
        let (sorted, state) = TableService::new().sort(&rows, "cost", &current).unwrap();
        prop_assert_eq!(state.direction, SortDirection::Descending);
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0].key("cost").unwrap(), pair[1].key("cost").unwrap());
            prop_assert!(a >= b);
            if a == b {
                prop_assert!(original_index(&pair[0]) < original_index(&pair[1]));
            }
        }
    }

    #[test]
    fn sort_is_deterministic(rows in arb_rows()) {
        let service = TableService::new();
        let state = SortState::default();
        let first = service.sort(&rows, "cost", &state).unwrap();
        let second = service.sort(&rows, "cost", &state).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn resorting_sorted_rows_ascending_is_identity(rows in arb_rows()) {
        let service = TableService::new();
        let (sorted, _) = service.sort(&rows, "cost", &SortState::default()).unwrap();
        let (again, _) = service.sort(&sorted, "cost", &SortState::default()).unwrap();
        prop_assert_eq!(sorted, again);
    }

    #[test]
    fn cumulate_last_equals_sum(daily in prop::collection::vec(0u32..10_000, 1..100)) {
        let daily: Vec<f64> = daily.into_iter().map(f64::from).collect();
        let cumulative = AggregationService::cumulate(&daily);
        prop_assert_eq!(cumulative.len(), daily.len());
        prop_assert_eq!(*cumulative.last().unwrap(), daily.iter().sum::<f64>());
        for pair in cumulative.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn built_series_keeps_parallel_lengths(daily in prop::collection::vec(0u32..1_000, 1..60)) {
        let daily: Vec<f64> = daily.into_iter().map(f64::from).collect();
        let dates: Vec<String> = (0..daily.len()).map(|i| format!("day {i}")).collect();
        let series = SeriesService::new()
            .build_from_daily(dates, daily.clone(), daily.clone(), daily.clone())
            .unwrap();
        for m in Metric::ALL {
            prop_assert_eq!(series.metric(m).cumulative.len(), series.dates.len());
            prop_assert_eq!(series.metric(m).daily.len(), series.dates.len());
        }
        let mean = AggregationService::mean(Metric::Cost, &daily).unwrap();
        let summary = AggregationService::new().summarize(&series).unwrap();
        prop_assert_eq!(summary.cost, mean);
    }
}
