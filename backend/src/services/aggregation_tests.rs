use super::*;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

const LABELS: [&str; 10] = [
    "Luminance", "Red", "Green", "Blue", "Ha", "OIII", "SII", "CLEAR", "Unknown-XYZ", "ha",
];

fn create_test_frame(object: &str, filter: &str, exposure: f64) -> FrameRecord {
    FrameRecord {
        object_id: ObjectId::new(object),
        filter_label: filter.to_string(),
        exposure_seconds: exposure,
        ra: 10.684,
        dec: 41.269,
        focus_metric: 0.0,
        sky_background_metric: 0.0,
        captured_at: Utc.with_ymd_and_hms(2023, 10, 1, 22, 0, 0).unwrap(),
    }
}

fn aggregator(frame_size_bytes: f64) -> StatisticAggregator {
    StatisticAggregator::new(FilterCatalog::default(), frame_size_bytes).unwrap()
}

#[test]
fn test_new_rejects_unusable_frame_size() {
    for size in [f64::NAN, f64::INFINITY, -1.0] {
        let result = StatisticAggregator::new(FilterCatalog::default(), size);
        assert!(matches!(result, Err(StatsError::Configuration(_))));
    }
    assert_eq!(aggregator(0.0).frame_size_bytes(), 0.0);
}

#[test]
fn test_aggregate_empty() {
    let result = StatisticAggregator::default().aggregate(&Vec::<FrameRecord>::new(), None);

    assert_eq!(result.statistic.frame_count, 0);
    assert_eq!(result.statistic.total_exposure_seconds, 0.0);
    assert_eq!(result.statistic.estimated_data_size_bytes, 0);
    assert!(result.filters.is_empty());
    assert!(result.is_empty());
    assert_eq!(result.rejected_count, 0);
}

#[test]
fn test_aggregate_basic() {
    let frames = vec![
        create_test_frame("M31", "Luminance", 300.0),
        create_test_frame("M31", "Luminance", 300.0),
        create_test_frame("M31", "Ha", 600.0),
    ];
    let result = aggregator(1000.0).aggregate(&frames, None);

    assert_eq!(result.statistic.frame_count, 3);
    assert_eq!(result.statistic.total_exposure_seconds, 1200.0);
    assert_eq!(result.statistic.estimated_data_size_bytes, 3000);
    assert_eq!(result.filters.len(), 2);

    let lum = result.filters["luminance"];
    assert_eq!(lum.frame_count, 2);
    assert_eq!(lum.total_exposure_seconds, 600.0);

    let ha = result.filters["hydrogen"];
    assert_eq!(ha.frame_count, 1);
    assert_eq!(ha.total_exposure_seconds, 600.0);
}

#[test]
fn test_unknown_label_goes_to_unknown_bucket() {
    let frames = vec![
        create_test_frame("M31", "Unknown-XYZ", 120.0),
        create_test_frame("M31", "Unknown-XYZ", 60.0),
    ];
    let result = StatisticAggregator::default().aggregate(&frames, None);

    let unknown = result.filters[FilterId::UNKNOWN];
    assert_eq!(unknown.frame_count, 2);
    assert_eq!(unknown.total_exposure_seconds, 180.0);
    assert_eq!(result.rejected_count, 0);
}

#[test]
fn test_blue_and_green_stay_separate() {
    let frames = vec![
        create_test_frame("M31", "Blue", 60.0),
        create_test_frame("M31", "Green", 90.0),
    ];
    let result = StatisticAggregator::default().aggregate(&frames, None);

    assert_eq!(result.filters["blue"].total_exposure_seconds, 60.0);
    assert_eq!(result.filters["green"].total_exposure_seconds, 90.0);
}

#[test]
fn test_object_filter_skips_other_objects() {
    let frames = vec![
        create_test_frame("M31", "Luminance", 300.0),
        create_test_frame("M42", "Ha", 180.0),
        create_test_frame("M31", "Red", 120.0),
    ];
    let result = StatisticAggregator::default().aggregate(&frames, Some("M31"));

    assert_eq!(result.statistic.frame_count, 2);
    assert_eq!(result.statistic.total_exposure_seconds, 420.0);
    assert!(!result.filters.contains_key("hydrogen"));
    assert_eq!(result.rejected_count, 0);
}

#[test]
fn test_object_filter_without_matches_is_no_data() {
    let frames = vec![create_test_frame("M42", "Ha", 180.0)];
    let result = StatisticAggregator::default().aggregate(&frames, Some("M31"));

    assert!(result.is_empty());
    assert_eq!(result.statistic, ObjectStatistic::default());
}

#[test]
fn test_zero_exposure_frames_are_data() {
    let frames = vec![create_test_frame("M31", "Luminance", 0.0)];
    let result = StatisticAggregator::default().aggregate(&frames, None);

    assert_eq!(result.statistic.frame_count, 1);
    assert_eq!(result.statistic.total_exposure_seconds, 0.0);
    assert!(!result.is_empty());
}

#[test]
fn test_malformed_records_rejected_individually() {
    let mut nan_ra = create_test_frame("M31", "Luminance", 60.0);
    nan_ra.ra = f64::NAN;
    let frames = vec![
        create_test_frame("M31", "Luminance", 60.0),
        create_test_frame("M31", "Luminance", -5.0),
        create_test_frame("M31", "Luminance", f64::INFINITY),
        nan_ra,
        create_test_frame("", "Luminance", 60.0),
        create_test_frame("M31", "Ha", 60.0),
    ];
    let result = StatisticAggregator::default().aggregate(&frames, None);

    assert_eq!(result.statistic.frame_count, 2);
    assert_eq!(result.statistic.total_exposure_seconds, 120.0);
    assert_eq!(result.rejected_count, 4);
}

#[test]
fn test_malformed_records_of_other_objects_not_counted() {
    let frames = vec![
        create_test_frame("M42", "Ha", -1.0),
        create_test_frame("M31", "Ha", 60.0),
    ];
    let result = StatisticAggregator::default().aggregate(&frames, Some("M31"));
    assert_eq!(result.rejected_count, 0);
    assert_eq!(result.statistic.frame_count, 1);
}

#[test]
fn test_exposure_sum_is_exact() {
    let frames: Vec<_> = (0..10)
        .map(|_| create_test_frame("M31", "Luminance", 0.1))
        .collect();
    let result = StatisticAggregator::default().aggregate(&frames, None);
    assert_eq!(result.statistic.total_exposure_seconds, 1.0);
}

#[test]
fn test_exposure_overflow_is_infinite_not_nan() {
    let frames = vec![
        create_test_frame("M31", "Luminance", 1.7e308),
        create_test_frame("M31", "Luminance", 1.7e308),
    ];
    let result = StatisticAggregator::default().aggregate(&frames, None);

    assert_eq!(result.statistic.frame_count, 2);
    assert_eq!(result.statistic.total_exposure_seconds, f64::INFINITY);
    assert_eq!(result.filters["luminance"].total_exposure_seconds, f64::INFINITY);
}

#[test]
fn test_data_size_rounds_half_up() {
    assert_eq!(estimate_data_size(0, 2.5), 0);
    assert_eq!(estimate_data_size(1, 2.5), 3);
    assert_eq!(estimate_data_size(2, 2.5), 5);
    assert_eq!(estimate_data_size(3, 2.5), 8);
    assert_eq!(estimate_data_size(1, 2.4), 2);
}

#[test]
fn test_aggregate_by_object_matches_filtered_runs() {
    let frames = vec![
        create_test_frame("M31", "Luminance", 300.0),
        create_test_frame("M42", "Ha", 180.0),
        create_test_frame("M31", "Red", 120.0),
        create_test_frame("NGC 7000", "OIII", 600.0),
    ];
    let agg = StatisticAggregator::default();
    let grouped = agg.aggregate_by_object(&frames);

    assert_eq!(grouped.len(), 3);
    for (object, aggregation) in &grouped {
        assert_eq!(aggregation, &agg.aggregate(&frames, Some(object.as_str())));
    }
}

#[test]
fn test_accumulator_merge_matches_single_pass() {
    let catalog = FilterCatalog::default();
    let frames = vec![
        create_test_frame("M31", "Luminance", 0.1),
        create_test_frame("M31", "Ha", 0.2),
        create_test_frame("M31", "Luminance", 0.3),
        create_test_frame("M31", "Luminance", -1.0),
    ];

    let mut left = StatisticAccumulator::new();
    let mut right = StatisticAccumulator::new();
    for (i, frame) in frames.iter().enumerate() {
        if i % 2 == 0 {
            left.push(frame, &catalog);
        } else {
            right.push(frame, &catalog);
        }
    }
    left.merge(&right);

    let single = aggregator(100.0).aggregate(&frames, None);
    assert_eq!(left.finish(100.0), single);
}

fn frames_from(spec: &[(usize, usize, f64)]) -> Vec<FrameRecord> {
    let objects = ["M31", "M42", "M51"];
    spec.iter()
        .map(|(o, f, e)| create_test_frame(objects[*o], LABELS[*f], *e))
        .collect()
}

fn frame_spec() -> impl Strategy<Value = Vec<(usize, usize, f64)>> {
    prop::collection::vec((0usize..3, 0usize..LABELS.len(), 0.0f64..3600.0), 0..60)
}

proptest! {
    #[test]
    fn prop_order_independent(
        (original, shuffled) in frame_spec().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let agg = StatisticAggregator::default();
        let a = agg.aggregate(&frames_from(&original), None);
        let b = agg.aggregate(&frames_from(&shuffled), None);

        prop_assert_eq!(a.statistic.frame_count, b.statistic.frame_count);
        prop_assert_eq!(
            a.statistic.total_exposure_seconds.to_bits(),
            b.statistic.total_exposure_seconds.to_bits()
        );
        prop_assert_eq!(a.filters, b.filters);
    }

    #[test]
    fn prop_disjoint_filters_partition_counts(spec in frame_spec()) {
        let frames = frames_from(&spec);
        let agg = StatisticAggregator::default();
        let whole = agg.aggregate(&frames, None);
        let total: u64 = ["M31", "M42", "M51"]
            .iter()
            .map(|o| agg.aggregate(&frames, Some(o)).statistic.frame_count)
            .sum();
        prop_assert_eq!(total, whole.statistic.frame_count);
    }

    #[test]
    fn prop_filter_counts_sum_to_object_count(spec in frame_spec()) {
        let result = StatisticAggregator::default().aggregate(&frames_from(&spec), None);
        let by_filter: u64 = result.filters.values().map(|f| f.frame_count).sum();
        prop_assert_eq!(by_filter, result.statistic.frame_count);
    }

    #[test]
    fn prop_data_size_is_rounded_product(count in 0u64..1_000_000_000) {
        // 2880.5 bytes per frame: odd counts land exactly on .5 and round up.
        prop_assert_eq!(estimate_data_size(count, 2880.5), count * 2880 + (count + 1) / 2);
        prop_assert_eq!(estimate_data_size(count, 2880.0), count * 2880);
    }
}
