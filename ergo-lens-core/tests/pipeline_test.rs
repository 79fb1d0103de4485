use ergo_lens_core::{
    bar_color, build_bins, build_view, filter, total_count, view, DashboardSession, Dimension,
    DomainPolicy, FilterState, LinearScale, Record, ViewState,
};

fn record(rer: f64) -> Record {
    Record {
        rer,
        age: 25.0,
        sex: 0.0,
        weight: 72.0,
        height: 178.0,
        temperature: 21.0,
        speed: 9.0,
        resting: 0.0,
    }
}

/// `n` running observations with RER spread across (0.6, 1.4).
fn dataset(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| record(0.6 + 0.8 * (i as f64 / n as f64)))
        .collect()
}

#[test]
fn all_all_filters_keep_every_record_in_order() {
    let records = dataset(100);
    let filtered = FilterState::default().apply(&records);
    assert_eq!(filtered.len(), 100);
    assert_eq!(filtered[0], records[0]);
    assert_eq!(filtered[99], records[99]);
}

#[test]
fn age_buckets_are_disjoint_and_cover_from_ten_up() {
    let buckets = ["10s", "20s", "30s", "40s", "50+"];
    for age in [10.0, 15.0, 19.99, 20.0, 29.99, 35.0, 45.0, 49.99, 50.0, 77.0] {
        let hits = buckets
            .iter()
            .filter(|b| filter::age_matches(b, age))
            .count();
        assert_eq!(hits, 1, "age {age} should fall in exactly one bucket");
    }
    assert!(!filter::age_matches("10s", 9.99));
    assert!(filter::age_matches("all", 9.99));
}

#[test]
fn nan_fields_fail_every_bounded_bucket_but_match_all() {
    let nan = f64::NAN;
    assert!(filter::age_matches("all", nan));
    for bucket in ["10s", "20s", "30s", "40s", "50+"] {
        assert!(!filter::age_matches(bucket, nan));
    }
    assert!(!filter::sex_matches("Male", nan));
    assert!(!filter::weight_matches("90+", nan));
}

#[test]
fn binning_partitions_the_domain() {
    let values = [0.05, 0.1, 0.2, 0.25, 0.95, 1.0, -0.5, 1.5, f64::NAN];
    let bins = build_bins(&values, 0.0, 1.0, 10);
    assert_eq!(bins.len(), 10);
    // gap-free ascending cover of [0, 1]
    assert_eq!(bins[0].x0, 0.0);
    assert_eq!(bins[9].x1, 1.0);
    for pair in bins.windows(2) {
        assert_eq!(pair[0].x1, pair[1].x0);
    }
    // -0.5, 1.5 and NaN are clipped
    assert_eq!(total_count(&bins), 6);
    // a value equal to an internal edge belongs to the bin starting there
    let edge_bin = bins.iter().find(|b| b.x0 == 0.2).unwrap();
    assert_eq!(edge_bin.count, 2); // 0.2 and 0.25
    // a value equal to the domain upper bound lands in the last bin
    assert_eq!(bins[9].count, 2); // 0.95 and 1.0
}

#[test]
fn binned_total_equals_filtered_count_when_nothing_clips() {
    let records = dataset(1500);
    let view_state = build_view(&records, &FilterState::default(), &DomainPolicy::fixed_rer());
    match view_state {
        ViewState::Histogram { bins, .. } => assert_eq!(total_count(&bins), 1500),
        _ => panic!("1500 records must clear the gate"),
    }
}

#[test]
fn gate_boundary_is_exclusive_at_one_thousand() {
    let policy = DomainPolicy::fixed_rer();
    let filters = FilterState::default();
    match build_view(&dataset(1000), &filters, &policy) {
        ViewState::InsufficientData { sample_count, .. } => assert_eq!(sample_count, 1000),
        _ => panic!("exactly 1000 records is still insufficient"),
    }
    match build_view(&dataset(1001), &filters, &policy) {
        ViewState::Histogram { sample_count, .. } => assert_eq!(sample_count, 1001),
        _ => panic!("1001 records must clear the gate"),
    }
}

#[test]
fn pipeline_is_idempotent() {
    let records = dataset(1200);
    let filters = FilterState::default();
    let policy = DomainPolicy::fixed_rer();
    let first = build_view(&records, &filters, &policy);
    let second = build_view(&records, &filters, &policy);
    assert_eq!(first, second);
}

#[test]
fn fixed_domain_scenario_with_1500_records() {
    let records = dataset(1500);
    let view_state = build_view(&records, &FilterState::default(), &DomainPolicy::fixed_rer());
    let ViewState::Histogram {
        sample_count,
        bins,
        value_scale,
        count_scale,
        labels,
        bar_color,
    } = view_state
    else {
        panic!("sufficient sample must produce a histogram");
    };
    assert_eq!(sample_count, 1500);
    // fixed RER domain at 50 thresholds: 0.02-wide bins from 0.55 to 1.5,
    // with a narrower first bin [0.55, 0.56)
    assert_eq!(bins.len(), 48);
    assert_eq!(bins[0].x0, 0.55);
    assert_eq!(bins[47].x1, 1.5);
    assert!(total_count(&bins) <= 1500);
    assert_eq!(value_scale.domain(), (0.55, 1.5));
    assert_eq!(count_scale.domain().0, 0.0);
    assert_eq!(labels.total_count, "Total Count: 1500");
    assert_eq!(bar_color, view::DEFAULT_BAR_COLOR);
}

#[test]
fn insufficient_scenario_with_500_records() {
    let records = dataset(500);
    let view_state = build_view(&records, &FilterState::default(), &DomainPolicy::fixed_rer());
    match view_state {
        ViewState::InsufficientData {
            sample_count,
            labels,
        } => {
            assert_eq!(sample_count, 500);
            assert_eq!(labels.total_count, "Total Count: 500");
        }
        _ => panic!("500 records must not produce a histogram"),
    }
}

#[test]
fn data_extent_policy_follows_the_filtered_data() {
    let policy = DomainPolicy::data_extent();
    let (lo, hi, thresholds) = policy.resolve(&[0.7, 0.9, 1.1, f64::NAN]);
    assert_eq!((lo, hi), (0.7, 1.1));
    assert_eq!(thresholds, 30);
    // all-NaN extent falls back to the fixed RER domain
    let (lo, hi, _) = policy.resolve(&[f64::NAN]);
    assert_eq!((lo, hi), (0.55, 1.5));
}

#[test]
fn resting_mode_forces_speed_to_all_and_filters_runners_out() {
    let mut filters = FilterState::default();
    filters.set(Dimension::Speed, "5-10");
    assert_eq!(filters.value(Dimension::Speed), "5-10");

    filters.set(Dimension::Resting, "resting");
    assert!(!filters.speed_enabled());
    assert_eq!(filters.value(Dimension::Speed), "all");
    // speed changes are ignored while resting
    filters.set(Dimension::Speed, "10-15");
    assert_eq!(filters.value(Dimension::Speed), "all");

    let mut running = record(0.8);
    running.speed = 12.0;
    let mut cooldown = record(0.8);
    cooldown.resting = 1.0;
    cooldown.speed = 5.0;
    let filtered = filters.apply(&[running, cooldown]);
    assert_eq!(filtered, vec![cooldown]);
}

#[test]
fn unrecognized_resting_value_falls_to_the_resting_branch() {
    assert!(filter::resting_matches("resting", 1.0));
    assert!(filter::resting_matches("warmup", 1.0));
    assert!(!filter::resting_matches("warmup", 0.0));
    assert!(filter::resting_matches("running", 0.0));
}

#[test]
fn bar_color_is_a_pure_function_of_the_sex_selector() {
    assert_eq!(bar_color("Male"), view::MALE_BAR_COLOR);
    assert_eq!(bar_color("Female"), view::FEMALE_BAR_COLOR);
    assert_eq!(bar_color("all"), view::DEFAULT_BAR_COLOR);
    assert_eq!(bar_color("anything else"), view::DEFAULT_BAR_COLOR);
}

#[test]
fn count_axis_rounds_outward_to_a_nice_bound() {
    let scale = LinearScale::unit((0.0, 87.0)).nice(10);
    assert_eq!(scale.domain(), (0.0, 90.0));
    let scale = LinearScale::unit((0.0, 4.2)).nice(10);
    assert_eq!(scale.domain(), (0.0, 4.5));
}

#[test]
fn linear_scale_maps_domain_onto_range() {
    let scale = LinearScale::unit((0.55, 1.5)).with_range(0.0, 95.0);
    assert_eq!(scale.scale(0.55), 0.0);
    assert_eq!(scale.scale(1.5), 95.0);
    assert!((scale.scale(1.025) - 47.5).abs() < 1e-9);
}

#[test]
fn session_retains_previous_bins_across_an_insufficient_run() {
    let mut session = DashboardSession::new(dataset(1200), DomainPolicy::fixed_rer());
    let first = session.refresh();
    let ViewState::Histogram { bins, .. } = first else {
        panic!("expected a histogram");
    };
    assert_eq!(session.previous_bins(), bins.as_slice());

    // narrow to an empty subset: the run reports insufficient data and the
    // last histogram's bins stay available for diffing
    session.filters.set(Dimension::Resting, "resting");
    let second = session.refresh();
    assert!(matches!(second, ViewState::InsufficientData { sample_count: 0, .. }));
    assert_eq!(session.previous_bins(), bins.as_slice());
}
