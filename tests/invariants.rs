use airview::{
    apply, count_by_region, group_classes_by_region, AirportRecord, Explorer, GeoView,
    ProportionSeries, RecordSet, RegionCode, Selection, SizeClass,
};

fn build_record(id: u64, region: &str, class: SizeClass, lat: f64, lon: f64) -> AirportRecord {
    AirportRecord {
        id,
        region: region.to_string(),
        class,
        name: format!("{region} airport {id}"),
        latitude: lat,
        longitude: lon,
    }
}

fn build_set() -> RecordSet {
    RecordSet::from_records(
        "invariants",
        vec![
            build_record(1, "A", SizeClass::Small, 10.0, 20.0),
            build_record(2, "A", SizeClass::Large, 11.0, 21.0),
            build_record(3, "B", SizeClass::Small, 12.0, 22.0),
            build_record(4, "C", SizeClass::Medium, 13.0, 23.0),
            build_record(5, "B", SizeClass::Small, 14.0, 24.0),
        ],
    )
    .unwrap()
}

#[test]
fn region_filtered_groupings_only_contain_selected_regions() {
    let set = build_set();
    let selected = vec!["A".to_string(), "B".to_string()];
    let view = apply(&set, &Selection::new(selected.clone(), Vec::new()));

    let grouping = group_classes_by_region(&view);
    for region in grouping.regions() {
        assert!(selected.contains(region));
    }

    let total: usize = count_by_region(&view, &selected).iter().sum();
    assert_eq!(total, view.len());
}

#[test]
fn filtering_twice_with_the_same_selection_changes_nothing() {
    let set = build_set();
    let selection = Selection::single_class(vec!["A".to_string(), "B".to_string()], SizeClass::Small);

    let once = apply(&set, &selection);
    let twice = once.refilter(&selection);

    let first: Vec<u64> = once.iter().map(|record| record.id).collect();
    let second: Vec<u64> = twice.iter().map(|record| record.id).collect();
    assert_eq!(first, second);
}

#[test]
fn counts_and_grouping_sums_agree_for_every_region() {
    let set = build_set();
    let selection = Selection::new(Vec::new(), vec![SizeClass::Small, SizeClass::Medium]);
    let view = apply(&set, &selection);

    let grouping = group_classes_by_region(&view);
    let sums = grouping.sums();
    let regions: Vec<RegionCode> = sums.keys().cloned().collect();
    let counts = count_by_region(&view, &regions);

    assert_eq!(counts.len(), sums.len());
    for (idx, region) in regions.iter().enumerate() {
        assert_eq!(counts[idx], sums[region], "region {region}");
    }
}

#[test]
fn emphasis_is_maximal_and_first_on_ties() {
    let series = ProportionSeries::new(vec![4, 9, 9, 2], vec!["A".into(), "B".into(), "C".into(), "D".into()]).unwrap();
    assert!(series.values.iter().all(|value| *value <= series.values[series.emphasis]));
    assert_eq!(series.emphasis, 1);

    let all_equal = ProportionSeries::new(vec![3, 3, 3], vec!["A".into(), "B".into(), "C".into()]).unwrap();
    assert_eq!(all_equal.emphasis, 0);
}

#[test]
fn region_enumeration_is_unique_and_stable() {
    let set = build_set();
    let first = set.regions();
    let second = set.regions();
    assert_eq!(first, second);
    assert_eq!(first, vec!["A", "B", "C"]);

    let mut deduped = first.clone();
    deduped.dedup();
    assert_eq!(first, deduped);
}

#[test]
fn small_airports_scenario_matches_the_expected_pipeline_output() {
    let set = RecordSet::from_records(
        "scenario",
        vec![
            build_record(1, "A", SizeClass::Small, 10.0, 20.0),
            build_record(2, "A", SizeClass::Large, 11.0, 21.0),
            build_record(3, "B", SizeClass::Small, 12.0, 22.0),
        ],
    )
    .unwrap();

    let selection = Selection::single_class(vec!["A".to_string(), "B".to_string()], SizeClass::Small);
    let view = apply(&set, &selection);
    let ids: Vec<u64> = view.iter().map(|record| record.id).collect();
    assert_eq!(ids, vec![1, 3]);

    let counts = count_by_region(&view, &["A".to_string(), "B".to_string()]);
    assert_eq!(counts, vec![1, 1]);

    let series = ProportionSeries::new(counts, vec!["A".to_string(), "B".to_string()]).unwrap();
    assert_eq!(series.emphasis, 0);
}

#[test]
fn empty_selection_returns_the_full_set_unchanged() {
    let set = build_set();
    let view = apply(&set, &Selection::default());
    let ids: Vec<u64> = view.iter().map(|record| record.id).collect();
    let expected: Vec<u64> = set.records().iter().map(|record| record.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn grouping_never_faults_on_regions_it_has_not_seen() {
    // A view whose regions were never pre-registered anywhere: the grouping
    // must create each entry on first sight instead of faulting.
    let set = RecordSet::from_records(
        "fresh-regions",
        vec![
            build_record(10, "US-RI", SizeClass::Small, 41.7, -71.4),
            build_record(11, "US-CT", SizeClass::Small, 41.9, -72.7),
        ],
    )
    .unwrap();
    let grouping = group_classes_by_region(&apply(&set, &Selection::default()));
    assert_eq!(grouping.len(), 2);
    assert_eq!(grouping.classes("US-RI"), Some(&[SizeClass::Small][..]));
}

#[test]
fn view_contracts_serialize_with_their_documented_fields() {
    let set = build_set();
    let explorer = Explorer::new(set);
    let selection = Selection::single_class(vec!["A".to_string(), "B".to_string()], SizeClass::Small);

    let pie = explorer.proportion_chart(&selection).unwrap();
    let pie_json = serde_json::to_value(&pie).unwrap();
    assert!(pie_json.get("values").is_some());
    assert!(pie_json.get("labels").is_some());
    assert!(pie_json.get("emphasis").is_some());

    let map = explorer.map_view(&selection).unwrap();
    let map_json = serde_json::to_value(&map).unwrap();
    assert_eq!(map_json["points"].as_array().unwrap().len(), map.points.len());
    assert!(map_json["points"][0].get("label").is_some());
    assert!(map_json.get("center_lat").is_some());
    assert!(map_json.get("center_lon").is_some());
}

#[test]
fn map_centroid_is_the_arithmetic_coordinate_mean() {
    let set = build_set();
    let view = apply(&set, &Selection::default());
    let geo = GeoView::from_view(&view).unwrap();

    let total = view.len() as f64;
    let mean_lat: f64 = view.iter().map(|record| record.latitude).sum::<f64>() / total;
    let mean_lon: f64 = view.iter().map(|record| record.longitude).sum::<f64>() / total;
    assert!((geo.center_lat - mean_lat).abs() < 1e-9);
    assert!((geo.center_lon - mean_lon).abs() < 1e-9);
}
