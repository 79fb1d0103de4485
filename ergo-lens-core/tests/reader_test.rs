use std::io::Write;
use std::path::Path;

use ergo_lens_core::{load_csv, load_records, ErgoLensError, FilterState};
use tempfile::NamedTempFile;

const HEADER: &str = "RER,Age,Sex,Weight,Height,Temperature,Speed,Resting";

fn write_fixture(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(tmp, "{header}").unwrap();
    for row in rows {
        writeln!(tmp, "{row}").unwrap();
    }
    tmp.flush().unwrap();
    tmp
}

#[test]
fn loads_and_coerces_every_field_once() {
    let tmp = write_fixture(HEADER, &["0.85,25,0,70.5,180,21.5,10,0"]);
    let records = load_csv(tmp.path()).unwrap();
    assert_eq!(records.len(), 1);
    let r = records[0];
    assert_eq!(r.rer, 0.85);
    assert_eq!(r.age, 25.0);
    assert_eq!(r.sex, 0.0);
    assert_eq!(r.weight, 70.5);
    assert_eq!(r.height, 180.0);
    assert_eq!(r.temperature, 21.5);
    assert_eq!(r.speed, 10.0);
    assert_eq!(r.resting, 0.0);
}

#[test]
fn unparsable_field_becomes_nan_and_stays_out_of_bounded_buckets() {
    let tmp = write_fixture(
        HEADER,
        &["0.85,not-a-number,0,70,180,21,10,0", "0.90,,0,70,180,21,10,0"],
    );
    let records = load_csv(tmp.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0].age.is_nan());
    assert!(records[1].age.is_nan());
    assert_eq!(records[0].rer, 0.85);

    // the record survives under "all" but no age bucket claims it
    let all = FilterState::default();
    assert_eq!(all.apply(&records).len(), 2);
    let mut twenties = FilterState::default();
    twenties.set(ergo_lens_core::Dimension::Age, "20s");
    assert!(twenties.apply(&records).is_empty());
}

#[test]
fn missing_required_column_is_a_load_error() {
    let tmp = write_fixture("RER,Age,Sex,Weight,Height,Temperature,Resting", &[]);
    match load_csv(tmp.path()) {
        Err(ErgoLensError::MissingColumn(col)) => assert_eq!(col, "Speed"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn missing_file_is_a_load_error() {
    let err = load_csv(Path::new("/nonexistent/merged.csv")).unwrap_err();
    assert!(matches!(err, ErgoLensError::Io(_)));
}

#[test]
fn ragged_row_is_a_load_error() {
    let tmp = write_fixture(HEADER, &["0.85,25"]);
    assert!(matches!(
        load_csv(tmp.path()),
        Err(ErgoLensError::Csv(_))
    ));
}

#[test]
fn extra_columns_are_ignored() {
    let rows = ["0.85,25,0,70,180,21,10,0,treadmill-3"];
    let tmp = write_fixture(&format!("{HEADER},Rig"), &rows);
    let records = load_csv(tmp.path()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].age, 25.0);
}

#[test]
fn column_order_does_not_matter() {
    let mut data = Vec::new();
    writeln!(data, "Age,RER,Resting,Speed,Temperature,Height,Weight,Sex").unwrap();
    writeln!(data, "31,1.02,1,5,22,165,61,1").unwrap();
    let records = load_records(data.as_slice()).unwrap();
    assert_eq!(records[0].rer, 1.02);
    assert_eq!(records[0].age, 31.0);
    assert_eq!(records[0].resting, 1.0);
}
