use chrono::NaiveDate;
use funding_dashboard::config::{DataConfig, DisplayConfig};
use funding_dashboard::data::CsvConnector;
use funding_dashboard::engines::OverallAnalysis;
use funding_dashboard::types::{MomMode, SectorMode};
use funding_dashboard::DashboardError;
use polars::df;
use polars::prelude::*;
use std::io::Write;

fn frame() -> DataFrame {
    df! {
        "date" => &["2020-01-09", "2020-01-13", "05/07/2019", "31/02/2019", "2019-07-20"],
        "startup" => &["BYJU'S", "Shuttl", "Ola", "Ola", "Zomato"],
        "vertical" => &["E-Tech", "Transportation", "Transportation", "Transportation", "Food"],
        "city" => &["Bengaluru", "Gurgaon", "Bengaluru", "Bengaluru", "Gurgaon"],
        "investor" => &["Tiger Global", "Susquehanna Growth Equity", "Accel", "Accel, SoftBank", "Info Edge"],
        "round" => &["Private Equity", "Series C", "Series J", "Series J", "Series H"],
        "amount" => &[1500.0, 60.0, 250.0, 100.0, 900.0],
    }
    .unwrap()
}

#[test]
fn test_bad_date_row_degrades_to_null() {
    let formats = DataConfig::default().date_formats;
    let (dataset, metadata) = CsvConnector::from_frame(frame(), "startup_cleaned.csv", &formats).unwrap();

    assert_eq!(dataset.len(), 5);
    assert_eq!(metadata.unparsed_dates, 1);
    assert_eq!(dataset.records()[3].date, None);
    assert_eq!(dataset.records()[3].month(), None);
    assert_eq!(dataset.records()[2].date, NaiveDate::from_ymd_opt(2019, 7, 5));

    let mom = OverallAnalysis::month_over_month(dataset.records(), MomMode::Total);
    assert_eq!(mom.labels(), vec!["2019-7", "2020-1"]);
    assert_eq!(mom.values(), vec![1150.0, 1560.0]);

    // the undated row still counts toward the total
    assert_eq!(OverallAnalysis::metrics(dataset.records()).total_investment, 2810.0);
}

#[test]
fn test_missing_column_fails_at_load() {
    let df = frame().drop("round").unwrap();
    let result = CsvConnector::from_frame(df, "startup_cleaned.csv", &DataConfig::default().date_formats);

    match result {
        Err(DashboardError::MissingColumn { column, .. }) => assert_eq!(column, "round"),
        other => panic!("expected missing column error, got {:?}", other.map(|(d, _)| d.len())),
    }
}

#[test]
fn test_missing_file_is_fatal() {
    let result = CsvConnector::load_dataset("missing/startup_cleaned.csv", &DataConfig::default().date_formats);
    assert!(result.is_err());
}

#[test]
fn test_loading_twice_is_deterministic() {
    let formats = DataConfig::default().date_formats;
    let display = DisplayConfig::default();
    let (a, _) = CsvConnector::from_frame(frame(), "a.csv", &formats).unwrap();
    let (b, _) = CsvConnector::from_frame(frame(), "a.csv", &formats).unwrap();

    assert_eq!(a.records(), b.records());
    assert_eq!(
        OverallAnalysis::compute(&a, MomMode::Count, SectorMode::Total, &display),
        OverallAnalysis::compute(&b, MomMode::Count, SectorMode::Total, &display)
    );
}

#[test]
fn test_investor_choices_are_split() {
    let (dataset, _) = CsvConnector::from_frame(frame(), "a.csv", &DataConfig::default().date_formats).unwrap();
    assert_eq!(
        dataset.investors(),
        vec!["Accel", "Info Edge", "SoftBank", "Susquehanna Growth Equity", "Tiger Global"]
    );
}

const CSV: &str = "date,startup,vertical,city,investor,round,amount
2020-01-09,BYJU'S,E-Tech,Bengaluru,\"Tiger Global, Accel\",Private Equity,1500
2020-01-13,Shuttl,Transportation,,Susquehanna,Series C,
31/02/2019,Ola,Transportation,Bengaluru,Accel,Series J,250
";

#[test]
fn test_load_csv_file_twice() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(CSV.as_bytes()).unwrap();
    file.flush().unwrap();

    let formats = DataConfig::default().date_formats;
    let (first, metadata) = CsvConnector::load_dataset(file.path(), &formats).unwrap();
    let (second, _) = CsvConnector::load_dataset(file.path(), &formats).unwrap();

    assert_eq!(first.len(), 3);
    assert_eq!(metadata.unparsed_dates, 1);

    let records = first.records();
    assert_eq!(records[0].investor.as_deref(), Some("Tiger Global, Accel"));
    assert_eq!(records[0].amount, Some(1500.0));
    assert_eq!(records[1].city, None);
    assert_eq!(records[1].amount, None);
    assert_eq!(records[2].date, None);
    assert_eq!(first.investors(), vec!["Accel", "Susquehanna", "Tiger Global"]);

    let display = DisplayConfig::default();
    assert_eq!(first.records(), second.records());
    assert_eq!(
        OverallAnalysis::compute(&first, MomMode::Total, SectorMode::Count, &display),
        OverallAnalysis::compute(&second, MomMode::Total, SectorMode::Count, &display)
    );
    assert_eq!(OverallAnalysis::metrics(records).total_investment, 1750.0);
}
