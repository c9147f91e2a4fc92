//! Error handling tests for the conversion pipeline

use super::{EpwBuilder, data_line};
use crate::calendar::DayOfYear;
use crate::config::ConversionConfig;
use crate::error::ConversionError;
use crate::processor::{convert_epw, convert_epw_to_string};

fn doy(value: u16) -> DayOfYear {
    DayOfYear::new(value).unwrap()
}

#[test]
fn test_missing_startdate_produces_no_output() {
    let epw = EpwBuilder::new("1/1", "12/31").record(1, 1, 1).build();
    let result = convert_epw_to_string(&epw, r#"{"enddate": "12/31", "usedst": 0, "firstdoy": 1}"#);

    match result {
        Err(ConversionError::Configuration { message }) => {
            assert_eq!(message, "startdate not found in the config file.");
        }
        other => panic!("expected configuration error, got {:?}", other),
    }
}

#[test]
fn test_malformed_config_json() {
    let epw = EpwBuilder::new("1/1", "12/31").build();
    let result = convert_epw_to_string(&epw, "{ not json");
    assert!(matches!(result, Err(ConversionError::Json(_))));
}

#[test]
fn test_config_start_outside_file_range() {
    let epw = EpwBuilder::new("6/1", "8/31").build();
    let config = ConversionConfig::default().with_date_range(doy(1), doy(200));

    let mut output = Vec::new();
    let result = convert_epw(&config, epw.as_bytes(), &mut output);

    match result {
        Err(ConversionError::DateRange { message }) => {
            assert!(message.starts_with("The start date in config"));
        }
        other => panic!("expected date range error, got {:?}", other),
    }
    assert!(output.is_empty());
}

#[test]
fn test_config_end_outside_file_range() {
    let epw = EpwBuilder::new("6/1", "8/31").build();
    let config = ConversionConfig::default().with_date_range(doy(160), doy(300));

    let result = convert_epw(&config, epw.as_bytes(), Vec::new());
    match result {
        Err(ConversionError::DateRange { message }) => {
            assert!(message.starts_with("The end date in config"));
        }
        other => panic!("expected date range error, got {:?}", other),
    }
}

#[test]
fn test_single_configured_date_not_validated() {
    let epw = EpwBuilder::new("6/1", "8/31").build();
    let config = ConversionConfig {
        start_date: Some(doy(1)),
        ..ConversionConfig::default()
    };

    let stats = convert_epw(&config, epw.as_bytes(), Vec::new()).unwrap();
    assert_eq!(stats.start_date, "1/1");
    assert_eq!(stats.end_date, "8/31");
}

#[test]
fn test_invalid_first_day_of_week_rejected() {
    let epw = EpwBuilder::new("1/1", "12/31").build();
    let config = ConversionConfig::default().with_first_day_of_week(0);
    let result = convert_epw(&config, epw.as_bytes(), Vec::new());
    assert!(matches!(result, Err(ConversionError::Configuration { .. })));
}

#[test]
fn test_truncated_preamble() {
    let epw = "LOCATION,ONLY ONE LINE\n";
    let result = convert_epw(&ConversionConfig::default(), epw.as_bytes(), Vec::new());
    assert!(matches!(result, Err(ConversionError::InvalidHeader { line: 2, .. })));
}

#[test]
fn test_malformed_record_names_line_and_column() {
    let bad = data_line(1, 1, 2, "999999999", "0").replace(",101325,", ",n/a,");
    let epw = EpwBuilder::new("1/1", "1/1")
        .record(1, 1, 1)
        .raw_line(&bad)
        .build();

    let mut output = Vec::new();
    let result = convert_epw(&ConversionConfig::default(), epw.as_bytes(), &mut output);
    match result {
        Err(ConversionError::InvalidField {
            line, column, value, ..
        }) => {
            assert_eq!(line, 10);
            assert_eq!(column, 9);
            assert_eq!(value, "n/a");
        }
        other => panic!("expected invalid field, got {:?}", other),
    }
}

#[test]
fn test_invalid_record_date_is_fatal() {
    let epw = EpwBuilder::new("1/1", "12/31")
        .raw_line(&data_line(0, 1, 1, "999999999", "0"))
        .build();
    let result = convert_epw(&ConversionConfig::default(), epw.as_bytes(), Vec::new());
    assert!(matches!(result, Err(ConversionError::InvalidField { line: 9, .. })));
}

#[test]
fn test_overflowing_hour_is_fatal() {
    let mut fields: Vec<String> = data_line(1, 1, 1, "999999999", "0")
        .split(',')
        .map(String::from)
        .collect();
    fields[3] = "9999999999999999".to_string();

    let epw = EpwBuilder::new("1/1", "12/31").raw_line(&fields.join(",")).build();
    let result = convert_epw(&ConversionConfig::default(), epw.as_bytes(), Vec::new());
    assert!(matches!(
        result,
        Err(ConversionError::InvalidField { line: 9, column: 3, .. })
    ));
}
