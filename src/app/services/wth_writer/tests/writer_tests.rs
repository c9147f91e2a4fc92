//! Tests for the section writer

use super::{doy, sample_record};
use crate::app::services::wth_writer::{DaySchedule, WthWriter};
use crate::config::ConversionConfig;

#[test]
fn test_header_layout() {
    let mut writer = WthWriter::new(Vec::new());
    writer.write_header("Test site", doy(1), doy(2)).unwrap();
    let text = String::from_utf8(writer.finish().unwrap()).unwrap();

    assert_eq!(
        text,
        "WeatherFile ContamW 2.0\n\
         Test site\n\
         1/1 !start - of - file date\n\
         1/2 !end - of - file date\n\
         !Date\tDofW\tDtype\tDST\tTgrnd [K]\n"
    );
}

#[test]
fn test_days_and_records_are_counted() {
    let config = ConversionConfig::default();
    let days = DaySchedule::new(&config).entries(doy(1), doy(2));

    let mut writer = WthWriter::new(Vec::new());
    writer.write_days(&days).unwrap();
    writer.write_data_labels().unwrap();
    writer.write_record(&sample_record().at_time(0)).unwrap();
    writer.write_record(&sample_record()).unwrap();

    assert_eq!(writer.days_written(), 2);
    assert_eq!(writer.records_written(), 2);

    let text = String::from_utf8(writer.finish().unwrap()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "1/1\t1\t1\t0\t283.15");
    assert_eq!(lines[1], "1/2\t2\t2\t0\t283.15");
    assert_eq!(
        lines[2],
        "!Date\tTime\tTa[K]\tPb[Pa]\tWs[m/s]\tWd[deg]\tHr[g/kg]\tIth[kJ/m^2]\tIdn[kJ/m^2]\tTs[K]\tRn[-]\tSn[-]"
    );
    assert_eq!(
        lines[3],
        "1/1\t00:00:00\t283.15\t101325\t4.1\t270\t5.42605\t0\t0\t268.55\t0\t0"
    );
    assert!(lines[4].starts_with("1/1\t01:00:00\t"));
}
