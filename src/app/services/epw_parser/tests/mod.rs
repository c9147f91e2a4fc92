//! Test fixtures for EPW parsing

use csv::StringRecord;


/// Eight-line EPW preamble with the given data period
pub fn preamble(start: &str, end: &str) -> String {
    format!(
        "LOCATION,TEST CITY,ST,USA,TMY3,999999,40.00,-105.00,-7.0,1600.0\n\
         DESIGN CONDITIONS,0\n\
         TYPICAL/EXTREME PERIODS,0\n\
         GROUND TEMPERATURES,0\n\
         HOLIDAYS/DAYLIGHT SAVINGS,No,0,0,0\n\
         COMMENTS 1,Synthetic test file\n\
         COMMENTS 2,\n\
         DATA PERIODS,1,1,Data,Sunday,{},{}\n",
        start, end
    )
}

/// One EPW data line with the fields the converter reads set explicitly
pub fn data_line(month: u32, day: u32, hour: u32, weather_codes: &str, snow_depth: &str) -> String {
    let mut fields: Vec<String> = vec!["0".to_string(); 35];
    let mut set = |column: usize, value: &str| fields[column] = value.to_string();
    set(0, "1999");
    set(1, &month.to_string());
    set(2, &day.to_string());
    set(3, &hour.to_string());
    set(5, "?9?9?9?9E0?9?9?9?9?9?9?9?9?9?9?9?9?9?9?9?9*9*9?9?9?9");
    set(6, "10.0");
    set(7, "5.0");
    set(8, "80");
    set(9, "101325");
    set(12, "300");
    set(20, "270");
    set(21, "4.1");
    set(22, "5");
    set(23, "5");
    set(27, weather_codes);
    set(30, snow_depth);
    fields.join(",")
}

pub fn record(line: &str) -> StringRecord {
    StringRecord::from(line.split(',').collect::<Vec<_>>())
}
