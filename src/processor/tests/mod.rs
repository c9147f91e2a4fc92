//! Tests for the conversion pipeline
//!
//! Builds synthetic EPW text in memory and checks the complete weather file.

pub mod error_handling;

/// Synthetic EPW file text builder
pub struct EpwBuilder {
    start: String,
    end: String,
    location: String,
    records: Vec<String>,
}

impl EpwBuilder {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            location: "LOCATION,TEST CITY,ST,USA,TMY3,999999,40.00,-105.00,-7.0,1600.0".to_string(),
            records: Vec::new(),
        }
    }

    pub fn location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    /// Add an hourly record at 10 °C dry bulb / 5 °C dew point
    pub fn record(mut self, month: u32, day: u32, hour: u32) -> Self {
        self.records.push(data_line(month, day, hour, "999999999", "0"));
        self
    }

    pub fn raw_line(mut self, line: &str) -> Self {
        self.records.push(line.to_string());
        self
    }

    /// Hourly records for every hour 1-24 of each day in `days` (month, day)
    pub fn hourly(mut self, days: &[(u32, u32)]) -> Self {
        for &(month, day) in days {
            for hour in 1..=24 {
                self.records.push(data_line(month, day, hour, "999999999", "0"));
            }
        }
        self
    }

    pub fn build(&self) -> String {
        let mut text = format!(
            "{}\n\
             DESIGN CONDITIONS,0\n\
             TYPICAL/EXTREME PERIODS,0\n\
             GROUND TEMPERATURES,0\n\
             HOLIDAYS/DAYLIGHT SAVINGS,No,0,0,0\n\
             COMMENTS 1,Synthetic test file\n\
             COMMENTS 2,\n\
             DATA PERIODS,1,1,Data,Sunday,{},{}\n",
            self.location, self.start, self.end
        );
        for record in &self.records {
            text.push_str(record);
            text.push('\n');
        }
        text
    }
}

pub fn data_line(month: u32, day: u32, hour: u32, weather_codes: &str, snow_depth: &str) -> String {
    let mut fields = vec!["0".to_string(); 35];
    fields[0] = "1999".to_string();
    fields[1] = month.to_string();
    fields[2] = day.to_string();
    fields[3] = hour.to_string();
    fields[5] = "?9?9?9?9E0?9?9?9?9?9?9?9?9?9?9?9?9?9?9?9?9*9*9?9?9?9".to_string();
    fields[6] = "10.0".to_string();
    fields[7] = "5.0".to_string();
    fields[9] = "101325".to_string();
    fields[20] = "270".to_string();
    fields[21] = "4.1".to_string();
    fields[22] = "5".to_string();
    fields[27] = weather_codes.to_string();
    fields[30] = snow_depth.to_string();
    fields.join(",")
}

/// Lines of the weather data section (after the data column labels)
pub fn data_section(wth: &str) -> Vec<&str> {
    wth.lines()
        .skip_while(|line| !line.starts_with("!Date\tTime"))
        .skip(1)
        .collect()
}

/// Lines of the day schedule section
pub fn day_section(wth: &str) -> Vec<&str> {
    wth.lines()
        .skip(5)
        .take_while(|line| !line.starts_with("!Date\tTime"))
        .collect()
}
