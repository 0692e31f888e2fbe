use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::error::Error;

const DATE_TOKEN: &str = "{date}";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read the header template and fill in the date.
pub fn load(path: &Path, date: Option<&str>) -> Result<String, Error> {
    let template = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let date = match date {
        Some(date) => parse_date(date)?,
        None => Local::now().date_naive(),
    };
    Ok(substitute_date(&template, date))
}

pub fn parse_date(date: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| Error::InvalidDate(date.to_string()))
}

/// Replace the first `{date}` token only.
pub fn substitute_date(template: &str, date: NaiveDate) -> String {
    template.replacen(DATE_TOKEN, &date.format(DATE_FORMAT).to_string(), 1)
}
