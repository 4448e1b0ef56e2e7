use chrono::{Local, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date in the viewer's local time zone, not UTC.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses the value of an `<input type="date">`; blank means "no date".
pub fn parse_date_input(value: &str) -> Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| "Dates must use the YYYY-MM-DD format.".to_string())
}

pub fn clamp_to_today(date: NaiveDate, today: NaiveDate) -> NaiveDate {
    date.min(today)
}
