use chrono::{NaiveDate, NaiveDateTime};

#[must_use]
pub fn format_date(value: NaiveDate) -> String {
    value.format("%b %-d, %Y").to_string()
}

#[must_use]
pub fn format_time(value: NaiveDateTime) -> String {
    value.format("%H:%M").to_string()
}
