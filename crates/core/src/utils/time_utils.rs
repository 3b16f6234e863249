use chrono::{Local, NaiveDate};

/// Today's date in the machine's local timezone, as printed on reports.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
