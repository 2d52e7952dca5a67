use chrono::{Datelike, NaiveDate};
use model::sales::enriched::TemporalFeatures;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Derives the eight calendar columns from the order date alone.
///
/// Conventions, fixed for the whole pipeline:
/// - `day_of_week`: Monday = 0 through Sunday = 6.
/// - `week_of_year`: ISO-8601 week number, so the first days of January
///   can report week 52 or 53 of the previous ISO year.
/// - `quarter`: calendar quarter, 1 through 4.
pub fn derive(order_date: NaiveDate) -> TemporalFeatures {
    let month = order_date.month();
    let day_of_week = order_date.weekday().num_days_from_monday();

    TemporalFeatures {
        year: order_date.year(),
        month,
        quarter: (month - 1) / 3 + 1,
        day_of_week,
        week_of_year: order_date.iso_week().week(),
        month_name: MONTH_NAMES[(month - 1) as usize],
        year_month: format!("{:04}-{:02}", order_date.year(), month),
        day_name: DAY_NAMES[day_of_week as usize],
    }
}
