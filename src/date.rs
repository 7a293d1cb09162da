use chrono::{Datelike, NaiveDate};

/// Query parameter format, "2024-04-05".
pub fn link_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Headline format, "05. April 2024".
pub fn german_date(date: NaiveDate) -> String {
    format!(
        "{:02}. {} {}",
        date.day(),
        german_month(date.month()),
        date.year()
    )
}

const fn german_month(month: u32) -> &'static str {
    match month {
        1 => "Januar",
        2 => "Februar",
        3 => "März",
        4 => "April",
        5 => "Mai",
        6 => "Juni",
        7 => "Juli",
        8 => "August",
        9 => "September",
        10 => "Oktober",
        11 => "November",
        _ => "Dezember",
    }
}
