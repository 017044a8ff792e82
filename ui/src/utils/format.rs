//! Display formatting for money, dates, and class lists.

use jiff::{
    Timestamp,
    civil::{Date, DateTime},
    tz::TimeZone,
};
use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as US dollars, e.g. `-$1,234.50`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((&digits, "00"));
    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Format an ISO date (or datetime) as `MM/DD/YYYY`.
///
/// Missing or empty input gives an empty string. Date-only input is shown as
/// the calendar date it names, without any timezone shift.
pub fn format_date(iso: Option<&str>) -> String {
    let Some(iso) = iso.filter(|s| !s.is_empty()) else {
        return String::new();
    };
    match parse_date(iso) {
        Some(date) => date.strftime("%m/%d/%Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

fn parse_date(iso: &str) -> Option<Date> {
    if let Ok(date) = iso.parse::<Date>() {
        return Some(date);
    }
    if let Ok(timestamp) = iso.parse::<Timestamp>() {
        return Some(timestamp.to_zoned(TimeZone::system()).date());
    }
    iso.parse::<DateTime>().ok().map(|datetime| datetime.date())
}

/// Join the present, non-empty classes with single spaces.
pub fn class_names(classes: &[Option<&str>]) -> String {
    classes
        .iter()
        .flatten()
        .filter(|class| !class.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
