//! Romanian date and rotation labels.

use chrono::{Datelike, NaiveDate};

use crate::rotation;

const WEEKDAYS: [&str; 7] = [
    "Duminică", "Luni", "Marți", "Miercuri", "Joi", "Vineri", "Sâmbătă",
];

const MONTHS: [&str; 12] = [
    "Ianuarie",
    "Februarie",
    "Martie",
    "Aprilie",
    "Mai",
    "Iunie",
    "Iulie",
    "August",
    "Septembrie",
    "Octombrie",
    "Noiembrie",
    "Decembrie",
];

pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_sunday() as usize]
}

pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// `13 Feb`
pub fn format_short(date: NaiveDate) -> String {
    let month: String = month_name(date).chars().take(3).collect();
    format!("{} {}", date.day(), month)
}

/// `Vineri, 13 Februarie 2026`
pub fn format_full(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        weekday_name(date),
        date.day(),
        month_name(date),
        date.year()
    )
}

pub fn header(index: usize, total: usize) -> String {
    if total == 0 {
        return "Ziua 0 / 0".to_string();
    }
    format!(
        "Ziua {} / {} · Rotația {}/{}",
        index + 1,
        total,
        rotation::rotation_of(index as i64) + 1,
        rotation::ROTATION_PERIOD
    )
}

pub fn cycle_legend() -> String {
    let mut steps: Vec<String> = (1..=rotation::ROTATION_PERIOD)
        .map(|row| format!("R{row}"))
        .collect();
    steps.push("R1".to_string());
    steps.join(" → ")
}

/// `Rândurile se rotesc zilnic · 13 Feb – 19 Iun 2026`
pub fn range_legend(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "Rândurile se rotesc zilnic · {} – {} {}",
        format_short(start),
        format_short(end),
        end.year()
    )
}

pub fn split_name(name: &str) -> (&str, &str) {
    let name = name.trim();
    match name.split_once(char::is_whitespace) {
        Some((family, given)) => (family, given.trim_start()),
        None => (name, ""),
    }
}

/// Family name in capitals, then the given names: `CIUMETE Rebeca`.
pub fn student_label(name: &str) -> String {
    match split_name(name) {
        (family, "") => family.to_uppercase(),
        (family, given) => format!("{} {}", family.to_uppercase(), given),
    }
}
