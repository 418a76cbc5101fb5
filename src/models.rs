use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar date on which classes take place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SchoolDay(NaiveDate);

impl SchoolDay {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for SchoolDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Ordered school days of one semester, strictly increasing.
///
/// Only the calendar generator builds one, so the ordering and the
/// weekend/blackout exclusions hold for every instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolDaySequence {
    days: Vec<SchoolDay>,
}

impl SchoolDaySequence {
    pub(crate) fn from_sorted(days: Vec<SchoolDay>) -> Self {
        debug_assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
        Self { days }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SchoolDay> {
        self.days.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SchoolDay> {
        self.days.iter()
    }

    pub fn as_slice(&self) -> &[SchoolDay] {
        &self.days
    }
}

/// Dates removed from the school calendar: a holiday range or a single day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BlackoutToml")]
pub enum Blackout {
    Range { start: NaiveDate, end: NaiveDate },
    Single { date: NaiveDate },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BlackoutToml {
    date: Option<NaiveDate>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BlackoutShapeError {
    #[error("blackout needs either `date` or both `start` and `end`, not {0}")]
    Ambiguous(&'static str),
}

impl TryFrom<BlackoutToml> for Blackout {
    type Error = BlackoutShapeError;

    fn try_from(raw: BlackoutToml) -> Result<Self, Self::Error> {
        match (raw.date, raw.start, raw.end) {
            (Some(date), None, None) => Ok(Blackout::Single { date }),
            (None, Some(start), Some(end)) => Ok(Blackout::Range { start, end }),
            (Some(_), _, _) => Err(BlackoutShapeError::Ambiguous(
                "`date` mixed with a range bound",
            )),
            (None, None, None) => Err(BlackoutShapeError::Ambiguous("an empty entry")),
            (None, _, _) => Err(BlackoutShapeError::Ambiguous("a range missing a bound")),
        }
    }
}

impl Blackout {
    /// Both range bounds are inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Blackout::Range { start, end } => *start <= date && date <= *end,
            Blackout::Single { date: single } => *single == date,
        }
    }
}

/// One seat at a desk. Configured as a name, or `""` for an empty seat.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Seat {
    Student(String),
    Empty,
}

impl Seat {
    pub fn student(&self) -> Option<&str> {
        match self {
            Seat::Student(name) => Some(name),
            Seat::Empty => None,
        }
    }
}

impl From<String> for Seat {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Seat::Empty
        } else if trimmed.len() == value.len() {
            Seat::Student(value)
        } else {
            Seat::Student(trimmed.to_string())
        }
    }
}

/// Two desks of three seats each; the whole arrangement moves from row to
/// row as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeatingTemplate {
    pub left: [Seat; 3],
    pub right: [Seat; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn school_day_displays_normalized_date() {
        let day = SchoolDay::new(date(2026, 3, 2));
        assert_eq!(day.to_string(), "2026-03-02");
    }

    #[test]
    fn range_blackout_is_inclusive() {
        let blackout = Blackout::Range {
            start: date(2026, 2, 23),
            end: date(2026, 2, 27),
        };
        assert!(blackout.contains(date(2026, 2, 23)));
        assert!(blackout.contains(date(2026, 2, 25)));
        assert!(blackout.contains(date(2026, 2, 27)));
        assert!(!blackout.contains(date(2026, 2, 22)));
        assert!(!blackout.contains(date(2026, 2, 28)));
    }

    #[test]
    fn single_blackout_matches_one_date() {
        let blackout = Blackout::Single {
            date: date(2026, 5, 1),
        };
        assert!(blackout.contains(date(2026, 5, 1)));
        assert!(!blackout.contains(date(2026, 5, 2)));
    }

    #[test]
    fn blackout_shape_must_be_single_or_range() {
        let raw = |date, start, end| BlackoutToml { date, start, end };
        let d = date(2026, 3, 10);

        assert_eq!(
            Blackout::try_from(raw(Some(d), None, None)),
            Ok(Blackout::Single { date: d })
        );
        assert_eq!(
            Blackout::try_from(raw(None, Some(d), Some(d))),
            Ok(Blackout::Range { start: d, end: d })
        );
        assert!(Blackout::try_from(raw(Some(d), None, Some(d))).is_err());
        assert!(Blackout::try_from(raw(None, Some(d), None)).is_err());
        assert!(Blackout::try_from(raw(None, None, None)).is_err());
    }

    #[test]
    fn blank_names_become_empty_seats() {
        assert_eq!(Seat::from(String::new()), Seat::Empty);
        assert_eq!(Seat::from("   ".to_string()), Seat::Empty);
        assert_eq!(
            Seat::from(" Balan Valent ".to_string()),
            Seat::Student("Balan Valent".to_string())
        );
    }
}
