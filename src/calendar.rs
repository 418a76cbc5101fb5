use chrono::{Datelike, Local, NaiveDate, Weekday};
use tracing::debug;

use crate::models::{Blackout, SchoolDay, SchoolDaySequence};

/// `start` and `end` are inclusive; `start > end` gives an empty sequence.
pub fn generate_school_days(
    start: NaiveDate,
    end: NaiveDate,
    blackouts: &[Blackout],
) -> SchoolDaySequence {
    if start > end {
        debug!(%start, %end, "semester window is inverted, no school days");
        return SchoolDaySequence::default();
    }

    let days: Vec<SchoolDay> = start
        .iter_days()
        .take_while(|date| *date <= end)
        .filter(|date| !is_excluded(*date, blackouts))
        .map(SchoolDay::new)
        .collect();

    debug!(%start, %end, count = days.len(), "generated school days");
    SchoolDaySequence::from_sorted(days)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_excluded(date: NaiveDate, blackouts: &[Blackout]) -> bool {
    is_weekend(date) || blackouts.iter().any(|blackout| blackout.contains(date))
}

/// Time of day is ignored. `None` for weekends, blackouts and dates outside
/// the semester.
pub fn index_of<D: Datelike>(date: &D, days: &SchoolDaySequence) -> Option<usize> {
    let key = NaiveDate::from_num_days_from_ce_opt(date.num_days_from_ce())?;
    days.as_slice()
        .binary_search_by_key(&key, |day| day.date())
        .ok()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
