use chrono::NaiveDate;
use tracing::{debug, info};

use crate::calendar;
use crate::models::{SchoolDay, SchoolDaySequence, SeatingTemplate};
use crate::rotation;

/// Tracks the selected school day and moves it within the semester.
///
/// The selected index always stays inside `[0, len - 1]`, and at 0 when the
/// sequence is empty. Everything else is derived from it on each call.
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    days: &'a SchoolDaySequence,
    current: usize,
}

impl<'a> Navigator<'a> {
    /// Starts at `today`, or at the first school day when `today` has no class.
    pub fn new(days: &'a SchoolDaySequence, today: NaiveDate) -> Self {
        Self {
            days,
            current: locate_or_first(days, today),
        }
    }

    pub fn go_to_previous(&mut self) {
        self.current = self.current.saturating_sub(1);
        debug!(index = self.current, "moved to previous school day");
    }

    pub fn go_to_next(&mut self) {
        self.current = (self.current + 1).min(self.last_index());
        debug!(index = self.current, "moved to next school day");
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.current = locate_or_first(self.days, today);
        debug!(index = self.current, "jumped to today");
    }

    /// Positive steps move forward, negative steps move back.
    pub fn step(&mut self, steps: i64) {
        // Past `len` moves the index is already pinned at an end.
        for _ in 0..steps.unsigned_abs().min(self.len() as u64) {
            if steps > 0 {
                self.go_to_next();
            } else {
                self.go_to_previous();
            }
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn current_day(&self) -> Option<&'a SchoolDay> {
        self.days.get(self.current)
    }

    pub fn previous_day(&self) -> Option<&'a SchoolDay> {
        self.current.checked_sub(1).and_then(|i| self.days.get(i))
    }

    pub fn next_day(&self) -> Option<&'a SchoolDay> {
        self.days.get(self.current + 1)
    }

    pub fn rows<'t>(&self, templates: &'t [SeatingTemplate; 4]) -> [&'t SeatingTemplate; 4] {
        rotation::rows_for_day(self.current as i64, templates)
    }

    fn last_index(&self) -> usize {
        self.days.len().saturating_sub(1)
    }
}

fn locate_or_first(days: &SchoolDaySequence, today: NaiveDate) -> usize {
    match calendar::index_of(&today, days) {
        Some(index) => index,
        None => {
            info!(%today, "not a school day, showing the first day");
            0
        }
    }
}
