use std::io::Write;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::labels;
use crate::models::{SchoolDay, SchoolDaySequence};
use crate::rotation;

/// One line of the exported schedule. `row_n` holds the 1-based template
/// number seated in physical row `n` that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub day: usize,
    pub date: SchoolDay,
    pub weekday: &'static str,
    pub rotation: usize,
    pub row_1: usize,
    pub row_2: usize,
    pub row_3: usize,
    pub row_4: usize,
}

pub fn schedule(days: &SchoolDaySequence) -> Vec<ScheduleRow> {
    days.iter()
        .enumerate()
        .map(|(index, day)| {
            let order = rotation::template_order(index as i64);
            ScheduleRow {
                day: index + 1,
                date: *day,
                weekday: labels::weekday_name(day.date()),
                rotation: rotation::rotation_of(index as i64) + 1,
                row_1: order[0] + 1,
                row_2: order[1] + 1,
                row_3: order[2] + 1,
                row_4: order[3] + 1,
            }
        })
        .collect()
}

pub fn write_csv<W: Write>(writer: W, days: &SchoolDaySequence) -> anyhow::Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let rows = schedule(days);
    for row in &rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(rows.len())
}

pub fn export_csv(path: &Path, days: &SchoolDaySequence) -> anyhow::Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(file, days).with_context(|| format!("failed to write {}", path.display()))
}
