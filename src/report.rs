use std::fmt::Write;

use serde::Serialize;

use crate::config::SeatingConfig;
use crate::labels;
use crate::models::{Seat, SchoolDay, SeatingTemplate};
use crate::navigation::Navigator;
use crate::rotation;

const NO_DAY: &str = "—";
const EMPTY_SEAT: &str = "(liber)";

/// One school day's chart as plain text.
pub fn build_chart(nav: &Navigator<'_>, config: &SeatingConfig) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# {}", config.title);
    let _ = writeln!(output, "{}", labels::header(nav.current_index(), nav.len()));
    let _ = writeln!(output);

    let Some(current) = nav.current_day() else {
        let _ = writeln!(output, "Nu există zile de școală în acest semestru.");
        return output;
    };

    let _ = writeln!(
        output,
        "‹ Ziua anterioară: {}",
        short_or_dash(nav.previous_day())
    );
    let _ = writeln!(output, "◉ Astăzi: {}", labels::format_full(current.date()));
    let _ = writeln!(output, "› Ziua următoare: {}", short_or_dash(nav.next_day()));
    let _ = writeln!(output);
    let _ = writeln!(output, "[ T A B L Ă ]    [ T A B L Ă ]");

    for (row, template) in nav.rows(&config.templates).into_iter().enumerate() {
        let _ = writeln!(output);
        let _ = writeln!(output, "## Rândul {}", row + 1);
        let _ = writeln!(output, "- Stânga: {}", desk_line(&template.left));
        let _ = writeln!(output, "- Dreapta: {}", desk_line(&template.right));
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "{}", labels::cycle_legend());
    let _ = writeln!(
        output,
        "{}",
        labels::range_legend(config.semester.start, config.semester.end)
    );

    output
}

fn short_or_dash(day: Option<&SchoolDay>) -> String {
    day.map_or_else(|| NO_DAY.to_string(), |d| labels::format_short(d.date()))
}

fn desk_line(seats: &[Seat; 3]) -> String {
    seats
        .iter()
        .map(|seat| match seat.student() {
            Some(name) => labels::student_label(name),
            None => EMPTY_SEAT.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Serialize)]
pub struct DayView<'a> {
    pub day_number: usize,
    pub total_days: usize,
    pub rotation: usize,
    pub date: Option<SchoolDay>,
    pub previous: Option<SchoolDay>,
    pub next: Option<SchoolDay>,
    pub rows: Vec<RowView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RowView<'a> {
    pub row: usize,
    pub left: [Option<&'a str>; 3],
    pub right: [Option<&'a str>; 3],
}

impl<'a> RowView<'a> {
    fn new(row: usize, template: &'a SeatingTemplate) -> Self {
        Self {
            row,
            left: template.left.each_ref().map(Seat::student),
            right: template.right.each_ref().map(Seat::student),
        }
    }
}

/// Machine-readable form of the same chart. An empty semester has no rows.
pub fn build_view<'a>(nav: &Navigator<'_>, config: &'a SeatingConfig) -> DayView<'a> {
    let rows = match nav.current_day() {
        Some(_) => nav
            .rows(&config.templates)
            .into_iter()
            .enumerate()
            .map(|(row, template)| RowView::new(row + 1, template))
            .collect(),
        None => Vec::new(),
    };

    let (day_number, rotation) = if nav.is_empty() {
        (0, 0)
    } else {
        let index = nav.current_index();
        (index + 1, rotation::rotation_of(index as i64) + 1)
    };

    DayView {
        day_number,
        total_days: nav.len(),
        rotation,
        date: nav.current_day().copied(),
        previous: nav.previous_day().copied(),
        next: nav.next_day().copied(),
        rows,
    }
}

pub fn build_json(nav: &Navigator<'_>, config: &SeatingConfig) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&build_view(nav, config))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn chart_for_first_day() {
        let config = SeatingConfig::builtin().unwrap();
        let days = config.school_days();
        let nav = Navigator::new(&days, date(2026, 2, 13));
        let chart = build_chart(&nav, &config);

        assert!(chart.starts_with("# Harta Clasei\nZiua 1 / 76 · Rotația 1/4\n"));
        assert!(chart.contains("‹ Ziua anterioară: —"));
        assert!(chart.contains("◉ Astăzi: Vineri, 13 Februarie 2026"));
        assert!(chart.contains("› Ziua următoare: 16 Feb"));
        assert!(chart.contains(
            "## Rândul 1\n- Stânga: CIUMETE Rebeca, HURMUZACHE Sara-Antonia, OLARU Eduard-Vasilică\n"
        ));
        assert!(chart.contains(
            "## Rândul 4\n- Stânga: SPÎNU Ștefan-Bogdan, (liber), CONSTANTIN Rareș-Ștefan\n"
        ));
        assert!(chart.contains("R1 → R2 → R3 → R4 → R1"));
        assert!(chart.contains("13 Feb – 19 Iun 2026"));
    }

    #[test]
    fn chart_rotates_on_second_day() {
        let config = SeatingConfig::builtin().unwrap();
        let days = config.school_days();
        let nav = Navigator::new(&days, date(2026, 2, 16));
        let chart = build_chart(&nav, &config);

        assert!(chart.contains("Ziua 2 / 76 · Rotația 2/4"));
        assert!(chart.contains("## Rândul 1\n- Stânga: SPÎNU Ștefan-Bogdan"));
        assert!(chart.contains("## Rândul 2\n- Stânga: CIUMETE Rebeca"));
    }

    #[test]
    fn chart_for_empty_semester() {
        let mut config = SeatingConfig::builtin().unwrap();
        std::mem::swap(&mut config.semester.start, &mut config.semester.end);
        let days = config.school_days();
        let nav = Navigator::new(&days, date(2026, 2, 13));
        let chart = build_chart(&nav, &config);

        assert!(chart.contains("Ziua 0 / 0"));
        assert!(!chart.contains("Rândul"));
    }

    #[test]
    fn view_for_empty_semester_has_zero_counters() {
        let mut config = SeatingConfig::builtin().unwrap();
        std::mem::swap(&mut config.semester.start, &mut config.semester.end);
        let days = config.school_days();
        let nav = Navigator::new(&days, date(2026, 2, 13));
        let view = build_view(&nav, &config);

        assert_eq!(view.day_number, 0);
        assert_eq!(view.total_days, 0);
        assert_eq!(view.rotation, 0);
        assert!(view.date.is_none());
        assert!(view.rows.is_empty());
    }

    #[test]
    fn view_serializes_seats_and_neighbours() {
        let config = SeatingConfig::builtin().unwrap();
        let days = config.school_days();
        let nav = Navigator::new(&days, date(2026, 3, 2));
        let value: serde_json::Value =
            serde_json::from_str(&build_json(&nav, &config).unwrap()).unwrap();

        assert_eq!(value["day_number"], 7);
        assert_eq!(value["total_days"], 76);
        assert_eq!(value["rotation"], 3);
        assert_eq!(value["date"], "2026-03-02");
        assert_eq!(value["previous"], "2026-02-20");
        assert_eq!(value["next"], "2026-03-03");
        assert_eq!(value["rows"].as_array().map(Vec::len), Some(4));
        // Rotation 3: row 1 shows template 3, row 3 shows template 1.
        assert_eq!(value["rows"][0]["left"][0], "Purcaru-Condrat Ioan-Alexandru");
        assert_eq!(value["rows"][2]["left"][0], "Ciumete Rebeca");
        assert_eq!(value["rows"][1]["left"][1], serde_json::Value::Null);
    }
}
