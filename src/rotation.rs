use crate::models::SeatingTemplate;

pub const ROTATION_PERIOD: i64 = 4;

pub fn rotation_of(day_index: i64) -> usize {
    day_index.rem_euclid(ROTATION_PERIOD) as usize
}

/// 0-based template position per row, front to back.
pub fn template_order(day_index: i64) -> [usize; 4] {
    let rotation = day_index.rem_euclid(ROTATION_PERIOD);
    std::array::from_fn(|row| (row as i64 - rotation + 4).rem_euclid(4) as usize)
}

/// Row `i` shows `templates[(i - rotation + 4) mod 4]`, so each template
/// moves one row towards the back every school day and returns to its
/// starting row after four days.
pub fn rows_for_day(day_index: i64, templates: &[SeatingTemplate; 4]) -> [&SeatingTemplate; 4] {
    template_order(day_index).map(|position| &templates[position])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Seat;

    fn template(tag: &str) -> SeatingTemplate {
        let seat = |n: usize| Seat::Student(format!("{tag}{n}"));
        SeatingTemplate {
            left: [seat(1), seat(2), seat(3)],
            right: [seat(4), seat(5), seat(6)],
        }
    }

    fn templates() -> [SeatingTemplate; 4] {
        [template("a"), template("b"), template("c"), template("d")]
    }

    #[test]
    fn first_day_keeps_template_order() {
        let templates = templates();
        let rows = rows_for_day(0, &templates);
        assert_eq!(rows, [&templates[0], &templates[1], &templates[2], &templates[3]]);
    }

    #[test]
    fn second_day_moves_last_template_to_front() {
        let templates = templates();
        let rows = rows_for_day(1, &templates);
        assert_eq!(rows, [&templates[3], &templates[0], &templates[1], &templates[2]]);
        assert_eq!(template_order(2), [2, 3, 0, 1]);
        assert_eq!(template_order(3), [1, 2, 3, 0]);
    }

    #[test]
    fn seating_repeats_every_period() {
        let templates = templates();
        for day in 0..40 {
            assert_eq!(
                rows_for_day(day, &templates),
                rows_for_day(day + ROTATION_PERIOD, &templates)
            );
        }
    }

    #[test]
    fn each_template_visits_each_row_once_per_cycle() {
        for cycle_start in [0, 4, 36, 72] {
            for row in 0..4 {
                let mut seen: Vec<usize> = (cycle_start..cycle_start + ROTATION_PERIOD)
                    .map(|day| template_order(day)[row])
                    .collect();
                seen.sort_unstable();
                assert_eq!(seen, vec![0, 1, 2, 3], "row {row} from day {cycle_start}");
            }
            for day in cycle_start..cycle_start + ROTATION_PERIOD {
                let mut order = template_order(day);
                order.sort_unstable();
                assert_eq!(order, [0, 1, 2, 3]);
            }
        }
    }

    #[test]
    fn negative_indexes_use_floor_modulo() {
        assert_eq!(rotation_of(-1), 3);
        assert_eq!(rotation_of(-4), 0);
        assert_eq!(template_order(-1), template_order(3));
    }
}
