//! Weekly schedule logic for the surgery calendar.
//!
//! Builds the seven-day view model shown by the schedule screen: the dates of
//! the week containing a reference date (Monday first) and the surgeries
//! starting on each of those days. Placement uses the local calendar date of
//! each surgery in the display time zone, never raw timestamp arithmetic.

use chrono::{Datelike, Days, Local, NaiveDate, TimeZone};
use shared::Surgery;

use crate::domain::filters::{ListFilter, SurgeryFilter};
use crate::services::date_utils::{format_week_title, resolve_timestamp, LocalTimestamp};

/// A surgery placed on the grid together with its resolved start
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledSurgery {
    pub surgery: Surgery,
    pub start: LocalTimestamp,
}

/// One column of the week view
#[derive(Debug, Clone, PartialEq)]
pub struct WeekDay {
    pub date: NaiveDate,
    /// Sorted by start instant; equal starts keep the input order
    pub surgeries: Vec<ScheduledSurgery>,
}

/// Seven consecutive days starting on a Monday
#[derive(Debug, Clone, PartialEq)]
pub struct WeekGrid {
    pub days: Vec<WeekDay>,
    /// Rows that were dropped because their start could not be parsed
    pub skipped: usize,
}

impl WeekGrid {
    pub fn start(&self) -> Option<NaiveDate> {
        self.days.first().map(|day| day.date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.days.last().map(|day| day.date)
    }

    pub fn title(&self) -> String {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => format_week_title(start, end),
            _ => String::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.days.iter().map(|day| day.surgeries.len()).sum()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&WeekDay> {
        self.days.iter().find(|day| day.date == date)
    }
}

/// Monday of the ISO week containing `reference`
pub fn week_start(reference: NaiveDate) -> NaiveDate {
    let offset = u64::from(reference.weekday().num_days_from_monday());
    reference
        .checked_sub_days(Days::new(offset))
        .unwrap_or(reference)
}

/// The seven dates of the week containing `reference`
pub fn week_days(reference: NaiveDate) -> Vec<NaiveDate> {
    week_start(reference).iter_days().take(7).collect()
}

/// Inclusive date range to request from the backend for the week of
/// `reference`. Padded one day on each side so that a server in another
/// time zone never hides an edge-of-week surgery; the grid trims the extra.
pub fn fetch_range(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = week_start(reference);
    let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
    (
        start.checked_sub_days(Days::new(1)).unwrap_or(start),
        end.checked_add_days(Days::new(1)).unwrap_or(end),
    )
}

/// Bucket `surgeries` into the week of `reference` as seen from `tz`
pub fn build_week_grid_in<Tz: TimeZone>(
    reference: NaiveDate,
    surgeries: &[Surgery],
    tz: &Tz,
) -> WeekGrid {
    let mut days: Vec<WeekDay> = week_days(reference)
        .into_iter()
        .map(|date| WeekDay {
            date,
            surgeries: Vec::new(),
        })
        .collect();
    let mut skipped = 0;

    for surgery in surgeries {
        let Some(start) = resolve_timestamp(&surgery.scheduled_start, tz) else {
            log::warn!(
                "Skipping surgery {} with unreadable start '{}'",
                surgery.id,
                surgery.scheduled_start
            );
            skipped += 1;
            continue;
        };

        if let Some(day) = days.iter_mut().find(|day| day.date == start.date()) {
            day.surgeries.push(ScheduledSurgery {
                surgery: surgery.clone(),
                start,
            });
        }
    }

    for day in &mut days {
        day.surgeries.sort_by_key(|entry| entry.start.instant);
    }

    log::debug!(
        "Week of {}: {} surgeries placed, {} skipped",
        reference,
        days.iter().map(|day| day.surgeries.len()).sum::<usize>(),
        skipped
    );

    WeekGrid { days, skipped }
}

/// Bucket the surgeries passing `filter` in the browser's local time zone.
/// The grid keeps all seven days even when the filter empties some of them.
pub fn build_week_grid(reference: NaiveDate, surgeries: &[Surgery], filter: &SurgeryFilter) -> WeekGrid {
    build_week_grid_in(reference, &filter.apply(surgeries), &Local)
}

pub fn previous_week(reference: NaiveDate) -> NaiveDate {
    shift_days(reference, -7)
}

pub fn next_week(reference: NaiveDate) -> NaiveDate {
    shift_days(reference, 7)
}

fn shift_days(reference: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        reference.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        reference.checked_sub_days(Days::new(days.unsigned_abs()))
    };

    shifted.unwrap_or_else(|| {
        log::warn!("Cannot move {} days from {}: out of calendar range", days, reference);
        reference
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filters::Criterion;
    use chrono::{FixedOffset, Utc, Weekday};
    use shared::SurgeryStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn surgery(id: i64, start: &str) -> Surgery {
        Surgery {
            id,
            patient_id: 100 + id,
            physician_id: 7,
            room_id: None,
            room_name: Some("Pabellón 1".to_string()),
            scheduled_start: start.to_string(),
            duration_minutes: Some(60),
            scheduled_end: None,
            procedure_type: "Colecistectomía".to_string(),
            status: SurgeryStatus::Scheduled,
            preop_notes: None,
            postop_notes: None,
            created_at: None,
            updated_at: None,
            specialty: None,
            patient_name: None,
            physician_name: None,
        }
    }

    fn ids(day: &WeekDay) -> Vec<i64> {
        day.surgeries.iter().map(|entry| entry.surgery.id).collect()
    }

    #[test]
    fn test_week_of_wednesday() {
        let days = week_days(date(2025, 6, 25));
        assert_eq!(days.first(), Some(&date(2025, 6, 23)));
        assert_eq!(days.last(), Some(&date(2025, 6, 29)));
        assert_eq!(days.len(), 7);
    }

    #[test]
    fn test_week_is_seven_consecutive_days_from_monday() {
        for reference in date(2024, 1, 1).iter_days().take(3 * 366) {
            let days = week_days(reference);
            assert_eq!(days.len(), 7);
            assert_eq!(days[0].weekday(), Weekday::Mon);
            assert!(days.contains(&reference));
            for pair in days.windows(2) {
                assert_eq!(pair[0].succ_opt(), Some(pair[1]));
            }
        }
    }

    #[test]
    fn test_surgeries_bucketed_and_sorted_by_start() {
        let surgeries = vec![
            surgery(1, "2025-06-25T14:00:00"),
            surgery(2, "2025-06-25T08:00:00"),
            surgery(3, "2025-06-23T09:00:00"),
            surgery(4, "2025-06-25T08:00:00"),
            surgery(5, "2025-06-29T23:30:00"),
        ];

        let grid = build_week_grid_in(date(2025, 6, 25), &surgeries, &Utc);

        assert_eq!(ids(&grid.days[0]), vec![3]);
        assert_eq!(ids(&grid.days[2]), vec![2, 4, 1]);
        assert_eq!(ids(&grid.days[6]), vec![5]);
        assert_eq!(grid.total(), 5);
        assert_eq!(grid.title(), "Semana del 23 al 29 de junio de 2025");
    }

    #[test]
    fn test_every_bucketed_surgery_falls_on_its_day() {
        let surgeries: Vec<Surgery> = (0..40)
            .map(|i| {
                let day = 20 + i % 12;
                let (month, day) = if day > 30 { (7, day - 30) } else { (6, day) };
                surgery(i, &format!("2025-{:02}-{:02}T{:02}:15:00Z", month, day, (i * 5) % 24))
            })
            .collect();
        let zone = FixedOffset::west_opt(4 * 3600).unwrap();

        let grid = build_week_grid_in(date(2025, 6, 25), &surgeries, &zone);

        for day in &grid.days {
            for entry in &day.surgeries {
                let resolved = resolve_timestamp(&entry.surgery.scheduled_start, &zone).unwrap();
                assert_eq!(resolved.date(), day.date);
            }
        }
    }

    #[test]
    fn test_out_of_window_and_unparseable_are_excluded() {
        let surgeries = vec![
            surgery(1, "2025-06-22T10:00:00"),
            surgery(2, "2025-06-30T00:00:00"),
            surgery(3, "not a date"),
            surgery(4, ""),
            surgery(5, "2025-06-24T10:00:00"),
        ];

        let grid = build_week_grid_in(date(2025, 6, 25), &surgeries, &Utc);

        assert_eq!(grid.total(), 1);
        assert_eq!(ids(&grid.days[1]), vec![5]);
        assert_eq!(grid.skipped, 2);
    }

    #[test]
    fn test_offset_timestamps_use_local_calendar_date() {
        // 02:00 UTC Monday is still Sunday evening at UTC-4
        let surgeries = vec![surgery(1, "2025-06-23T02:00:00Z")];

        let in_utc = build_week_grid_in(date(2025, 6, 25), &surgeries, &Utc);
        assert_eq!(ids(&in_utc.days[0]), vec![1]);

        let zone = FixedOffset::west_opt(4 * 3600).unwrap();
        let in_santiago = build_week_grid_in(date(2025, 6, 25), &surgeries, &zone);
        assert_eq!(in_santiago.total(), 0);

        let previous = build_week_grid_in(date(2025, 6, 18), &surgeries, &zone);
        assert_eq!(ids(&previous.days[6]), vec![1]);
    }

    #[test]
    fn test_bucketing_across_daylight_saving_sundays() {
        let zone = chrono_tz::America::Santiago;

        // Clocks jump from 00:00 to 01:00 on Sunday 2024-09-08
        let spring = vec![
            surgery(1, "2024-09-08T00:30:00"),
            surgery(2, "2024-09-07T23:30:00"),
            surgery(3, "2024-09-08T03:00:00Z"),
            surgery(4, "2024-09-08T09:00:00"),
        ];
        let grid = build_week_grid_in(date(2024, 9, 5), &spring, &zone);
        assert_eq!(grid.days.len(), 7);
        assert_eq!(grid.end(), Some(date(2024, 9, 8)));
        assert_eq!(ids(&grid.days[5]), vec![3, 2]);
        assert_eq!(ids(&grid.days[6]), vec![1, 4]);

        // Sunday 2024-04-07 00:00 falls back to Saturday 23:00
        let fall = vec![
            surgery(5, "2024-04-07T03:30:00Z"),
            surgery(6, "2024-04-06T23:30:00"),
            surgery(7, "2024-04-07T10:00:00"),
        ];
        let grid = build_week_grid_in(date(2024, 4, 3), &fall, &zone);
        assert_eq!(ids(&grid.days[5]), vec![6, 5]);
        assert_eq!(ids(&grid.days[6]), vec![7]);
        assert_eq!(grid.skipped, 0);
    }

    #[test]
    fn test_filtered_grid_keeps_every_day() {
        let mut surgeries = vec![
            surgery(1, "2025-06-23T09:00:00"),
            surgery(2, "2025-06-25T10:00:00"),
            surgery(3, "2025-06-25T12:00:00"),
            surgery(4, "2025-06-27T08:00:00"),
        ];
        surgeries[1].room_name = Some("Pabellón 2".to_string());
        surgeries[3].room_name = Some("Pabellón 2".to_string());
        surgeries[3].specialty = Some("Cardiología".to_string());

        let by_room = SurgeryFilter {
            room: Criterion::from_select("Pabellón 2", str::to_string),
            ..SurgeryFilter::default()
        };
        let grid = build_week_grid(date(2025, 6, 25), &surgeries, &by_room);
        assert_eq!(grid.days.len(), 7);
        assert_eq!(grid.start(), Some(date(2025, 6, 23)));
        assert_eq!(ids(&grid.days[2]), vec![2]);
        assert_eq!(ids(&grid.days[4]), vec![4]);
        assert_eq!(grid.total(), 2);
        assert!(grid
            .days
            .iter()
            .flat_map(|day| &day.surgeries)
            .all(|entry| entry.surgery.room_name.as_deref() == Some("Pabellón 2")));

        let by_specialty = SurgeryFilter {
            specialty: Criterion::from_select("Traumatología", str::to_string),
            ..SurgeryFilter::default()
        };
        let grid = build_week_grid(date(2025, 6, 25), &surgeries, &by_specialty);
        assert_eq!(grid.days.len(), 7);
        assert_eq!(grid.total(), 0);

        let everything = build_week_grid(date(2025, 6, 25), &surgeries, &SurgeryFilter::default());
        assert_eq!(everything.total(), 4);
    }

    #[test]
    fn test_week_navigation() {
        assert_eq!(next_week(date(2025, 6, 25)), date(2025, 7, 2));
        assert_eq!(previous_week(date(2025, 6, 25)), date(2025, 6, 18));
        assert_eq!(next_week(date(2025, 12, 31)), date(2026, 1, 7));
        assert_eq!(next_week(NaiveDate::MAX), NaiveDate::MAX);
        assert_eq!(previous_week(NaiveDate::MIN), NaiveDate::MIN);
    }

    #[test]
    fn test_fetch_range_is_padded() {
        assert_eq!(
            fetch_range(date(2025, 6, 25)),
            (date(2025, 6, 22), date(2025, 6, 30))
        );
    }
}
