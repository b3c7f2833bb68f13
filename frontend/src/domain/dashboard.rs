//! Figures for the landing dashboard.

use chrono::{Local, NaiveDate, TimeZone};
use shared::{CleaningStatus, RoomCleaningState, Surgery};

use super::week_grid::{build_week_grid_in, ScheduledSurgery};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub today: NaiveDate,
    /// Today's surgeries in start order
    pub todays_surgeries: Vec<ScheduledSurgery>,
    /// Room count per cleaning status, known statuses first
    pub rooms_by_status: Vec<(CleaningStatus, usize)>,
    pub unread_notifications: u64,
}

impl DashboardSummary {
    pub fn build_in<Tz: TimeZone>(
        today: NaiveDate,
        surgeries: &[Surgery],
        rooms: &[RoomCleaningState],
        unread_notifications: u64,
        tz: &Tz,
    ) -> Self {
        let grid = build_week_grid_in(today, surgeries, tz);
        let todays_surgeries = grid
            .day(today)
            .map(|day| day.surgeries.clone())
            .unwrap_or_default();

        Self {
            today,
            todays_surgeries,
            rooms_by_status: count_rooms(rooms),
            unread_notifications,
        }
    }

    pub fn build(
        today: NaiveDate,
        surgeries: &[Surgery],
        rooms: &[RoomCleaningState],
        unread_notifications: u64,
    ) -> Self {
        Self::build_in(today, surgeries, rooms, unread_notifications, &Local)
    }

    pub fn rooms_in(&self, status: &CleaningStatus) -> usize {
        self.rooms_by_status
            .iter()
            .find(|(s, _)| s == status)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

fn count_rooms(rooms: &[RoomCleaningState]) -> Vec<(CleaningStatus, usize)> {
    let mut counts: Vec<(CleaningStatus, usize)> = CleaningStatus::KNOWN
        .iter()
        .map(|status| (status.clone(), 0))
        .collect();

    for room in rooms {
        match counts.iter_mut().find(|(status, _)| status == &room.status) {
            Some((_, count)) => *count += 1,
            None => counts.push((room.status.clone(), 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::SurgeryStatus;

    fn surgery(id: i64, start: &str) -> Surgery {
        Surgery {
            id,
            patient_id: 1,
            physician_id: 1,
            room_id: None,
            room_name: None,
            scheduled_start: start.to_string(),
            duration_minutes: None,
            scheduled_end: None,
            procedure_type: "Biopsia".to_string(),
            status: SurgeryStatus::Confirmed,
            preop_notes: None,
            postop_notes: None,
            created_at: None,
            updated_at: None,
            specialty: None,
            patient_name: None,
            physician_name: None,
        }
    }

    fn room(name: &str, status: &str) -> RoomCleaningState {
        RoomCleaningState {
            room_name: name.to_string(),
            status: CleaningStatus::parse(status),
            occupied_until: None,
            last_cleaned: None,
            notes: None,
            room_id: None,
        }
    }

    #[test]
    fn test_dashboard_summary() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 25).unwrap();
        let surgeries = vec![
            surgery(1, "2025-06-25T15:00:00"),
            surgery(2, "2025-06-24T09:00:00"),
            surgery(3, "2025-06-25T07:30:00"),
        ];
        let rooms = vec![
            room("Pabellón 1", "Disponible"),
            room("Pabellón 2", "Limpieza Pendiente"),
            room("Pabellón 3", "Disponible"),
            room("Pabellón 4", "Ocupado"),
        ];

        let summary = DashboardSummary::build_in(today, &surgeries, &rooms, 4, &Utc);

        let ids: Vec<i64> = summary.todays_surgeries.iter().map(|s| s.surgery.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(summary.rooms_in(&CleaningStatus::Available), 2);
        assert_eq!(summary.rooms_in(&CleaningStatus::InCleaning), 0);
        assert_eq!(summary.rooms_in(&CleaningStatus::Other("Ocupado".to_string())), 1);
        assert_eq!(summary.rooms_by_status.len(), 5);
        assert_eq!(summary.unread_notifications, 4);
    }
}
