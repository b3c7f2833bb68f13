//! Client-side list filtering.
//!
//! Every list screen narrows what the backend returned with a free-text
//! search plus a few categorical selects. All criteria are ANDed, order is
//! preserved and an "all" select value disables its criterion.

use shared::{
    CleaningStatus, Notification, NotificationKind, RoomCleaningState, Surgery, SurgeryStatus,
    UserAccount, UserRole,
};

/// Select values meaning "do not filter on this field"
pub const ALL_SENTINELS: [&str; 3] = ["todos", "todas", "all"];

/// Value a select shows for its "all" option
pub const ALL_VALUE: &str = "todos";

pub fn is_all_sentinel(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || ALL_SENTINELS.iter().any(|s| raw.eq_ignore_ascii_case(s))
}

/// One categorical criterion
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion<T> {
    Any,
    Exactly(T),
}

impl<T> Default for Criterion<T> {
    fn default() -> Self {
        Criterion::Any
    }
}

impl<T: PartialEq> Criterion<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Criterion::Any => true,
            Criterion::Exactly(expected) => expected == value,
        }
    }
}

impl<T> Criterion<T> {
    /// Criterion from a raw select value; sentinels map to `Any`
    pub fn from_select(raw: &str, parse: impl FnOnce(&str) -> T) -> Self {
        if is_all_sentinel(raw) {
            Criterion::Any
        } else {
            Criterion::Exactly(parse(raw.trim()))
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Criterion::Any)
    }

    /// Value to put back into the select element
    pub fn select_value(&self, to_raw: impl FnOnce(&T) -> String) -> String {
        match self {
            Criterion::Any => ALL_VALUE.to_string(),
            Criterion::Exactly(value) => to_raw(value),
        }
    }
}

/// Case-insensitive substring search over display fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches<S: AsRef<str>>(&self, fields: &[S]) -> bool {
        self.is_empty()
            || fields
                .iter()
                .any(|field| field.as_ref().to_lowercase().contains(&self.needle))
    }
}

/// A predicate over list rows
pub trait ListFilter<T> {
    fn matches(&self, item: &T) -> bool;

    /// Rows that pass the filter, in their original order
    fn apply(&self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurgeryFilter {
    pub text: TextQuery,
    pub status: Criterion<SurgeryStatus>,
    pub specialty: Criterion<String>,
    pub room: Criterion<String>,
    pub physician: Criterion<i64>,
}

impl ListFilter<Surgery> for SurgeryFilter {
    fn matches(&self, surgery: &Surgery) -> bool {
        let text_fields = [
            surgery.patient_label(),
            surgery.patient_id.to_string(),
            surgery.physician_label(),
            surgery.physician_id.to_string(),
            surgery.procedure_type.clone(),
            surgery.room_label().to_string(),
        ];

        self.text.matches(&text_fields)
            && self.status.matches(&surgery.status)
            && optional_matches(&self.specialty, surgery.specialty.as_deref())
            && optional_matches(&self.room, surgery.room_name.as_deref())
            && self.physician.matches(&surgery.physician_id)
    }
}

fn optional_matches(criterion: &Criterion<String>, value: Option<&str>) -> bool {
    match criterion {
        Criterion::Any => true,
        Criterion::Exactly(expected) => value.map(str::trim) == Some(expected.as_str()),
    }
}

/// Physician select value; anything that is not an id means "all"
pub fn physician_criterion(raw: &str) -> Criterion<i64> {
    if is_all_sentinel(raw) {
        return Criterion::Any;
    }
    match raw.trim().parse() {
        Ok(id) => Criterion::Exactly(id),
        Err(_) => {
            log::warn!("Ignoring physician filter value '{}'", raw);
            Criterion::Any
        }
    }
}

/// `(id, label)` of every physician in `surgeries`, sorted by label.
/// A row carrying the physician's name wins over the `Médico #id` fallback.
pub fn distinct_physicians(surgeries: &[Surgery]) -> Vec<(i64, String)> {
    let mut physicians: Vec<(i64, String)> = Vec::new();
    for surgery in surgeries {
        let named = surgery
            .physician_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());
        match physicians.iter_mut().find(|(id, _)| *id == surgery.physician_id) {
            Some(entry) if named => entry.1 = surgery.physician_label(),
            Some(_) => {}
            None => physicians.push((surgery.physician_id, surgery.physician_label())),
        }
    }
    physicians.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
    physicians
}

/// Parse the user-state select (`activo` / `inactivo`)
pub fn parse_active_state(raw: &str) -> bool {
    !raw.trim().eq_ignore_ascii_case("inactivo")
}

pub fn active_state_value(active: &bool) -> String {
    if *active { "activo" } else { "inactivo" }.to_string()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub text: TextQuery,
    pub role: Criterion<UserRole>,
    pub active: Criterion<bool>,
}

impl ListFilter<UserAccount> for UserFilter {
    fn matches(&self, user: &UserAccount) -> bool {
        self.text
            .matches(&[user.full_name(), user.email.clone(), user.rut.clone()])
            && self.role.matches(&user.role)
            && self.active.matches(&user.active)
    }
}

/// Parse the read-state select (`leidas` / `no-leidas`)
pub fn parse_read_state(raw: &str) -> bool {
    let raw = raw.trim().to_lowercase();
    !(raw == "no-leidas" || raw == "no-leídas")
}

pub fn read_state_value(read: &bool) -> String {
    if *read { "leidas" } else { "no-leidas" }.to_string()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationFilter {
    pub text: TextQuery,
    pub kind: Criterion<NotificationKind>,
    pub read: Criterion<bool>,
}

impl ListFilter<Notification> for NotificationFilter {
    fn matches(&self, notification: &Notification) -> bool {
        self.text.matches(&[notification.message.as_str()])
            && self.kind.matches(&notification.kind)
            && self.read.matches(&notification.read)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleaningFilter {
    pub status: Criterion<CleaningStatus>,
}

impl ListFilter<RoomCleaningState> for CleaningFilter {
    fn matches(&self, room: &RoomCleaningState) -> bool {
        self.status.matches(&room.status)
    }
}

/// Sorted, de-duplicated non-empty values used to populate a select
pub fn distinct_values<T>(items: &[T], value: impl Fn(&T) -> Option<String>) -> Vec<String> {
    let mut values: Vec<String> = items
        .iter()
        .filter_map(|item| value(item))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    values.sort();
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surgery(id: i64, status: SurgeryStatus, specialty: &str, room: &str) -> Surgery {
        Surgery {
            id,
            patient_id: 10 + id,
            physician_id: if id % 2 == 0 { 2 } else { 3 },
            room_id: None,
            room_name: Some(room.to_string()),
            scheduled_start: "2025-06-25T08:00:00".to_string(),
            duration_minutes: None,
            scheduled_end: None,
            procedure_type: format!("Procedimiento {}", id),
            status,
            preop_notes: None,
            postop_notes: None,
            created_at: None,
            updated_at: None,
            specialty: Some(specialty.to_string()),
            patient_name: Some(format!("Paciente Número {}", id)),
            physician_name: None,
        }
    }

    fn sample() -> Vec<Surgery> {
        vec![
            surgery(1, SurgeryStatus::Scheduled, "Traumatología", "Pabellón 1"),
            surgery(2, SurgeryStatus::Cancelled, "Cardiología", "Pabellón 2"),
            surgery(3, SurgeryStatus::Completed, "Traumatología", "Pabellón 2"),
            surgery(4, SurgeryStatus::Scheduled, "Cardiología", "Pabellón 1"),
        ]
    }

    fn ids(surgeries: &[Surgery]) -> Vec<i64> {
        surgeries.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_sentinels() {
        assert!(is_all_sentinel("todos"));
        assert!(is_all_sentinel("Todas"));
        assert!(is_all_sentinel("ALL"));
        assert!(is_all_sentinel(" "));
        assert!(!is_all_sentinel("programada"));
    }

    #[test]
    fn test_cancelled_surgery_against_status_filters() {
        let cancelled = surgery(2, SurgeryStatus::Cancelled, "Cardiología", "Pabellón 2");
        let by_status = |raw: &str| SurgeryFilter {
            status: Criterion::from_select(raw, SurgeryStatus::parse),
            ..SurgeryFilter::default()
        };

        assert!(!by_status("programada").matches(&cancelled));
        assert!(by_status("todos").matches(&cancelled));
        assert!(by_status("cancelada").matches(&cancelled));
    }

    #[test]
    fn test_all_sentinels_return_input_unchanged() {
        let filter = SurgeryFilter {
            text: TextQuery::new(""),
            status: Criterion::from_select("todos", SurgeryStatus::parse),
            specialty: Criterion::from_select("todas", str::to_string),
            room: Criterion::from_select("", str::to_string),
            physician: physician_criterion("all"),
        };
        assert_eq!(filter.apply(&sample()), sample());
    }

    #[test]
    fn test_criteria_are_anded_and_order_preserved() {
        let filter = SurgeryFilter {
            text: TextQuery::new("pabellón 1"),
            status: Criterion::Exactly(SurgeryStatus::Scheduled),
            ..SurgeryFilter::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 4]);

        let filter = SurgeryFilter {
            specialty: Criterion::Exactly("Traumatología".to_string()),
            room: Criterion::Exactly("Pabellón 2".to_string()),
            ..SurgeryFilter::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![3]);

        let filter = SurgeryFilter {
            physician: Criterion::Exactly(2),
            status: Criterion::Exactly(SurgeryStatus::Completed),
            ..SurgeryFilter::default()
        };
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let filter = SurgeryFilter {
            text: TextQuery::new("NÚMERO"),
            specialty: Criterion::Exactly("Cardiología".to_string()),
            ..SurgeryFilter::default()
        };
        let once = filter.apply(&sample());
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
        assert_eq!(ids(&once), vec![2, 4]);
    }

    #[test]
    fn test_user_filter() {
        let user = |id: i64, name: &str, role: UserRole, active: bool| UserAccount {
            id,
            first_name: name.to_string(),
            last_name: "Soto".to_string(),
            rut: format!("1234567{}-K", id),
            email: format!("{}@clinicabak.cl", name.to_lowercase()),
            phone: None,
            role,
            specialty: None,
            active,
            created_at: None,
            last_access: None,
        };
        let users = vec![
            user(1, "Ana", UserRole::Physician, true),
            user(2, "Luis", UserRole::Nurse, false),
            user(3, "Marta", UserRole::Physician, false),
        ];

        let filter = UserFilter {
            role: Criterion::from_select("medico", UserRole::parse),
            active: Criterion::from_select("inactivo", parse_active_state),
            ..UserFilter::default()
        };
        let found: Vec<i64> = filter.apply(&users).iter().map(|u| u.id).collect();
        assert_eq!(found, vec![3]);

        let filter = UserFilter {
            text: TextQuery::new("luis@"),
            ..UserFilter::default()
        };
        assert_eq!(filter.apply(&users).len(), 1);
    }

    #[test]
    fn test_notification_read_state() {
        assert!(!parse_read_state("no-leidas"));
        assert!(parse_read_state("leidas"));
        assert_eq!(read_state_value(&false), "no-leidas");

        let criterion = Criterion::from_select("no-leidas", parse_read_state);
        assert!(criterion.matches(&false));
        assert!(!criterion.matches(&true));
        assert_eq!(criterion.select_value(read_state_value), "no-leidas");
        assert_eq!(Criterion::<bool>::Any.select_value(read_state_value), "todos");
    }

    #[test]
    fn test_physician_select() {
        assert_eq!(physician_criterion("3"), Criterion::Exactly(3));
        assert_eq!(physician_criterion("todos"), Criterion::Any);
        assert_eq!(physician_criterion("dr-soto"), Criterion::Any);

        let mut surgeries = sample();
        surgeries[2].physician_name = Some("Dra. Rojas".to_string());
        assert_eq!(
            distinct_physicians(&surgeries),
            vec![(3, "Dra. Rojas".to_string()), (2, "Médico #2".to_string())]
        );

        let filter = SurgeryFilter {
            physician: physician_criterion("3"),
            ..SurgeryFilter::default()
        };
        assert_eq!(ids(&filter.apply(&surgeries)), vec![1, 3]);
        assert_eq!(filter.physician.select_value(|id| id.to_string()), "3");
    }

    #[test]
    fn test_distinct_values() {
        let values = distinct_values(&sample(), |s| s.specialty.clone());
        assert_eq!(values, vec!["Cardiología".to_string(), "Traumatología".to_string()]);
    }
}
