//! Status → badge mapping used by every list and detail screen.

use shared::{CleaningStatus, NotificationKind, SurgeryStatus, UserRole};

pub const NEUTRAL_BADGE: &str = "badge badge-neutral";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub class: &'static str,
    pub label: String,
}

impl Badge {
    fn new(class: &'static str, label: &str) -> Self {
        Self {
            class,
            label: label.to_string(),
        }
    }

    /// Unknown values keep their raw text on a neutral badge
    fn neutral(raw: &str) -> Self {
        Self::new(NEUTRAL_BADGE, raw)
    }
}

pub fn surgery_badge(status: &SurgeryStatus) -> Badge {
    let class = match status {
        SurgeryStatus::Scheduled => "badge badge-info",
        SurgeryStatus::Confirmed => "badge badge-primary",
        SurgeryStatus::InRoom => "badge badge-warning",
        SurgeryStatus::Completed => "badge badge-success",
        SurgeryStatus::Cancelled => "badge badge-danger",
        SurgeryStatus::Postponed => "badge badge-secondary",
        SurgeryStatus::Other(raw) => return Badge::neutral(raw),
    };
    Badge::new(class, status.label())
}

pub fn cleaning_badge(status: &CleaningStatus) -> Badge {
    let class = match status {
        CleaningStatus::Available => "badge badge-success",
        CleaningStatus::PendingCleaning => "badge badge-warning",
        CleaningStatus::InCleaning => "badge badge-info",
        CleaningStatus::Unavailable => "badge badge-danger",
        CleaningStatus::Other(raw) => return Badge::neutral(raw),
    };
    Badge::new(class, status.label())
}

pub fn notification_badge(kind: &NotificationKind) -> Badge {
    let class = match kind {
        NotificationKind::Info => "badge badge-info",
        NotificationKind::Alert => "badge badge-warning",
        NotificationKind::Error => "badge badge-danger",
        NotificationKind::Other(raw) => return Badge::neutral(raw),
    };
    Badge::new(class, kind.label())
}

pub fn role_badge(role: &UserRole) -> Badge {
    let class = match role {
        UserRole::Admin => "badge badge-danger",
        UserRole::Physician => "badge badge-primary",
        UserRole::Nurse => "badge badge-info",
        UserRole::Cleaning => "badge badge-secondary",
        UserRole::ItSupport => "badge badge-warning",
        UserRole::Other(raw) => return Badge::neutral(raw),
    };
    Badge::new(class, role.label())
}

pub fn active_badge(active: bool) -> Badge {
    if active {
        Badge::new("badge badge-success", "Activo")
    } else {
        Badge::new(NEUTRAL_BADGE, "Inactivo")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_get_spanish_labels() {
        assert_eq!(
            surgery_badge(&SurgeryStatus::InRoom),
            Badge::new("badge badge-warning", "En pabellón")
        );
        assert_eq!(
            cleaning_badge(&CleaningStatus::PendingCleaning).label,
            "Limpieza Pendiente"
        );
        assert_eq!(role_badge(&UserRole::Physician).label, "Médico");
        assert_eq!(notification_badge(&NotificationKind::Alert).label, "Alerta");
    }

    #[test]
    fn test_unknown_values_are_neutral_and_raw() {
        let badge = cleaning_badge(&CleaningStatus::parse("Ocupado"));
        assert_eq!(badge, Badge::new(NEUTRAL_BADGE, "Ocupado"));

        let badge = surgery_badge(&SurgeryStatus::parse("En espera"));
        assert_eq!(badge.class, NEUTRAL_BADGE);
        assert_eq!(badge.label, "En espera");
    }

    #[test]
    fn test_every_known_status_has_a_distinct_class() {
        let classes: Vec<&str> = SurgeryStatus::KNOWN
            .iter()
            .map(|status| surgery_badge(status).class)
            .collect();
        let mut unique = classes.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), classes.len());
        assert!(!classes.contains(&NEUTRAL_BADGE));
    }
}
