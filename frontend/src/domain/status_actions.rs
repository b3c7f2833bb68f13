//! Allowed status changes offered as buttons on the detail screens.

use shared::{CleaningStatus, Notification, NotificationId, SurgeryStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTone {
    Primary,
    Neutral,
    Danger,
}

impl ActionTone {
    pub fn class(&self) -> &'static str {
        match self {
            ActionTone::Primary => "btn btn-primary",
            ActionTone::Neutral => "btn btn-secondary",
            ActionTone::Danger => "btn btn-danger",
        }
    }
}

/// A button that moves an entity to `target`
#[derive(Debug, Clone, PartialEq)]
pub struct StatusAction<S> {
    pub target: S,
    pub label: &'static str,
    pub tone: ActionTone,
}

fn action<S>(target: S, label: &'static str, tone: ActionTone) -> StatusAction<S> {
    StatusAction { target, label, tone }
}

/// Transitions available from `current`. Completed and cancelled surgeries
/// are final; unknown states offer nothing.
pub fn surgery_actions(current: &SurgeryStatus) -> Vec<StatusAction<SurgeryStatus>> {
    use ActionTone::*;
    use SurgeryStatus::*;

    match current {
        Scheduled => vec![
            action(Confirmed, "Confirmar", Primary),
            action(Postponed, "Reprogramar", Neutral),
            action(Cancelled, "Cancelar", Danger),
        ],
        Confirmed => vec![
            action(InRoom, "Ingresar a pabellón", Primary),
            action(Postponed, "Reprogramar", Neutral),
            action(Cancelled, "Cancelar", Danger),
        ],
        InRoom => vec![action(Completed, "Finalizar", Primary)],
        Postponed => vec![
            action(Scheduled, "Volver a programar", Primary),
            action(Cancelled, "Cancelar", Danger),
        ],
        Completed | Cancelled | Other(_) => Vec::new(),
    }
}

pub fn can_change_surgery(from: &SurgeryStatus, to: &SurgeryStatus) -> bool {
    surgery_actions(from).iter().any(|a| &a.target == to)
}

pub fn cleaning_actions(current: &CleaningStatus) -> Vec<StatusAction<CleaningStatus>> {
    use ActionTone::*;
    use CleaningStatus::*;

    match current {
        PendingCleaning => vec![action(InCleaning, "Iniciar limpieza", Primary)],
        InCleaning => vec![action(Available, "Marcar disponible", Primary)],
        Available => vec![
            action(PendingCleaning, "Solicitar limpieza", Neutral),
            action(Unavailable, "Marcar no disponible", Danger),
        ],
        Unavailable => vec![action(Available, "Habilitar", Primary)],
        Other(_) => Vec::new(),
    }
}

pub fn can_change_cleaning(from: &CleaningStatus, to: &CleaningStatus) -> bool {
    cleaning_actions(from).iter().any(|a| &a.target == to)
}

/// Local copy of the notification list with its unread counter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inbox {
    pub notifications: Vec<Notification>,
    pub unread_total: u64,
}

impl Inbox {
    pub fn new(notifications: Vec<Notification>, unread_total: u64) -> Self {
        Self {
            notifications,
            unread_total,
        }
    }

    /// Apply a confirmed mark-as-read. Returns false when nothing changed.
    pub fn mark_read(&mut self, id: &NotificationId) -> bool {
        match self
            .notifications
            .iter_mut()
            .find(|notification| &notification.id == id && !notification.read)
        {
            Some(notification) => {
                notification.read = true;
                self.unread_total = self.unread_total.saturating_sub(1);
                true
            }
            None => false,
        }
    }

    pub fn unread(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(|n| !n.read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::NotificationKind;

    fn targets<S: Clone>(actions: &[StatusAction<S>]) -> Vec<S> {
        actions.iter().map(|a| a.target.clone()).collect()
    }

    #[test]
    fn test_surgery_transitions() {
        assert_eq!(
            targets(&surgery_actions(&SurgeryStatus::Scheduled)),
            vec![SurgeryStatus::Confirmed, SurgeryStatus::Postponed, SurgeryStatus::Cancelled]
        );
        assert_eq!(
            targets(&surgery_actions(&SurgeryStatus::InRoom)),
            vec![SurgeryStatus::Completed]
        );
        assert!(can_change_surgery(&SurgeryStatus::Postponed, &SurgeryStatus::Scheduled));
        assert!(!can_change_surgery(&SurgeryStatus::Scheduled, &SurgeryStatus::Completed));
    }

    #[test]
    fn test_terminal_and_unknown_surgeries_offer_nothing() {
        for status in [
            SurgeryStatus::Completed,
            SurgeryStatus::Cancelled,
            SurgeryStatus::Other("en espera".to_string()),
        ] {
            assert!(surgery_actions(&status).is_empty(), "{:?}", status);
        }
        for status in SurgeryStatus::KNOWN {
            assert_eq!(status.is_terminal(), surgery_actions(&status).is_empty());
        }
    }

    #[test]
    fn test_cleaning_cycle() {
        assert!(can_change_cleaning(&CleaningStatus::PendingCleaning, &CleaningStatus::InCleaning));
        assert!(can_change_cleaning(&CleaningStatus::InCleaning, &CleaningStatus::Available));
        assert!(can_change_cleaning(&CleaningStatus::Available, &CleaningStatus::PendingCleaning));
        assert!(can_change_cleaning(&CleaningStatus::Unavailable, &CleaningStatus::Available));
        assert!(!can_change_cleaning(&CleaningStatus::PendingCleaning, &CleaningStatus::Available));
        assert!(cleaning_actions(&CleaningStatus::Other("Ocupado".to_string())).is_empty());
    }

    #[test]
    fn test_inbox_mark_read_decrements_once() {
        let notification = |id: i64, read: bool| Notification {
            id: NotificationId::Number(id),
            message: format!("Aviso {}", id),
            kind: NotificationKind::Info,
            created_at: "2025-06-25T08:00:00".to_string(),
            read,
            entity_type: None,
            entity_id: None,
        };
        let mut inbox = Inbox::new(vec![notification(1, false), notification(2, true)], 1);

        assert!(inbox.mark_read(&NotificationId::Number(1)));
        assert_eq!(inbox.unread_total, 0);
        assert!(!inbox.mark_read(&NotificationId::Number(1)));
        assert!(!inbox.mark_read(&NotificationId::Number(2)));
        assert!(!inbox.mark_read(&NotificationId::Text("x".to_string())));
        assert_eq!(inbox.unread_total, 0);
        assert_eq!(inbox.unread().count(), 0);
    }
}
