//! Screens of the application and the sidebar menu.

use chrono::NaiveDate;
use shared::{wire_key, NotificationId};

/// Every screen, carrying the parameters it needs
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Dashboard,
    Schedule { week_of: NaiveDate },
    PatientIntake,
    SurgeryDetail { surgery_id: i64 },
    SurgeryHistory,
    Cleaning,
    Users,
    Reports,
    Notifications,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Dashboard
    }
}

impl Screen {
    pub fn title(&self) -> String {
        match self {
            Screen::Dashboard => "Dashboard".to_string(),
            Screen::Schedule { .. } => "Agenda Quirúrgica".to_string(),
            Screen::PatientIntake => "Ingreso Paciente".to_string(),
            Screen::SurgeryDetail { surgery_id } => format!("Detalle Cirugía #{}", surgery_id),
            Screen::SurgeryHistory => "Historial Cirugías".to_string(),
            Screen::Cleaning => "Panel Limpieza".to_string(),
            Screen::Users => "Gestión Usuarios".to_string(),
            Screen::Reports => "Reportes y KPIs".to_string(),
            Screen::Notifications => "Notificaciones".to_string(),
        }
    }

    /// Menu section highlighted while this screen is shown
    pub fn section(&self) -> Section {
        match self {
            Screen::Dashboard => Section::Dashboard,
            Screen::Schedule { .. } => Section::Schedule,
            Screen::PatientIntake => Section::PatientIntake,
            // a surgery is opened from the schedule or the history; both live
            // under the history entry
            Screen::SurgeryDetail { .. } | Screen::SurgeryHistory => Section::SurgeryHistory,
            Screen::Cleaning => Section::Cleaning,
            Screen::Users => Section::Users,
            Screen::Reports => Section::Reports,
            Screen::Notifications => Section::Notifications,
        }
    }

    /// Screen for the entity a notification points at
    pub fn for_entity(entity_type: &str, entity_id: &NotificationId) -> Option<Screen> {
        match wire_key(entity_type).as_str() {
            "cirugia" => numeric_id(entity_id).map(|surgery_id| Screen::SurgeryDetail { surgery_id }),
            "quirofano" | "pabellon" => Some(Screen::Cleaning),
            "paciente" => Some(Screen::PatientIntake),
            _ => None,
        }
    }
}

fn numeric_id(id: &NotificationId) -> Option<i64> {
    match id {
        NotificationId::Number(id) => Some(*id),
        NotificationId::Text(raw) => raw.trim().parse().ok(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Schedule,
    PatientIntake,
    SurgeryHistory,
    Cleaning,
    Users,
    Reports,
    Notifications,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub screen: Screen,
    pub label: &'static str,
    pub icon: &'static str,
}

impl MenuEntry {
    pub fn is_active(&self, current: &Screen) -> bool {
        self.screen.section() == current.section()
    }
}

/// Sidebar entries; the schedule opens on the week of `today`
pub fn menu(today: NaiveDate) -> Vec<MenuEntry> {
    vec![
        MenuEntry { screen: Screen::Dashboard, label: "Dashboard", icon: "🏠" },
        MenuEntry { screen: Screen::Schedule { week_of: today }, label: "Agenda Quirúrgica", icon: "📅" },
        MenuEntry { screen: Screen::PatientIntake, label: "Ingreso Paciente", icon: "🧑‍⚕️" },
        MenuEntry { screen: Screen::SurgeryHistory, label: "Historial Cirugías", icon: "🕘" },
        MenuEntry { screen: Screen::Cleaning, label: "Panel Limpieza", icon: "✨" },
        MenuEntry { screen: Screen::Users, label: "Gestión Usuarios", icon: "👥" },
        MenuEntry { screen: Screen::Reports, label: "Reportes y KPIs", icon: "📊" },
        MenuEntry { screen: Screen::Notifications, label: "Notificaciones", icon: "🔔" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 25).unwrap()
    }

    #[test]
    fn test_menu_covers_every_section_once() {
        let entries = menu(today());
        assert_eq!(entries.len(), 8);
        let mut sections: Vec<String> = entries
            .iter()
            .map(|e| format!("{:?}", e.screen.section()))
            .collect();
        sections.dedup();
        assert_eq!(sections.len(), 8);
        assert_eq!(entries[1].screen, Screen::Schedule { week_of: today() });
    }

    #[test]
    fn test_detail_highlights_history() {
        let history = &menu(today())[3];
        assert!(history.is_active(&Screen::SurgeryDetail { surgery_id: 4 }));
        assert!(!history.is_active(&Screen::Dashboard));
    }

    #[test]
    fn test_entity_mapping() {
        assert_eq!(
            Screen::for_entity("Cirugia", &NotificationId::Number(42)),
            Some(Screen::SurgeryDetail { surgery_id: 42 })
        );
        assert_eq!(
            Screen::for_entity("cirugía", &NotificationId::Text("17".to_string())),
            Some(Screen::SurgeryDetail { surgery_id: 17 })
        );
        assert_eq!(
            Screen::for_entity("Quirofano", &NotificationId::Text("Pabellón 2".to_string())),
            Some(Screen::Cleaning)
        );
        assert_eq!(
            Screen::for_entity("Paciente", &NotificationId::Number(3)),
            Some(Screen::PatientIntake)
        );
        assert_eq!(
            Screen::for_entity("Cirugia", &NotificationId::Text("abc".to_string())),
            None
        );
        assert_eq!(Screen::for_entity("Factura", &NotificationId::Number(1)), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Screen::SurgeryDetail { surgery_id: 9 }.title(), "Detalle Cirugía #9");
        assert_eq!(Screen::default().title(), "Dashboard");
    }
}
