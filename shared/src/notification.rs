use serde::{Deserialize, Serialize};
use std::fmt;

use crate::wire_key;

/// Notification identifiers are integers for stored rows and UUID strings for
/// generated alerts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotificationId {
    Number(i64),
    Text(String),
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationId::Number(id) => write!(f, "{}", id),
            NotificationId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "id_notificacion")]
    pub id: NotificationId,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "tipo", default = "default_kind")]
    pub kind: NotificationKind,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: String,
    #[serde(rename = "leida", default)]
    pub read: bool,
    #[serde(rename = "entidad_tipo", default)]
    pub entity_type: Option<String>,
    #[serde(rename = "entidad_id", default)]
    pub entity_id: Option<NotificationId>,
}

fn default_kind() -> NotificationKind {
    NotificationKind::Info
}

impl Notification {
    /// Related entity as `(type, id)` when the backend linked one
    pub fn related_entity(&self) -> Option<(&str, &NotificationId)> {
        match (self.entity_type.as_deref(), self.entity_id.as_ref()) {
            (Some(kind), Some(id)) => Some((kind, id)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationKind {
    Info,
    Alert,
    Error,
    Other(String),
}

impl NotificationKind {
    pub const KNOWN: [NotificationKind; 3] = [
        NotificationKind::Info,
        NotificationKind::Alert,
        NotificationKind::Error,
    ];

    pub fn parse(raw: &str) -> Self {
        match wire_key(raw).as_str() {
            "info" | "informacion" => NotificationKind::Info,
            "alerta" | "alert" | "advertencia" | "critica" => NotificationKind::Alert,
            "error" => NotificationKind::Error,
            _ => NotificationKind::Other(raw.trim().to_string()),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Alert => "alerta",
            NotificationKind::Error => "error",
            NotificationKind::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NotificationKind::Info => "Información",
            NotificationKind::Alert => "Alerta",
            NotificationKind::Error => "Error",
            NotificationKind::Other(raw) => raw,
        }
    }
}

impl From<String> for NotificationKind {
    fn from(raw: String) -> Self {
        NotificationKind::parse(&raw)
    }
}

impl From<NotificationKind> for String {
    fn from(kind: NotificationKind) -> Self {
        kind.as_wire().to_string()
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationListResponse {
    #[serde(rename = "notificaciones", default)]
    pub notifications: Vec<Notification>,
    #[serde(rename = "total_no_leidas", default)]
    pub unread_total: u64,
}
