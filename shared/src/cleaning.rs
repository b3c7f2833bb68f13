use serde::{Deserialize, Serialize};
use std::fmt;

use crate::wire_key;

/// Cleaning state of one operating room, keyed by room name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomCleaningState {
    #[serde(rename = "nombre_quirofano")]
    pub room_name: String,
    #[serde(rename = "estado_limpieza")]
    pub status: CleaningStatus,
    #[serde(rename = "ultima_vez_ocupado_hasta", default)]
    pub occupied_until: Option<String>,
    #[serde(rename = "ultima_limpieza_realizada_dt", default)]
    pub last_cleaned: Option<String>,
    #[serde(rename = "notas_limpieza", default)]
    pub notes: Option<String>,
    #[serde(rename = "id_quirofano_fk", default)]
    pub room_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CleaningStatus {
    Available,
    PendingCleaning,
    InCleaning,
    Unavailable,
    Other(String),
}

impl CleaningStatus {
    pub const KNOWN: [CleaningStatus; 4] = [
        CleaningStatus::Available,
        CleaningStatus::PendingCleaning,
        CleaningStatus::InCleaning,
        CleaningStatus::Unavailable,
    ];

    pub fn parse(raw: &str) -> Self {
        match wire_key(raw).as_str() {
            "disponible" | "available" => CleaningStatus::Available,
            "limpieza-pendiente" | "pendiente" | "pending-cleaning" => CleaningStatus::PendingCleaning,
            "en-limpieza" | "en-proceso" | "in-cleaning" => CleaningStatus::InCleaning,
            "no-disponible" | "unavailable" => CleaningStatus::Unavailable,
            _ => CleaningStatus::Other(raw.trim().to_string()),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            CleaningStatus::Available => "Disponible",
            CleaningStatus::PendingCleaning => "Limpieza Pendiente",
            CleaningStatus::InCleaning => "En Limpieza",
            CleaningStatus::Unavailable => "No Disponible",
            CleaningStatus::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        self.as_wire()
    }
}

impl From<String> for CleaningStatus {
    fn from(raw: String) -> Self {
        CleaningStatus::parse(&raw)
    }
}

impl From<CleaningStatus> for String {
    fn from(status: CleaningStatus) -> Self {
        status.as_wire().to_string()
    }
}

impl fmt::Display for CleaningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Payload for `PUT /limpieza/quirofanos/{nombre}/estado`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomCleaningUpdateRequest {
    #[serde(rename = "estado_limpieza", skip_serializing_if = "Option::is_none")]
    pub status: Option<CleaningStatus>,
    #[serde(rename = "notas_limpieza", default, deserialize_with = "crate::clearable", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomCleaningListResponse {
    #[serde(rename = "quirofanos", default)]
    pub rooms: Vec<RoomCleaningState>,
    #[serde(default)]
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleaning_status_parse() {
        assert_eq!(CleaningStatus::parse("Disponible"), CleaningStatus::Available);
        assert_eq!(CleaningStatus::parse("Limpieza Pendiente"), CleaningStatus::PendingCleaning);
        assert_eq!(CleaningStatus::parse("en-proceso"), CleaningStatus::InCleaning);
        assert_eq!(CleaningStatus::parse("No Disponible"), CleaningStatus::Unavailable);
        assert_eq!(CleaningStatus::parse("Ocupado"), CleaningStatus::Other("Ocupado".to_string()));
    }

    #[test]
    fn test_room_list_deserializes() {
        let json = r#"{
            "quirofanos": [
                {"nombre_quirofano": "Pabellón 1", "estado_limpieza": "Limpieza Pendiente",
                 "ultima_vez_ocupado_hasta": "2025-06-25T10:15:00"},
                {"nombre_quirofano": "Pabellón 3", "estado_limpieza": "Disponible",
                 "notas_limpieza": "Sin novedad", "id_quirofano_fk": 3}
            ],
            "total": 2
        }"#;

        let list: RoomCleaningListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(list.total, 2);
        assert_eq!(list.rooms[0].status, CleaningStatus::PendingCleaning);
        assert_eq!(list.rooms[1].notes.as_deref(), Some("Sin novedad"));
        assert_eq!(list.rooms[1].room_id, Some(3));
    }

    #[test]
    fn test_update_request_serializes_backend_label() {
        let request = RoomCleaningUpdateRequest {
            status: Some(CleaningStatus::InCleaning),
            notes: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({ "estado_limpieza": "En Limpieza" }));
    }
}
