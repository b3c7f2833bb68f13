use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::wire_key;

/// A scheduled surgical procedure as returned by `GET /cirugias`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surgery {
    #[serde(rename = "id_cirugia")]
    pub id: i64,
    #[serde(rename = "id_paciente")]
    pub patient_id: i64,
    #[serde(rename = "id_medico_principal")]
    pub physician_id: i64,
    #[serde(rename = "id_quirofano", default)]
    pub room_id: Option<i64>,
    #[serde(rename = "nombre_quirofano", default)]
    pub room_name: Option<String>,
    /// Raw start timestamp. Kept as text so one malformed row never fails the
    /// whole list; the schedule skips rows it cannot parse.
    #[serde(rename = "fecha_hora_inicio_programada", default)]
    pub scheduled_start: String,
    #[serde(rename = "duracion_estimada_minutos", default)]
    pub duration_minutes: Option<i64>,
    #[serde(rename = "fecha_hora_fin_programada", default)]
    pub scheduled_end: Option<String>,
    #[serde(rename = "tipo_cirugia", default)]
    pub procedure_type: String,
    #[serde(rename = "estado_cirugia")]
    pub status: SurgeryStatus,
    #[serde(rename = "notas_preoperatorias", default)]
    pub preop_notes: Option<String>,
    #[serde(rename = "notas_postoperatorias", default)]
    pub postop_notes: Option<String>,
    #[serde(rename = "fecha_creacion_registro", default)]
    pub created_at: Option<String>,
    #[serde(rename = "fecha_ultima_modificacion", default)]
    pub updated_at: Option<String>,
    /// Display-only fields some backend versions attach to list rows
    #[serde(rename = "especialidad", default)]
    pub specialty: Option<String>,
    #[serde(rename = "nombre_paciente", default)]
    pub patient_name: Option<String>,
    #[serde(rename = "nombre_medico", default)]
    pub physician_name: Option<String>,
}

impl Surgery {
    pub fn patient_label(&self) -> String {
        match &self.patient_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("Paciente #{}", self.patient_id),
        }
    }

    pub fn physician_label(&self) -> String {
        match &self.physician_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("Médico #{}", self.physician_id),
        }
    }

    pub fn room_label(&self) -> &str {
        match self.room_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "Sin pabellón",
        }
    }
}

/// Lifecycle state of a surgery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SurgeryStatus {
    Scheduled,
    Confirmed,
    InRoom,
    Completed,
    Cancelled,
    Postponed,
    /// A value this client does not know about, kept verbatim
    Other(String),
}

impl SurgeryStatus {
    pub const KNOWN: [SurgeryStatus; 6] = [
        SurgeryStatus::Scheduled,
        SurgeryStatus::Confirmed,
        SurgeryStatus::InRoom,
        SurgeryStatus::Completed,
        SurgeryStatus::Cancelled,
        SurgeryStatus::Postponed,
    ];

    pub fn parse(raw: &str) -> Self {
        match wire_key(raw).as_str() {
            "programada" | "scheduled" => SurgeryStatus::Scheduled,
            "confirmada" | "confirmed" => SurgeryStatus::Confirmed,
            "en-pabellon" | "en-curso" | "in-room" | "inroom" => SurgeryStatus::InRoom,
            "finalizada" | "completada" | "completed" => SurgeryStatus::Completed,
            "cancelada" | "cancelled" | "canceled" => SurgeryStatus::Cancelled,
            "reprogramada" | "postergada" | "postponed" => SurgeryStatus::Postponed,
            _ => SurgeryStatus::Other(raw.trim().to_string()),
        }
    }

    /// Value sent to the backend
    pub fn as_wire(&self) -> &str {
        match self {
            SurgeryStatus::Scheduled => "programada",
            SurgeryStatus::Confirmed => "confirmada",
            SurgeryStatus::InRoom => "en-pabellon",
            SurgeryStatus::Completed => "finalizada",
            SurgeryStatus::Cancelled => "cancelada",
            SurgeryStatus::Postponed => "reprogramada",
            SurgeryStatus::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SurgeryStatus::Scheduled => "Programada",
            SurgeryStatus::Confirmed => "Confirmada",
            SurgeryStatus::InRoom => "En pabellón",
            SurgeryStatus::Completed => "Finalizada",
            SurgeryStatus::Cancelled => "Cancelada",
            SurgeryStatus::Postponed => "Reprogramada",
            SurgeryStatus::Other(raw) => raw,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SurgeryStatus::Completed | SurgeryStatus::Cancelled)
    }
}

impl From<String> for SurgeryStatus {
    fn from(raw: String) -> Self {
        SurgeryStatus::parse(&raw)
    }
}

impl From<SurgeryStatus> for String {
    fn from(status: SurgeryStatus) -> Self {
        status.as_wire().to_string()
    }
}

impl fmt::Display for SurgeryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Payload for `POST /cirugias`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurgeryCreateRequest {
    #[serde(rename = "id_paciente")]
    pub patient_id: i64,
    #[serde(rename = "id_medico_principal")]
    pub physician_id: i64,
    #[serde(rename = "nombre_quirofano", skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    /// ISO-8601 local date-time, e.g. `2025-06-25T08:30:00`
    #[serde(rename = "fecha_hora_inicio_programada")]
    pub scheduled_start: String,
    #[serde(rename = "duracion_estimada_minutos", skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    #[serde(rename = "tipo_cirugia")]
    pub procedure_type: String,
    #[serde(rename = "estado_cirugia")]
    pub status: SurgeryStatus,
    #[serde(rename = "notas_preoperatorias", skip_serializing_if = "Option::is_none")]
    pub preop_notes: Option<String>,
}

/// Payload for `PUT /cirugias/{id}`; patient and physician are fixed once
/// a surgery exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurgeryUpdateRequest {
    #[serde(rename = "nombre_quirofano", default, deserialize_with = "crate::clearable", skip_serializing_if = "Option::is_none")]
    pub room_name: Option<Option<String>>,
    #[serde(rename = "fecha_hora_inicio_programada", skip_serializing_if = "Option::is_none")]
    pub scheduled_start: Option<String>,
    #[serde(rename = "duracion_estimada_minutos", default, deserialize_with = "crate::clearable", skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<Option<i64>>,
    #[serde(rename = "tipo_cirugia", skip_serializing_if = "Option::is_none")]
    pub procedure_type: Option<String>,
    #[serde(rename = "estado_cirugia", skip_serializing_if = "Option::is_none")]
    pub status: Option<SurgeryStatus>,
    #[serde(rename = "notas_preoperatorias", default, deserialize_with = "crate::clearable", skip_serializing_if = "Option::is_none")]
    pub preop_notes: Option<Option<String>>,
    #[serde(rename = "notas_postoperatorias", default, deserialize_with = "crate::clearable", skip_serializing_if = "Option::is_none")]
    pub postop_notes: Option<Option<String>>,
}

impl SurgeryUpdateRequest {
    pub fn status_only(status: SurgeryStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurgeryListResponse {
    #[serde(rename = "cirugias", default)]
    pub surgeries: Vec<Surgery>,
    #[serde(default)]
    pub total: u64,
}

/// Query parameters for `GET /cirugias`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurgeryListQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub patient_id: Option<i64>,
    pub physician_id: Option<i64>,
    pub status: Option<SurgeryStatus>,
}

impl SurgeryListQuery {
    pub fn between(date_from: NaiveDate, date_to: NaiveDate) -> Self {
        Self {
            date_from: Some(date_from),
            date_to: Some(date_to),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Backend query-string pairs, omitting unset parameters
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(date_from) = self.date_from {
            pairs.push(("fecha_desde", date_from.format("%Y-%m-%d").to_string()));
        }
        if let Some(date_to) = self.date_to {
            pairs.push(("fecha_hasta", date_to.format("%Y-%m-%d").to_string()));
        }
        if let Some(patient_id) = self.patient_id {
            pairs.push(("id_paciente", patient_id.to_string()));
        }
        if let Some(physician_id) = self.physician_id {
            pairs.push(("id_medico", physician_id.to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("estado", status.as_wire().to_string()));
        }
        pairs
    }
}
