use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(rename = "id_paciente")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub rut: String,
    /// ISO 8601 date format (YYYY-MM-DD)
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: String,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
    /// Health-insurance category (FONASA, ISAPRE, ...)
    #[serde(rename = "prevision", default)]
    pub insurance: Option<String>,
    #[serde(rename = "numero_ficha", default)]
    pub record_number: Option<String>,
    #[serde(rename = "fecha_registro", default)]
    pub registered_at: Option<String>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn parsed_birth_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.birth_date.trim(), "%Y-%m-%d").ok()
    }
}

/// Insurance categories offered by the intake form
pub const INSURANCE_OPTIONS: [&str; 3] = ["FONASA", "ISAPRE", "Particular"];

/// Payload for `POST /pacientes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientCreateRequest {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub rut: String,
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: String,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "direccion", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "prevision", skip_serializing_if = "Option::is_none")]
    pub insurance: Option<String>,
    #[serde(rename = "numero_ficha", skip_serializing_if = "Option::is_none")]
    pub record_number: Option<String>,
}

/// Payload for `PUT /pacientes/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientUpdateRequest {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "apellido", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rut: Option<String>,
    #[serde(rename = "fecha_nacimiento", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(rename = "telefono", default, deserialize_with = "crate::clearable", skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::clearable", skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(rename = "direccion", default, deserialize_with = "crate::clearable", skip_serializing_if = "Option::is_none")]
    pub address: Option<Option<String>>,
    #[serde(rename = "prevision", default, deserialize_with = "crate::clearable", skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Option<String>>,
    #[serde(rename = "numero_ficha", default, deserialize_with = "crate::clearable", skip_serializing_if = "Option::is_none")]
    pub record_number: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientListResponse {
    #[serde(rename = "pacientes", default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub total: u64,
}
