use serde::{Deserialize, Serialize};
use std::fmt;

use crate::wire_key;

/// A staff account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(rename = "id_usuario")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido", default)]
    pub last_name: String,
    #[serde(default)]
    pub rut: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "rol")]
    pub role: UserRole,
    #[serde(rename = "especialidad", default)]
    pub specialty: Option<String>,
    #[serde(rename = "activo", default = "default_active")]
    pub active: bool,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<String>,
    #[serde(rename = "ultimo_acceso", default)]
    pub last_access: Option<String>,
}

fn default_active() -> bool {
    true
}

impl UserAccount {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// Staff role
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Admin,
    Physician,
    Nurse,
    Cleaning,
    ItSupport,
    Other(String),
}

impl UserRole {
    pub const KNOWN: [UserRole; 5] = [
        UserRole::Admin,
        UserRole::Physician,
        UserRole::Nurse,
        UserRole::Cleaning,
        UserRole::ItSupport,
    ];

    pub fn parse(raw: &str) -> Self {
        match wire_key(raw).as_str() {
            "administrador" | "admin" => UserRole::Admin,
            "medico" | "physician" => UserRole::Physician,
            "enfermero" | "enfermera" | "nurse" => UserRole::Nurse,
            "limpieza" | "cleaning" => UserRole::Cleaning,
            "ti" | "soporte-ti" | "it" | "itsupport" => UserRole::ItSupport,
            _ => UserRole::Other(raw.trim().to_string()),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            UserRole::Admin => "administrador",
            UserRole::Physician => "medico",
            UserRole::Nurse => "enfermero",
            UserRole::Cleaning => "limpieza",
            UserRole::ItSupport => "ti",
            UserRole::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            UserRole::Admin => "Administrador",
            UserRole::Physician => "Médico",
            UserRole::Nurse => "Enfermero/a",
            UserRole::Cleaning => "Personal de Limpieza",
            UserRole::ItSupport => "Soporte TI",
            UserRole::Other(raw) => raw,
        }
    }
}

impl From<String> for UserRole {
    fn from(raw: String) -> Self {
        UserRole::parse(&raw)
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_wire().to_string()
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Payload for `POST /usuarios`; the only payload that carries a password
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCreateRequest {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub rut: String,
    pub email: String,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "rol")]
    pub role: UserRole,
    #[serde(rename = "especialidad", skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(rename = "activo")]
    pub active: bool,
    #[serde(rename = "contrasena")]
    pub password: String,
}

/// Payload for `PUT /usuarios/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdateRequest {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "apellido", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rut: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefono", default, deserialize_with = "crate::clearable", skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(rename = "rol", skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(rename = "especialidad", default, deserialize_with = "crate::clearable", skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Option<String>>,
    #[serde(rename = "activo", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl UserUpdateRequest {
    pub fn set_active(active: bool) -> Self {
        Self {
            active: Some(active),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserListResponse {
    #[serde(rename = "usuarios", default)]
    pub users: Vec<UserAccount>,
    #[serde(default)]
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_parse_and_wire() {
        assert_eq!(UserRole::parse("Médico"), UserRole::Physician);
        assert_eq!(UserRole::parse("administrador"), UserRole::Admin);
        assert_eq!(UserRole::parse("Soporte TI"), UserRole::ItSupport);
        assert_eq!(UserRole::parse("auditor"), UserRole::Other("auditor".to_string()));

        for role in UserRole::KNOWN {
            assert_eq!(UserRole::parse(role.as_wire()), role);
        }
    }

    #[test]
    fn test_user_account_defaults_active_when_missing() {
        let json = r#"{"id_usuario": 5, "nombre": "Ana", "apellido": "Martínez", "rol": "enfermero"}"#;
        let user: UserAccount = serde_json::from_str(json).unwrap();
        assert!(user.active);
        assert_eq!(user.role, UserRole::Nurse);
        assert_eq!(user.full_name(), "Ana Martínez");
    }

    #[test]
    fn test_update_request_never_carries_password() {
        let value = serde_json::to_value(UserUpdateRequest::set_active(false)).unwrap();
        assert_eq!(value, serde_json::json!({ "activo": false }));
        assert!(value.get("contrasena").is_none());
    }
}
