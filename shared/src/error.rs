use serde::{Deserialize, Serialize};

/// Error body returned by the backend: `{"detail": ...}` where `detail` is
/// either a message or a list of field validation entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: serde_json::Value,
}

impl ErrorResponse {
    /// Human-readable message carried by `detail`, if any
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            serde_json::Value::String(message) if !message.trim().is_empty() => {
                Some(message.clone())
            }
            serde_json::Value::Array(entries) => {
                let messages: Vec<&str> = entries
                    .iter()
                    .filter_map(|entry| entry.get("msg").and_then(|msg| msg.as_str()))
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_string_detail() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"detail": "El RUT '1-9' ya está registrado para otro paciente."}"#)
                .unwrap();
        assert_eq!(
            body.message().as_deref(),
            Some("El RUT '1-9' ya está registrado para otro paciente.")
        );
    }

    #[test]
    fn test_message_from_validation_list() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"detail": [
                {"loc": ["body", "rut"], "msg": "string does not match regex", "type": "value_error"},
                {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            body.message().as_deref(),
            Some("string does not match regex; value is not a valid email address")
        );
    }

    #[test]
    fn test_message_keeps_detail_verbatim() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"detail": "  Quirófano ocupado\n"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("  Quirófano ocupado\n"));
    }

    #[test]
    fn test_message_absent_for_empty_or_other_shapes() {
        let body: ErrorResponse = serde_json::from_str(r#"{"detail": ""}"#).unwrap();
        assert_eq!(body.message(), None);
        let body: ErrorResponse = serde_json::from_str(r#"{"detail": " \t "}"#).unwrap();
        assert_eq!(body.message(), None);
        let body: ErrorResponse = serde_json::from_str(r#"{"detail": {"code": 3}}"#).unwrap();
        assert_eq!(body.message(), None);
    }
}
