//! Wire types shared between the operating-room front-end and its REST backend.
//!
//! Field names on the wire are the backend's (Spanish); the Rust side uses
//! English names and maps them with serde renames. Unknown fields are
//! ignored and unknown enumeration values are kept verbatim so that additive
//! backend changes never break a screen.

pub mod auth;
pub mod cleaning;
pub mod error;
pub mod notification;
pub mod patient;
pub mod report;
pub mod surgery;
pub mod user;

use serde::{Deserialize, Deserializer};

pub use auth::*;
pub use cleaning::*;
pub use error::*;
pub use notification::*;
pub use patient::*;
pub use report::*;
pub use surgery::*;
pub use user::*;

/// Normalize a raw enumeration value for comparison: trimmed, lowercase,
/// accents folded, and spaces/underscores turned into hyphens.
pub fn wire_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            'á' | 'Á' => 'a',
            'é' | 'É' => 'e',
            'í' | 'Í' => 'i',
            'ó' | 'Ó' => 'o',
            'ú' | 'Ú' | 'ü' | 'Ü' => 'u',
            'ñ' | 'Ñ' => 'n',
            ' ' | '_' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Deserializer for update fields that can be cleared.
///
/// In a `PUT` payload a missing key keeps the stored value while `null`
/// clears it, so these fields are `Option<Option<T>>`: `None` is omitted and
/// `Some(None)` is sent as `null`. Used with `#[serde(default)]`.
pub fn clearable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_key_folds_case_accents_and_separators() {
        assert_eq!(wire_key("  En Pabellón "), "en-pabellon");
        assert_eq!(wire_key("LIMPIEZA_PENDIENTE"), "limpieza-pendiente");
        assert_eq!(wire_key("programada"), "programada");
    }
}
