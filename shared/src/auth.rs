use serde::{Deserialize, Serialize};

/// Credentials typed into the login screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    /// OAuth2 password-form fields expected by `POST /auth/login`.
    /// The backend reads the account key from `username`.
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [("username", self.email.trim()), ("password", &self.password)]
    }
}

/// Response of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Account summary; shape varies across backend versions
    #[serde(rename = "usuario", default)]
    pub user: Option<serde_json::Value>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl LoginResponse {
    /// Display name from the optional account summary
    pub fn display_name(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        ["nombre_completo", "nombre", "email"]
            .iter()
            .find_map(|key| user.get(*key).and_then(|value| value.as_str()))
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_trim_email_only() {
        let credentials = LoginCredentials {
            email: "  admin@clinicabak.cl ".to_string(),
            password: " secreto ".to_string(),
        };

        assert_eq!(
            credentials.form_fields(),
            [("username", "admin@clinicabak.cl"), ("password", " secreto ")]
        );
    }

    #[test]
    fn test_login_response_defaults_and_display_name() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(response.token_type, "bearer");
        assert_eq!(response.display_name(), None);

        let response: LoginResponse = serde_json::from_str(
            r#"{"access_token": "abc", "token_type": "bearer",
                "usuario": {"nombre_completo": "Usuario Demo", "rol": "administrador"}}"#,
        )
        .unwrap();
        assert_eq!(response.display_name().as_deref(), Some("Usuario Demo"));
    }
}
