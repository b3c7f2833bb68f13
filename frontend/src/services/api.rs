use gloo::net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    ErrorResponse, GeneralReport, LoginCredentials, LoginResponse, NotificationId,
    NotificationListResponse, Patient, PatientCreateRequest, PatientListResponse,
    PatientUpdateRequest, RoomCleaningListResponse, RoomCleaningState, RoomCleaningUpdateRequest,
    Surgery, SurgeryCreateRequest, SurgeryListQuery, SurgeryListResponse, SurgeryUpdateRequest,
    UserAccount, UserCreateRequest, UserListResponse, UserUpdateRequest,
};

/// Failures talking to the backend
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("No se pudo conectar con el servidor: {0}")]
    Network(String),
    #[error("El servidor respondió {status}: {message}")]
    Backend { status: u16, message: String },
    #[error("No autorizado: {message}")]
    Unauthorized { message: String },
    #[error("No se pudo preparar la solicitud: {0}")]
    Encode(String),
    #[error("Respuesta inesperada del servidor: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text to show the user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Backend { message, .. } | ApiError::Unauthorized { message } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Build the error for a non-success response
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = error_message_from_body(status, body);
        if status == 401 {
            ApiError::Unauthorized { message }
        } else {
            ApiError::Backend { status, message }
        }
    }
}

/// User message for an error response: the backend's `detail` when present,
/// otherwise the raw body, otherwise a generic line naming the status.
pub fn error_message_from_body(status: u16, body: &str) -> String {
    if let Ok(response) = serde_json::from_str::<ErrorResponse>(body) {
        if let Some(message) = response.message() {
            return message;
        }
    }

    let body = body.trim();
    if !body.is_empty() && !body.starts_with('{') {
        return body.to_string();
    }

    format!("Error del servidor (HTTP {})", status)
}

/// API client for the operating-room backend
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Same client, sending `token` as a bearer credential
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn dispatch(&self, request: Request) -> Result<Response, ApiError> {
        let url = request.url();
        let response = request.send().await.map_err(|e| {
            log::error!("Request to {} failed: {}", url, e);
            ApiError::Network(e.to_string())
        })?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::warn!("{} answered {}", url, status);
        Err(ApiError::from_status(status, &body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::get(&self.url(path)))
            .query(query.iter().map(|(key, value)| (*key, value.as_str())))
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.dispatch(request).await?;
        Self::decode(response).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.dispatch(request).await?;
        Self::decode(response).await
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let request = self
            .authorize(builder)
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        self.dispatch(request).await.map(|_| ())
    }

    /// Exchange credentials for a bearer token
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
        let form = web_sys::UrlSearchParams::new()
            .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
        for (key, value) in credentials.form_fields() {
            form.append(key, value);
        }

        let request = Request::post(&self.url("/auth/login"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.dispatch(request).await?;
        Self::decode(response).await
    }

    pub async fn list_patients(&self, skip: u32, limit: u32) -> Result<PatientListResponse, ApiError> {
        self.get("/pacientes", &page(skip, limit)).await
    }

    pub async fn get_patient(&self, id: i64) -> Result<Patient, ApiError> {
        self.get(&format!("/pacientes/{}", id), &[]).await
    }

    pub async fn create_patient(&self, request: &PatientCreateRequest) -> Result<Patient, ApiError> {
        self.send_json(Request::post(&self.url("/pacientes")), request).await
    }

    pub async fn update_patient(
        &self,
        id: i64,
        request: &PatientUpdateRequest,
    ) -> Result<Patient, ApiError> {
        self.send_json(Request::put(&self.url(&format!("/pacientes/{}", id))), request)
            .await
    }

    pub async fn delete_patient(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(Request::delete(&self.url(&format!("/pacientes/{}", id))))
            .await
    }

    pub async fn list_users(&self, skip: u32, limit: u32) -> Result<UserListResponse, ApiError> {
        self.get("/usuarios", &page(skip, limit)).await
    }

    pub async fn get_user(&self, id: i64) -> Result<UserAccount, ApiError> {
        self.get(&format!("/usuarios/{}", id), &[]).await
    }

    pub async fn create_user(&self, request: &UserCreateRequest) -> Result<UserAccount, ApiError> {
        self.send_json(Request::post(&self.url("/usuarios")), request).await
    }

    pub async fn update_user(
        &self,
        id: i64,
        request: &UserUpdateRequest,
    ) -> Result<UserAccount, ApiError> {
        self.send_json(Request::put(&self.url(&format!("/usuarios/{}", id))), request)
            .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(Request::delete(&self.url(&format!("/usuarios/{}", id))))
            .await
    }

    pub async fn list_surgeries(&self, query: &SurgeryListQuery) -> Result<SurgeryListResponse, ApiError> {
        self.get("/cirugias", &query.to_query_pairs()).await
    }

    pub async fn get_surgery(&self, id: i64) -> Result<Surgery, ApiError> {
        self.get(&format!("/cirugias/{}", id), &[]).await
    }

    pub async fn create_surgery(&self, request: &SurgeryCreateRequest) -> Result<Surgery, ApiError> {
        self.send_json(Request::post(&self.url("/cirugias")), request).await
    }

    pub async fn update_surgery(
        &self,
        id: i64,
        request: &SurgeryUpdateRequest,
    ) -> Result<Surgery, ApiError> {
        self.send_json(Request::put(&self.url(&format!("/cirugias/{}", id))), request)
            .await
    }

    pub async fn delete_surgery(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(Request::delete(&self.url(&format!("/cirugias/{}", id))))
            .await
    }

    pub async fn list_room_cleaning(&self) -> Result<RoomCleaningListResponse, ApiError> {
        self.get("/limpieza/quirofanos/estados", &[]).await
    }

    pub async fn get_room_cleaning(&self, room_name: &str) -> Result<RoomCleaningState, ApiError> {
        self.get(&room_status_path(room_name), &[]).await
    }

    pub async fn update_room_cleaning(
        &self,
        room_name: &str,
        request: &RoomCleaningUpdateRequest,
    ) -> Result<RoomCleaningState, ApiError> {
        self.send_json(Request::put(&self.url(&room_status_path(room_name))), request)
            .await
    }

    pub async fn general_report(&self) -> Result<GeneralReport, ApiError> {
        self.get("/reportes/general", &[]).await
    }

    pub async fn list_notifications(&self, limit: u32) -> Result<NotificationListResponse, ApiError> {
        self.get("/notificaciones", &[("limit", limit.min(100).to_string())])
            .await
    }

    /// `PUT /notificaciones/{id}/leida`; the backend answers 204
    pub async fn mark_notification_read(&self, id: &NotificationId) -> Result<(), ApiError> {
        let path = format!("/notificaciones/{}/leida", encode_segment(&id.to_string()));
        self.send_empty(Request::put(&self.url(&path))).await
    }
}

fn page(skip: u32, limit: u32) -> Vec<(&'static str, String)> {
    vec![("skip", skip.to_string()), ("limit", limit.to_string())]
}

fn room_status_path(room_name: &str) -> String {
    format!("/limpieza/quirofanos/{}/estado", encode_segment(room_name))
}

/// Percent-encode one path segment (room names carry spaces and accents)
fn encode_segment(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_detail_string() {
        let body = r#"{"detail": "Cirugía con ID 99 no encontrada"}"#;
        assert_eq!(error_message_from_body(404, body), "Cirugía con ID 99 no encontrada");
    }

    #[test]
    fn test_error_message_joins_validation_entries() {
        let body = r#"{"detail": [{"loc": ["body", "rut"], "msg": "formato inválido"},
                                   {"loc": ["body", "nombre"], "msg": "campo requerido"}]}"#;
        assert_eq!(
            error_message_from_body(422, body),
            "formato inválido; campo requerido"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_text_then_status() {
        assert_eq!(
            error_message_from_body(502, "Bad Gateway"),
            "Bad Gateway"
        );
        assert_eq!(error_message_from_body(500, ""), "Error del servidor (HTTP 500)");
        assert_eq!(
            error_message_from_body(500, r#"{"error": "oops"}"#),
            "Error del servidor (HTTP 500)"
        );
    }

    #[test]
    fn test_unauthorized_status_maps_to_variant() {
        let error = ApiError::from_status(401, r#"{"detail": "Email o contraseña incorrectos"}"#);
        assert!(error.is_unauthorized());
        assert_eq!(error.user_message(), "Email o contraseña incorrectos");

        let error = ApiError::from_status(409, r#"{"detail": "RUT duplicado"}"#);
        assert_eq!(
            error,
            ApiError::Backend {
                status: 409,
                message: "RUT duplicado".to_string()
            }
        );
    }

    #[test]
    fn test_network_error_message_is_descriptive() {
        let error = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(
            error.user_message(),
            "No se pudo conectar con el servidor: Failed to fetch"
        );
    }

    #[test]
    fn test_client_trims_base_url_and_tracks_token() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert!(!client.is_authenticated());
        assert_eq!(client.url("/cirugias"), "http://localhost:8000/cirugias");

        let client = client.with_token(Some("abc".to_string()));
        assert!(client.is_authenticated());
    }
}
