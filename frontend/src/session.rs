//! Authentication state shared by every component.
//!
//! The bearer token lives in a `Session` held by a reducer at the root of the
//! app and handed down through a Yew context. Login and logout go through a
//! `TokenStore` so the token survives reloads.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::storage::{LocalStorage, Storage};
use shared::LoginResponse;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::services::api::{ApiClient, ApiError};

/// Local-storage key holding the bearer token
pub const TOKEN_KEY: &str = "authToken";

#[derive(Debug, thiserror::Error)]
pub enum TokenStoreError {
    #[error("No se pudo acceder al almacenamiento local: {0}")]
    Storage(String),
}

/// Where the bearer token is persisted
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), TokenStoreError>;
    fn clear(&self);
}

/// Browser local storage. The token is stored as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::raw()
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.trim().is_empty())
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        LocalStorage::raw()
            .set_item(TOKEN_KEY, token)
            .map_err(|e| TokenStoreError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) {
        if let Err(e) = LocalStorage::raw().remove_item(TOKEN_KEY) {
            log::warn!("Could not remove stored token: {:?}", e);
        }
    }
}

/// In-memory store, used where no browser storage exists
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub display_name: Option<String>,
}

pub enum SessionAction {
    LoggedIn {
        token: String,
        display_name: Option<String>,
    },
    LoggedOut,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::LoggedIn {
                token,
                display_name,
            } => Rc::new(Session {
                token: Some(token),
                display_name,
            }),
            SessionAction::LoggedOut => Rc::new(Session::default()),
        }
    }
}

impl Session {
    /// Session restored from a previously stored token
    pub fn restore(store: &dyn TokenStore) -> Self {
        let token = store.load();
        if token.is_some() {
            log::debug!("Restored stored session");
        }
        Self {
            token,
            display_name: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Persist a successful login and return the action that records it.
/// A storage failure only costs persistence across reloads.
pub fn begin_session(store: &dyn TokenStore, response: &LoginResponse) -> SessionAction {
    if let Err(e) = store.save(&response.access_token) {
        log::warn!("{}", e);
    }
    log::info!("Logged in");
    SessionAction::LoggedIn {
        token: response.access_token.clone(),
        display_name: response.display_name(),
    }
}

pub fn end_session(store: &dyn TokenStore) -> SessionAction {
    store.clear();
    log::info!("Logged out");
    SessionAction::LoggedOut
}

/// Value provided to the component tree
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    session: UseReducerHandle<Session>,
    config: Rc<AppConfig>,
}

impl SessionContext {
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// API client carrying the current token
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.config.api_base_url.clone()).with_token(self.session.token.clone())
    }

    pub fn login(&self, response: &LoginResponse) {
        self.session.dispatch(begin_session(&LocalStorageTokenStore, response));
    }

    pub fn logout(&self) {
        self.session.dispatch(end_session(&LocalStorageTokenStore));
    }

    /// Log a failed request and return the message to show. An expired or
    /// rejected token ends the session.
    pub fn report(&self, action: &str, error: &ApiError) -> String {
        log::error!("{} failed: {}", action, error);
        if error.is_unauthorized() && self.session.is_authenticated() {
            self.logout();
        }
        error.user_message()
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub config: AppConfig,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(|| Session::restore(&LocalStorageTokenStore));
    let config = use_memo(props.config.clone(), |config| config.clone());

    let context = SessionContext {
        session,
        config,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            { props.children.clone() }
        </ContextProvider<SessionContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_response(token: &str) -> LoginResponse {
        serde_json::from_value(serde_json::json!({
            "access_token": token,
            "token_type": "bearer",
            "usuario": { "nombre_completo": "Usuario Demo" }
        }))
        .unwrap()
    }

    #[test]
    fn test_login_persists_and_logout_clears() {
        let store = MemoryTokenStore::default();
        assert!(!Session::restore(&store).is_authenticated());

        let session = Rc::new(Session::default())
            .reduce(begin_session(&store, &login_response("tok-123")));
        assert_eq!(session.token.as_deref(), Some("tok-123"));
        assert_eq!(session.display_name.as_deref(), Some("Usuario Demo"));
        assert_eq!(store.load().as_deref(), Some("tok-123"));
        assert_eq!(Session::restore(&store).token.as_deref(), Some("tok-123"));

        let session = session.reduce(end_session(&store));
        assert!(!session.is_authenticated());
        assert_eq!(store.load(), None);
        assert!(!Session::restore(&store).is_authenticated());
    }

    struct BrokenStore;

    impl TokenStore for BrokenStore {
        fn load(&self) -> Option<String> {
            None
        }

        fn save(&self, _token: &str) -> Result<(), TokenStoreError> {
            Err(TokenStoreError::Storage("quota exceeded".to_string()))
        }

        fn clear(&self) {}
    }

    #[test]
    fn test_login_survives_storage_failure() {
        let session = Rc::new(Session::default())
            .reduce(begin_session(&BrokenStore, &login_response("tok")));
        assert!(session.is_authenticated());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_keeps_plain_token() {
        let store = LocalStorageTokenStore;
        store.clear();
        assert_eq!(store.load(), None);

        store.save("abc.def").unwrap();
        assert_eq!(LocalStorage::raw().get_item(TOKEN_KEY).unwrap().as_deref(), Some("abc.def"));
        assert_eq!(store.load().as_deref(), Some("abc.def"));

        store.clear();
        assert_eq!(store.load(), None);
    }
}
