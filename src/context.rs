//! Application Context
//!
//! Shared state provided via Leptos Context API: the API client, the
//! persisted session, and the authenticated flag the session gate
//! renders from.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::session::Session;

#[derive(Clone)]
pub struct AppContext {
    /// Backend client; carries the bearer token once logged in.
    pub api: RwSignal<ApiClient>,
    /// Persisted session (token + display preference).
    pub session: Session,
    /// Computed once at startup from token presence.
    authenticated: RwSignal<bool>,
}

impl AppContext {
    pub fn new(session: Session, base_url: &str) -> Self {
        let token = session.token();
        let authenticated = RwSignal::new(token.is_some());
        let api = RwSignal::new(ApiClient::with_token(base_url, token));
        Self {
            api,
            session,
            authenticated,
        }
    }

    pub fn authenticated(&self) -> RwSignal<bool> {
        self.authenticated
    }

    /// Raised by the login form after the backend returned a token.
    pub fn login_succeeded(&self, token: String) {
        self.session.store_token(&token);
        self.api.update(|api| api.set_token(token.clone()));
        self.authenticated.set(true);
    }

    /// Clears the stored token and returns to the auth view.
    pub fn logout(&self) {
        self.session.clear_token();
        self.api.update(|api| api.clear_token());
        self.authenticated.set(false);
    }
}

/// Get the app context from any component below `App`.
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStorage, Session};

    const BASE: &str = "http://localhost:4000/api";

    #[test]
    fn test_startup_flag_reflects_stored_token() {
        let session = Session::new(MemoryStorage::default());
        assert!(!AppContext::new(session.clone(), BASE)
            .authenticated()
            .get_untracked());

        session.store_token("existing");
        assert!(AppContext::new(session, BASE).authenticated().get_untracked());
    }

    #[test]
    fn test_login_succeeded_then_logout_drive_the_gate() {
        let session = Session::new(MemoryStorage::default());
        let ctx = AppContext::new(session.clone(), BASE);
        assert!(!ctx.authenticated().get_untracked());

        ctx.login_succeeded("tok-1".to_string());
        assert!(ctx.authenticated().get_untracked());
        assert_eq!(session.token().as_deref(), Some("tok-1"));

        ctx.logout();
        assert!(!ctx.authenticated().get_untracked());
        assert_eq!(session.token(), None);
    }
}
