use crate::models::{Role, Session};
use crate::stores::SessionStore;
use crate::utils::constants::MANUAL_TOKEN_USERNAME;
use crate::utils::storage::StorageBackend;
use super::api_error::ApiError;
use super::backend::AuthApi;

/// Login contra `POST /login` y persistencia de la sesión resultante.
pub async fn login_with_credentials<A, B>(
    api: &A,
    store: &SessionStore<B>,
    username: &str,
    password: &str,
) -> Result<Session, ApiError>
where
    A: AuthApi,
    B: StorageBackend,
{
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::Validation("Enter username and password".to_string()));
    }

    let grant = api.authenticate(username, password).await?;
    let session = Session::new(grant.token, grant.role, username);
    store
        .write(&session)
        .map_err(|e| ApiError::Validation(format!("Could not save session: {}", e)))?;
    Ok(session)
}

/// Abre sesión con un token pegado, sin contactar al backend.
///
/// La sesión se guarda como `admin`; el backend sigue decidiendo si el
/// token sirve para algo.
pub fn login_with_token<B: StorageBackend>(
    store: &SessionStore<B>,
    token: &str,
) -> Result<Session, ApiError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ApiError::Validation("Enter a token".to_string()));
    }

    log::warn!("🔑 Sesión abierta con token manual; se asume rol admin");
    let session = Session::new(token, Role::Admin, MANUAL_TOKEN_USERNAME);
    store
        .write(&session)
        .map_err(|e| ApiError::Validation(format!("Could not save session: {}", e)))?;
    Ok(session)
}

pub fn logout<B: StorageBackend>(store: &SessionStore<B>) {
    if let Err(e) = store.clear() {
        log::error!("❌ Error limpiando sesión: {}", e);
    }
    log::info!("👋 Logout");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use crate::models::AuthGrant;
    use crate::utils::storage::MemoryStorage;

    struct FakeAuth {
        result: Result<AuthGrant, ApiError>,
        calls: Cell<usize>,
    }

    impl FakeAuth {
        fn new(result: Result<AuthGrant, ApiError>) -> Self {
            Self { result, calls: Cell::new(0) }
        }
    }

    impl AuthApi for FakeAuth {
        async fn authenticate(&self, _username: &str, _password: &str) -> Result<AuthGrant, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    fn store() -> SessionStore<MemoryStorage> {
        SessionStore::new(MemoryStorage::new())
    }

    #[tokio::test]
    async fn credentials_login_writes_session() {
        let store = store();
        let api = FakeAuth::new(Ok(AuthGrant { token: "jwt".into(), role: Role::User }));
        let session = login_with_credentials(&api, &store, " pilot ", "pw").await.unwrap();
        assert_eq!(session, Session::new("jwt", Role::User, "pilot"));
        assert_eq!(store.read(), session);
    }

    #[tokio::test]
    async fn failed_login_leaves_session_untouched() {
        let store = store();
        store.write(&Session::new("old", Role::Admin, "admin")).unwrap();
        let api = FakeAuth::new(Err(ApiError::Http { status: 401, message: "Incorrect username or password".into() }));
        let err = login_with_credentials(&api, &store, "a", "b").await.unwrap_err();
        assert_eq!(err.to_string(), "Incorrect username or password");
        assert_eq!(store.read().token.as_deref(), Some("old"));
    }

    #[tokio::test]
    async fn empty_credentials_never_reach_the_backend() {
        let store = store();
        let api = FakeAuth::new(Ok(AuthGrant { token: "t".into(), role: Role::Admin }));
        let err = login_with_credentials(&api, &store, "  ", "pw").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(api.calls.get(), 0);
    }

    #[test]
    fn manual_token_is_admin() {
        let store = store();
        let session = login_with_token(&store, "abc123").unwrap();
        assert_eq!(session, Session::new("abc123", Role::Admin, "admin"));
        assert_eq!(store.read(), session);
    }

    #[test]
    fn empty_manual_token_is_rejected() {
        let store = store();
        let err = login_with_token(&store, "   ").unwrap_err();
        assert_eq!(err.to_string(), "Enter a token");
        assert!(!store.read().is_authenticated());
    }

    #[test]
    fn logout_clears() {
        let store = store();
        login_with_token(&store, "abc").unwrap();
        logout(&store);
        assert_eq!(store.read(), Session::default());
    }
}
