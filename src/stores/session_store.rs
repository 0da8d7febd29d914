// ============================================================================
// SESSION STORE - Única fuente de verdad de "quién está logueado"
// ============================================================================
// Un solo registro JSON bajo una clave. Cada lectura va al storage; nadie
// guarda copias entre renders.
// ============================================================================

use crate::models::Session;
use crate::utils::constants::STORAGE_KEY_SESSION;
use crate::utils::storage::{BrowserStorage, StorageBackend};

#[derive(Clone, Debug)]
pub struct SessionStore<B: StorageBackend = BrowserStorage> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, STORAGE_KEY_SESSION)
    }

    pub fn with_key(backend: B, key: &str) -> Self {
        Self {
            backend,
            key: key.to_string(),
        }
    }

    /// Sesión actual. Datos ausentes o corruptos se leen como sesión vacía.
    pub fn read(&self) -> Session {
        let Some(raw) = self.backend.get_raw(&self.key) else {
            return Session::default();
        };
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => session,
            Err(e) => {
                log::warn!("⚠️ Sesión guardada ilegible, se ignora: {}", e);
                Session::default()
            }
        }
    }

    /// Guarda el registro completo con una sola escritura.
    pub fn write(&self, session: &Session) -> Result<(), String> {
        let json = serde_json::to_string(session)
            .map_err(|e| format!("Error serializing session: {}", e))?;
        self.backend.set_raw(&self.key, &json)
    }

    /// Equivale a escribir una sesión vacía: se borra la clave.
    pub fn clear(&self) -> Result<(), String> {
        self.backend.remove(&self.key)
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.read().bearer_token().map(str::to_string)
    }
}

impl SessionStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage::detect())
    }
}

impl<B: StorageBackend> PartialEq for SessionStore<B> {
    // Dos handles son el mismo store si apuntan a la misma clave; los datos
    // se releen siempre.
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::utils::storage::MemoryStorage;

    fn store() -> (SessionStore<MemoryStorage>, MemoryStorage) {
        let backend = MemoryStorage::new();
        (SessionStore::new(backend.clone()), backend)
    }

    #[test]
    fn empty_storage_reads_as_logged_out() {
        let (store, _) = store();
        assert_eq!(store.read(), Session::default());
        assert!(!store.read().is_authenticated());
    }

    #[test]
    fn write_then_read_round_trips() {
        let (store, _) = store();
        let sessions = [
            Session::new("abc123", Role::Admin, "admin"),
            Session::new("t", Role::User, "pilot"),
            Session { token: Some("only-token".into()), role: None, username: None },
            Session::default(),
        ];
        for session in sessions {
            store.write(&session).unwrap();
            assert_eq!(store.read(), session);
        }
    }

    #[test]
    fn malformed_data_reads_as_empty_session() {
        let (store, backend) = store();
        for garbage in ["{not json", "\u{0}\u{1}", "42", "[]", r#"{"token":"t","role":"root"}"#] {
            backend.set_raw(STORAGE_KEY_SESSION, garbage).unwrap();
            assert_eq!(store.read(), Session::default(), "{garbage:?}");
        }
    }

    #[test]
    fn reads_record_written_by_other_clients() {
        let (store, backend) = store();
        backend
            .set_raw(STORAGE_KEY_SESSION, r#"{"token":"x","role":"user","username":"u"}"#)
            .unwrap();
        assert_eq!(store.read(), Session::new("x", Role::User, "u"));
    }

    #[test]
    fn clear_logs_out() {
        let (store, backend) = store();
        store.write(&Session::new("t", Role::Admin, "a")).unwrap();
        store.clear().unwrap();
        assert_eq!(backend.get_raw(STORAGE_KEY_SESSION), None);
        assert_eq!(store.read(), Session::default());
        assert_eq!(store.bearer_token(), None);
    }
}
