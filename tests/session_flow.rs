use bas_analytics::guards::{evaluate, Verdict};
use bas_analytics::models::{Role, Session};
use bas_analytics::services::{login_with_token, logout};
use bas_analytics::stores::SessionStore;
use bas_analytics::utils::storage::MemoryStorage;

#[test]
fn manual_token_opens_the_admin_panel() {
    let store = SessionStore::new(MemoryStorage::new());
    login_with_token(&store, "abc123").unwrap();

    let session = store.read();
    assert_eq!(session, Session::new("abc123", Role::Admin, "admin"));
    assert_eq!(evaluate(&session, Some(Role::Admin)), Verdict::Allow);
    assert_eq!(store.bearer_token().as_deref(), Some("abc123"));
}

#[test]
fn user_session_is_kept_out_of_admin() {
    let store = SessionStore::new(MemoryStorage::new());
    store.write(&Session::new("t", Role::User, "pilot")).unwrap();

    let session = store.read();
    assert_eq!(evaluate(&session, None), Verdict::Allow);
    assert_eq!(
        evaluate(&session, Some(Role::Admin)),
        Verdict::Forbidden { required: Role::Admin }
    );
}

#[test]
fn logout_sends_back_to_login() {
    let store = SessionStore::new(MemoryStorage::new());
    login_with_token(&store, "abc123").unwrap();
    logout(&store);
    assert_eq!(evaluate(&store.read(), Some(Role::Admin)), Verdict::RedirectToLogin);
}

#[test]
fn separate_stores_share_the_backend() {
    let storage = MemoryStorage::new();
    let writer = SessionStore::new(storage.clone());
    let reader = SessionStore::new(storage);
    login_with_token(&writer, "abc123").unwrap();
    assert!(reader.read().is_admin());
}

#[test]
fn logout_in_another_tab_closes_the_gate_on_next_read() {
    use bas_analytics::utils::storage::StorageBackend;
    use bas_analytics::utils::constants::STORAGE_KEY_SESSION;

    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage.clone());
    login_with_token(&store, "abc123").unwrap();
    assert_eq!(evaluate(&store.read(), Some(Role::Admin)), Verdict::Allow);

    // Otra pestaña borra la clave sin pasar por este store
    storage.remove(STORAGE_KEY_SESSION).unwrap();
    assert_eq!(evaluate(&store.read(), Some(Role::Admin)), Verdict::RedirectToLogin);
}
