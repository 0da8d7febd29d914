// ============================================================================
// USE AUTH HOOK - Login (credenciales / token manual) y logout
// ============================================================================
// Delega en auth_service; aquí solo estado de UI + navegación
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;
use crate::models::Session;
use crate::routes::Route;
use crate::services::auth_service;
use super::session_context::use_session_context;

#[derive(Clone, PartialEq, Default)]
pub struct AuthUiState {
    pub pending: bool,
    pub error: Option<String>,
}

pub struct UseAuthHandle {
    pub session: Session,
    pub state: UseStateHandle<AuthUiState>,
    /// (usuario, contraseña)
    pub login: Callback<(String, String)>,
    pub login_with_token: Callback<String>,
    /// Limpia la sesión y navega a la ruta indicada.
    pub logout: Callback<Route>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let context = use_session_context();
    let navigator = use_navigator();
    let state = use_state(AuthUiState::default);

    let login = {
        let context = context.clone();
        let navigator = navigator.clone();
        let state = state.clone();
        Callback::from(move |(username, password): (String, String)| {
            if state.pending {
                return;
            }
            state.set(AuthUiState { pending: true, error: None });

            let context = context.clone();
            let navigator = navigator.clone();
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::login_with_credentials(&context.api, &context.store, &username, &password).await {
                    Ok(session) => {
                        log::info!(
                            "✅ Login OK: {} ({})",
                            session.display_name(),
                            session.role.map(|r| r.as_str()).unwrap_or("-")
                        );
                        state.set(AuthUiState::default());
                        context.notify_changed();
                        if let Some(nav) = navigator {
                            nav.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Login fallido: {}", e);
                        state.set(AuthUiState { pending: false, error: Some(e.to_string()) });
                    }
                }
            });
        })
    };

    let login_with_token = {
        let context = context.clone();
        let navigator = navigator.clone();
        let state = state.clone();
        Callback::from(move |token: String| match auth_service::login_with_token(&context.store, &token) {
            Ok(_) => {
                state.set(AuthUiState::default());
                context.notify_changed();
                if let Some(nav) = &navigator {
                    nav.push(&Route::Admin);
                }
            }
            Err(e) => state.set(AuthUiState { pending: false, error: Some(e.to_string()) }),
        })
    };

    let logout = {
        let context = context.clone();
        Callback::from(move |target: Route| {
            auth_service::logout(&context.store);
            context.notify_changed();
            if let Some(nav) = &navigator {
                nav.push(&target);
            }
        })
    };

    UseAuthHandle {
        session: context.session(),
        state,
        login,
        login_with_token,
        logout,
    }
}
