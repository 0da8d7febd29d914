// ============================================================================
// HEADER - Marca + acciones según sesión
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;
use crate::hooks::use_auth;
use crate::models::Session;
use crate::routes::Route;

/// Destino tras el logout desde el header.
pub const AFTER_LOGOUT: Route = Route::Dashboard;

/// Acciones que ofrece el header según la sesión.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderActions {
    Guest,
    SignedIn { logout_label: String },
    Admin { logout_label: String },
}

impl HeaderActions {
    pub fn for_session(session: &Session) -> Self {
        if !session.is_authenticated() {
            return HeaderActions::Guest;
        }
        if session.is_admin() {
            let label = match session.username.as_deref().filter(|u| !u.is_empty()) {
                Some(username) => format!("Log out ({})", username),
                None => "Log out".to_string(),
            };
            HeaderActions::Admin { logout_label: label }
        } else {
            HeaderActions::SignedIn { logout_label: "Log out".to_string() }
        }
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let auth = use_auth();
    let on_logout = {
        let logout = auth.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(AFTER_LOGOUT))
    };

    let actions = match HeaderActions::for_session(&auth.session) {
        HeaderActions::Guest => html! {
            <Link<Route> to={Route::Login} classes="btn btn-primary">{"Log in"}</Link<Route>>
        },
        HeaderActions::SignedIn { logout_label } => html! {
            <button class="btn" onclick={on_logout}>{logout_label}</button>
        },
        HeaderActions::Admin { logout_label } => html! {
            <>
                <Link<Route> to={Route::Admin} classes="btn btn-primary">{"Upload data"}</Link<Route>>
                <button class="btn" onclick={on_logout}>{logout_label}</button>
            </>
        },
    };

    html! {
        <header class="app-header">
            <Link<Route> to={Route::Dashboard} classes="brand">{"BAS Analytics"}</Link<Route>>
            <nav class="header-actions">{actions}</nav>
        </header>
    }
}
