// ============================================================================
// PROTECTED ROUTE - Aplica el veredicto del access gate
// ============================================================================
// Solo comodidad de UI: el backend vuelve a comprobar cada llamada.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;
use crate::guards::{evaluate, Verdict};
use crate::hooks::use_session;
use crate::models::Role;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    #[prop_or_default]
    pub required_role: Option<Role>,
    pub children: Children,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let session = use_session();

    match evaluate(&session, props.required_role) {
        Verdict::Allow => html! { <>{props.children.clone()}</> },
        Verdict::RedirectToLogin => {
            log::info!("🔒 Sin sesión, redirigiendo a /login");
            html! { <Redirect<Route> to={Route::Login} /> }
        }
        Verdict::Forbidden { required } => {
            log::warn!("⛔ Acceso denegado: se requiere rol {}", required);
            html! {
                <div class="forbidden">
                    <h2>{"Access denied"}</h2>
                    <p>{format!("This page requires the {} role.", required)}</p>
                    <Link<Route> to={Route::Dashboard}>{"Back to dashboard"}</Link<Route>>
                </div>
            }
        }
    }
}
