// ============================================================================
// ROUTES - Tabla de rutas de la SPA
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::ProtectedRoute;
use crate::models::Role;
use crate::views::{AdminView, DashboardView, LoginView, NotFoundView};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Login => html! { <LoginView /> },
        Route::Dashboard => html! { <DashboardView /> },
        Route::Admin => html! {
            <ProtectedRoute required_role={Some(Role::Admin)}>
                <AdminView />
            </ProtectedRoute>
        },
        Route::NotFound => html! { <NotFoundView /> },
    }
}
