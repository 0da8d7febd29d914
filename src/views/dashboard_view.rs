// ============================================================================
// DASHBOARD VIEW - Vuelos (lista + mapa) y top regiones
// ============================================================================
// Pública: sin access gate. Cada sección se pinta cuando llega su respuesta.
// ============================================================================

use yew::prelude::*;
use crate::components::{FlightsList, MapView, RegionsList};
use crate::hooks::use_dashboard;

#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    let dashboard = use_dashboard();
    let store = &*dashboard.store;
    let busy = store.flights.is_loading() || store.regions.is_loading();

    let on_refresh = {
        let refresh = dashboard.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    html! {
        <div class="dashboard">
            <div class="dashboard-toolbar">
                <h1>{"Flights overview"}</h1>
                <button class="btn" onclick={on_refresh} disabled={busy}>{"Refresh"}</button>
            </div>
            <div class="dashboard-grid">
                <MapView flights={store.flights().to_vec()} />
                <RegionsList state={store.regions.clone()} />
                <FlightsList state={store.flights.clone()} />
            </div>
        </div>
    }
}
