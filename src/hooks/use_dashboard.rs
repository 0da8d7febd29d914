// ============================================================================
// USE DASHBOARD HOOK - Vuelos + top regiones
// ============================================================================
// Cada activación (montaje o refresh) abre una generación nueva; las
// respuestas de generaciones anteriores se descartan en el store.
// ============================================================================

use yew::prelude::*;
use crate::config::CONFIG;
use crate::stores::DashboardStore;
use crate::viewmodels::DashboardViewModel;
use super::session_context::use_session_context;

pub struct UseDashboardHandle {
    pub store: UseReducerHandle<DashboardStore>,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_dashboard() -> UseDashboardHandle {
    let context = use_session_context();
    let store = use_reducer(DashboardStore::default);
    let generation = use_mut_ref(|| 0u64);

    let refresh = {
        let api = context.api.clone();
        let dispatcher = store.dispatcher();
        let dispatch = Callback::from(move |action| dispatcher.dispatch(action));
        let generation = generation.clone();
        Callback::from(move |_| {
            let next = {
                let mut counter = generation.borrow_mut();
                *counter += 1;
                *counter
            };
            DashboardViewModel::activate(api.clone(), next, &CONFIG.dashboard_config, dispatch.clone());
        })
    };

    // Carga inicial al montar
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    UseDashboardHandle { store, refresh }
}
