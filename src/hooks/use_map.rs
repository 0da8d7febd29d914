// ============================================================================
// USE MAP HOOK - Ciclo de vida del mapa Leaflet
// ============================================================================
// Hook nativo de Yew - Delega lógica al ViewModel
// ============================================================================

use yew::prelude::*;
use crate::config::CONFIG;
use crate::models::Flight;
use crate::utils::leaflet_ffi::destroy_flight_map;
use crate::viewmodels::MapViewModel;

/// Crea el mapa al montar, lo destruye al desmontar y redibuja los
/// marcadores cada vez que cambia la lista de vuelos.
#[hook]
pub fn use_flight_map(container_id: &'static str, flights: Vec<Flight>) {
    use_effect_with((), move |_| {
        MapViewModel::initialize_map(container_id, &CONFIG.map_config);
        || {
            log::debug!("🗺️ Destruyendo mapa");
            destroy_flight_map();
        }
    });

    use_effect_with(flights, |flights| {
        let markers = MapViewModel::prepare_markers(flights);
        MapViewModel::update_markers(&markers, &CONFIG.map_config);
        || ()
    });
}
