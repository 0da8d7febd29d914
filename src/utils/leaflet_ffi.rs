// ============================================================================
// LEAFLET FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para funciones JS definidas en index.html - Sin estado
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Crea (o recrea) el mapa Leaflet dentro de `container_id`.
    #[wasm_bindgen(js_name = initFlightMap)]
    pub fn init_flight_map(container_id: &str, center_lat: f64, center_lng: f64, zoom: f64);

    /// Reemplaza todos los marcadores. `markers_json` es un array de
    /// `{id, latitude, longitude, title}`; `title` se inserta como texto, nunca como HTML.
    #[wasm_bindgen(js_name = setFlightMarkers)]
    pub fn set_flight_markers(markers_json: &str, center_lat: f64, center_lng: f64);

    #[wasm_bindgen(js_name = destroyFlightMap)]
    pub fn destroy_flight_map();
}
