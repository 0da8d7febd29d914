// ============================================================================
// MAP VIEWMODEL - Lógica de negocio del mapa
// ============================================================================
// Preparación de marcadores + llamadas al FFI de Leaflet
// ============================================================================

use serde::Serialize;
use crate::config::MapConfig;
use crate::models::Flight;
use crate::utils::geo::GeoPoint;
use crate::utils::leaflet_ffi::{init_flight_map, set_flight_markers};

/// Estructura para enviar al mapa
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MapMarker {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
}

/// ViewModel del mapa
pub struct MapViewModel;

impl MapViewModel {
    /// Un marcador por vuelo con punto de inicio válido. Los vuelos sin él
    /// se omiten.
    pub fn prepare_markers(flights: &[Flight]) -> Vec<MapMarker> {
        flights
            .iter()
            .filter_map(|flight| {
                let point = flight.start_point()?;
                Some(MapMarker {
                    id: flight.id,
                    latitude: point.latitude,
                    longitude: point.longitude,
                    title: flight.label(),
                })
            })
            .collect()
    }

    /// Posición del primer marcador, o la configurada por defecto.
    pub fn center(markers: &[MapMarker], config: &MapConfig) -> GeoPoint {
        markers
            .first()
            .map(|m| GeoPoint::new(m.latitude, m.longitude))
            .unwrap_or_else(|| GeoPoint::new(config.default_center_lat, config.default_center_lng))
    }

    pub fn initialize_map(container_id: &str, config: &MapConfig) {
        log::info!("🗺️ Inicializando mapa en #{}", container_id);
        init_flight_map(
            container_id,
            config.default_center_lat,
            config.default_center_lng,
            config.default_zoom,
        );
    }

    pub fn update_markers(markers: &[MapMarker], config: &MapConfig) {
        let center = Self::center(markers, config);
        match serde_json::to_string(markers) {
            Ok(json) => {
                log::debug!("📍 {} marcadores en el mapa", markers.len());
                set_flight_markers(&json, center.latitude, center.longitude);
            }
            Err(e) => log::error!("❌ Error serializando marcadores: {}", e),
        }
    }
}
