use serde::{Deserialize, Serialize};
use crate::utils::geo::{parse_wkt_point, GeoPoint};

/// Un vuelo UAV tal como lo devuelve `GET /api/v1/flights`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: i64,
    #[serde(default)]
    pub flight_id: Option<String>,
    #[serde(default)]
    pub uav_type: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<f64>,
    /// Posición de inicio en WKT, p. ej. `POINT(37.61 55.75)`
    #[serde(default)]
    pub start_geom_wkt: Option<String>,
}

impl Flight {
    /// Posición de inicio, si el WKT existe y es válido.
    pub fn start_point(&self) -> Option<GeoPoint> {
        parse_wkt_point(self.start_geom_wkt.as_deref())
    }

    /// Etiqueta para popups del mapa y tablas.
    pub fn label(&self) -> String {
        self.flight_id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

/// Paginación común a los endpoints de listas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ListQuery {
    pub fn limit(limit: u32) -> Self {
        Self { limit: Some(limit), offset: None }
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Pares del query string, sin los valores vacíos.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }
}
