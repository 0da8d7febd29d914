use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
    pub map_config: MapConfig,
    pub dashboard_config: DashboardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // Vacío = mismo origen (el dev server hace de proxy hacia :8000)
            backend_url_development: String::new(),
            backend_url_production: String::new(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_seconds: 30,
            map_config: MapConfig::default(),
            dashboard_config: DashboardConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 55.75,
            default_center_lng: 37.61,
            default_zoom: 6.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub flights_limit: u32,
    pub top_regions_limit: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            flights_limit: 200,
            top_regions_limit: 10,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("30").parse().unwrap_or(30),
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .unwrap_or("55.75").parse().unwrap_or(55.75),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .unwrap_or("37.61").parse().unwrap_or(37.61),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .unwrap_or("6").parse().unwrap_or(6.0),
            },
            dashboard_config: DashboardConfig {
                flights_limit: option_env!("FLIGHTS_LIMIT")
                    .unwrap_or("200").parse().unwrap_or(200),
                top_regions_limit: option_env!("TOP_REGIONS_LIMIT")
                    .unwrap_or("10").parse().unwrap_or(10),
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual (sin `/` final)
    pub fn backend_url(&self) -> &str {
        let url = match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        };
        url.trim_end_matches('/')
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn request_timeout_ms(&self) -> u32 {
        self.network_timeout_seconds.max(1) * 1000
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_expectations() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url(), "");
        assert_eq!(config.request_timeout_ms(), 30_000);
        assert_eq!(config.dashboard_config.flights_limit, 200);
        assert_eq!(config.dashboard_config.top_regions_limit, 10);
        assert_eq!(config.map_config.default_zoom, 6.0);
    }

    #[test]
    fn production_url_is_selected_and_trimmed() {
        let config = AppConfig {
            environment: "production".into(),
            backend_url_production: "https://bas.example.org/".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.backend_url(), "https://bas.example.org");
    }

    #[test]
    fn zero_timeout_is_clamped() {
        let config = AppConfig { network_timeout_seconds: 0, ..AppConfig::default() };
        assert_eq!(config.request_timeout_ms(), 1000);
    }
}
