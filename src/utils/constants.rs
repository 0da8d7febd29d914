/// Clave de `localStorage` donde vive la sesión `{token, role, username}`.
pub const STORAGE_KEY_SESSION: &str = "bas_auth";

/// Usuario que se guarda en sesiones abiertas con token pegado.
pub const MANUAL_TOKEN_USERNAME: &str = "admin";

/// Id DOM del contenedor de Leaflet.
pub const MAP_CONTAINER_ID: &str = "flight-map";
