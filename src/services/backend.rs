// ============================================================================
// BACKEND TRAITS - Capacidades del backend que consumen los ViewModels
// ============================================================================
// ApiClient las implementa contra HTTP; los tests usan fakes en memoria.
// ============================================================================

use serde_json::Value;
use crate::models::{AuthGrant, Flight, ListQuery, RegionEntry, UploadResponse};
use super::api_error::ApiError;

#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn authenticate(&self, username: &str, password: &str) -> Result<AuthGrant, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait FlightsApi {
    async fn list_flights(&self, query: ListQuery) -> Result<Vec<Flight>, ApiError>;
    async fn top_regions(&self, query: ListQuery) -> Result<Vec<RegionEntry>, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait ImportApi {
    /// Fichero elegido por el operador (`web_sys::File` en el navegador).
    type File;

    async fn upload(&self, file: &Self::File) -> Result<UploadResponse, ApiError>;
    async fn trigger_import(&self) -> Result<Value, ApiError>;
}
