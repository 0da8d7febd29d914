// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Cada request relee la sesión, añade el Bearer si hay token y corre con un
// timeout fijo. Sin reintentos ni caché: los errores suben tal cual.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{AbortController, AbortSignal, File, FormData, UrlSearchParams};

use crate::config::CONFIG;
use crate::models::{AuthGrant, Flight, ListQuery, LoginResponse, RegionEntry, UploadResponse};
use crate::stores::SessionStore;
use crate::utils::storage::{BrowserStorage, StorageBackend};
use super::api_error::ApiError;
use super::backend::{AuthApi, FlightsApi, ImportApi};

/// Cliente API - SOLO comunicación HTTP
#[derive(Clone, Debug)]
pub struct ApiClient<B: StorageBackend + Clone = BrowserStorage> {
    base_url: String,
    session: SessionStore<B>,
    timeout_ms: u32,
}

impl<B: StorageBackend + Clone> PartialEq for ApiClient<B> {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
            && self.timeout_ms == other.timeout_ms
            && self.session == other.session
    }
}

impl<B: StorageBackend + Clone> ApiClient<B> {
    /// Cliente apuntando al backend configurado.
    pub fn new(session: SessionStore<B>) -> Self {
        Self::with_base_url(CONFIG.backend_url(), session, CONFIG.request_timeout_ms())
    }

    pub fn with_base_url(base_url: &str, session: SessionStore<B>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            timeout_ms,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Valor del header Authorization para la sesión actual, si hay token.
    pub fn authorization(&self) -> Option<String> {
        self.session.bearer_token().map(|t| format!("Bearer {}", t))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    /// Envía la request con deadline y decodifica el JSON.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: Option<JsValue>,
    ) -> Result<T, ApiError> {
        let (deadline, signal) = Deadline::arm(self.timeout_ms)?;
        let builder = self.authorize(builder).abort_signal(Some(&signal));
        let request = match body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request.send().await.map_err(|e| deadline.network_error(e))?;
        let response = check_status(response).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| deadline.parse_error(e))
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(status, &status_text, &body);
    log::warn!("❌ HTTP {} -> {}", status, err);
    Err(err)
}

/// Aborta la request en curso cuando salta el timer. Al soltarlo se
/// cancela el timer.
struct Deadline {
    _timer: Timeout,
    fired: Rc<Cell<bool>>,
    timeout_ms: u32,
}

impl Deadline {
    fn arm(timeout_ms: u32) -> Result<(Self, AbortSignal), ApiError> {
        let controller = AbortController::new()
            .map_err(|e| ApiError::Network(format!("AbortController unavailable: {:?}", e)))?;
        let signal = controller.signal();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let timer = Timeout::new(timeout_ms, move || {
            flag.set(true);
            controller.abort();
        });
        Ok((
            Self {
                _timer: timer,
                fired,
                timeout_ms,
            },
            signal,
        ))
    }

    fn timeout(&self) -> ApiError {
        ApiError::Timeout {
            seconds: (self.timeout_ms / 1000).max(1),
        }
    }

    fn network_error(&self, err: gloo_net::Error) -> ApiError {
        if self.fired.get() {
            self.timeout()
        } else {
            ApiError::Network(err.to_string())
        }
    }

    fn parse_error(&self, err: gloo_net::Error) -> ApiError {
        if self.fired.get() {
            self.timeout()
        } else {
            ApiError::Parse(err.to_string())
        }
    }
}

fn js_error(context: &str, err: JsValue) -> ApiError {
    ApiError::Network(format!("{}: {:?}", context, err))
}

impl<B: StorageBackend + Clone> AuthApi for ApiClient<B> {
    async fn authenticate(&self, username: &str, password: &str) -> Result<AuthGrant, ApiError> {
        log::info!("🔐 Login para usuario: {}", username);

        let form = UrlSearchParams::new().map_err(|e| js_error("URLSearchParams", e))?;
        form.append("username", username);
        form.append("password", password);

        let builder = Request::post(&self.url("/login"))
            .header("Content-Type", "application/x-www-form-urlencoded");
        let response: LoginResponse = self.fetch_json(builder, Some(form.into())).await?;

        let token = response
            .token()
            .ok_or_else(|| ApiError::Parse("login response has no token".to_string()))?
            .to_string();
        let role = response.role();
        log::info!("✅ Login correcto ({}, rol {})", username, role);
        Ok(AuthGrant { token, role })
    }
}

impl<B: StorageBackend + Clone> FlightsApi for ApiClient<B> {
    async fn list_flights(&self, query: ListQuery) -> Result<Vec<Flight>, ApiError> {
        let builder = Request::get(&self.url("/api/v1/flights")).query(query.to_pairs());
        let flights: Vec<Flight> = self.fetch_json(builder, None).await?;
        log::info!("✈️ {} vuelos recibidos", flights.len());
        Ok(flights)
    }

    async fn top_regions(&self, query: ListQuery) -> Result<Vec<RegionEntry>, ApiError> {
        let builder = Request::get(&self.url("/api/v1/top-regions")).query(query.to_pairs());
        let regions: Vec<RegionEntry> = self.fetch_json(builder, None).await?;
        log::info!("🗺️ {} regiones recibidas", regions.len());
        Ok(regions)
    }
}

impl<B: StorageBackend + Clone> ImportApi for ApiClient<B> {
    type File = File;

    async fn upload(&self, file: &File) -> Result<UploadResponse, ApiError> {
        log::info!("📤 Subiendo {} ({} bytes)", file.name(), file.size());

        let form = FormData::new().map_err(|e| js_error("FormData", e))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| js_error("FormData.append", e))?;

        // Sin Content-Type: el navegador añade el boundary del multipart
        let builder = Request::post(&self.url("/api/v1/upload"));
        self.fetch_json(builder, Some(form.into())).await
    }

    async fn trigger_import(&self) -> Result<Value, ApiError> {
        log::info!("📥 Lanzando import_from_upload");
        let builder = Request::post(&self.url("/api/v1/import_from_upload"));
        self.fetch_json(builder, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, Session};
    use crate::utils::storage::MemoryStorage;

    fn client() -> (ApiClient<MemoryStorage>, SessionStore<MemoryStorage>) {
        let store = SessionStore::new(MemoryStorage::new());
        (ApiClient::with_base_url("http://localhost:8000/", store.clone(), 30_000), store)
    }

    #[test]
    fn builds_urls_without_double_slash() {
        let (api, _) = client();
        assert_eq!(api.url("/api/v1/flights"), "http://localhost:8000/api/v1/flights");
    }

    #[test]
    fn authorization_follows_the_current_session() {
        let (api, store) = client();
        assert_eq!(api.authorization(), None);

        store.write(&Session::new("abc123", Role::Admin, "admin")).unwrap();
        assert_eq!(api.authorization().as_deref(), Some("Bearer abc123"));

        store.clear().unwrap();
        assert_eq!(api.authorization(), None);
    }

    #[test]
    fn empty_token_sends_no_header() {
        let (api, store) = client();
        store
            .write(&Session { token: Some(String::new()), role: Some(Role::Admin), username: None })
            .unwrap();
        assert_eq!(api.authorization(), None);
    }
}
