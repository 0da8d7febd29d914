// ============================================================================
// API ERROR - Error uniforme para todas las llamadas al backend
// ============================================================================

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Rechazado en local; no se envió nada.
    Validation(String),
    /// Respuesta no-2xx. `message` es el `detail` del backend si lo hay.
    Http { status: u16, message: String },
    Network(String),
    Timeout { seconds: u32 },
    Parse(String),
}

impl ApiError {
    /// Construye el error de una respuesta fallida. FastAPI pone el motivo
    /// en `detail`, como string o como lista de errores de validación.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let message = extract_detail(body).unwrap_or_else(|| {
            if status_text.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                format!("HTTP {}: {}", status, status_text.trim())
            }
        });
        ApiError::Http { status, message }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 401/403: sesión ausente o caducada, o sin el rol necesario.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status_code(), Some(401) | Some(403))
    }
}

fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let field = ["detail", "message", "error"]
        .iter()
        .find_map(|key| value.get(*key))?;
    match field {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Array(items) => {
            let msgs: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    other => other.get("msg").and_then(Value::as_str).map(str::to_string),
                })
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        Value::Null | Value::String(_) => None,
        other => Some(other.to_string()),
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "{}", msg),
            ApiError::Http { message, .. } => write!(f, "{}", message),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Timeout { seconds } => write!(f, "Request timed out after {}s", seconds),
            ApiError::Parse(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
