use serde::{Deserialize, Serialize};

/// Respuesta de `POST /api/v1/upload`. Solo se conoce `path`; el resto se
/// conserva para mostrarlo tal cual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UploadResponse {
    /// Texto para la línea de estado: el path guardado o el payload entero.
    pub fn summary(&self) -> String {
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => path.to_string(),
            _ => {
                let mut all = self.extra.clone();
                if let Some(path) = &self.path {
                    all.insert("path".into(), serde_json::Value::String(path.clone()));
                }
                serde_json::Value::Object(all).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_path() {
        let resp: UploadResponse =
            serde_json::from_str(r#"{"path":"/data/uploads/flights.ndjson","size":12}"#).unwrap();
        assert_eq!(resp.summary(), "/data/uploads/flights.ndjson");
    }

    #[test]
    fn summary_without_path_dumps_payload() {
        let resp: UploadResponse = serde_json::from_str(r#"{"status":"queued"}"#).unwrap();
        assert_eq!(resp.summary(), r#"{"status":"queued"}"#);
    }
}
