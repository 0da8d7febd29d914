use serde::{Deserialize, Serialize};
use super::session::Role;

/// Payload crudo de `POST /login`. El backend ha respondido tanto con
/// `access_token` (estilo OAuth2) como con `token`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl LoginResponse {
    pub fn token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.token.as_deref().filter(|t| !t.is_empty()))
    }

    /// Rol declarado. Sin rol se asume admin, que es lo que implica el
    /// backend actual al no enviar roles.
    pub fn role(&self) -> Role {
        self.role.as_deref().map(Role::from_claim).unwrap_or(Role::Admin)
    }
}

/// Resultado de un `authenticate` correcto.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AuthGrant {
    pub token: String,
    pub role: Role,
}
