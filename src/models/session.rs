use serde::{Deserialize, Serialize};

// ============================================================================
// SESSION - Credencial persistida en el cliente
// ============================================================================

/// Rol declarado por el cliente. Solo orientativo: el backend lo revalida.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Traduce el rol que manda el backend. Un rol desconocido recibe el
    /// de menos privilegios.
    pub fn from_claim(claim: &str) -> Self {
        match claim.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registro guardado bajo `bas_auth`.
///
/// Una sesión sin token (o con token vacío) es "sin login",
/// digan lo que digan `role` y `username`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub username: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Role, username: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            role: Some(role),
            username: Some(username.into()),
        }
    }

    /// Token utilizable como bearer, si lo hay.
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer_token().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role == Some(Role::Admin)
    }

    /// Nombre para el header; si falta, el del rol.
    pub fn display_name(&self) -> String {
        match (&self.username, self.role) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(role)) => role.to_string(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_not_authenticated() {
        let session = Session {
            token: Some(String::new()),
            role: Some(Role::Admin),
            username: Some("admin".into()),
        };
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn serializes_with_lowercase_role() {
        let session = Session::new("abc", Role::Admin, "ops");
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(json, r#"{"token":"abc","role":"admin","username":"ops"}"#);
    }

    #[test]
    fn missing_fields_decode_as_absent() {
        let session: Session = serde_json::from_str(r#"{"token":"t"}"#).unwrap();
        assert_eq!(session.token.as_deref(), Some("t"));
        assert_eq!(session.role, None);
        assert_eq!(session.username, None);
    }

    #[test]
    fn unknown_backend_role_is_user() {
        assert_eq!(Role::from_claim("ADMIN"), Role::Admin);
        assert_eq!(Role::from_claim("operator"), Role::User);
    }

    #[test]
    fn display_name_falls_back_to_role() {
        let mut session = Session::new("t", Role::Admin, "");
        assert_eq!(session.display_name(), "admin");
        session.username = Some("pilot".into());
        assert_eq!(session.display_name(), "pilot");
    }
}
