// ============================================================================
// ACCESS GATE - Decide qué puede ver el visitante antes de renderizar
// ============================================================================
// Función pura (sesión, rol requerido) -> veredicto. NO es un control de
// seguridad: el rol lo guarda el propio cliente. El backend vuelve a
// comprobar la autorización en cada operación protegida.
// ============================================================================

use crate::models::{Role, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    RedirectToLogin,
    Forbidden { required: Role },
}

/// - sin token: `RedirectToLogin`, sea cual sea el rol requerido
/// - rol requerido y distinto del de la sesión: `Forbidden`
/// - en otro caso `Allow`
pub fn evaluate(session: &Session, required_role: Option<Role>) -> Verdict {
    if !session.is_authenticated() {
        return Verdict::RedirectToLogin;
    }
    match required_role {
        Some(required) if session.role != Some(required) => Verdict::Forbidden { required },
        _ => Verdict::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [Option<Role>; 3] = [None, Some(Role::Admin), Some(Role::User)];

    #[test]
    fn no_token_redirects_for_any_requirement() {
        let sessions = [
            Session::default(),
            Session { token: None, role: Some(Role::Admin), username: Some("admin".into()) },
            Session { token: Some(String::new()), role: Some(Role::Admin), username: None },
        ];
        for session in &sessions {
            for required in REQUIRED {
                assert_eq!(evaluate(session, required), Verdict::RedirectToLogin);
            }
        }
    }

    #[test]
    fn user_role_is_forbidden_from_admin() {
        let session = Session::new("t", Role::User, "pilot");
        assert_eq!(evaluate(&session, Some(Role::Admin)), Verdict::Forbidden { required: Role::Admin });
        assert_eq!(evaluate(&session, Some(Role::User)), Verdict::Allow);
    }

    #[test]
    fn missing_role_is_forbidden_when_one_is_required() {
        let session = Session { token: Some("t".into()), role: None, username: None };
        assert_eq!(evaluate(&session, Some(Role::Admin)), Verdict::Forbidden { required: Role::Admin });
        assert_eq!(evaluate(&session, None), Verdict::Allow);
    }

    #[test]
    fn admin_is_allowed() {
        let session = Session::new("t", Role::Admin, "admin");
        assert_eq!(evaluate(&session, Some(Role::Admin)), Verdict::Allow);
        assert_eq!(evaluate(&session, None), Verdict::Allow);
    }
}
