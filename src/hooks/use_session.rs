// ============================================================================
// USE SESSION HOOK - Sesión actual (solo lectura)
// ============================================================================

use yew::prelude::*;
use crate::models::Session;
use super::session_context::use_session_context;

/// Sesión actual, releída del storage en cada render.
#[hook]
pub fn use_session() -> Session {
    // La revisión del contexto solo fuerza el re-render; el dato sale del storage
    use_session_context().session()
}
