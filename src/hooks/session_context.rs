// ============================================================================
// SESSION CONTEXT - Compartir SessionStore + ApiClient entre componentes
// ============================================================================
// El contexto NO guarda la sesión: guarda el store y un contador de
// revisión. Al hacer login/logout se incrementa y los consumidores vuelven a
// leer el storage.
// ============================================================================

use yew::prelude::*;
use crate::models::Session;
use crate::services::ApiClient;
use crate::stores::SessionStore;

#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub store: SessionStore,
    pub api: ApiClient,
    pub revision: u32,
    pub on_change: Callback<()>,
}

impl SessionContext {
    /// Lectura fresca del storage.
    pub fn session(&self) -> Session {
        self.store.read()
    }

    /// Llamar tras escribir o limpiar la sesión.
    pub fn notify_changed(&self) {
        self.on_change.emit(());
    }
}

/// Provider component que envuelve la app
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let store = use_memo((), |_| SessionStore::browser());
    let revision = use_state(|| 0u32);

    let on_change = {
        let revision = revision.clone();
        Callback::from(move |_| revision.set(revision.wrapping_add(1)))
    };

    let context = SessionContext {
        store: (*store).clone(),
        api: ApiClient::new((*store).clone()),
        revision: *revision,
        on_change,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

/// Contexto de sesión, o uno local si se renderiza fuera del provider.
#[hook]
pub fn use_session_context() -> SessionContext {
    let fallback_store = use_memo((), |_| SessionStore::browser());
    match use_context::<SessionContext>() {
        Some(context) => context,
        None => {
            log::warn!("⚠️ SessionContext no encontrado, usando store local");
            SessionContext {
                store: (*fallback_store).clone(),
                api: ApiClient::new((*fallback_store).clone()),
                revision: 0,
                on_change: Callback::noop(),
            }
        }
    }
}
