// ============================================================================
// APP - Componente raíz
// ============================================================================
// SessionContextProvider > BrowserRouter > Header + Switch
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::Header;
use crate::hooks::SessionContextProvider;
use crate::routes::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionContextProvider>
            <BrowserRouter>
                <div class="app">
                    <Header />
                    <main class="app-main">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </SessionContextProvider>
    }
}
