// ============================================================================
// LOGIN VIEW - Credenciales o token manual
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;
use crate::hooks::use_auth;

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let auth = use_auth();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let token_ref = use_node_ref();

    let on_credentials = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let login = auth.login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            login.emit((input_value(&username_ref), input_value(&password_ref)));
        })
    };

    let on_token = {
        let token_ref = token_ref.clone();
        let login_with_token = auth.login_with_token.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            login_with_token.emit(input_value(&token_ref));
        })
    };

    let pending = auth.state.pending;

    html! {
        <div class="login-screen">
            <div class="login-container">
                <h1>{"Sign in"}</h1>

                if let Some(error) = &auth.state.error {
                    <div class="error">{error.clone()}</div>
                }

                <form class="login-form" onsubmit={on_credentials}>
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input type="text" id="username" name="username" autocomplete="username" ref={username_ref} />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input type="password" id="password" name="password" autocomplete="current-password" ref={password_ref} />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={pending}>
                        { if pending { "Signing in..." } else { "Log in" } }
                    </button>
                </form>

                <hr />

                <form class="token-form" onsubmit={on_token}>
                    <div class="form-group">
                        <label for="token">{"Access token"}</label>
                        <input type="text" id="token" name="token" placeholder="Paste a token" ref={token_ref} />
                    </div>
                    <button type="submit" class="btn" disabled={pending}>{"Use token"}</button>
                </form>
            </div>
        </div>
    }
}
