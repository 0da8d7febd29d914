// ============================================================================
// ADMIN VIEW - Subida de dataset + import manual
// ============================================================================

use web_sys::{File, HtmlInputElement};
use yew::prelude::*;
use crate::hooks::{use_admin, use_auth};
use crate::routes::Route;
use crate::stores::StatusKind;

/// Destino tras el logout desde el panel admin.
pub const AFTER_LOGOUT: Route = Route::Login;

fn selected_file(node: &NodeRef) -> Option<File> {
    node.cast::<HtmlInputElement>()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

#[function_component(AdminView)]
pub fn admin_view() -> Html {
    let admin = use_admin();
    let auth = use_auth();
    let file_ref = use_node_ref();
    let busy = admin.store.is_busy();

    let on_upload = {
        let file_ref = file_ref.clone();
        let upload = admin.upload.clone();
        Callback::from(move |_: MouseEvent| upload.emit(selected_file(&file_ref)))
    };

    let on_import = {
        let import = admin.import.clone();
        Callback::from(move |_: MouseEvent| import.emit(()))
    };

    let on_logout = {
        let logout = auth.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(AFTER_LOGOUT))
    };

    let status = admin.store.status.as_ref().map(|status| {
        let class = match status.kind {
            StatusKind::Info => "status status-info",
            StatusKind::Success => "status status-success",
            StatusKind::Error => "status status-error",
        };
        html! { <pre class={class}>{status.text.clone()}</pre> }
    });

    html! {
        <div class="admin-panel">
            <div class="admin-toolbar">
                <h1>{"Data upload"}</h1>
                <button class="btn" onclick={on_logout}>{"Logout"}</button>
            </div>

            <div class="form-group">
                <label for="dataset">{"Dataset (.ndjson, .json)"}</label>
                <input type="file" id="dataset" accept=".ndjson,.json" ref={file_ref} disabled={busy} />
            </div>

            <div class="admin-actions">
                <button class="btn btn-primary" onclick={on_upload} disabled={busy}>{"Upload"}</button>
                <button class="btn" onclick={on_import} disabled={busy}>{"Run import"}</button>
            </div>

            { for status }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logout_from_admin_goes_to_login() {
        assert_eq!(AFTER_LOGOUT, Route::Login);
        assert_ne!(AFTER_LOGOUT, crate::components::header::AFTER_LOGOUT);
    }
}
