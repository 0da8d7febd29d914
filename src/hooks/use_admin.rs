// ============================================================================
// USE ADMIN HOOK - Upload de dataset + import manual
// ============================================================================

use web_sys::File;
use yew::prelude::*;
use crate::stores::AdminStore;
use crate::viewmodels::AdminViewModel;
use super::session_context::use_session_context;

pub struct UseAdminHandle {
    pub store: UseReducerHandle<AdminStore>,
    pub upload: Callback<Option<File>>,
    pub import: Callback<()>,
}

#[hook]
pub fn use_admin() -> UseAdminHandle {
    let context = use_session_context();
    let store = use_reducer(AdminStore::default);

    let upload = {
        let api = context.api.clone();
        let store = store.clone();
        Callback::from(move |file: Option<File>| {
            if store.is_busy() {
                log::debug!("⏳ Operación admin en curso, upload ignorado");
                return;
            }
            let dispatcher = store.dispatcher();
            AdminViewModel::start_upload(
                api.clone(),
                file,
                Callback::from(move |action| dispatcher.dispatch(action)),
            );
        })
    };

    let import = {
        let api = context.api.clone();
        let store = store.clone();
        Callback::from(move |_| {
            if store.is_busy() {
                log::debug!("⏳ Operación admin en curso, import ignorado");
                return;
            }
            let dispatcher = store.dispatcher();
            AdminViewModel::start_import(
                api.clone(),
                Callback::from(move |action| dispatcher.dispatch(action)),
            );
        })
    };

    UseAdminHandle { store, upload, import }
}
