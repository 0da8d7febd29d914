// ============================================================================
// ADMIN VIEWMODEL - Subida de dataset + lanzamiento del import
// ============================================================================
// Dos operaciones manuales, nunca encadenadas. Cada resultado sustituye al
// mensaje anterior.
// ============================================================================

use yew::Callback;
use crate::services::{ApiError, ImportApi};
use crate::stores::{AdminAction, AdminOperation, StatusMessage};

pub const SELECT_FILE_MESSAGE: &str = "Select a file first";
pub const RELOGIN_HINT: &str = "Log out and log in again";

/// Texto de error; en 401/403 añade la vía de recuperación (re-login).
fn failure(prefix: &str, err: &ApiError) -> StatusMessage {
    if err.is_unauthorized() {
        StatusMessage::error(format!("{}: {}. {}", prefix, err, RELOGIN_HINT))
    } else {
        StatusMessage::error(format!("{}: {}", prefix, err))
    }
}

pub struct AdminViewModel;

impl AdminViewModel {
    /// Comprobación local previa a cualquier request.
    pub fn require_file<F>(file: Option<F>) -> Result<F, StatusMessage> {
        file.ok_or_else(|| StatusMessage::error(SELECT_FILE_MESSAGE))
    }

    /// Sube el fichero elegido. Sin fichero devuelve el mensaje de validación
    /// sin llamar al backend.
    pub async fn upload<A: ImportApi>(api: &A, file: Option<&A::File>) -> StatusMessage {
        let file = match Self::require_file(file) {
            Ok(file) => file,
            Err(status) => return status,
        };
        match api.upload(file).await {
            Ok(resp) => {
                log::info!("✅ Upload completado");
                StatusMessage::success(format!("Uploaded: {}", resp.summary()))
            }
            Err(e) => {
                log::error!("❌ Upload fallido: {}", e);
                failure("Upload failed", &e)
            }
        }
    }

    pub async fn run_import<A: ImportApi>(api: &A) -> StatusMessage {
        match api.trigger_import().await {
            Ok(payload) => {
                log::info!("✅ Import lanzado");
                StatusMessage::success(format!("Import: {}", payload))
            }
            Err(e) => {
                log::error!("❌ Import fallido: {}", e);
                failure("Import failed", &e)
            }
        }
    }

    /// Valida y, si hay fichero, lanza el upload en segundo
    /// plano. Devuelve si se hizo request.
    pub fn start_upload<A>(api: A, file: Option<A::File>, dispatch: Callback<AdminAction>) -> bool
    where
        A: ImportApi + 'static,
        A::File: 'static,
    {
        let file = match Self::require_file(file) {
            Ok(file) => file,
            Err(status) => {
                dispatch.emit(AdminAction::Rejected(status));
                return false;
            }
        };

        dispatch.emit(AdminAction::Started(AdminOperation::Upload, StatusMessage::info("Uploading...")));
        wasm_bindgen_futures::spawn_local(async move {
            let status = Self::upload(&api, Some(&file)).await;
            dispatch.emit(AdminAction::Finished(AdminOperation::Upload, status));
        });
        true
    }

    pub fn start_import<A>(api: A, dispatch: Callback<AdminAction>)
    where
        A: ImportApi + 'static,
    {
        dispatch.emit(AdminAction::Started(AdminOperation::Import, StatusMessage::info("Starting import...")));
        wasm_bindgen_futures::spawn_local(async move {
            let status = Self::run_import(&api).await;
            dispatch.emit(AdminAction::Finished(AdminOperation::Import, status));
        });
    }
}
