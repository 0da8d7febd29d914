// ============================================================================
// ADMIN STORE - Estado del panel de importación
// ============================================================================

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminOperation {
    Upload,
    Import,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Única línea de estado bajo los botones de admin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, text: text.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AdminStore {
    pub status: Option<StatusMessage>,
    pub in_flight: Option<AdminOperation>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AdminAction {
    Started(AdminOperation, StatusMessage),
    Finished(AdminOperation, StatusMessage),
    /// Resultado que nunca llegó a la red (p. ej. sin fichero).
    Rejected(StatusMessage),
}

impl AdminStore {
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn apply(&self, action: AdminAction) -> Self {
        // Cada resultado sustituye al mensaje anterior.
        match action {
            AdminAction::Started(op, status) => Self {
                status: Some(status),
                in_flight: Some(op),
            },
            AdminAction::Finished(op, status) => {
                if self.in_flight != Some(op) {
                    log::warn!("⚠️ Fin de {:?} sin operación en curso", op);
                }
                Self { status: Some(status), in_flight: None }
            }
            AdminAction::Rejected(status) => Self {
                status: Some(status),
                in_flight: self.in_flight,
            },
        }
    }
}

impl Reducible for AdminStore {
    type Action = AdminAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_replace_each_other() {
        let store = AdminStore::default()
            .apply(AdminAction::Started(AdminOperation::Upload, StatusMessage::info("Uploading...")))
            .apply(AdminAction::Finished(AdminOperation::Upload, StatusMessage::success("Uploaded: a.ndjson")))
            .apply(AdminAction::Started(AdminOperation::Import, StatusMessage::info("Starting import...")))
            .apply(AdminAction::Finished(AdminOperation::Import, StatusMessage::error("Import failed: boom")));
        assert_eq!(store.status, Some(StatusMessage::error("Import failed: boom")));
        assert!(!store.is_busy());
    }

    #[test]
    fn busy_while_operation_runs() {
        let store = AdminStore::default()
            .apply(AdminAction::Started(AdminOperation::Upload, StatusMessage::info("Uploading...")));
        assert!(store.is_busy());
        assert_eq!(store.in_flight, Some(AdminOperation::Upload));
    }

    #[test]
    fn rejection_only_changes_status() {
        let store = AdminStore::default().apply(AdminAction::Rejected(StatusMessage::error("Select a file first")));
        assert!(!store.is_busy());
        assert!(store.status.as_ref().unwrap().is_error());
    }
}
