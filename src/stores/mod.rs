pub mod session_store;
pub mod dashboard_store;
pub mod admin_store;

pub use session_store::SessionStore;
pub use dashboard_store::{DashboardAction, DashboardStore, FetchState};
pub use admin_store::{AdminAction, AdminOperation, AdminStore, StatusKind, StatusMessage};
