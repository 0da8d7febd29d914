pub mod session_context;
pub mod use_session;
pub mod use_auth;
pub mod use_dashboard;
pub mod use_admin;
pub mod use_map;

pub use session_context::{use_session_context, SessionContext, SessionContextProvider};
pub use use_session::use_session;
pub use use_auth::{use_auth, AuthUiState, UseAuthHandle};
pub use use_dashboard::{use_dashboard, UseDashboardHandle};
pub use use_admin::{use_admin, UseAdminHandle};
pub use use_map::use_flight_map;
