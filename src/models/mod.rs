pub mod session;
pub mod flight;
pub mod region;
pub mod auth;
pub mod admin;

pub use session::{Role, Session};
pub use flight::{Flight, ListQuery};
pub use region::RegionEntry;
pub use auth::{AuthGrant, LoginResponse};
pub use admin::UploadResponse;
