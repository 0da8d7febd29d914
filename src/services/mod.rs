pub mod api_error;
pub mod backend;
pub mod api_client;
pub mod auth_service;

pub use api_error::ApiError;
pub use backend::{AuthApi, FlightsApi, ImportApi};
pub use api_client::ApiClient;
pub use auth_service::{login_with_credentials, login_with_token, logout};
