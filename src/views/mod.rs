pub mod login_view;
pub mod dashboard_view;
pub mod admin_view;
pub mod not_found;

pub use login_view::LoginView;
pub use dashboard_view::DashboardView;
pub use admin_view::AdminView;
pub use not_found::NotFoundView;
