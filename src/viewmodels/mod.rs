pub mod dashboard_viewmodel;
pub mod admin_viewmodel;
pub mod map_viewmodel;

pub use dashboard_viewmodel::DashboardViewModel;
pub use admin_viewmodel::AdminViewModel;
pub use map_viewmodel::{MapMarker, MapViewModel};
