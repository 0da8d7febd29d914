pub mod header;
pub mod protected_route;
pub mod flights_list;
pub mod regions_list;
pub mod map_view;

pub use header::{Header, HeaderActions};
pub use protected_route::ProtectedRoute;
pub use flights_list::FlightsList;
pub use regions_list::RegionsList;
pub use map_view::MapView;
