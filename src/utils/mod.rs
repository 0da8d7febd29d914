// Utils compartidos

pub mod constants;
pub mod storage;
pub mod geo;
pub mod format;
pub mod leaflet_ffi;

pub use constants::*;
pub use storage::{BrowserStorage, LocalStorageBackend, MemoryStorage, StorageBackend};
pub use geo::{parse_wkt_point, GeoPoint};
pub use format::{format_duration, format_start_time};
