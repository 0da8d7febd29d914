pub mod access_gate;

pub use access_gate::{evaluate, Verdict};
