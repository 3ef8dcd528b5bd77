//! The `logger` module is a thin wrapper over `tracing-subscriber` that requires manual verification.
//! See `bin/logger_demo.rs` for a test binary demonstrating filter reloading.

mod logger;
pub use logger::*;

pub use tracing::{debug, error, info, trace, warn};
