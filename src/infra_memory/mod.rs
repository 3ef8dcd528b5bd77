mod avatar_source_fake;
mod avatar_view_memory;

pub use avatar_source_fake::*;
pub use avatar_view_memory::*;
