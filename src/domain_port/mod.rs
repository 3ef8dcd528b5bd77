mod avatar_source;
mod avatar_view;

pub use avatar_source::*;
pub use avatar_view::*;
