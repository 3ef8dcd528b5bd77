mod avatar;
mod element;
mod user;

pub use avatar::*;
pub use element::*;
pub use user::*;
