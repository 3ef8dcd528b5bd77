mod avatar_service_impl;

pub use avatar_service_impl::*;
