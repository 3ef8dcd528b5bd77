mod avatar_source_http;

pub use avatar_source_http::*;
