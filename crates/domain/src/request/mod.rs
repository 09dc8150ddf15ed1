//! Outgoing HTTP request types

mod header;
mod method;
mod spec;

pub use header::{APPLICATION_JSON, Header, Headers};
pub use method::HttpMethod;
pub use spec::HttpRequest;
