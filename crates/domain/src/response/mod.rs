//! Incoming HTTP response types

mod spec;

pub use spec::{HttpResponse, preview};
