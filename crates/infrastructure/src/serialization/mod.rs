//! JSON helpers shared by the fixture reader and the report renderer.

mod json;

pub use json::{SerializationError, from_json, from_json_bytes, to_json_stable};
