//! Fixture store access.

mod fixture_reader;

pub use fixture_reader::JsonFixtureReader;
