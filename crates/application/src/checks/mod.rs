//! Named check producers.
//!
//! Each producer returns an ordered `Vec<CheckResult>` and never
//! short-circuits: every check it names is always present in the output.

mod contract;
mod response;
mod state_diff;

pub use contract::ContractChecker;
pub use response::{content_type_check, decode_check, status_check, transport_failure};
pub use state_diff::{PRICE_TOLERANCE, StateDiffVerifier};
