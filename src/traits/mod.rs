//! Capability traits consumed generically by the core.
//!
//! - [`ErrorDetail`]: name-and-message view the serialization surface requires
//! - [`IntoOutcome`]: ergonomic bridge from `std::result::Result`

mod error_detail;
mod into_outcome;

pub use error_detail::ErrorDetail;
pub use into_outcome::IntoOutcome;
