pub mod convert;
pub mod traits;
pub mod types;
pub mod validation;

#[cfg(feature = "async")]
pub mod async_ext;
