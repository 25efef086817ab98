//! Fluent, path-tracking validation that accumulates errors.
//!
//! This module provides the [`Validator`] rule-builder, which walks a
//! `serde_json::Value` and collects every rule violation it finds — with the full
//! dotted/bracketed path of each failing location — rather than stopping at the
//! first. The terminal [`Validator::validate`] call converts the accumulated
//! errors into an [`Outcome`](crate::Outcome).
//!
//! # Key Components
//!
//! - [`Validator`] - Chainable rule-builder over a borrowed value
//! - [`PathStack`] / [`PathSegment`] - Path tracking for error attribution
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Validator;
//! use serde_json::json;
//!
//! let signup = json!({ "email": "user@example.com", "age": 34 });
//! let result = Validator::new(&signup)
//!     .property("email", |email| email.required().email())
//!     .property("age", |age| age.is_number().min(18.0))
//!     .validate();
//!
//! assert!(result.is_success());
//! ```
pub mod core;
pub mod path;

pub use self::core::Validator;
pub use self::path::{PathSegment, PathStack};
