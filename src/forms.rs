//! Form binding module.
//!
//! Typed binding of flat form data, with validation and redisplay support.
//!
//! # Examples
//!
//! ```rust
//! use bindery::forms::{FieldBinder, FieldPath, number};
//!
//! let age = number().bind(Some("42"), &FieldPath::root().child("age"));
//! assert_eq!(age.unwrap(), 42);
//! ```

#[cfg(feature = "forms")]
pub use bindery_forms::*;
