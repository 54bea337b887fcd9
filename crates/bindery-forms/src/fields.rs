//! Leaf binders
//!
//! Each binder here converts one optional text value into a typed value.
//! Absent input is treated like empty input; wrap a binder in
//! [`optional`](crate::optional) or [`required`](crate::required) to give
//! emptiness its own meaning.

pub mod checked;
pub mod choice;
pub mod custom;
pub mod date;
pub mod email;
pub mod ignored;
pub mod number;
pub mod text;

pub use checked::{Checked, boolean, checked};
pub use choice::{Choice, Choices, enumeration};
pub use custom::{Parsed, binding};
pub use date::{DateBinder, date};
pub use email::{Email, email};
pub use ignored::{Ignored, ignored};
pub use number::{Number, number};
pub use text::{Text, not_empty_text, text};
