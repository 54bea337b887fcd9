//! # Bindery
//!
//! Bidirectional binding between flat form submissions and typed Rust values.
//!
//! A submitted form is a flat mapping of names to optional strings
//! (`name`, `addr.city`, `tags[0]`). Bindery turns it into a typed value,
//! collecting every validation error with the path of the field it belongs to,
//! and turns typed values back into the same flat shape for redisplay.
//!
//! ## Feature Flags
//!
//! - `forms` (default) - Binders, mappings and the immutable form container
//! - `full` - All features enabled
//!
//! ## Quick Example
//!
//! ```rust
//! use bindery::{BeanMapping, Form, FormData, accessor, not_empty_text};
//!
//! #[derive(Debug, Default, Clone)]
//! struct Tag {
//!     label: String,
//! }
//!
//! let form = Form::new(BeanMapping::new(Tag::default).map_to(accessor!(Tag, label), not_empty_text()));
//!
//! let mut data = FormData::new();
//! data.insert("label".to_string(), Some("rust".to_string()));
//!
//! let bound = form.bind(data);
//! assert_eq!(bound.value().map(|tag| tag.label.as_str()), Some("rust"));
//! ```

#[cfg(feature = "forms")]
pub mod forms;

// Re-export the accessor macro at the crate root
#[cfg(feature = "forms")]
pub use bindery_forms::accessor;

// Re-export forms (forms feature)
#[cfg(feature = "forms")]
pub use bindery_forms::{
	Accessor, BeanMapping, Binders, BindingConfig, BoundField, FieldBinder, FieldError,
	FieldErrors, FieldPath, Form, FormData, FormError, FormResult, Messages, StructBinder,
	binding, boolean, checked, date, email, enumeration, form_data_from_multi, ignored, list,
	mapping, not_empty_text, number, optional, required, text,
};
