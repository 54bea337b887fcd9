//! Bidirectional form binding and validation
//!
//! This crate converts flat submitted form data into typed values and back:
//! - Leaf binders for text, numbers, dates, enumerations, checkboxes and e-mail
//! - Decorators for presence (`optional`, `required`), custom validation and
//!   soft unwrapping of optional values
//! - Bean mappings that assemble whole structs, nested objects and lists
//! - An immutable [`Form`] that keeps raw input, bound value and errors
//!   together for redisplay
//!
//! Errors are accumulated: binding a struct reports every failing field at
//! once, each error tagged with the dotted path of its field.
//!
//! # Examples
//!
//! ```
//! use bindery_forms::{
//!     BeanMapping, FieldBinder, Form, FormData, StructBinder, accessor, not_empty_text, number,
//! };
//!
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: i32,
//! }
//!
//! let form = Form::new(
//!     BeanMapping::new(Person::default)
//!         .map_to(accessor!(Person, name), not_empty_text())
//!         .map_to(
//!             accessor!(Person, age),
//!             number().verifying("Must be an adult", |age: &i32| *age >= 18),
//!         )
//!         .verifying("Nobody is called Admin", |p: &Person| p.name != "Admin"),
//! );
//!
//! let mut data = FormData::new();
//! data.insert("name".to_string(), Some("".to_string()));
//! data.insert("age".to_string(), Some("12".to_string()));
//!
//! let bound = form.bind(data);
//! assert_eq!(bound.errors().len(), 2);
//! assert_eq!(bound.field("age").errors()[0].message(), "Must be an adult");
//! ```

pub mod binder;
pub mod bound_field;
pub mod config;
pub mod data;
pub mod decorators;
pub mod error;
pub mod fields;
pub mod form;
pub mod mapping;
pub mod path;
pub mod structure;

pub use binder::{FieldBinder, StructBinder};
pub use bound_field::BoundField;
pub use config::{Binders, BindingConfig, Messages};
pub use data::{FormData, form_data_from_multi};
pub use decorators::{NotNull, Optional, Required, Validating, optional, required};
pub use error::{
	BindingResult, ConfigError, ConfigResult, FieldError, FieldErrors, FormError, FormResult,
};
pub use fields::{
	Choices, binding, boolean, checked, date, email, enumeration, ignored, not_empty_text, number,
	text,
};
pub use form::Form;
pub use mapping::{Accessor, BeanMapping, FieldMapping, mapping};
pub use path::{FieldPath, ParsePathError, PathSegment};
pub use structure::{ListBinder, Nested, list};
