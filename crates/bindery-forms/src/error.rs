//! Error types for binding, configuration, and form lifecycle

use crate::path::FieldPath;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A validation message attached to a field path
///
/// The empty path marks a global error that belongs to the form (or to a
/// nested object) as a whole rather than to a single input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldError {
	path: FieldPath,
	message: String,
}

impl FieldError {
	/// # Examples
	///
	/// ```
	/// use bindery_forms::{FieldError, FieldPath};
	///
	/// let error = FieldError::new(FieldPath::root().child("age"), "Minimum value is 18");
	/// assert_eq!(error.path().to_string(), "age");
	/// assert_eq!(error.message(), "Minimum value is 18");
	/// ```
	pub fn new(path: FieldPath, message: impl Into<String>) -> Self {
		Self {
			path,
			message: message.into(),
		}
	}

	pub fn path(&self) -> &FieldPath {
		&self.path
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	/// Whether this error is attached to the root path
	pub fn is_global(&self) -> bool {
		self.path.is_root()
	}
}

impl fmt::Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.path.is_root() {
			f.write_str(&self.message)
		} else {
			write!(f, "{}: {}", self.path, self.message)
		}
	}
}

/// Ordered, non-empty list of field errors
///
/// A failed bind always carries at least one error, so the only ways to
/// build this type are from a first error or from a vector that is checked
/// for emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{}", render(.errors))]
pub struct FieldErrors {
	errors: Vec<FieldError>,
}

fn render(errors: &[FieldError]) -> String {
	errors
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join("; ")
}

impl FieldErrors {
	/// A failure holding exactly one error
	pub fn single(path: FieldPath, message: impl Into<String>) -> Self {
		Self {
			errors: vec![FieldError::new(path, message)],
		}
	}

	/// Returns `None` when `errors` is empty
	///
	/// # Examples
	///
	/// ```
	/// use bindery_forms::{FieldError, FieldErrors, FieldPath};
	///
	/// assert!(FieldErrors::from_vec(vec![]).is_none());
	///
	/// let errors = FieldErrors::from_vec(vec![FieldError::new(FieldPath::root(), "broken")]);
	/// assert_eq!(errors.unwrap().len(), 1);
	/// ```
	pub fn from_vec(errors: Vec<FieldError>) -> Option<Self> {
		if errors.is_empty() {
			None
		} else {
			Some(Self { errors })
		}
	}

	/// Appends every error of `other`, keeping order
	pub fn extend(&mut self, other: FieldErrors) {
		self.errors.extend(other.errors);
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	/// Always `false`; provided for API symmetry with `len`
	pub fn is_empty(&self) -> bool {
		false
	}

	pub fn first(&self) -> &FieldError {
		&self.errors[0]
	}

	pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
		self.errors.iter()
	}

	pub fn as_slice(&self) -> &[FieldError] {
		&self.errors
	}

	pub fn into_vec(self) -> Vec<FieldError> {
		self.errors
	}
}

impl From<FieldError> for FieldErrors {
	fn from(error: FieldError) -> Self {
		Self {
			errors: vec![error],
		}
	}
}

impl IntoIterator for FieldErrors {
	type Item = FieldError;
	type IntoIter = std::vec::IntoIter<FieldError>;

	fn into_iter(self) -> Self::IntoIter {
		self.errors.into_iter()
	}
}

impl<'a> IntoIterator for &'a FieldErrors {
	type Item = &'a FieldError;
	type IntoIter = std::slice::Iter<'a, FieldError>;

	fn into_iter(self) -> Self::IntoIter {
		self.errors.iter()
	}
}

impl<'de> Deserialize<'de> for FieldErrors {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let errors = Vec::<FieldError>::deserialize(deserializer)?;
		FieldErrors::from_vec(errors)
			.ok_or_else(|| serde::de::Error::custom("expected at least one field error"))
	}
}

/// Outcome of every `bind` call
pub type BindingResult<T> = Result<T, FieldErrors>;

/// Binder misconfiguration detected while building a binder
///
/// These are programmer errors: they surface during setup, before any data
/// is bound.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	#[error("max cannot be less than min (min = {min}, max = {max})")]
	InvertedBounds { min: String, max: String },
	#[error("Invalid date format '{0}'")]
	InvalidDateFormat(String),
	#[error("Invalid configuration: {0}")]
	Parse(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
	#[error("Form does not have a value")]
	NoValue,
}

pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_field_errors_never_empty() {
		// Arrange
		let mut errors = FieldErrors::single(FieldPath::root().child("age"), "Invalid number format");

		// Act
		errors.extend(FieldErrors::single(FieldPath::root(), "Global problem"));

		// Assert
		assert_eq!(errors.len(), 2);
		assert!(!errors.is_empty());
		assert_eq!(errors.first().message(), "Invalid number format");
		assert!(errors.as_slice()[1].is_global());
	}

	#[rstest]
	fn test_field_errors_display() {
		let mut errors = FieldErrors::single(FieldPath::root().child("age"), "Minimum value is 18");
		errors.extend(FieldErrors::single(FieldPath::root(), "Names must differ"));

		assert_eq!(errors.to_string(), "age: Minimum value is 18; Names must differ");
	}

	#[rstest]
	fn test_field_errors_serialize_as_list() {
		let errors = FieldErrors::single(FieldPath::root().child("tags").index(1), "Field is required");

		let value = serde_json::to_value(&errors).unwrap();

		assert_eq!(
			value,
			json!([{ "path": "tags[1]", "message": "Field is required" }])
		);
		assert_eq!(serde_json::from_value::<FieldErrors>(value).unwrap(), errors);
	}

	#[rstest]
	fn test_field_errors_reject_empty_list() {
		let result = serde_json::from_value::<FieldErrors>(json!([]));

		assert!(result.is_err());
	}
}
