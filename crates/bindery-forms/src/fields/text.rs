//! Text binder with length bounds

use crate::binder::FieldBinder;
use crate::config::{Messages, default_messages};
use crate::error::{BindingResult, ConfigError, ConfigResult, FieldErrors};
use crate::path::FieldPath;
use std::sync::Arc;

/// Binds free text, optionally trimmed, within a character-count range
///
/// Absent input is bound as the empty string. Lengths are counted in
/// characters, not bytes.
#[derive(Debug, Clone)]
pub struct Text {
	min_length: usize,
	max_length: Option<usize>,
	trim: bool,
	messages: Arc<Messages>,
}

impl Text {
	/// Unbounded, untrimmed text
	pub fn new() -> Self {
		Self {
			min_length: 0,
			max_length: None,
			trim: false,
			messages: default_messages(),
		}
	}

	/// Text between `min` and `max` characters, inclusive
	///
	/// # Examples
	///
	/// ```
	/// use bindery_forms::fields::Text;
	///
	/// assert!(Text::bounded(5, 10).is_ok());
	/// assert!(Text::bounded(10, 5).is_err());
	/// ```
	pub fn bounded(min: usize, max: usize) -> ConfigResult<Self> {
		if min > max {
			return Err(ConfigError::InvertedBounds {
				min: min.to_string(),
				max: max.to_string(),
			});
		}
		Ok(Self {
			min_length: min,
			max_length: Some(max),
			..Self::new()
		})
	}

	pub fn at_least(min: usize) -> Self {
		Self {
			min_length: min,
			..Self::new()
		}
	}

	pub fn at_most(max: usize) -> Self {
		Self {
			max_length: Some(max),
			..Self::new()
		}
	}

	/// Strips surrounding whitespace before checking and binding
	pub fn trimmed(mut self) -> Self {
		self.trim = true;
		self
	}

	pub fn with_messages(mut self, messages: Arc<Messages>) -> Self {
		self.messages = messages;
		self
	}

	pub fn min_length(&self) -> usize {
		self.min_length
	}

	pub fn max_length(&self) -> Option<usize> {
		self.max_length
	}
}

impl Default for Text {
	fn default() -> Self {
		Self::new()
	}
}

impl FieldBinder for Text {
	type Output = String;

	fn bind(&self, raw: Option<&str>, path: &FieldPath) -> BindingResult<String> {
		let raw = raw.unwrap_or_default();
		let value = if self.trim { raw.trim() } else { raw };
		let length = value.chars().count();

		if length < self.min_length {
			return Err(FieldErrors::single(
				path.clone(),
				Messages::render(&self.messages.min_length, self.min_length),
			));
		}
		if let Some(max_length) = self.max_length
			&& length > max_length
		{
			return Err(FieldErrors::single(
				path.clone(),
				Messages::render(&self.messages.max_length, max_length),
			));
		}

		Ok(value.to_string())
	}

	fn unbind(&self, value: &String) -> Option<String> {
		Some(value.clone())
	}
}

/// Unbounded text
pub fn text() -> Text {
	Text::new()
}

/// Trimmed text with at least one character
///
/// # Examples
///
/// ```
/// use bindery_forms::{FieldBinder, FieldPath, not_empty_text};
///
/// let name = not_empty_text();
/// assert_eq!(name.bind(Some("  John "), &FieldPath::root()).unwrap(), "John");
/// assert!(name.bind(Some("   "), &FieldPath::root()).is_err());
/// ```
pub fn not_empty_text() -> Text {
	Text::at_least(1).trimmed()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn path() -> FieldPath {
		FieldPath::root().child("street")
	}

	#[rstest]
	fn test_text_min_length() {
		// Arrange
		let binder = Text::at_least(5);

		// Act
		let errors = binder.bind(Some("abcd"), &path()).unwrap_err();

		// Assert
		assert_eq!(errors.len(), 1);
		assert_eq!(errors.first().message(), "Minimum length is 5");
		assert_eq!(errors.first().path(), &path());
		assert_eq!(binder.bind(Some("abcde"), &path()), Ok("abcde".to_string()));
	}

	#[rstest]
	fn test_text_max_length() {
		let binder = Text::bounded(5, 10).unwrap();

		let errors = binder.bind(Some("Main street."), &path()).unwrap_err();

		assert_eq!(errors.first().message(), "Maximum length is 10");
	}

	#[rstest]
	fn test_text_absent_counts_as_empty() {
		assert_eq!(text().bind(None, &path()), Ok(String::new()));
		assert!(Text::at_least(1).bind(None, &path()).is_err());
	}

	#[rstest]
	fn test_text_trim_applies_before_bounds_and_to_result() {
		let binder = Text::bounded(2, 3).unwrap().trimmed();

		assert_eq!(binder.bind(Some("  abc  "), &path()), Ok("abc".to_string()));
		assert!(binder.bind(Some(" a "), &path()).is_err());
	}

	#[rstest]
	fn test_text_untrimmed_keeps_whitespace() {
		let binder = Text::at_most(3);

		assert!(binder.bind(Some(" ab "), &path()).is_err());
		assert_eq!(text().bind(Some(" x "), &path()), Ok(" x ".to_string()));
	}

	#[rstest]
	fn test_text_counts_characters_not_bytes() {
		let binder = Text::at_most(5);

		assert!(binder.bind(Some("こんにちは"), &path()).is_ok());
		assert!(binder.bind(Some("こんにちはX"), &path()).is_err());
	}

	#[rstest]
	fn test_text_inverted_bounds_rejected() {
		let result = Text::bounded(3, 2);

		assert_eq!(
			result.unwrap_err(),
			ConfigError::InvertedBounds {
				min: "3".to_string(),
				max: "2".to_string(),
			}
		);
	}
}
