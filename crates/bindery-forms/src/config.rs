//! Binding configuration
//!
//! Every user-visible message produced by the built-in binders lives in
//! [`Messages`]. The defaults are the canonical English texts; a
//! [`BindingConfig`] loaded from TOML or JSON can replace any of them, and
//! [`Binders`] hands out leaf binders that carry the configured texts.
//!
//! # Examples
//!
//! ```
//! use bindery_forms::{BindingConfig, FieldBinder, FieldPath};
//!
//! let config = BindingConfig::from_toml_str(r#"
//! date_format = "%d/%m/%Y"
//!
//! [messages]
//! required = "Please fill in this field"
//! "#).unwrap();
//!
//! let binders = config.binders();
//! let name = binders.required(binders.text());
//! let errors = name.bind(None, &FieldPath::root().child("name")).unwrap_err();
//! assert_eq!(errors.first().message(), "Please fill in this field");
//! ```

use crate::binder::FieldBinder;
use crate::decorators::{NotNull, Optional, Required};
use crate::error::{ConfigError, ConfigResult};
use crate::fields::{Checked, Choice, Choices, DateBinder, Email, Number, Parsed, Text, binding};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

/// Message templates used by the built-in binders
///
/// `{min}` and `{max}` placeholders are replaced by the configured bound.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
	pub required: String,
	pub min_length: String,
	pub max_length: String,
	pub invalid_number: String,
	pub min_value: String,
	pub max_value: String,
	/// Date parse failures share the number label unless overridden
	pub invalid_date: String,
	pub invalid_enum: String,
	pub invalid_email: String,
	pub invalid_value: String,
}

impl Default for Messages {
	fn default() -> Self {
		Self {
			required: "Field is required".to_string(),
			min_length: "Minimum length is {min}".to_string(),
			max_length: "Maximum length is {max}".to_string(),
			invalid_number: "Invalid number format".to_string(),
			min_value: "Minimum value is {min}".to_string(),
			max_value: "Maximum value is {max}".to_string(),
			invalid_date: "Invalid number format".to_string(),
			invalid_enum: "Invalid enum value".to_string(),
			invalid_email: "invalid email address".to_string(),
			invalid_value: "Invalid value".to_string(),
		}
	}
}

impl Messages {
	/// Substitutes `{min}` and `{max}` in `template` with `bound`
	///
	/// # Examples
	///
	/// ```
	/// use bindery_forms::Messages;
	///
	/// let messages = Messages::default();
	/// assert_eq!(Messages::render(&messages.min_value, 18), "Minimum value is 18");
	/// ```
	pub fn render(template: &str, bound: impl Display) -> String {
		let bound = bound.to_string();
		template.replace("{min}", &bound).replace("{max}", &bound)
	}
}

static DEFAULT_MESSAGES: Lazy<Arc<Messages>> = Lazy::new(|| Arc::new(Messages::default()));

/// Shared handle to the default messages
pub(crate) fn default_messages() -> Arc<Messages> {
	Arc::clone(&DEFAULT_MESSAGES)
}

fn default_date_format() -> String {
	"%Y-%m-%d".to_string()
}

/// Settings for building binders
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingConfig {
	/// Message templates
	#[serde(default)]
	pub messages: Messages,

	/// strftime pattern used by [`Binders::date`]
	#[serde(default = "default_date_format")]
	pub date_format: String,
}

impl Default for BindingConfig {
	fn default() -> Self {
		Self {
			messages: Messages::default(),
			date_format: default_date_format(),
		}
	}
}

impl BindingConfig {
	/// Parses a configuration from TOML text
	pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
		toml::from_str(contents)
			.map_err(|e| ConfigError::Parse(format!("TOML parse error: {}", e)))
	}

	/// Parses a configuration from JSON text
	pub fn from_json_str(contents: &str) -> ConfigResult<Self> {
		serde_json::from_str(contents)
			.map_err(|e| ConfigError::Parse(format!("JSON parse error: {}", e)))
	}

	pub fn with_messages(mut self, messages: Messages) -> Self {
		self.messages = messages;
		self
	}

	pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
		self.date_format = date_format.into();
		self
	}

	/// A binder factory carrying this configuration
	pub fn binders(&self) -> Binders {
		Binders {
			messages: Arc::new(self.messages.clone()),
			date_format: self.date_format.clone(),
		}
	}
}

/// Factory for leaf binders and presence decorators sharing one message set
#[derive(Debug, Clone)]
pub struct Binders {
	messages: Arc<Messages>,
	date_format: String,
}

impl Default for Binders {
	fn default() -> Self {
		BindingConfig::default().binders()
	}
}

impl Binders {
	pub fn messages(&self) -> &Messages {
		&self.messages
	}

	pub fn text(&self) -> Text {
		Text::new().with_messages(Arc::clone(&self.messages))
	}

	pub fn text_bounded(&self, min: usize, max: usize) -> ConfigResult<Text> {
		Ok(Text::bounded(min, max)?.with_messages(Arc::clone(&self.messages)))
	}

	pub fn not_empty_text(&self) -> Text {
		Text::at_least(1)
			.trimmed()
			.with_messages(Arc::clone(&self.messages))
	}

	pub fn number<N>(&self) -> Number<N>
	where
		N: FromStr + PartialOrd + Display + Copy,
	{
		Number::new().with_messages(Arc::clone(&self.messages))
	}

	pub fn number_bounded<N>(&self, min: N, max: N) -> ConfigResult<Number<N>>
	where
		N: FromStr + PartialOrd + Display + Copy,
	{
		Ok(Number::bounded(min, max)?.with_messages(Arc::clone(&self.messages)))
	}

	/// Date binder using the configured format
	pub fn date(&self) -> ConfigResult<DateBinder> {
		self.date_with_format(&self.date_format)
	}

	pub fn date_with_format(&self, format: &str) -> ConfigResult<DateBinder> {
		Ok(DateBinder::new(format)?.with_messages(Arc::clone(&self.messages)))
	}

	pub fn enumeration<T: Choices>(&self) -> Choice<T> {
		Choice::new().with_messages(Arc::clone(&self.messages))
	}

	pub fn email(&self) -> Email {
		Email::new().with_messages(Arc::clone(&self.messages))
	}

	pub fn checked(&self) -> Checked {
		Checked
	}

	pub fn optional<B>(&self, binder: B) -> Optional<B> {
		Optional::new(binder)
	}

	pub fn required<B>(&self, binder: B) -> Required<B> {
		Required::with_messages(binder, Arc::clone(&self.messages))
	}

	/// Unwraps an `Option` output, reporting the configured "required" text
	/// if a `None` gets through
	pub fn not_null<B, T>(&self, binder: B) -> NotNull<B>
	where
		B: FieldBinder<Output = Option<T>>,
	{
		NotNull::with_messages(binder, Arc::clone(&self.messages))
	}

	/// Custom parse binder failing with the configured "invalid value" text
	pub fn binding<T, E, P, F>(&self, parse: P, format: F) -> Parsed<P, F, T, E>
	where
		P: Fn(Option<&str>) -> Result<T, E> + Send + Sync,
		F: Fn(&T) -> String + Send + Sync,
	{
		binding(parse, format, Some(&self.messages.invalid_value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::binder::FieldBinder;
	use crate::path::FieldPath;
	use rstest::rstest;

	#[rstest]
	fn test_default_messages_match_canonical_texts() {
		let messages = Messages::default();

		assert_eq!(messages.required, "Field is required");
		assert_eq!(Messages::render(&messages.min_length, 3), "Minimum length is 3");
		assert_eq!(Messages::render(&messages.max_length, 9), "Maximum length is 9");
		assert_eq!(messages.invalid_date, "Invalid number format");
		assert_eq!(messages.invalid_enum, "Invalid enum value");
	}

	#[rstest]
	fn test_partial_toml_keeps_defaults() {
		// Arrange
		let contents = r#"
			[messages]
			invalid_date = "Invalid date"
		"#;

		// Act
		let config = BindingConfig::from_toml_str(contents).unwrap();

		// Assert
		assert_eq!(config.messages.invalid_date, "Invalid date");
		assert_eq!(config.messages.required, "Field is required");
		assert_eq!(config.date_format, "%Y-%m-%d");
	}

	#[rstest]
	fn test_json_config() {
		let config =
			BindingConfig::from_json_str(r#"{"date_format": "%d.%m.%Y"}"#).unwrap();

		assert_eq!(config.date_format, "%d.%m.%Y");
		assert_eq!(config.messages, Messages::default());
	}

	#[rstest]
	fn test_malformed_config_is_parse_error() {
		let result = BindingConfig::from_toml_str("date_format = [");

		assert!(matches!(result, Err(ConfigError::Parse(_))));
	}

	#[rstest]
	fn test_binders_use_configured_date_format() {
		// Arrange
		let config = BindingConfig::default().with_date_format("%d/%m/%Y");
		let mut messages = Messages::default();
		messages.invalid_date = "Invalid date".to_string();
		let binders = config.with_messages(messages).binders();

		// Act
		let date = binders.date().unwrap();

		// Assert
		let path = FieldPath::root().child("born");
		assert!(date.bind(Some("15/01/2025"), &path).is_ok());
		let errors = date.bind(Some("2025-01-15"), &path).unwrap_err();
		assert_eq!(errors.first().message(), "Invalid date");
	}

	#[rstest]
	fn test_binders_carry_required_and_invalid_value_texts() {
		// Arrange
		let config = BindingConfig::from_toml_str(
			r#"
			[messages]
			required = "Pflichtfeld"
			invalid_value = "Ungueltig"
			"#,
		)
		.unwrap();
		let binders = config.binders();
		let path = FieldPath::root().child("code");

		// Act
		let unwrapped = binders.not_null(binders.optional(binders.number::<i32>()));
		let parsed = binders.binding(
			|raw: Option<&str>| raw.unwrap_or_default().parse::<u8>(),
			|n: &u8| n.to_string(),
		);

		// Assert
		assert_eq!(
			unwrapped.bind(None, &path).unwrap_err().first().message(),
			"Pflichtfeld"
		);
		assert_eq!(unwrapped.bind(Some("7"), &path), Ok(7));
		assert_eq!(
			parsed.bind(Some("x"), &path).unwrap_err().first().message(),
			"Ungueltig"
		);
	}

	#[rstest]
	fn test_binders_reject_invalid_date_format() {
		let binders = BindingConfig::default().with_date_format("%Q").binders();

		assert!(matches!(
			binders.date(),
			Err(ConfigError::InvalidDateFormat(_))
		));
	}
}
