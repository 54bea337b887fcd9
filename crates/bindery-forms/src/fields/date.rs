use crate::binder::FieldBinder;
use crate::config::{Messages, default_messages};
use crate::error::{BindingResult, ConfigError, ConfigResult, FieldErrors};
use crate::path::FieldPath;
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write;
use std::sync::Arc;

/// Calendar date binder with a single fixed strftime pattern
///
/// Parse failures report `Messages::invalid_date`, which by default reuses
/// the number label ("Invalid number format") so existing UI text keeps
/// matching. Override it through [`BindingConfig`](crate::BindingConfig).
#[derive(Debug, Clone)]
pub struct DateBinder {
	format: String,
	messages: Arc<Messages>,
}

impl DateBinder {
	/// # Examples
	///
	/// ```
	/// use bindery_forms::fields::DateBinder;
	///
	/// assert!(DateBinder::new("%Y-%m-%d").is_ok());
	/// assert!(DateBinder::new("%Q").is_err());
	/// ```
	pub fn new(format: impl Into<String>) -> ConfigResult<Self> {
		let format = format.into();
		if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error))
			|| render(NaiveDate::MIN, &format).is_none()
		{
			return Err(ConfigError::InvalidDateFormat(format));
		}
		Ok(Self {
			format,
			messages: default_messages(),
		})
	}

	pub fn with_messages(mut self, messages: Arc<Messages>) -> Self {
		self.messages = messages;
		self
	}

	pub fn format(&self) -> &str {
		&self.format
	}
}

impl FieldBinder for DateBinder {
	type Output = NaiveDate;

	fn bind(&self, raw: Option<&str>, path: &FieldPath) -> BindingResult<NaiveDate> {
		raw.and_then(|s| NaiveDate::parse_from_str(s, &self.format).ok())
			.ok_or_else(|| FieldErrors::single(path.clone(), &self.messages.invalid_date))
	}

	fn unbind(&self, value: &NaiveDate) -> Option<String> {
		render(*value, &self.format)
	}
}

// Time-of-day specifiers cannot be rendered from a bare date
fn render(value: NaiveDate, format: &str) -> Option<String> {
	let mut out = String::new();
	write!(out, "{}", value.format(format)).ok()?;
	Some(out)
}

/// Date binder for `format`
///
/// # Examples
///
/// ```
/// use bindery_forms::{FieldBinder, FieldPath, date};
/// use chrono::NaiveDate;
///
/// let born = date("%d/%m/%Y").unwrap();
/// assert_eq!(
///     born.bind(Some("15/01/2025"), &FieldPath::root()).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
/// );
/// ```
pub fn date(format: &str) -> ConfigResult<DateBinder> {
	DateBinder::new(format)
}
