//! Integer binder with value bounds

use crate::binder::FieldBinder;
use crate::config::{Messages, default_messages};
use crate::error::{BindingResult, ConfigError, ConfigResult, FieldErrors};
use crate::path::FieldPath;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

/// Parses a base-10 integer and checks it against optional bounds
///
/// The number type defaults to `i32`; any `FromStr` integer works.
/// Surrounding whitespace is not accepted.
#[derive(Debug, Clone)]
pub struct Number<N = i32> {
	min: Option<N>,
	max: Option<N>,
	messages: Arc<Messages>,
}

impl<N> Number<N>
where
	N: FromStr + PartialOrd + Display + Copy,
{
	pub fn new() -> Self {
		Self {
			min: None,
			max: None,
			messages: default_messages(),
		}
	}

	/// # Examples
	///
	/// ```
	/// use bindery_forms::fields::Number;
	///
	/// assert!(Number::bounded(18, 120).is_ok());
	/// assert!(Number::bounded(120, 18).is_err());
	/// ```
	pub fn bounded(min: N, max: N) -> ConfigResult<Self> {
		if min > max {
			return Err(ConfigError::InvertedBounds {
				min: min.to_string(),
				max: max.to_string(),
			});
		}
		Ok(Self {
			min: Some(min),
			max: Some(max),
			..Self::new()
		})
	}

	pub fn at_least(min: N) -> Self {
		Self {
			min: Some(min),
			..Self::new()
		}
	}

	pub fn at_most(max: N) -> Self {
		Self {
			max: Some(max),
			..Self::new()
		}
	}

	pub fn with_messages(mut self, messages: Arc<Messages>) -> Self {
		self.messages = messages;
		self
	}
}

impl<N> Default for Number<N>
where
	N: FromStr + PartialOrd + Display + Copy,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<N> FieldBinder for Number<N>
where
	N: FromStr + PartialOrd + Display + Copy + Send + Sync,
{
	type Output = N;

	fn bind(&self, raw: Option<&str>, path: &FieldPath) -> BindingResult<N> {
		let Some(number) = raw.and_then(|s| s.parse::<N>().ok()) else {
			return Err(FieldErrors::single(
				path.clone(),
				&self.messages.invalid_number,
			));
		};

		if let Some(min) = self.min
			&& number < min
		{
			return Err(FieldErrors::single(
				path.clone(),
				Messages::render(&self.messages.min_value, min),
			));
		}
		if let Some(max) = self.max
			&& number > max
		{
			return Err(FieldErrors::single(
				path.clone(),
				Messages::render(&self.messages.max_value, max),
			));
		}

		Ok(number)
	}

	fn unbind(&self, value: &N) -> Option<String> {
		Some(value.to_string())
	}
}

/// Unbounded `i32` binder
pub fn number() -> Number<i32> {
	Number::new()
}
