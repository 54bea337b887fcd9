//! Escape hatch for arbitrary parse functions

use crate::binder::FieldBinder;
use crate::config::default_messages;
use crate::error::{BindingResult, FieldErrors};
use crate::path::FieldPath;
use std::marker::PhantomData;

/// Binder built from a parse function and a format function
///
/// Any error returned by the parse function becomes a single failure carrying
/// this binder's message, whatever the error said.
pub struct Parsed<P, F, T, E> {
	parse: P,
	format: F,
	message: String,
	_marker: PhantomData<fn() -> Result<T, E>>,
}

impl<P, F, T, E> FieldBinder for Parsed<P, F, T, E>
where
	P: Fn(Option<&str>) -> Result<T, E> + Send + Sync,
	F: Fn(&T) -> String + Send + Sync,
{
	type Output = T;

	fn bind(&self, raw: Option<&str>, path: &FieldPath) -> BindingResult<T> {
		(self.parse)(raw).map_err(|_| FieldErrors::single(path.clone(), &self.message))
	}

	fn unbind(&self, value: &T) -> Option<String> {
		Some((self.format)(value))
	}
}

impl<P, F, T, E> Parsed<P, F, T, E> {
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = message.into();
		self
	}
}

/// Wraps `parse` and `format` into a binder failing with `message`
///
/// Passing `None` as the message uses the configured "Invalid value" text.
///
/// # Examples
///
/// ```
/// use bindery_forms::{FieldBinder, FieldPath, binding};
/// use std::net::Ipv4Addr;
///
/// let address = binding(
///     |raw: Option<&str>| raw.unwrap_or_default().parse::<Ipv4Addr>(),
///     |ip: &Ipv4Addr| ip.to_string(),
///     Some("Invalid IP address"),
/// );
///
/// let path = FieldPath::root().child("ip");
/// assert_eq!(address.bind(Some("10.0.0.1"), &path).unwrap(), Ipv4Addr::new(10, 0, 0, 1));
/// assert_eq!(address.bind(Some("10.0.0"), &path).unwrap_err().first().message(), "Invalid IP address");
/// ```
pub fn binding<T, E, P, F>(parse: P, format: F, message: Option<&str>) -> Parsed<P, F, T, E>
where
	P: Fn(Option<&str>) -> Result<T, E> + Send + Sync,
	F: Fn(&T) -> String + Send + Sync,
{
	let message = match message {
		Some(message) => message.to_string(),
		None => default_messages().invalid_value.clone(),
	};
	Parsed {
		parse,
		format,
		message,
		_marker: PhantomData,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn hex_binder() -> Parsed<
		impl Fn(Option<&str>) -> Result<u32, std::num::ParseIntError> + Send + Sync,
		impl Fn(&u32) -> String + Send + Sync,
		u32,
		std::num::ParseIntError,
	> {
		binding(
			|raw: Option<&str>| u32::from_str_radix(raw.unwrap_or_default(), 16),
			|n: &u32| format!("{:x}", n),
			None,
		)
	}

	#[rstest]
	fn test_binding_parses_and_formats() {
		let binder = hex_binder();

		let value = binder.bind(Some("ff"), &FieldPath::root()).unwrap();

		assert_eq!(value, 255);
		assert_eq!(binder.unbind(&value), Some("ff".to_string()));
	}

	#[rstest]
	fn test_binding_converts_any_error_to_message() {
		// Arrange
		let binder = hex_binder();
		let path = FieldPath::root().child("color");

		// Act
		let errors = binder.bind(Some("zz"), &path).unwrap_err();

		// Assert
		assert_eq!(errors.len(), 1);
		assert_eq!(errors.first().message(), "Invalid value");
		assert_eq!(errors.first().path(), &path);
	}

	#[rstest]
	fn test_binding_custom_message() {
		let binder = hex_binder().with_message("Not hexadecimal");

		let errors = binder.bind(None, &FieldPath::root()).unwrap_err();

		assert_eq!(errors.first().message(), "Not hexadecimal");
	}
}
