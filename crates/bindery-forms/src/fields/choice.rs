//! Enumeration binder

use crate::binder::FieldBinder;
use crate::config::{Messages, default_messages};
use crate::error::{BindingResult, FieldErrors};
use crate::path::FieldPath;
use std::marker::PhantomData;
use std::sync::Arc;

/// A closed set of named constants
///
/// # Examples
///
/// ```
/// use bindery_forms::Choices;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Gender {
///     Male,
///     Female,
/// }
///
/// impl Choices for Gender {
///     fn choices() -> &'static [Self] {
///         &[Gender::Male, Gender::Female]
///     }
///
///     fn name(&self) -> &'static str {
///         match self {
///             Gender::Male => "MALE",
///             Gender::Female => "FEMALE",
///         }
///     }
/// }
/// ```
pub trait Choices: Sized + Clone + Send + Sync + 'static {
	/// Every constant, in declaration order
	fn choices() -> &'static [Self];

	/// Textual name matched against raw input
	fn name(&self) -> &'static str;
}

/// Binds the constant whose name equals the raw input exactly
#[derive(Debug, Clone)]
pub struct Choice<T> {
	messages: Arc<Messages>,
	_marker: PhantomData<fn() -> T>,
}

impl<T: Choices> Choice<T> {
	pub fn new() -> Self {
		Self {
			messages: default_messages(),
			_marker: PhantomData,
		}
	}

	pub fn with_messages(mut self, messages: Arc<Messages>) -> Self {
		self.messages = messages;
		self
	}
}

impl<T: Choices> Default for Choice<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Choices> FieldBinder for Choice<T> {
	type Output = T;

	fn bind(&self, raw: Option<&str>, path: &FieldPath) -> BindingResult<T> {
		raw.and_then(|raw| T::choices().iter().find(|choice| choice.name() == raw))
			.cloned()
			.ok_or_else(|| FieldErrors::single(path.clone(), &self.messages.invalid_enum))
	}

	fn unbind(&self, value: &T) -> Option<String> {
		Some(value.name().to_string())
	}
}

pub fn enumeration<T: Choices>() -> Choice<T> {
	Choice::new()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[derive(Debug, Clone, Copy, PartialEq)]
	enum Color {
		Red,
		Green,
	}

	impl Choices for Color {
		fn choices() -> &'static [Self] {
			&[Color::Red, Color::Green]
		}

		fn name(&self) -> &'static str {
			match self {
				Color::Red => "RED",
				Color::Green => "GREEN",
			}
		}
	}

	#[rstest]
	#[case("RED", Color::Red)]
	#[case("GREEN", Color::Green)]
	fn test_enumeration_matches_name(#[case] raw: &str, #[case] expected: Color) {
		let binder = enumeration::<Color>();

		assert_eq!(binder.bind(Some(raw), &FieldPath::root()), Ok(expected));
		assert_eq!(binder.unbind(&expected), Some(raw.to_string()));
	}

	#[rstest]
	#[case(Some("red"))]
	#[case(Some("BLUE"))]
	#[case(Some(" RED"))]
	#[case(None)]
	fn test_enumeration_rejects_inexact(#[case] raw: Option<&str>) {
		// Arrange
		let binder = enumeration::<Color>();

		// Act
		let errors = binder.bind(raw, &FieldPath::root().child("color")).unwrap_err();

		// Assert
		assert_eq!(errors.first().message(), "Invalid enum value");
		assert_eq!(errors.first().path().to_string(), "color");
	}
}
