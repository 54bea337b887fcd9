//! Binders that wrap another binder
//!
//! Decorators never mutate their delegate. Each one holds the inner binder
//! by value and adds a single behavior: presence handling, post-bind
//! validation, or option unwrapping.

use crate::binder::{FieldBinder, StructBinder};
use crate::config::{Messages, default_messages};
use crate::data::FormData;
use crate::error::{BindingResult, FieldError, FieldErrors};
use crate::path::FieldPath;
use std::sync::Arc;

fn is_blank(raw: Option<&str>) -> bool {
	raw.is_none_or(str::is_empty)
}

/// Empty or absent input binds to `None` without consulting the delegate
#[derive(Debug, Clone)]
pub struct Optional<B> {
	inner: B,
}

impl<B> Optional<B> {
	pub fn new(inner: B) -> Self {
		Self { inner }
	}
}

impl<B: FieldBinder> FieldBinder for Optional<B> {
	type Output = Option<B::Output>;

	fn bind(&self, raw: Option<&str>, path: &FieldPath) -> BindingResult<Self::Output> {
		if is_blank(raw) {
			return Ok(None);
		}
		self.inner.bind(raw, path).map(Some)
	}

	fn unbind(&self, value: &Self::Output) -> Option<String> {
		value.as_ref().and_then(|v| self.inner.unbind(v))
	}
}

/// Empty or absent input fails with a "required" error
///
/// The output type is the delegate's own output, so a required field never
/// has to be unwrapped afterwards.
#[derive(Debug, Clone)]
pub struct Required<B> {
	inner: B,
	messages: Arc<Messages>,
}

impl<B> Required<B> {
	pub fn new(inner: B) -> Self {
		Self::with_messages(inner, default_messages())
	}

	pub fn with_messages(inner: B, messages: Arc<Messages>) -> Self {
		Self { inner, messages }
	}
}

impl<B: FieldBinder> FieldBinder for Required<B> {
	type Output = B::Output;

	fn bind(&self, raw: Option<&str>, path: &FieldPath) -> BindingResult<Self::Output> {
		if is_blank(raw) {
			return Err(FieldErrors::single(path.clone(), &self.messages.required));
		}
		self.inner.bind(raw, path)
	}

	fn unbind(&self, value: &Self::Output) -> Option<String> {
		self.inner.unbind(value)
	}
}

/// Post-bind validation hook
///
/// See [`FieldBinder::validating`] and [`StructBinder::validating`].
pub struct Validating<B, F> {
	inner: B,
	validator: F,
}

impl<B, F> Validating<B, F> {
	pub fn new(inner: B, validator: F) -> Self {
		Self { inner, validator }
	}
}

fn check<T, F>(result: BindingResult<T>, validator: &F, path: &FieldPath) -> BindingResult<T>
where
	F: Fn(&T) -> Vec<String>,
{
	let value = result?;
	let errors = validator(&value)
		.into_iter()
		.map(|message| FieldError::new(path.clone(), message))
		.collect();
	match FieldErrors::from_vec(errors) {
		Some(errors) => Err(errors),
		None => Ok(value),
	}
}

impl<B, F> FieldBinder for Validating<B, F>
where
	B: FieldBinder,
	F: Fn(&B::Output) -> Vec<String> + Send + Sync,
{
	type Output = B::Output;

	fn bind(&self, raw: Option<&str>, path: &FieldPath) -> BindingResult<Self::Output> {
		check(self.inner.bind(raw, path), &self.validator, path)
	}

	fn unbind(&self, value: &Self::Output) -> Option<String> {
		self.inner.unbind(value)
	}
}

impl<B, F> StructBinder for Validating<B, F>
where
	B: StructBinder,
	F: Fn(&B::Output) -> Vec<String> + Send + Sync,
{
	type Output = B::Output;

	fn bind(&self, data: &FormData, path: &FieldPath) -> BindingResult<Self::Output> {
		check(self.inner.bind(data, path), &self.validator, path)
	}

	fn unbind(&self, value: &Self::Output) -> FormData {
		self.inner.unbind(value)
	}
}

/// Unwraps the `Option` produced by the delegate
///
/// Meant for delegates whose presence was already checked further in. If a
/// `None` slips through anyway, the bind reports the "required" message
/// instead of aborting.
#[derive(Debug, Clone)]
pub struct NotNull<B> {
	inner: B,
	messages: Arc<Messages>,
}

impl<B> NotNull<B> {
	pub fn new(inner: B) -> Self {
		Self::with_messages(inner, default_messages())
	}

	pub fn with_messages(inner: B, messages: Arc<Messages>) -> Self {
		Self { inner, messages }
	}
}

impl<B, T> FieldBinder for NotNull<B>
where
	B: FieldBinder<Output = Option<T>>,
	T: Clone,
{
	type Output = T;

	fn bind(&self, raw: Option<&str>, path: &FieldPath) -> BindingResult<T> {
		match self.inner.bind(raw, path)? {
			Some(value) => Ok(value),
			None => {
				tracing::warn!(path = %path, "not_null binder received no value");
				Err(FieldErrors::single(path.clone(), &self.messages.required))
			}
		}
	}

	fn unbind(&self, value: &T) -> Option<String> {
		self.inner.unbind(&Some(value.clone()))
	}
}

/// Wraps `binder` so that empty input binds to `None`
///
/// # Examples
///
/// ```
/// use bindery_forms::{FieldBinder, FieldPath, number, optional};
///
/// let age = optional(number());
/// assert_eq!(age.bind(None, &FieldPath::root()).unwrap(), None);
/// assert_eq!(age.bind(Some(""), &FieldPath::root()).unwrap(), None);
/// assert_eq!(age.bind(Some("42"), &FieldPath::root()).unwrap(), Some(42));
/// ```
pub fn optional<B: FieldBinder>(binder: B) -> Optional<B> {
	Optional::new(binder)
}

/// Wraps `binder` so that empty input fails with "Field is required"
///
/// # Examples
///
/// ```
/// use bindery_forms::{FieldBinder, FieldPath, required, text};
///
/// let name = required(text());
/// let errors = name.bind(None, &FieldPath::root().child("name")).unwrap_err();
/// assert_eq!(errors.first().message(), "Field is required");
/// assert_eq!(errors.first().path().to_string(), "name");
/// ```
pub fn required<B: FieldBinder>(binder: B) -> Required<B> {
	Required::new(binder)
}
