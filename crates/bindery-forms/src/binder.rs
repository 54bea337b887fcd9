//! The bind/unbind contract
//!
//! Every binder converts raw input into a typed value (`bind`) and back
//! (`unbind`). Leaf binders work on a single optional string; structural
//! binders work on a whole flat [`FormData`] mapping. Both families share
//! the same decorators, which wrap an inner binder and return a new value
//! without touching the original.

use crate::data::FormData;
use crate::decorators::{NotNull, Validating};
use crate::error::BindingResult;
use crate::path::FieldPath;

/// Binder over a single optional text value
///
/// `bind` never panics on malformed input: it returns a failure instead.
/// `unbind` is total and exists for redisplay, so it renders any value.
pub trait FieldBinder: Send + Sync {
	type Output;

	fn bind(&self, raw: Option<&str>, path: &FieldPath) -> BindingResult<Self::Output>;

	fn unbind(&self, value: &Self::Output) -> Option<String>;

	/// Runs `validator` after every successful bind
	///
	/// Each message returned by the validator becomes an error at the path
	/// the binder was invoked with. Failed binds pass through untouched.
	///
	/// # Examples
	///
	/// ```
	/// use bindery_forms::{FieldBinder, FieldPath, number};
	///
	/// let even = number().validating(|n: &i32| {
	///     if n % 2 == 0 { vec![] } else { vec!["Must be even".to_string()] }
	/// });
	///
	/// let errors = even.bind(Some("3"), &FieldPath::root().child("n")).unwrap_err();
	/// assert_eq!(errors.first().message(), "Must be even");
	/// ```
	fn validating<F>(self, validator: F) -> Validating<Self, F>
	where
		Self: Sized,
		F: Fn(&Self::Output) -> Vec<String> + Send + Sync,
	{
		Validating::new(self, validator)
	}

	/// Fails with `message` whenever `predicate` rejects the bound value
	///
	/// # Examples
	///
	/// ```
	/// use bindery_forms::{FieldBinder, FieldPath, number};
	///
	/// let age = number().verifying("21 is restricted age", |n: &i32| *n != 21);
	/// assert!(age.bind(Some("21"), &FieldPath::root()).is_err());
	/// assert_eq!(age.bind(Some("22"), &FieldPath::root()).unwrap(), 22);
	/// ```
	fn verifying<P>(
		self,
		message: impl Into<String>,
		predicate: P,
	) -> Validating<Self, Box<dyn Fn(&Self::Output) -> Vec<String> + Send + Sync>>
	where
		Self: Sized,
		Self::Output: 'static,
		P: Fn(&Self::Output) -> bool + Send + Sync + 'static,
	{
		Validating::new(self, verify_with(message.into(), predicate))
	}

	/// Unwraps an `Option` output, relying on an earlier presence check
	fn not_null<T>(self) -> NotNull<Self>
	where
		Self: Sized + FieldBinder<Output = Option<T>>,
	{
		NotNull::new(self)
	}
}

/// Binder over a whole flat mapping
///
/// Used for objects (bean mappings), nested objects and repeated fields.
/// Keys of the produced mapping are relative to the binder; the owning
/// field mapping re-prefixes them.
pub trait StructBinder: Send + Sync {
	type Output;

	fn bind(&self, data: &FormData, path: &FieldPath) -> BindingResult<Self::Output>;

	fn unbind(&self, value: &Self::Output) -> FormData;

	/// Runs `validator` after every successful bind of the whole structure
	///
	/// Errors are attached to the structure's own path, so a check on a
	/// nested object reports at `addr`, and a check on the top-level mapping
	/// reports at the root path.
	fn validating<F>(self, validator: F) -> Validating<Self, F>
	where
		Self: Sized,
		F: Fn(&Self::Output) -> Vec<String> + Send + Sync,
	{
		Validating::new(self, validator)
	}

	/// Fails with `message` whenever `predicate` rejects the bound value
	fn verifying<P>(
		self,
		message: impl Into<String>,
		predicate: P,
	) -> Validating<Self, Box<dyn Fn(&Self::Output) -> Vec<String> + Send + Sync>>
	where
		Self: Sized,
		Self::Output: 'static,
		P: Fn(&Self::Output) -> bool + Send + Sync + 'static,
	{
		Validating::new(self, verify_with(message.into(), predicate))
	}
}

type BoxedValidator<T> = Box<dyn Fn(&T) -> Vec<String> + Send + Sync>;

fn verify_with<T, P>(message: String, predicate: P) -> BoxedValidator<T>
where
	T: 'static,
	P: Fn(&T) -> bool + Send + Sync + 'static,
{
	Box::new(move |value: &T| {
		if predicate(value) {
			Vec::new()
		} else {
			vec![message.clone()]
		}
	})
}

impl<B: FieldBinder + ?Sized> FieldBinder for Box<B> {
	type Output = B::Output;

	fn bind(&self, raw: Option<&str>, path: &FieldPath) -> BindingResult<Self::Output> {
		(**self).bind(raw, path)
	}

	fn unbind(&self, value: &Self::Output) -> Option<String> {
		(**self).unbind(value)
	}
}

impl<B: StructBinder + ?Sized> StructBinder for Box<B> {
	type Output = B::Output;

	fn bind(&self, data: &FormData, path: &FieldPath) -> BindingResult<Self::Output> {
		(**self).bind(data, path)
	}

	fn unbind(&self, value: &Self::Output) -> FormData {
		(**self).unbind(value)
	}
}

impl<B: StructBinder + ?Sized> StructBinder for std::sync::Arc<B> {
	type Output = B::Output;

	fn bind(&self, data: &FormData, path: &FieldPath) -> BindingResult<Self::Output> {
		(**self).bind(data, path)
	}

	fn unbind(&self, value: &Self::Output) -> FormData {
		(**self).unbind(value)
	}
}
