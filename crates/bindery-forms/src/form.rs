use crate::binder::StructBinder;
use crate::bound_field::BoundField;
use crate::data::FormData;
use crate::error::{FieldError, FormError, FormResult};
use crate::path::FieldPath;
use once_cell::race::OnceBox;
use std::fmt;
use std::sync::Arc;

/// Immutable snapshot of a form: mapping, raw input, bound value, errors
///
/// A form moves through a small lifecycle, and every step returns a new
/// form:
///
/// - [`Form::new`]: mapping only
/// - [`Form::fill`]: a value to display, no raw data, no errors
/// - [`Form::bind`]: raw data plus either a value or errors
/// - [`Form::validate`]: re-checks the current value through the mapping
///
/// For display, the unbound projection of the value is authoritative when a
/// value is present; otherwise the raw data is.
///
/// # Examples
///
/// ```
/// use bindery_forms::{BeanMapping, Form, FormData, accessor, number, required};
///
/// #[derive(Debug, Default, Clone, PartialEq)]
/// struct Signup {
///     age: i32,
/// }
///
/// let form = Form::new(
///     BeanMapping::new(Signup::default).map_to(accessor!(Signup, age), required(number())),
/// );
///
/// let mut data = FormData::new();
/// data.insert("age".to_string(), Some("abc".to_string()));
///
/// let bound = form.bind(data);
/// assert!(bound.has_errors());
/// assert_eq!(bound.field("age").value(), Some("abc"));
/// assert_eq!(bound.field("age").errors()[0].message(), "Invalid number format");
///
/// let filled = form.fill(Signup { age: 30 });
/// assert!(!filled.has_errors());
/// assert_eq!(filled.field("age").value(), Some("30"));
/// ```
pub struct Form<T> {
	mapping: Arc<dyn StructBinder<Output = T>>,
	data: FormData,
	errors: Vec<FieldError>,
	value: Option<T>,
	// Race-tolerant memo: concurrent first reads may both compute, never block
	unbound: OnceBox<FormData>,
}

impl<T: 'static> Form<T> {
	/// An unbound form over `mapping`
	pub fn new(mapping: impl StructBinder<Output = T> + 'static) -> Self {
		Self::from_shared(Arc::new(mapping))
	}

	/// An unbound form over an already shared mapping
	pub fn from_shared(mapping: Arc<dyn StructBinder<Output = T>>) -> Self {
		Self::from_parts(mapping, FormData::new(), Vec::new(), None)
	}
}

impl<T> Form<T> {
	fn from_parts(
		mapping: Arc<dyn StructBinder<Output = T>>,
		data: FormData,
		errors: Vec<FieldError>,
		value: Option<T>,
	) -> Self {
		Self {
			mapping,
			data,
			errors,
			value,
			unbound: OnceBox::new(),
		}
	}

	/// A form displaying `value`, with no raw data and no errors
	pub fn fill(&self, value: T) -> Self {
		Self::from_parts(Arc::clone(&self.mapping), FormData::new(), Vec::new(), Some(value))
	}

	/// Binds `data` through the mapping at the root path
	///
	/// On success the new form holds the value; on failure it holds the
	/// errors and no value. The raw data is kept either way.
	pub fn bind(&self, data: FormData) -> Self {
		let mapping = Arc::clone(&self.mapping);
		match mapping.bind(&data, &FieldPath::root()) {
			Ok(value) => {
				tracing::debug!(fields = data.len(), "form bound");
				Self::from_parts(mapping, data, Vec::new(), Some(value))
			}
			Err(errors) => {
				tracing::debug!(
					fields = data.len(),
					errors = errors.len(),
					"form bound with errors"
				);
				Self::from_parts(mapping, data, errors.into_vec(), None)
			}
		}
	}

	/// Re-binds the unbound projection of the current value
	///
	/// Useful after the value was changed outside the form. Fails with
	/// [`FormError::NoValue`] when there is no value to check.
	pub fn validate(&self) -> FormResult<Self> {
		let data = self.unbound().cloned().ok_or(FormError::NoValue)?;
		Ok(self.bind(data))
	}

	/// Appends one error, keeping raw data and value
	///
	/// Meant for checks the caller runs after structural binding succeeded,
	/// such as uniqueness lookups.
	pub fn with_error(mut self, path: FieldPath, message: impl Into<String>) -> Self {
		self.errors.push(FieldError::new(path, message));
		self
	}

	/// Keeps the value, dropping errors and raw data
	pub fn discarding_errors(mut self) -> Self {
		self.errors.clear();
		self.data.clear();
		self
	}

	pub fn value(&self) -> Option<&T> {
		self.value.as_ref()
	}

	pub fn into_value(self) -> Option<T> {
		self.value
	}

	pub fn data(&self) -> &FormData {
		&self.data
	}

	pub fn errors(&self) -> &[FieldError] {
		&self.errors
	}

	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}

	/// Errors whose rendered path equals `path`
	pub fn errors_at(&self, path: &str) -> Vec<&FieldError> {
		self.errors
			.iter()
			.filter(|error| error.path().to_string() == path)
			.collect()
	}

	pub fn has_errors_at(&self, path: &str) -> bool {
		self.errors
			.iter()
			.any(|error| error.path().to_string() == path)
	}

	/// Errors attached to the form as a whole
	pub fn global_errors(&self) -> Vec<&FieldError> {
		self.errors.iter().filter(|error| error.is_global()).collect()
	}

	pub fn has_global_errors(&self) -> bool {
		self.errors.iter().any(FieldError::is_global)
	}

	/// Unbound projection of the current value, computed once on demand
	pub fn unbound(&self) -> Option<&FormData> {
		let value = self.value.as_ref()?;
		Some(
			self.unbound
				.get_or_init(|| Box::new(self.mapping.unbind(value))),
		)
	}

	/// Display value for `path`
	///
	/// Prefers the unbound value when the form holds one, otherwise falls
	/// back to the submitted raw data.
	pub fn display_value(&self, path: &str) -> Option<&str> {
		let source = self.unbound().unwrap_or(&self.data);
		source.get(path).and_then(|value| value.as_deref())
	}

	/// Accessor for one top-level field
	pub fn field(&self, name: &str) -> BoundField<'_, T> {
		BoundField::new(self, name.to_string())
	}
}

impl<T: Clone> Clone for Form<T> {
	fn clone(&self) -> Self {
		Self::from_parts(
			Arc::clone(&self.mapping),
			self.data.clone(),
			self.errors.clone(),
			self.value.clone(),
		)
	}
}

impl<T: fmt::Debug> fmt::Debug for Form<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Form")
			.field("data", &self.data)
			.field("errors", &self.errors)
			.field("value", &self.value)
			.finish_non_exhaustive()
	}
}
