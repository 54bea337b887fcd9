use crate::binder::FieldBinder;
use crate::error::BindingResult;
use crate::path::FieldPath;
use std::fmt::Display;

/// Ignores input and always binds a fixed value
///
/// `unbind` always renders the constant, whatever value it is given.
#[derive(Debug, Clone)]
pub struct Ignored<T> {
	value: T,
}

impl<T> FieldBinder for Ignored<T>
where
	T: Clone + Display + Send + Sync,
{
	type Output = T;

	fn bind(&self, _raw: Option<&str>, _path: &FieldPath) -> BindingResult<T> {
		Ok(self.value.clone())
	}

	fn unbind(&self, _value: &T) -> Option<String> {
		Some(self.value.to_string())
	}
}

/// # Examples
///
/// ```
/// use bindery_forms::{FieldBinder, FieldPath, ignored};
///
/// let version = ignored(3);
/// assert_eq!(version.bind(Some("garbage"), &FieldPath::root()).unwrap(), 3);
/// assert_eq!(version.unbind(&7), Some("3".to_string()));
/// ```
pub fn ignored<T>(value: T) -> Ignored<T>
where
	T: Clone + Display + Send + Sync,
{
	Ignored { value }
}
