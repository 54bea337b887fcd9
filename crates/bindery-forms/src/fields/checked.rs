use crate::binder::FieldBinder;
use crate::error::BindingResult;
use crate::path::FieldPath;

/// Checkbox semantics: presence of a value is truth, content is ignored
///
/// # Examples
///
/// ```
/// use bindery_forms::{FieldBinder, FieldPath, checked};
///
/// let registered = checked();
/// assert_eq!(registered.bind(Some("off"), &FieldPath::root()).unwrap(), true);
/// assert_eq!(registered.bind(None, &FieldPath::root()).unwrap(), false);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Checked;

impl FieldBinder for Checked {
	type Output = bool;

	fn bind(&self, raw: Option<&str>, _path: &FieldPath) -> BindingResult<bool> {
		Ok(raw.is_some())
	}

	fn unbind(&self, value: &bool) -> Option<String> {
		value.then(|| "TRUE".to_string())
	}
}

pub fn checked() -> Checked {
	Checked
}

/// Alias of [`checked`]
pub fn boolean() -> Checked {
	Checked
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Some("TRUE"), true)]
	#[case(Some("false"), true)]
	#[case(Some(""), true)]
	#[case(None, false)]
	fn test_presence_is_truth(#[case] raw: Option<&str>, #[case] expected: bool) {
		assert_eq!(checked().bind(raw, &FieldPath::root()), Ok(expected));
	}

	#[rstest]
	fn test_unbind_round_trips_through_presence() {
		let binder = boolean();

		assert_eq!(binder.unbind(&true), Some("TRUE".to_string()));
		assert_eq!(binder.unbind(&false), None);
	}
}
