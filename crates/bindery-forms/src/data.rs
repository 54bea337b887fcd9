//! Flat form data
//!
//! Submitted forms arrive as one level of `name -> value` pairs. Structure is
//! encoded in the names themselves (`addr.city`, `tags[0]`).

use std::collections::HashMap;

/// Flat mapping of field path to optional raw value
///
/// An absent key, a `None` value and an empty string are all "no value" to
/// the presence decorators.
pub type FormData = HashMap<String, Option<String>>;

/// Prefixes a relative key produced by a structural binder with its field
///
/// Index keys attach directly (`tags` + `[0]` -> `tags[0]`); named keys are
/// joined with a dot (`addr` + `city` -> `addr.city`). An empty field is the
/// root, so the key passes through unchanged.
pub(crate) fn prefix_key(field: &str, key: &str) -> String {
	if field.is_empty() {
		key.to_string()
	} else if key.is_empty() {
		field.to_string()
	} else if key.starts_with('[') {
		format!("{}{}", field, key)
	} else {
		format!("{}.{}", field, key)
	}
}

/// Flattens a multi-valued parameter map into [`FormData`]
///
/// A parameter with no values maps to `None`, a single value keeps the
/// parameter name, and several values are spread over indexed keys
/// (`name[0]`, `name[1]`, ...), which is the shape repeated fields bind from.
///
/// # Examples
///
/// ```
/// use bindery_forms::form_data_from_multi;
///
/// let data = form_data_from_multi(vec![
///     ("name".to_string(), vec!["John".to_string()]),
///     ("tags".to_string(), vec!["a".to_string(), "b".to_string()]),
///     ("registered".to_string(), vec![]),
/// ]);
///
/// assert_eq!(data["name"], Some("John".to_string()));
/// assert_eq!(data["tags[1]"], Some("b".to_string()));
/// assert_eq!(data["registered"], None);
/// assert!(!data.contains_key("tags"));
/// ```
pub fn form_data_from_multi<I, K>(params: I) -> FormData
where
	I: IntoIterator<Item = (K, Vec<String>)>,
	K: Into<String>,
{
	let mut data = FormData::new();
	for (name, values) in params {
		let name = name.into();
		match values.len() {
			0 => {
				data.insert(name, None);
			}
			1 => {
				data.insert(name, values.into_iter().next());
			}
			_ => {
				for (index, value) in values.into_iter().enumerate() {
					data.insert(format!("{}[{}]", name, index), Some(value));
				}
			}
		}
	}
	data
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("addr", "city", "addr.city")]
	#[case("tags", "[0]", "tags[0]")]
	#[case("user", "addr.city", "user.addr.city")]
	#[case("user", "", "user")]
	#[case("", "city", "city")]
	#[case("", "[2]", "[2]")]
	fn test_prefix_key(#[case] field: &str, #[case] key: &str, #[case] expected: &str) {
		assert_eq!(prefix_key(field, key), expected);
	}

	#[rstest]
	fn test_form_data_from_multi_spreads_repeated_values() {
		// Arrange
		let params = vec![(
			"tags",
			vec!["a".to_string(), "b".to_string(), "c".to_string()],
		)];

		// Act
		let data = form_data_from_multi(params);

		// Assert
		assert_eq!(data.len(), 3);
		assert_eq!(data["tags[0]"], Some("a".to_string()));
		assert_eq!(data["tags[2]"], Some("c".to_string()));
	}
}
