//! Nested and repeated structures
//!
//! [`Nested`] lets a structural binder occupy an optional field of a parent
//! bean. [`ListBinder`] binds indexed keys (`tags[0]`, `tags[3]`, ...) into a
//! `Vec`, ordered by index.

use crate::binder::{FieldBinder, StructBinder};
use crate::data::FormData;
use crate::error::{BindingResult, FieldError, FieldErrors};
use crate::path::FieldPath;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

// Remainder of a key once the list's own path has been stripped
static INDEX_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\[([0-9]+)\]$").expect("INDEX_SUFFIX: invalid regex pattern")
});

/// Adapts a structural binder to an optional field
///
/// Binding always produces `Some`; absence of the object is expressed by the
/// absence of keys, never by a sentinel. `None` unbinds to no keys at all.
#[derive(Debug, Clone)]
pub struct Nested<S> {
	inner: S,
}

impl<S> Nested<S> {
	pub fn new(inner: S) -> Self {
		Self { inner }
	}
}

impl<S: StructBinder> StructBinder for Nested<S> {
	type Output = Option<S::Output>;

	fn bind(&self, data: &FormData, path: &FieldPath) -> BindingResult<Self::Output> {
		self.inner.bind(data, path).map(Some)
	}

	fn unbind(&self, value: &Self::Output) -> FormData {
		match value {
			Some(value) => self.inner.unbind(value),
			None => FormData::new(),
		}
	}
}

/// Binds every `{path}[{index}]` key with one element binder
///
/// Indices need not be contiguous: gaps just shorten the list. Keys that do
/// not match the pattern are ignored. When several keys spell the same index
/// (`tags[7]`, `tags[07]`), the lexicographically smallest key wins.
#[derive(Debug, Clone)]
pub struct ListBinder<L> {
	element: L,
}

impl<L> ListBinder<L> {
	pub fn new(element: L) -> Self {
		Self { element }
	}
}

impl<L: FieldBinder> ListBinder<L> {
	fn matching_entries<'a>(
		&self,
		data: &'a FormData,
		path: &FieldPath,
	) -> BTreeMap<usize, (&'a str, Option<&'a str>)> {
		let prefix = path.to_string();
		let mut matched: BTreeMap<usize, (&'a str, Option<&'a str>)> = BTreeMap::new();

		for (key, value) in data {
			let Some(suffix) = key.strip_prefix(prefix.as_str()) else {
				continue;
			};
			let Some(index) = INDEX_SUFFIX
				.captures(suffix)
				.and_then(|captures| captures[1].parse::<usize>().ok())
			else {
				continue;
			};
			let candidate = (key.as_str(), value.as_deref());
			matched
				.entry(index)
				.and_modify(|current| {
					if candidate.0 < current.0 {
						*current = candidate;
					}
				})
				.or_insert(candidate);
		}

		matched
	}
}

impl<L: FieldBinder> StructBinder for ListBinder<L> {
	type Output = Vec<L::Output>;

	fn bind(&self, data: &FormData, path: &FieldPath) -> BindingResult<Self::Output> {
		let matched = self.matching_entries(data, path);
		tracing::trace!(path = %path, elements = matched.len(), "binding repeated field");

		let mut values = Vec::with_capacity(matched.len());
		let mut errors: Vec<FieldError> = Vec::new();

		for (index, (_, raw)) in matched {
			match self.element.bind(raw, &path.index(index)) {
				Ok(value) => values.push(value),
				Err(element_errors) => errors.extend(element_errors),
			}
		}

		match FieldErrors::from_vec(errors) {
			Some(errors) => Err(errors),
			None => Ok(values),
		}
	}

	fn unbind(&self, value: &Self::Output) -> FormData {
		value
			.iter()
			.enumerate()
			.map(|(index, element)| (format!("[{}]", index), self.element.unbind(element)))
			.collect()
	}
}

/// Repeated-field binder usable on its own, e.g. as a top-level mapping
///
/// # Examples
///
/// ```
/// use bindery_forms::{FieldPath, FormData, StructBinder, list, text};
///
/// let mut data = FormData::new();
/// data.insert("tags[0]".to_string(), Some("a".to_string()));
/// data.insert("tags[2]".to_string(), Some("bb".to_string()));
///
/// let tags = list(text()).bind(&data, &FieldPath::root().child("tags")).unwrap();
/// assert_eq!(tags, vec!["a".to_string(), "bb".to_string()]);
/// ```
pub fn list<L: FieldBinder>(element: L) -> ListBinder<L> {
	ListBinder::new(element)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::decorators::required;
	use crate::fields::{Text, number, text};
	use rstest::rstest;

	fn tags() -> FieldPath {
		FieldPath::root().child("tags")
	}

	fn data(pairs: &[(&str, &str)]) -> FormData {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), Some(v.to_string())))
			.collect()
	}

	#[rstest]
	fn test_list_orders_by_index_not_key() {
		// Arrange
		let input = data(&[("tags[10]", "ten"), ("tags[2]", "two"), ("tags[0]", "zero")]);

		// Act
		let bound = list(text()).bind(&input, &tags()).unwrap();

		// Assert
		assert_eq!(bound, vec!["zero", "two", "ten"]);
	}

	#[rstest]
	fn test_list_ignores_unrelated_keys() {
		let input = data(&[
			("tags[0]", "a"),
			("tags", "x"),
			("tags[]", "x"),
			("tags[a]", "x"),
			("tags[1].name", "x"),
			("tagsx[1]", "x"),
			("other[1]", "x"),
			("tags[99999999999999999999999]", "x"),
		]);

		let bound = list(text()).bind(&input, &tags()).unwrap();

		assert_eq!(bound, vec!["a"]);
	}

	#[rstest]
	fn test_list_without_elements_is_empty() {
		assert_eq!(list(number()).bind(&FormData::new(), &tags()), Ok(vec![]));
	}

	#[rstest]
	fn test_list_reports_only_failed_elements() {
		let input = data(&[("tags[0]", "1"), ("tags[1]", "x"), ("tags[3]", "y"), ("tags[2]", "3")]);

		let errors = list(number()).bind(&input, &tags()).unwrap_err();

		let paths: Vec<String> = errors.iter().map(|e| e.path().to_string()).collect();
		assert_eq!(paths, vec!["tags[1]", "tags[3]"]);
		assert!(errors.iter().all(|e| e.message() == "Invalid number format"));
	}

	#[rstest]
	fn test_list_duplicate_index_is_deterministic() {
		let input = data(&[("tags[07]", "padded"), ("tags[7]", "plain")]);

		let bound = list(text()).bind(&input, &tags()).unwrap();

		// "tags[07]" < "tags[7]" lexicographically
		assert_eq!(bound, vec!["padded"]);
	}

	#[rstest]
	fn test_list_element_none_value_is_passed_through() {
		let mut input = FormData::new();
		input.insert("tags[0]".to_string(), None);

		let errors = list(required(text())).bind(&input, &tags()).unwrap_err();

		assert_eq!(errors.first().path().to_string(), "tags[0]");
		assert_eq!(errors.first().message(), "Field is required");
	}

	#[rstest]
	fn test_list_unbind_uses_positions() {
		let raw = list(Text::new()).unbind(&vec!["a".to_string(), "bb".to_string()]);

		assert_eq!(raw.len(), 2);
		assert_eq!(raw["[0]"], Some("a".to_string()));
		assert_eq!(raw["[1]"], Some("bb".to_string()));
	}

	#[rstest]
	fn test_nested_none_unbinds_to_nothing() {
		let nested = Nested::new(list(text()));

		assert!(nested.unbind(&None).is_empty());
		assert_eq!(
			nested.bind(&data(&[("tags[0]", "a")]), &tags()),
			Ok(Some(vec!["a".to_string()]))
		);
	}
}
