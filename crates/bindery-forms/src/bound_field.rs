use crate::data::prefix_key;
use crate::error::FieldError;
use crate::form::Form;

/// One field of a [`Form`], addressed by its rendered path
///
/// Gives a template everything it needs to render an input: the name to
/// submit under, the value to display and the messages to show next to it.
/// Nested objects and list elements are reached with [`BoundField::field`]
/// and [`BoundField::index`].
///
/// # Examples
///
/// ```
/// use bindery_forms::{BeanMapping, Form, FormData, accessor, not_empty_text};
///
/// #[derive(Debug, Default, Clone)]
/// struct Post {
///     tags: Vec<String>,
/// }
///
/// let form = Form::new(
///     BeanMapping::new(Post::default).to_list(accessor!(Post, tags), not_empty_text()),
/// );
///
/// let mut data = FormData::new();
/// data.insert("tags[0]".to_string(), Some("rust".to_string()));
/// data.insert("tags[1]".to_string(), Some("".to_string()));
///
/// let bound = form.bind(data);
/// let second = bound.field("tags").index(1);
/// assert_eq!(second.name(), "tags[1]");
/// assert!(second.has_errors());
/// assert_eq!(bound.field("tags").index(0).value(), Some("rust"));
/// ```
pub struct BoundField<'a, T> {
	form: &'a Form<T>,
	name: String,
}

impl<'a, T> BoundField<'a, T> {
	pub(crate) fn new(form: &'a Form<T>, name: String) -> Self {
		Self { form, name }
	}

	/// Rendered path, also the input name attribute
	pub fn name(&self) -> &str {
		&self.name
	}

	/// HTML id derived from the name, with path punctuation flattened
	///
	/// # Examples
	///
	/// ```
	/// use bindery_forms::{BeanMapping, Form, accessor, text};
	///
	/// #[derive(Default)]
	/// struct Note {
	///     body: String,
	/// }
	///
	/// let form = Form::new(BeanMapping::new(Note::default).map_to(accessor!(Note, body), text()));
	/// assert_eq!(form.field("addr").field("city").id_for_label(), "id_addr_city");
	/// assert_eq!(form.field("tags").index(3).id_for_label(), "id_tags_3");
	/// ```
	pub fn id_for_label(&self) -> String {
		let flattened: String = self
			.name
			.chars()
			.filter(|c| *c != ']')
			.map(|c| if c == '.' || c == '[' { '_' } else { c })
			.collect();
		format!("id_{}", flattened)
	}

	/// Value to display: unbound value if the form holds one, raw data otherwise
	pub fn value(&self) -> Option<&'a str> {
		self.form.display_value(&self.name)
	}

	pub fn errors(&self) -> Vec<&'a FieldError> {
		self.form.errors_at(&self.name)
	}

	pub fn has_errors(&self) -> bool {
		self.form.has_errors_at(&self.name)
	}

	/// Named child of a nested object
	pub fn field(&self, child: &str) -> BoundField<'a, T> {
		BoundField::new(self.form, prefix_key(&self.name, child))
	}

	/// Element of a repeated field
	pub fn index(&self, index: usize) -> BoundField<'a, T> {
		BoundField::new(self.form, format!("{}[{}]", self.name, index))
	}
}
