//! Bean mappings
//!
//! A [`BeanMapping`] turns a whole flat [`FormData`] into one typed object.
//! It owns a factory for empty instances and an ordered list of
//! [`FieldMapping`]s, each responsible for reading and writing one field.
//!
//! # Examples
//!
//! ```
//! use bindery_forms::{BeanMapping, FormData, FieldPath, StructBinder, accessor, not_empty_text, number, optional};
//!
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: Option<i32>,
//! }
//!
//! let mapping = BeanMapping::new(Person::default)
//!     .map_to(accessor!(Person, name), not_empty_text())
//!     .map_to(accessor!(Person, age), optional(number()));
//!
//! let mut data = FormData::new();
//! data.insert("name".to_string(), Some(" Ada ".to_string()));
//!
//! let person = mapping.bind(&data, &FieldPath::root()).unwrap();
//! assert_eq!(person, Person { name: "Ada".to_string(), age: None });
//! ```

use crate::binder::{FieldBinder, StructBinder};
use crate::data::{FormData, prefix_key};
use crate::error::{BindingResult, FieldErrors};
use crate::path::FieldPath;
use crate::structure::{ListBinder, Nested};

/// Name, getter and setter of one field of `B`
pub struct Accessor<B, F> {
	name: String,
	get: fn(&B) -> &F,
	set: fn(&mut B, F),
}

impl<B, F> Accessor<B, F> {
	pub fn new(name: impl Into<String>, get: fn(&B) -> &F, set: fn(&mut B, F)) -> Self {
		Self {
			name: name.into(),
			get,
			set,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn get<'a>(&self, bean: &'a B) -> &'a F {
		(self.get)(bean)
	}

	pub fn set(&self, bean: &mut B, value: F) {
		(self.set)(bean, value)
	}
}

impl<B, F> Clone for Accessor<B, F> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			get: self.get,
			set: self.set,
		}
	}
}

/// Builds an [`Accessor`] for a named struct field
///
/// The key defaults to the field identifier; `as "key"` overrides it.
///
/// ```
/// use bindery_forms::accessor;
///
/// #[derive(Default)]
/// struct User {
///     first_name: Option<String>,
/// }
///
/// let plain = accessor!(User, first_name);
/// assert_eq!(plain.name(), "first_name");
///
/// let renamed = accessor!(User, first_name as "firstName");
/// assert_eq!(renamed.name(), "firstName");
/// ```
#[macro_export]
macro_rules! accessor {
	($bean:ty, $field:ident as $name:expr) => {
		$crate::Accessor::new(
			$name,
			|bean: &$bean| &bean.$field,
			|bean: &mut $bean, value| bean.$field = value,
		)
	};
	($bean:ty, $field:ident) => {
		$crate::accessor!($bean, $field as stringify!($field))
	};
}

/// Binds one field of `B` during whole-bean bind and unbind
pub trait FieldMapping<B>: Send + Sync {
	/// Key of the field relative to its bean
	fn name(&self) -> &str;

	/// Binds the field at `path` and writes it into `bean` on success
	fn bind_into(&self, data: &FormData, bean: &mut B, path: &FieldPath) -> BindingResult<()>;

	/// Raw pairs for this field, keyed relative to the bean
	fn unbind(&self, bean: &B) -> FormData;
}

/// Leaf binder reading the single key equal to the field's path
pub struct SimpleMapping<B, F, L> {
	accessor: Accessor<B, F>,
	binder: L,
}

impl<B, F, L> SimpleMapping<B, F, L> {
	pub fn new(accessor: Accessor<B, F>, binder: L) -> Self {
		Self { accessor, binder }
	}
}

impl<B, F, L> FieldMapping<B> for SimpleMapping<B, F, L>
where
	L: FieldBinder<Output = F>,
{
	fn name(&self) -> &str {
		self.accessor.name()
	}

	fn bind_into(&self, data: &FormData, bean: &mut B, path: &FieldPath) -> BindingResult<()> {
		let raw = data.get(&path.to_string()).and_then(|value| value.as_deref());
		let value = self.binder.bind(raw, path)?;
		self.accessor.set(bean, value);
		Ok(())
	}

	fn unbind(&self, bean: &B) -> FormData {
		let raw = self.binder.unbind(self.accessor.get(bean));
		FormData::from([(self.accessor.name().to_string(), raw)])
	}
}

/// Structural binder (nested object or list) sitting in one field
///
/// Binding hands the structural binder the full data; unbinding re-prefixes
/// every key it produces with the field name.
pub struct ComplexMapping<B, F, S> {
	accessor: Accessor<B, F>,
	binder: S,
}

impl<B, F, S> ComplexMapping<B, F, S> {
	pub fn new(accessor: Accessor<B, F>, binder: S) -> Self {
		Self { accessor, binder }
	}
}

impl<B, F, S> FieldMapping<B> for ComplexMapping<B, F, S>
where
	S: StructBinder<Output = F>,
{
	fn name(&self) -> &str {
		self.accessor.name()
	}

	fn bind_into(&self, data: &FormData, bean: &mut B, path: &FieldPath) -> BindingResult<()> {
		let value = self.binder.bind(data, path)?;
		self.accessor.set(bean, value);
		Ok(())
	}

	fn unbind(&self, bean: &B) -> FormData {
		let name = self.accessor.name();
		self.binder
			.unbind(self.accessor.get(bean))
			.into_iter()
			.map(|(key, value)| (prefix_key(name, &key), value))
			.collect()
	}
}

type Factory<B> = Box<dyn Fn() -> B + Send + Sync>;

/// Ordered field mappings plus a factory, binding a whole `B`
///
/// Binding never stops at the first failing field: every field is tried and
/// every error is reported together.
pub struct BeanMapping<B> {
	fields: Vec<Box<dyn FieldMapping<B>>>,
	factory: Factory<B>,
}

impl<B: 'static> BeanMapping<B> {
	/// An empty mapping creating instances with `factory`
	pub fn new(factory: impl Fn() -> B + Send + Sync + 'static) -> Self {
		Self {
			fields: Vec::new(),
			factory: Box::new(factory),
		}
	}

	/// Appends an arbitrary field mapping
	pub fn with_mapping(mut self, mapping: impl FieldMapping<B> + 'static) -> Self {
		self.fields.push(Box::new(mapping));
		self
	}

	/// Maps a field to a leaf binder
	pub fn map_to<F, L>(self, accessor: Accessor<B, F>, binder: L) -> Self
	where
		F: 'static,
		L: FieldBinder<Output = F> + 'static,
	{
		self.with_mapping(SimpleMapping::new(accessor, binder))
	}

	/// Maps an optional field to a nested structural binder under `name.`
	pub fn to_nested<N, S>(self, accessor: Accessor<B, Option<N>>, binder: S) -> Self
	where
		N: 'static,
		S: StructBinder<Output = N> + 'static,
	{
		self.with_mapping(ComplexMapping::new(accessor, Nested::new(binder)))
	}

	/// Maps a list field to indexed keys `name[0]`, `name[1]`, ...
	pub fn to_list<T, L>(self, accessor: Accessor<B, Vec<T>>, binder: L) -> Self
	where
		T: 'static,
		L: FieldBinder<Output = T> + 'static,
	{
		self.with_mapping(ComplexMapping::new(accessor, ListBinder::new(binder)))
	}

	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|field| field.name())
	}
}

impl<B> StructBinder for BeanMapping<B> {
	type Output = B;

	fn bind(&self, data: &FormData, path: &FieldPath) -> BindingResult<B> {
		let mut bean = (self.factory)();
		let mut errors = Vec::new();

		for field in &self.fields {
			let field_path = path.child(field.name());
			if let Err(field_errors) = field.bind_into(data, &mut bean, &field_path) {
				errors.extend(field_errors);
			}
		}

		match FieldErrors::from_vec(errors) {
			Some(errors) => {
				tracing::trace!(path = %path, errors = errors.len(), "bean binding failed");
				Err(errors)
			}
			None => Ok(bean),
		}
	}

	fn unbind(&self, bean: &B) -> FormData {
		let mut data = FormData::new();
		for field in &self.fields {
			data.extend(field.unbind(bean));
		}
		data
	}
}

/// Shorthand for [`BeanMapping::new`]
pub fn mapping<B: 'static>(factory: impl Fn() -> B + Send + Sync + 'static) -> BeanMapping<B> {
	BeanMapping::new(factory)
}
