//! Structured field addresses
//!
//! Errors and raw values are addressed by paths such as `addr.city` or
//! `tags[2]`. Paths are kept as a sequence of segments while binding and are
//! only rendered to text at the boundary, so deep nesting never has to glue
//! strings together by hand.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One step of a [`FieldPath`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
	/// A named field, rendered as `name` (or `.name` after another segment)
	Field(String),
	/// A list position, rendered as `[index]`
	Index(usize),
}

/// Address of a value inside a flat form mapping
///
/// The empty path is the root: errors attached to it belong to the form
/// (or nested object) as a whole.
///
/// # Examples
///
/// ```
/// use bindery_forms::FieldPath;
///
/// let path = FieldPath::root().child("user").child("tags").index(2);
/// assert_eq!(path.to_string(), "user.tags[2]");
/// assert_eq!("user.tags[2]".parse::<FieldPath>().unwrap(), path);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
	segments: Vec<PathSegment>,
}

impl FieldPath {
	/// The root path (renders as `""`)
	pub fn root() -> Self {
		Self::default()
	}

	/// Returns a new path with a named segment appended
	pub fn child(&self, name: impl Into<String>) -> Self {
		let mut segments = self.segments.clone();
		segments.push(PathSegment::Field(name.into()));
		Self { segments }
	}

	/// Returns a new path with an index segment appended
	pub fn index(&self, index: usize) -> Self {
		let mut segments = self.segments.clone();
		segments.push(PathSegment::Index(index));
		Self { segments }
	}

	pub fn is_root(&self) -> bool {
		self.segments.is_empty()
	}

	pub fn segments(&self) -> &[PathSegment] {
		&self.segments
	}

	/// The last segment, if any
	pub fn last(&self) -> Option<&PathSegment> {
		self.segments.last()
	}

	/// Returns this path followed by every segment of `other`
	///
	/// # Examples
	///
	/// ```
	/// use bindery_forms::FieldPath;
	///
	/// let addr = FieldPath::root().child("addr");
	/// let city = FieldPath::root().child("city");
	/// assert_eq!(addr.join(&city).to_string(), "addr.city");
	/// ```
	pub fn join(&self, other: &FieldPath) -> Self {
		let mut segments = self.segments.clone();
		segments.extend(other.segments.iter().cloned());
		Self { segments }
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (position, segment) in self.segments.iter().enumerate() {
			match segment {
				PathSegment::Field(name) if position == 0 => f.write_str(name)?,
				PathSegment::Field(name) => write!(f, ".{}", name)?,
				PathSegment::Index(index) => write!(f, "[{}]", index)?,
			}
		}
		Ok(())
	}
}

/// Error returned when a textual path is malformed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Malformed field path '{0}'")]
pub struct ParsePathError(pub String);

impl FromStr for FieldPath {
	type Err = ParsePathError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let malformed = || ParsePathError(s.to_string());
		let mut segments = Vec::new();
		let mut rest = s;

		while !rest.is_empty() {
			if let Some(after_bracket) = rest.strip_prefix('[') {
				let close = after_bracket.find(']').ok_or_else(malformed)?;
				let digits = &after_bracket[..close];
				if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
					return Err(malformed());
				}
				let index = digits.parse().map_err(|_| malformed())?;
				segments.push(PathSegment::Index(index));
				rest = &after_bracket[close + 1..];
				continue;
			}

			let name_part = if segments.is_empty() {
				rest
			} else {
				rest.strip_prefix('.').ok_or_else(malformed)?
			};
			let end = name_part.find(['.', '[']).unwrap_or(name_part.len());
			if end == 0 {
				return Err(malformed());
			}
			segments.push(PathSegment::Field(name_part[..end].to_string()));
			rest = &name_part[end..];
		}

		Ok(Self { segments })
	}
}

impl Serialize for FieldPath {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for FieldPath {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		raw.parse().map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(FieldPath::root(), "")]
	#[case(FieldPath::root().child("age"), "age")]
	#[case(FieldPath::root().child("addr").child("city"), "addr.city")]
	#[case(FieldPath::root().child("tags").index(2), "tags[2]")]
	#[case(FieldPath::root().index(0), "[0]")]
	#[case(FieldPath::root().child("rows").index(1).child("name"), "rows[1].name")]
	fn test_display_and_parse(#[case] path: FieldPath, #[case] rendered: &str) {
		// Act & Assert
		assert_eq!(path.to_string(), rendered);
		assert_eq!(rendered.parse::<FieldPath>().unwrap(), path);
	}

	#[rstest]
	#[case(".age")]
	#[case("addr..city")]
	#[case("tags[]")]
	#[case("tags[x]")]
	#[case("tags[1")]
	#[case("tags[1]city")]
	#[case("tags[-1]")]
	fn test_parse_rejects_malformed(#[case] raw: &str) {
		assert!(raw.parse::<FieldPath>().is_err());
	}

	#[rstest]
	fn test_root_is_empty() {
		assert!(FieldPath::root().is_root());
		assert!(!FieldPath::root().child("a").is_root());
	}

	#[rstest]
	fn test_segments_and_last() {
		// Arrange
		let path = FieldPath::root().child("rows").index(3).child("name");

		// Act
		let segments = path.segments();

		// Assert
		assert_eq!(
			segments,
			&[
				PathSegment::Field("rows".to_string()),
				PathSegment::Index(3),
				PathSegment::Field("name".to_string()),
			]
		);
		assert_eq!(path.last(), Some(&PathSegment::Field("name".to_string())));
		assert_eq!(FieldPath::root().child("tags").index(0).last(), Some(&PathSegment::Index(0)));
		assert_eq!(FieldPath::root().last(), None);
	}

	#[rstest]
	fn test_serializes_as_string() {
		let path = FieldPath::root().child("addr").child("street");

		let json = serde_json::to_string(&path).unwrap();

		assert_eq!(json, "\"addr.street\"");
		assert_eq!(serde_json::from_str::<FieldPath>(&json).unwrap(), path);
	}
}
