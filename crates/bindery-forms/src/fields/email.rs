//! Email address binder

use crate::binder::FieldBinder;
use crate::config::{Messages, default_messages};
use crate::error::{BindingResult, FieldErrors};
use crate::path::FieldPath;
use regex::Regex;
use std::sync::{Arc, LazyLock};

// Dot-atom local part (no leading, trailing or doubled dots) or a quoted
// string, followed by an ASCII domain with at least one dot and an alphabetic TLD.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r#"^(?:[-a-zA-Z0-9!#$%&'*+/=?^_`{|}~]+(?:\.[-a-zA-Z0-9!#$%&'*+/=?^_`{|}~]+)*|"(?:[^"\r\\]|\\["\r\\])*")@[a-zA-Z0-9](?:[a-zA-Z0-9_.-]*[a-zA-Z0-9])?\.[a-zA-Z](?:[a-zA-Z.]*[a-zA-Z])?$"#,
	)
	.expect("EMAIL_REGEX: invalid regex pattern")
});

/// Text that must look like an email address
///
/// Absent input is checked as the empty string and therefore fails; wrap in
/// [`optional`](crate::optional) for an optional address.
#[derive(Debug, Clone)]
pub struct Email {
	messages: Arc<Messages>,
}

impl Email {
	pub fn new() -> Self {
		Self {
			messages: default_messages(),
		}
	}

	pub fn with_messages(mut self, messages: Arc<Messages>) -> Self {
		self.messages = messages;
		self
	}
}

impl Default for Email {
	fn default() -> Self {
		Self::new()
	}
}

impl FieldBinder for Email {
	type Output = String;

	fn bind(&self, raw: Option<&str>, path: &FieldPath) -> BindingResult<String> {
		let raw = raw.unwrap_or_default();
		if EMAIL_REGEX.is_match(raw) {
			Ok(raw.to_string())
		} else {
			Err(FieldErrors::single(
				path.clone(),
				&self.messages.invalid_email,
			))
		}
	}

	fn unbind(&self, value: &String) -> Option<String> {
		Some(value.clone())
	}
}

pub fn email() -> Email {
	Email::new()
}
