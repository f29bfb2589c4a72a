//! Client-side validation
//!
//! Rules run on submit only. Each field reports at most one message.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use shared::EmployeeStatus;

use super::{Field, FormFields, FormMode};

/// Loose `<non-space>@<non-space>.<non-space>` check
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));

pub const ID_REQUIRED: &str = "Id is required.";
pub const NAME_REQUIRED: &str = "Name is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Email address is invalid.";
pub const STATUS_REQUIRED: &str = "Status selection is required.";
pub const STATUS_UNKNOWN: &str = "Status must be active or inactive.";

/// Validation messages keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate the current field values for the given mode.
///
/// `id` is only required in create mode; in edit mode the input is
/// disabled and the route identifier is used instead.
pub fn validate(fields: &FormFields, mode: &FormMode) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if mode.is_create() && fields.id.trim().is_empty() {
        errors.insert(Field::Id, ID_REQUIRED);
    }
    if fields.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }
    if fields.email.trim().is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&fields.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }
    if fields.status.is_empty() {
        errors.insert(Field::Status, STATUS_REQUIRED);
    } else if fields.status.parse::<EmployeeStatus>().is_err() {
        errors.insert(Field::Status, STATUS_UNKNOWN);
    }

    errors
}
