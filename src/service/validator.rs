//! Field rules for [`ClientInput`].
//!
//! Every rule runs; violations are collected in declaration order (name, age,
//! comment) so the resulting messages are deterministic.

use crate::model::ClientInput;

/// One violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Outcome of validating one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A pure check over a write payload.
pub trait Validate: Send + Sync {
    fn validate(&self, input: &ClientInput) -> ValidationResult;
}

/// The rules applied to client writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientValidator;

impl Validate for ClientValidator {
    fn validate(&self, input: &ClientInput) -> ValidationResult {
        let mut errors = Vec::new();

        if is_blank(&input.name) {
            errors.push(FieldError::new("name", "Name is required."));
        } else if is_number(&input.name) {
            errors.push(FieldError::new("name", "Name must be a string."));
        }

        if input.age == 0 {
            errors.push(FieldError::new("age", "Age is required."));
        }
        if input.age <= 0 {
            errors.push(FieldError::new("age", "Age must be greater than 0."));
        }

        if is_blank(&input.comment) {
            errors.push(FieldError::new("comment", "Comment is required."));
        } else if is_number(&input.comment) {
            errors.push(FieldError::new("comment", "Comment must be a string."));
        }

        ValidationResult { errors }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Text that is really an integer ("42", " -7 ") is not accepted as free text.
fn is_number(value: &str) -> bool {
    value.trim().parse::<i32>().is_ok()
}
