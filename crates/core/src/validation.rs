//! Bridge from `validator` results to envelope field errors.

use std::collections::BTreeMap;

use validator::{ValidationError, ValidationErrors};

use crate::types::FieldErrors;

/// Human-readable text for one violation: its message, or the rule code when
/// the rule was declared without one.
fn violation_text(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => error.code.to_string(),
    }
}

/// Flatten field-level validation errors into [`FieldErrors`].
///
/// Fields are sorted by name so the output is stable; messages keep the
/// order the validator reported them in. Nested struct and list errors are
/// not descended into.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let sorted: BTreeMap<String, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, violations)| {
            (
                field.to_string(),
                violations.iter().map(violation_text).collect(),
            )
        })
        .collect();

    sorted.into_iter().collect()
}
