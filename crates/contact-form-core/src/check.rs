//! The validation pass over required fields

use std::collections::HashMap;

use crate::email::is_valid_email;
use crate::error::PageError;
use crate::field::{Failure, FieldKind, FieldSpec};
use crate::phone::check_phone;
use crate::state::ErrorState;
use crate::text::has_input;

/// Checks one field value. At most one failure is reported per field.
pub fn check_field(spec: &FieldSpec, value: Option<&str>, phone_length: usize) -> Option<Failure> {
    if !has_input(value) {
        return Some(Failure::Missing);
    }
    let value = value.unwrap_or_default();

    match spec.kind {
        FieldKind::Tel => check_phone(value, phone_length),
        FieldKind::Email if !is_valid_email(value) => Some(Failure::Format),
        _ => None,
    }
}

/// Runs every field through [`check_field`] in order.
///
/// `value_of` reads a field's current value by key; a lookup fault aborts the pass.
pub fn error_check<F>(
    fields: &[FieldSpec],
    phone_length: usize,
    mut value_of: F,
) -> Result<ErrorState, PageError>
where
    F: FnMut(&str) -> Result<Option<String>, PageError>,
{
    let mut state = ErrorState::clean();

    for spec in fields {
        let value = value_of(&spec.key)?;
        if let Some(failure) = check_field(spec, value.as_deref(), phone_length) {
            state.push(spec.key.clone(), failure);
        }
    }

    Ok(state)
}

/// Runs the pass over a plain map of values. Keys not in the map count as absent.
pub fn check_values(
    fields: &[FieldSpec],
    phone_length: usize,
    values: &HashMap<String, String>,
) -> ErrorState {
    let mut state = ErrorState::clean();

    for spec in fields {
        let value = values.get(&spec.key).map(String::as_str);
        if let Some(failure) = check_field(spec, value, phone_length) {
            state.push(spec.key.clone(), failure);
        }
    }

    state
}
