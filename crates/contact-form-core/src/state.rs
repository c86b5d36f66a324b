//! Outcome of a validation pass

use serde::{Deserialize, Serialize};

use crate::field::{indicator_id, Failure};

/// One failing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub failure: Failure,
}

impl FieldError {
    pub fn new(field: impl Into<String>, failure: Failure) -> Self {
        Self {
            field: field.into(),
            failure,
        }
    }

    /// Id of the indicator element revealing this error.
    pub fn indicator(&self) -> String {
        indicator_id(&self.field, self.failure)
    }
}

/// Every failure found in one pass, in field order.
///
/// Recomputed from scratch on each pass; indicator visibility and error
/// classes on the page are derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorState {
    pub errors: Vec<FieldError>,
}

impl ErrorState {
    pub fn clean() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, failure: Failure) {
        self.errors.push(FieldError::new(field, failure));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The field that receives focus after rendering.
    pub fn first_offender(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn visible_indicators(&self) -> Vec<String> {
        self.errors.iter().map(FieldError::indicator).collect()
    }

    pub fn failure_for(&self, field: &str) -> Option<Failure> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.failure)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Observable state of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    /// No indicator visible
    #[default]
    Clean,
    /// At least one indicator visible
    ErrorShown,
}

impl From<&ErrorState> for FormState {
    fn from(state: &ErrorState) -> Self {
        if state.has_errors() {
            FormState::ErrorShown
        } else {
            FormState::Clean
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_state() {
        let state = ErrorState::clean();
        assert!(state.is_empty());
        assert!(!state.has_errors());
        assert!(state.first_offender().is_none());
        assert!(state.visible_indicators().is_empty());
        assert_eq!(FormState::from(&state), FormState::Clean);
    }

    #[test]
    fn test_error_state() {
        let mut state = ErrorState::clean();
        state.push("phone", Failure::Length);
        state.push("email", Failure::Format);

        assert!(state.has_errors());
        assert_eq!(state.len(), 2);
        assert_eq!(state.first_offender().map(|e| e.field.as_str()), Some("phone"));
        assert_eq!(
            state.visible_indicators(),
            ["phone_lengtherror", "email_formaterror"]
        );
        assert_eq!(state.failure_for("email"), Some(Failure::Format));
        assert_eq!(state.failure_for("name"), None);
        assert_eq!(FormState::from(&state), FormState::ErrorShown);
    }

    #[test]
    fn test_json_shape() {
        let mut state = ErrorState::clean();
        state.push("email", Failure::Format);

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "errors": [{ "field": "email", "failure": "format" }] })
        );
        assert_eq!(
            serde_json::to_value(FormState::ErrorShown).unwrap(),
            serde_json::json!("error_shown")
        );
    }
}
