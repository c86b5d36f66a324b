//! The seam between the validator and the document it drives
//!
//! The validator never looks elements up globally. Everything it touches
//! goes through a [`Page`] handed to it at construction, so the same logic
//! runs against the browser DOM and against an in-memory page in tests.

use crate::error::PageResult;

/// Element operations the validator needs from its host document.
///
/// Ids are element ids. Class names are bare names, without a leading dot.
pub trait Page {
    /// Whether an element with this id exists.
    fn has_element(&self, id: &str) -> bool;

    /// Current value of an input. `None` when the control has no value at all.
    fn field_value(&self, id: &str) -> PageResult<Option<String>>;

    /// Hides every element carrying `marker_class`.
    fn hide_indicators(&mut self, marker_class: &str) -> PageResult<()>;

    /// Makes an indicator visible.
    fn show_indicator(&mut self, id: &str) -> PageResult<()>;

    /// Adds `class` to an element. Adding a class it already has is a no-op.
    fn add_class(&mut self, id: &str, class: &str) -> PageResult<()>;

    fn remove_class(&mut self, id: &str, class: &str) -> PageResult<()>;

    fn focus(&mut self, id: &str) -> PageResult<()>;

    /// Selects the text of an input.
    fn select(&mut self, id: &str) -> PageResult<()>;

    /// Blocking yes/no prompt. Returns true when the user confirms.
    fn confirm(&mut self, message: &str) -> bool;

    /// Runs the native reset of a form.
    fn reset_form(&mut self, form_id: &str) -> PageResult<()>;
}

/// A cancellable browser event.
pub trait FormEvent {
    /// Suppresses the default action (submission or reset).
    fn prevent_default(&self);
}

/// Form events the validator handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEventKind {
    Submit,
    Reset,
}

impl FormEventKind {
    /// DOM event type name
    pub fn event_type(self) -> &'static str {
        match self {
            FormEventKind::Submit => "submit",
            FormEventKind::Reset => "reset",
        }
    }
}
