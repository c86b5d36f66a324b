// File: src/validator.rs
// Purpose: Load, submit and reset handling for the contact form

use tracing::{debug, info};

use crate::check;
use crate::config::FormConfig;
use crate::contract;
use crate::error::PageResult;
use crate::page::{FormEvent, FormEventKind, Page};
use crate::state::{ErrorState, FormState};

/// Validates a form on a [`Page`] and renders the outcome into it.
///
/// Each pass computes an [`ErrorState`] from the current field values and
/// applies it in a single [`render`](FormValidator::render) step.
#[derive(Debug)]
pub struct FormValidator<P: Page> {
    page: P,
    config: FormConfig,
    state: FormState,
}

impl<P: Page> FormValidator<P> {
    /// Attaches to `page`, failing if any element the form needs is missing.
    pub fn new(page: P, config: FormConfig) -> PageResult<Self> {
        contract::verify(&page, &config)?;

        Ok(Self {
            page,
            config,
            state: FormState::Clean,
        })
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Hides every indicator and clears the error class from every required input.
    pub fn hide_errors(&mut self) -> PageResult<()> {
        self.page.hide_indicators(&self.config.marker_class)?;

        for field in &self.config.fields {
            self.page.remove_class(&field.key, &self.config.error_class)?;
        }

        self.state = FormState::Clean;
        Ok(())
    }

    /// Computes the error state for the current field values without touching the page.
    pub fn collect_errors(&self) -> PageResult<ErrorState> {
        let page = &self.page;
        check::error_check(&self.config.fields, self.config.phone_length, |key| {
            page.field_value(key)
        })
    }

    /// Runs a validation pass and renders its outcome.
    pub fn error_check(&mut self) -> PageResult<ErrorState> {
        let errors = self.collect_errors()?;
        debug!(errors = errors.len(), "Validation pass complete");

        self.render(&errors)?;
        Ok(errors)
    }

    /// Applies an error state: reveals indicators, marks inputs, then
    /// focuses (and usually selects) the first offender.
    pub fn render(&mut self, errors: &ErrorState) -> PageResult<()> {
        for error in &errors.errors {
            self.page.show_indicator(&error.indicator())?;
            self.page.add_class(&error.field, &self.config.error_class)?;
        }

        if let Some(first) = errors.first_offender() {
            self.page.focus(&first.field)?;

            let selects = self
                .config
                .field(&first.field)
                .map(|spec| first.failure.selects_text(spec.kind))
                .unwrap_or(true);
            if selects {
                self.page.select(&first.field)?;
            }
        }

        self.state = FormState::from(errors);
        Ok(())
    }

    /// Submit handler. Returns false and suppresses submission when any field fails.
    pub fn validate<E: FormEvent + ?Sized>(&mut self, event: &E) -> PageResult<bool> {
        self.hide_errors()?;

        let errors = self.error_check()?;
        if errors.has_errors() {
            event.prevent_default();
            return Ok(false);
        }

        Ok(true)
    }

    /// Reset handler. Asks for confirmation; declining suppresses the reset.
    pub fn reset_form<E: FormEvent + ?Sized>(&mut self, event: &E) -> PageResult<bool> {
        if self.page.confirm(&self.config.reset_prompt) {
            info!("Form reset confirmed");
            self.hide_errors()?;

            if let Some(first) = self.config.first_field() {
                let key = first.key.clone();
                self.page.focus(&key)?;
            }

            return Ok(true);
        }

        info!("Form reset declined");
        event.prevent_default();
        Ok(false)
    }

    /// Page load: hide errors, bind submit, reset the form, bind reset.
    ///
    /// `bind` registers the handler for one event kind with the host. The
    /// reset handler is bound only after the initial reset so loading the
    /// page never prompts.
    pub fn on_load<B>(&mut self, mut bind: B) -> PageResult<()>
    where
        B: FnMut(FormEventKind) -> PageResult<()>,
    {
        self.hide_errors()?;
        bind(FormEventKind::Submit)?;

        self.page.reset_form(&self.config.form_id)?;
        bind(FormEventKind::Reset)?;

        info!(form = %self.config.form_id, "Form validator attached");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageError;
    use crate::memory::{MemoryPage, RecordedEvent};
    use pretty_assertions::assert_eq;

    fn validator_with(values: &[(&str, &str)]) -> FormValidator<MemoryPage> {
        let config = FormConfig::default();
        let page = MemoryPage::with_values(&config, values.iter().copied());
        FormValidator::new(page, config).unwrap()
    }

    const VALID: [(&str, &str); 4] = [
        ("name", "A"),
        ("phone", "1234567890"),
        ("email", "a@b.com"),
        ("comments", "hi"),
    ];

    #[test]
    fn test_new_checks_contract() {
        let config = FormConfig::default();
        let mut page = MemoryPage::contact_page(&config);
        page.remove_element("email_formaterror");

        let err = FormValidator::new(page, config).unwrap_err();
        assert!(matches!(err, PageError::Contract { .. }));
    }

    #[test]
    fn test_render_marks_and_focuses() {
        let mut validator = validator_with(&[]);
        let mut errors = ErrorState::clean();
        errors.push("phone", crate::field::Failure::Length);
        errors.push("comments", crate::field::Failure::Missing);

        validator.render(&errors).unwrap();

        let page = validator.page();
        assert_eq!(page.visible_indicators(), ["comments_error", "phone_lengtherror"]);
        assert!(page.has_class("phone", "errorField"));
        assert!(page.has_class("comments", "errorField"));
        assert!(!page.has_class("name", "errorField"));
        assert_eq!(page.focused(), Some("phone"));
        assert_eq!(page.selected(), Some("phone"));
        assert_eq!(validator.state(), FormState::ErrorShown);
    }

    #[test]
    fn test_email_format_focuses_without_select() {
        let mut values = VALID;
        values[2] = ("email", "not-an-email");
        let mut validator = validator_with(&values);

        let event = RecordedEvent::new();
        assert!(!validator.validate(&event).unwrap());

        assert_eq!(validator.page().focused(), Some("email"));
        assert_eq!(validator.page().selected(), None);
    }

    #[test]
    fn test_repeated_failures_do_not_stack_classes() {
        let mut validator = validator_with(&[]);
        let event = RecordedEvent::new();

        validator.validate(&event).unwrap();
        validator.validate(&event).unwrap();

        assert_eq!(validator.page().classes("name"), ["errorField"]);
    }

    #[test]
    fn test_collect_errors_leaves_page_untouched() {
        let mut validator = validator_with(&[]);
        let errors = validator.collect_errors().unwrap();

        assert_eq!(errors.len(), 4);
        assert!(validator.page().visible_indicators().is_empty());
        assert_eq!(validator.state(), FormState::Clean);

        validator.hide_errors().unwrap();
        assert_eq!(validator.page().focused(), None);
    }
}
