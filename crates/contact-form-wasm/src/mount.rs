//! Attaching the validator to the page's form events

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use contact_form_core::{FormConfig, FormEventKind, FormValidator, PageError, PageResult};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Event, HtmlFormElement};

use crate::dom::{dom_err, DomEvent, DomPage};

type SharedValidator = Rc<RefCell<FormValidator<DomPage>>>;

thread_local! {
    /// Ids of forms that already carry listeners
    static ATTACHED: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

/// Records `form_id` as attached. Fails if it already was.
fn claim(form_id: &str) -> PageResult<()> {
    ATTACHED.with(|attached| {
        if attached.borrow_mut().insert(form_id.to_string()) {
            Ok(())
        } else {
            Err(PageError::AlreadyAttached {
                id: form_id.to_string(),
            })
        }
    })
}

/// Verifies the page, then runs the load sequence with real listeners.
///
/// A form is attached at most once; later calls for the same form id
/// return [`PageError::AlreadyAttached`] and bind nothing.
pub fn mount(config: FormConfig) -> PageResult<()> {
    let page = DomPage::from_global()?;
    let form = page.form(&config.form_id)?;

    let validator = FormValidator::new(page, config)?;
    claim(&validator.config().form_id)?;

    let validator: SharedValidator = Rc::new(RefCell::new(validator));

    validator
        .borrow_mut()
        .on_load(|kind| listen(&form, kind, &validator))?;
    Ok(())
}

/// Mounts once the document has been parsed, or right away if it already has.
///
/// A failed mount is reported on the console, not returned, so a page
/// without the form still loads the module.
pub fn mount_when_ready(config: FormConfig) -> Result<(), JsValue> {
    let document = DomPage::from_global()
        .map_err(|e| JsValue::from_str(&e.to_string()))?
        .document()
        .clone();

    if document.ready_state() != "loading" {
        mount_or_log(config);
        return Ok(());
    }

    let on_ready = Closure::once_into_js(move || mount_or_log(config));
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
}

fn mount_or_log(config: FormConfig) {
    if let Err(err) = mount(config) {
        console::error_1(&format!("contact form: {}", err).into());
    }
}

fn listen(form: &HtmlFormElement, kind: FormEventKind, validator: &SharedValidator) -> PageResult<()> {
    let validator = Rc::clone(validator);

    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Ok(mut guard) = validator.try_borrow_mut() else {
            // Reset dispatched from inside another handler
            console::warn_1(&format!("contact form: ignoring nested {} event", kind.event_type()).into());
            return;
        };

        let dom_event = DomEvent(&event);
        let result = match kind {
            FormEventKind::Submit => guard.validate(&dom_event),
            FormEventKind::Reset => guard.reset_form(&dom_event),
        };

        if let Err(err) = result {
            console::error_1(&format!("contact form: {} handler failed: {}", kind.event_type(), err).into());
            // Never submit a form that could not be checked
            if kind == FormEventKind::Submit {
                event.prevent_default();
            }
        }
    });

    form.add_event_listener_with_callback(kind.event_type(), handler.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    // Listeners live as long as the page
    handler.forget();

    Ok(())
}
