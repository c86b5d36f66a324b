//! `Page` over the live browser document

use contact_form_core::{FormEvent, Page, PageError, PageResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, Window,
};

pub(crate) fn dom_err(value: JsValue) -> PageError {
    PageError::Dom(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// The current window's document, seen through the [`Page`] trait.
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn new(window: Window) -> PageResult<Self> {
        let document = window
            .document()
            .ok_or_else(|| PageError::Dom("window has no document".to_string()))?;
        Ok(Self { window, document })
    }

    pub fn from_global() -> PageResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| PageError::Dom("no global window".to_string()))?;
        Self::new(window)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> PageResult<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::MissingElement { id: id.to_string() })
    }

    fn html_element(&self, id: &str) -> PageResult<HtmlElement> {
        self.element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PageError::WrongElementType {
                id: id.to_string(),
                expected: "HTML element",
            })
    }

    pub fn form(&self, id: &str) -> PageResult<HtmlFormElement> {
        self.element(id)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| PageError::WrongElementType {
                id: id.to_string(),
                expected: "form",
            })
    }

    fn set_display(&self, element: &Element, display: &str) -> PageResult<()> {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            html.style()
                .set_property("display", display)
                .map_err(dom_err)?;
        }
        Ok(())
    }
}

impl Page for DomPage {
    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn field_value(&self, id: &str) -> PageResult<Option<String>> {
        let element = self.element(id)?;

        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Ok(Some(input.value()));
        }
        if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            return Ok(Some(textarea.value()));
        }

        Err(PageError::WrongElementType {
            id: id.to_string(),
            expected: "input or textarea",
        })
    }

    fn hide_indicators(&mut self, marker_class: &str) -> PageResult<()> {
        let indicators = self.document.get_elements_by_class_name(marker_class);

        for i in 0..indicators.length() {
            if let Some(element) = indicators.item(i) {
                self.set_display(&element, "none")?;
            }
        }
        Ok(())
    }

    fn show_indicator(&mut self, id: &str) -> PageResult<()> {
        let element = self.element(id)?;
        self.set_display(&element, "block")
    }

    fn add_class(&mut self, id: &str, class: &str) -> PageResult<()> {
        self.element(id)?.class_list().add_1(class).map_err(dom_err)
    }

    fn remove_class(&mut self, id: &str, class: &str) -> PageResult<()> {
        self.element(id)?
            .class_list()
            .remove_1(class)
            .map_err(dom_err)
    }

    fn focus(&mut self, id: &str) -> PageResult<()> {
        self.html_element(id)?.focus().map_err(dom_err)
    }

    fn select(&mut self, id: &str) -> PageResult<()> {
        let element = self.element(id)?;

        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.select();
        } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            textarea.select();
        }
        Ok(())
    }

    fn confirm(&mut self, message: &str) -> bool {
        // A blocked or failing dialog counts as a refusal
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn reset_form(&mut self, form_id: &str) -> PageResult<()> {
        self.form(form_id)?.reset();
        Ok(())
    }
}

/// Borrowed DOM event handed to the validator's handlers.
pub struct DomEvent<'a>(pub &'a Event);

impl FormEvent for DomEvent<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}
