// File: src/memory.rs
// Purpose: In-memory page used by tests and the command line checker

use std::cell::Cell;
use std::collections::BTreeMap;

use crate::config::FormConfig;
use crate::error::{PageError, PageResult};
use crate::page::{FormEvent, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    Form,
    Input,
    Indicator,
}

#[derive(Debug, Clone)]
struct MemoryElement {
    kind: ElementKind,
    value: Option<String>,
    classes: Vec<String>,
    visible: bool,
}

impl MemoryElement {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            value: None,
            classes: Vec::new(),
            visible: true,
        }
    }
}

/// A page held in plain maps.
///
/// Records focus, selection, prompts and resets so callers can assert on them.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    elements: BTreeMap<String, MemoryElement>,
    focused: Option<String>,
    selected: Option<String>,
    confirm_answer: bool,
    prompts: Vec<String>,
    reset_count: usize,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    pub fn new() -> Self {
        Self {
            elements: BTreeMap::new(),
            focused: None,
            selected: None,
            confirm_answer: true,
            prompts: Vec::new(),
            reset_count: 0,
        }
    }

    /// Builds a page satisfying the contract for `config`: empty inputs and
    /// hidden indicators carrying the marker class.
    pub fn contact_page(config: &FormConfig) -> Self {
        let mut page = Self::new();
        page.add_form(&config.form_id);

        for field in &config.fields {
            page.add_input(&field.key);
            for id in field.indicator_ids() {
                page.add_indicator(&id, &config.marker_class);
            }
        }

        page
    }

    /// Same as [`MemoryPage::contact_page`] with the given field values filled in.
    pub fn with_values<'a, I>(config: &FormConfig, values: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut page = Self::contact_page(config);
        for (key, value) in values {
            page.set_value(key, value);
        }
        page
    }

    pub fn add_form(&mut self, id: &str) {
        self.elements
            .insert(id.to_string(), MemoryElement::new(ElementKind::Form));
    }

    pub fn add_input(&mut self, id: &str) {
        let mut element = MemoryElement::new(ElementKind::Input);
        element.value = Some(String::new());
        self.elements.insert(id.to_string(), element);
    }

    pub fn add_indicator(&mut self, id: &str, marker_class: &str) {
        let mut element = MemoryElement::new(ElementKind::Indicator);
        element.classes.push(marker_class.to_string());
        element.visible = false;
        self.elements.insert(id.to_string(), element);
    }

    pub fn remove_element(&mut self, id: &str) {
        self.elements.remove(id);
    }

    pub fn set_value(&mut self, id: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.value = Some(value.to_string());
        }
    }

    /// Makes an input report no value at all.
    pub fn clear_value(&mut self, id: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.value = None;
        }
    }

    /// Answer given to the next confirmation prompts.
    pub fn set_confirm(&mut self, answer: bool) {
        self.confirm_answer = answer;
    }

    /// Forces an indicator visible, bypassing the validator.
    pub fn reveal(&mut self, id: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.visible = true;
        }
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.elements.get(id).and_then(|e| e.value.as_deref())
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).map(|e| e.visible).unwrap_or(false)
    }

    /// Ids of visible indicators, sorted.
    pub fn visible_indicators(&self) -> Vec<String> {
        self.elements
            .iter()
            .filter(|(_, e)| e.kind == ElementKind::Indicator && e.visible)
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .map(|e| e.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn classes(&self, id: &str) -> Vec<String> {
        self.elements
            .get(id)
            .map(|e| e.classes.clone())
            .unwrap_or_default()
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn reset_count(&self) -> usize {
        self.reset_count
    }

    fn element_mut(&mut self, id: &str) -> PageResult<&mut MemoryElement> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| PageError::MissingElement { id: id.to_string() })
    }

    fn input(&self, id: &str) -> PageResult<&MemoryElement> {
        let element = self
            .elements
            .get(id)
            .ok_or_else(|| PageError::MissingElement { id: id.to_string() })?;

        if element.kind != ElementKind::Input {
            return Err(PageError::WrongElementType {
                id: id.to_string(),
                expected: "input",
            });
        }

        Ok(element)
    }
}

impl Page for MemoryPage {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn field_value(&self, id: &str) -> PageResult<Option<String>> {
        Ok(self.input(id)?.value.clone())
    }

    fn hide_indicators(&mut self, marker_class: &str) -> PageResult<()> {
        for element in self.elements.values_mut() {
            if element.classes.iter().any(|c| c == marker_class) {
                element.visible = false;
            }
        }
        Ok(())
    }

    fn show_indicator(&mut self, id: &str) -> PageResult<()> {
        self.element_mut(id)?.visible = true;
        Ok(())
    }

    fn add_class(&mut self, id: &str, class: &str) -> PageResult<()> {
        let element = self.element_mut(id)?;
        if !element.classes.iter().any(|c| c == class) {
            element.classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&mut self, id: &str, class: &str) -> PageResult<()> {
        self.element_mut(id)?.classes.retain(|c| c != class);
        Ok(())
    }

    fn focus(&mut self, id: &str) -> PageResult<()> {
        self.input(id)?;
        self.focused = Some(id.to_string());
        Ok(())
    }

    fn select(&mut self, id: &str) -> PageResult<()> {
        self.input(id)?;
        self.selected = Some(id.to_string());
        Ok(())
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.confirm_answer
    }

    fn reset_form(&mut self, form_id: &str) -> PageResult<()> {
        let form = self
            .elements
            .get(form_id)
            .ok_or_else(|| PageError::MissingElement { id: form_id.to_string() })?;
        if form.kind != ElementKind::Form {
            return Err(PageError::WrongElementType {
                id: form_id.to_string(),
                expected: "form",
            });
        }

        for element in self.elements.values_mut() {
            if element.kind == ElementKind::Input {
                element.value = Some(String::new());
            }
        }
        self.reset_count += 1;
        Ok(())
    }
}

/// An event that remembers whether its default action was suppressed.
#[derive(Debug, Default)]
pub struct RecordedEvent {
    prevented: Cell<bool>,
}

impl RecordedEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

impl FormEvent for RecordedEvent {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_page_starts_hidden() {
        let page = MemoryPage::contact_page(&FormConfig::default());
        assert!(page.visible_indicators().is_empty());
        assert_eq!(page.value("name"), Some(""));
        assert!(page.has_class("phone_lengtherror", "error"));
    }

    #[test]
    fn test_field_value_on_indicator_fails() {
        let page = MemoryPage::contact_page(&FormConfig::default());
        let err = page.field_value("name_error").unwrap_err();
        assert!(matches!(err, PageError::WrongElementType { expected: "input", .. }));
    }

    #[test]
    fn test_add_class_is_idempotent() {
        let mut page = MemoryPage::contact_page(&FormConfig::default());
        page.add_class("name", "errorField").unwrap();
        page.add_class("name", "errorField").unwrap();
        assert_eq!(page.classes("name"), ["errorField"]);

        page.remove_class("name", "errorField").unwrap();
        assert!(page.classes("name").is_empty());
    }

    #[test]
    fn test_reset_clears_values() {
        let config = FormConfig::default();
        let mut page = MemoryPage::with_values(&config, [("name", "Ada"), ("email", "a@b.com")]);
        page.reset_form("contactform").unwrap();

        assert_eq!(page.value("name"), Some(""));
        assert_eq!(page.value("email"), Some(""));
        assert_eq!(page.reset_count(), 1);
        assert!(page.reset_form("name").is_err());
    }

    #[test]
    fn test_recorded_event() {
        let event = RecordedEvent::new();
        assert!(!event.is_default_prevented());
        event.prevent_default();
        assert!(event.is_default_prevented());
    }
}
