//! Contact Form WASM
//!
//! WebAssembly bindings for the contact form validator.
//! Attaches to the page's `contactform` on load and exposes the pure
//! checks to JavaScript.

use std::collections::HashMap;

use contact_form_core::{self as validation, FormConfig};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod mount;

pub use dom::{DomEvent, DomPage};

/// Set panic hook for better error messages in the browser, then attach
/// to the default contact form
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "auto-mount")]
    mount::mount_when_ready(FormConfig::default())?;

    Ok(())
}

/// Failure reported to JavaScript
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FieldReport {
    pub field: String,
    pub failure: validation::Failure,
    pub indicator: String,
    pub message: String,
}

fn parse_config(config: JsValue) -> Result<FormConfig, JsValue> {
    let config: FormConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;
    config
        .validate()
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
    Ok(config)
}

fn reports(config: &FormConfig, values: &HashMap<String, String>) -> Vec<FieldReport> {
    let state = validation::check_values(&config.fields, config.phone_length, values);

    state
        .errors
        .iter()
        .map(|error| FieldReport {
            field: error.field.clone(),
            failure: error.failure,
            indicator: error.indicator(),
            message: config
                .field(&error.field)
                .map(|spec| spec.message(error.failure))
                .unwrap_or_default(),
        })
        .collect()
}

/// Attach to the default contact form now
#[wasm_bindgen(js_name = mount)]
pub fn mount_default() -> Result<(), JsValue> {
    mount::mount(FormConfig::default()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Attach with a custom configuration
///
/// # Example (JavaScript)
/// ```javascript
/// mountWithConfig({
///     form_id: 'feedback',
///     fields: [
///         { key: 'email', kind: 'email' },
///         { key: 'message', kind: 'textarea' }
///     ]
/// });
/// ```
#[wasm_bindgen(js_name = mountWithConfig)]
pub fn mount_with_config(config: JsValue) -> Result<(), JsValue> {
    let config = parse_config(config)?;
    mount::mount(config).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate plain field values without touching the page
///
/// # Returns
/// Array of failures in field order (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const failures = checkValues({
///     name: 'Ada',
///     phone: '12345',
///     email: 'ada@example.com',
///     comments: 'hello'
/// });
/// // [{ field: 'phone', failure: 'length', indicator: 'phone_lengtherror', message: '...' }]
/// ```
#[wasm_bindgen(js_name = checkValues)]
pub fn check_values_js(values: JsValue) -> Result<JsValue, JsValue> {
    let values: HashMap<String, String> = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;

    let failures = reports(&FormConfig::default(), &values);
    Ok(serde_wasm_bindgen::to_value(&failures)?)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    validation::is_valid_email(email)
}

/// Quick phone validation
#[wasm_bindgen(js_name = isValidPhone)]
pub fn is_valid_phone_js(phone: &str) -> bool {
    validation::is_valid_phone(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email_js("user@example.com"));
        assert!(!is_valid_email_js("invalid-email"));
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone_js("1234567890"));
        assert!(!is_valid_phone_js("12345"));
        assert!(!is_valid_phone_js("12345abcde"));
    }

    #[test]
    fn test_reports() {
        let config = FormConfig::default();
        let failures = reports(
            &config,
            &values(&[("name", "Ada"), ("phone", "12345"), ("email", "ada@example.com")]),
        );

        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].indicator, "phone_lengtherror");
        assert_eq!(failures[0].message, "Phone number must be 10 digits.");
        assert_eq!(failures[1].indicator, "comments_error");
    }

    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen_test::wasm_bindgen_test]
    fn test_check_values_round_trip() {
        let input = serde_wasm_bindgen::to_value(&values(&[("name", "Ada")])).unwrap();
        let output = check_values_js(input).unwrap();
        let failures: Vec<FieldReport> = serde_wasm_bindgen::from_value(output).unwrap();

        let indicators: Vec<_> = failures.iter().map(|f| f.indicator.as_str()).collect();
        assert_eq!(indicators, ["phone_error", "email_error", "comments_error"]);
    }
}
