//! Contact form markup
//!
//! Renders a form that satisfies the page contract for a [`FormConfig`]:
//! every input, every indicator (hidden, carrying the marker class), and
//! the submit and reset buttons.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::config::{is_class_token, FormConfig};
use crate::field::{indicator_id, FieldKind, FieldSpec};

/// Default location of the wasm-pack bundle.
pub const DEFAULT_BUNDLE: &str = "/pkg/contact_form_wasm.js";

/// Renders the `<form>` element alone.
///
/// # Example
/// ```
/// use contact_form_core::{markup, FormConfig};
///
/// let html = markup::contact_form(&FormConfig::default()).into_string();
/// assert!(html.contains(r#"id="contactform""#));
/// assert!(html.contains(r#"id="phone_lengtherror""#));
/// ```
pub fn contact_form(config: &FormConfig) -> Markup {
    html! {
        form id=(config.form_id) method="post" novalidate {
            @for field in &config.fields {
                (field_row(config, field))
            }
            div.actions {
                button type="submit" { "Send" }
                button type="reset" { "Reset" }
            }
        }
    }
}

fn field_row(config: &FormConfig, field: &FieldSpec) -> Markup {
    html! {
        div.field {
            label for=(field.key) { (field.display_label()) }
            @if field.kind == FieldKind::Textarea {
                textarea id=(field.key) name=(field.key) rows="6" {}
            } @else {
                input id=(field.key) name=(field.key) type=(field.kind.input_type());
            }
            @for failure in field.kind.failures() {
                span id=(indicator_id(&field.key, *failure))
                    class=(config.marker_class)
                    style="display:none" {
                    (field.message(*failure))
                }
            }
        }
    }
}

/// Renders a full HTML document around the form that loads the validator bundle.
pub fn contact_page(title: &str, config: &FormConfig, bundle: &str) -> Markup {
    let loader = format!("import init from \"{}\";\ninit();", js_string(bundle));

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(error_styles(config))) }
            }
            body {
                h1 { (title) }
                (contact_form(config))
                script type="module" { (PreEscaped(loader)) }
            }
        }
    }
}

/// Escapes a value for a double-quoted JS string inside an inline `<script>`.
fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '<' => out.push_str("\\u003c"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Colour rules for indicators and marked inputs. Class names that are not
/// plain tokens get no rule.
fn error_styles(config: &FormConfig) -> String {
    [
        (&config.marker_class, "color"),
        (&config.error_class, "border-color"),
    ]
    .iter()
    .filter(|(class, _)| is_class_token(class))
    .map(|(class, property)| format!(".{} {{ {}: #b00020; }}", class, property))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::required_ids;

    #[test]
    fn test_form_exposes_every_contract_id() {
        let config = FormConfig::default();
        let html = contact_form(&config).into_string();

        for id in required_ids(&config) {
            assert!(html.contains(&format!(r#"id="{}""#, id)), "missing id {}", id);
        }
    }

    #[test]
    fn test_indicators_hidden_with_marker_class() {
        let html = contact_form(&FormConfig::default()).into_string();
        assert!(html.contains(
            r#"<span id="phone_lengtherror" class="error" style="display:none">Phone number must be 10 digits.</span>"#
        ));
    }

    #[test]
    fn test_input_types() {
        let html = contact_form(&FormConfig::default()).into_string();
        assert!(html.contains(r#"<input id="phone" name="phone" type="tel">"#));
        assert!(html.contains(r#"<input id="email" name="email" type="email">"#));
        assert!(html.contains(r#"<textarea id="comments" name="comments" rows="6"></textarea>"#));
    }

    #[test]
    fn test_page_loads_bundle() {
        let html = contact_page("Contact Me", &FormConfig::default(), DEFAULT_BUNDLE).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Contact Me</title>"));
        assert!(html.contains(r#"import init from "/pkg/contact_form_wasm.js";"#));
        assert!(html.contains(".error { color: #b00020; }"));
        assert!(html.contains(".errorField { border-color: #b00020; }"));
    }

    #[test]
    fn test_bundle_cannot_leave_script() {
        let bundle = r#"/pkg/x.js\";alert(1)</script><script>"#;
        let html = contact_page("Contact", &FormConfig::default(), bundle).into_string();

        assert_eq!(html.matches("</script>").count(), 1);
        assert!(html.contains(
            r#"import init from "/pkg/x.js\\\";alert(1)\u003c/script>\u003cscript>";"#
        ));
    }

    #[test]
    fn test_unsafe_class_gets_no_style_rule() {
        let config = FormConfig {
            error_class: "x{}</style>".to_string(),
            ..FormConfig::default()
        };
        let html = contact_page("Contact", &config, DEFAULT_BUNDLE).into_string();

        assert_eq!(html.matches("</style>").count(), 1);
        assert!(html.contains(".error { color: #b00020; }"));
        assert!(!html.contains("border-color"));
    }
}
