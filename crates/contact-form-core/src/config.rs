// File: src/config.rs
// Purpose: Form configuration parsing from TOML

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::field::{contact_fields, FieldSpec};
use crate::phone::PHONE_LENGTH;

/// Ids, class names and fields the validator binds to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Id of the `<form>` element
    #[serde(default = "default_form_id")]
    pub form_id: String,

    /// Class shared by every indicator, used for bulk hiding
    #[serde(default = "default_marker_class")]
    pub marker_class: String,

    /// Class added to inputs that failed validation
    #[serde(default = "default_error_class")]
    pub error_class: String,

    /// Question asked before the form is reset
    #[serde(default = "default_reset_prompt")]
    pub reset_prompt: String,

    #[serde(default = "default_phone_length")]
    pub phone_length: usize,

    /// Required fields, in validation order
    #[serde(default = "contact_fields")]
    pub fields: Vec<FieldSpec>,
}

// Default values
fn default_form_id() -> String {
    "contactform".to_string()
}

fn default_marker_class() -> String {
    "error".to_string()
}

fn default_error_class() -> String {
    "errorField".to_string()
}

fn default_reset_prompt() -> String {
    "Reset form?".to_string()
}

fn default_phone_length() -> usize {
    PHONE_LENGTH
}

/// A class name usable both in `classList` and as a CSS selector:
/// non-empty, ASCII letters, digits, `-` and `_` only
pub fn is_class_token(class: &str) -> bool {
    !class.is_empty()
        && class
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: default_form_id(),
            marker_class: default_marker_class(),
            error_class: default_error_class(),
            reset_prompt: default_reset_prompt(),
            phone_length: default_phone_length(),
            fields: contact_fields(),
        }
    }
}

impl FormConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FormConfig =
            toml::from_str(content).context("Failed to parse form configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load from file if it exists, otherwise use defaults
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) if p.as_ref().exists() => Self::load(p),
            Some(p) => bail!("Config file not found: {}", p.as_ref().display()),
            None => Ok(Self::default()),
        }
    }

    /// Reject configurations the validator could not bind to
    pub fn validate(&self) -> Result<()> {
        if self.form_id.trim().is_empty() {
            bail!("form_id must not be empty");
        }
        if !is_class_token(&self.marker_class) {
            bail!("marker_class '{}' is not a single class name", self.marker_class);
        }
        if !is_class_token(&self.error_class) {
            bail!("error_class '{}' is not a single class name", self.error_class);
        }
        if self.fields.is_empty() {
            bail!("at least one required field must be configured");
        }
        if self.phone_length == 0 {
            bail!("phone_length must be greater than zero");
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.key.trim().is_empty() {
                bail!("field keys must not be empty");
            }
            if !seen.insert(field.key.as_str()) {
                bail!("duplicate field key '{}'", field.key);
            }
        }

        Ok(())
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Field focused after a confirmed reset
    pub fn first_field(&self) -> Option<&FieldSpec> {
        self.fields.first()
    }
}
