// File: src/field.rs
// Purpose: Required field descriptors, failure kinds and indicator naming

use serde::{Deserialize, Serialize};

/// Input type of a required field. Decides which format checks run after presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Tel,
    Email,
    Textarea,
}

impl FieldKind {
    /// Failures a field of this kind can report, in check order.
    pub fn failures(self) -> &'static [Failure] {
        match self {
            FieldKind::Text | FieldKind::Textarea => &[Failure::Missing],
            FieldKind::Tel => &[Failure::Missing, Failure::Length, Failure::Format],
            FieldKind::Email => &[Failure::Missing, Failure::Format],
        }
    }

    /// Value of the `type` attribute for `<input>` elements.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::Textarea => "text",
            FieldKind::Tel => "tel",
            FieldKind::Email => "email",
        }
    }
}

/// A single validation failure on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Failure {
    /// Empty or whitespace-only value
    Missing,
    /// Phone number of the wrong length
    Length,
    /// Value present but malformed
    Format,
}

impl Failure {
    /// Suffix appended to the field key to form the indicator id.
    pub fn suffix(self) -> &'static str {
        match self {
            Failure::Missing => "_error",
            Failure::Length => "_lengtherror",
            Failure::Format => "_formaterror",
        }
    }

    /// Whether the offending field's text gets selected along with focus.
    pub fn selects_text(self, kind: FieldKind) -> bool {
        !(self == Failure::Format && kind == FieldKind::Email)
    }
}

/// Builds the id of the indicator reporting `failure` on `field`.
pub fn indicator_id(field: &str, failure: Failure) -> String {
    format!("{}{}", field, failure.suffix())
}

/// Messages shown inside each indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FieldMessages {
    #[serde(default)]
    pub missing: String,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

/// A required field on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Element id of the input, also the indicator prefix
    pub key: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub messages: FieldMessages,
}

impl FieldSpec {
    pub fn new(key: impl Into<String>, kind: FieldKind) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            key,
            kind,
            messages: FieldMessages::default(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn missing(mut self, message: impl Into<String>) -> Self {
        self.messages.missing = message.into();
        self
    }

    pub fn length(mut self, message: impl Into<String>) -> Self {
        self.messages.length = Some(message.into());
        self
    }

    pub fn format(mut self, message: impl Into<String>) -> Self {
        self.messages.format = Some(message.into());
        self
    }

    /// Label for display, falling back to the key.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.key
        } else {
            &self.label
        }
    }

    /// Indicator ids this field exposes on the page.
    pub fn indicator_ids(&self) -> Vec<String> {
        self.kind
            .failures()
            .iter()
            .map(|f| indicator_id(&self.key, *f))
            .collect()
    }

    /// Message for a failure, falling back to a generic one.
    pub fn message(&self, failure: Failure) -> String {
        let configured = match failure {
            Failure::Missing => Some(self.messages.missing.as_str()).filter(|m| !m.is_empty()),
            Failure::Length => self.messages.length.as_deref(),
            Failure::Format => self.messages.format.as_deref(),
        };

        match configured {
            Some(msg) => msg.to_string(),
            None => match failure {
                Failure::Missing => format!("{} is required", self.display_label()),
                Failure::Length => format!("{} has the wrong length", self.display_label()),
                Failure::Format => format!("{} is not in a valid format", self.display_label()),
            },
        }
    }
}

/// The four contact fields in validation order.
pub fn contact_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("name", FieldKind::Text)
            .label("Name")
            .missing("Please enter your name."),
        FieldSpec::new("phone", FieldKind::Tel)
            .label("Phone")
            .missing("Please enter your phone number.")
            .length("Phone number must be 10 digits.")
            .format("Phone number may only contain digits."),
        FieldSpec::new("email", FieldKind::Email)
            .label("Email")
            .missing("Please enter your email address.")
            .format("Please enter a valid email address."),
        FieldSpec::new("comments", FieldKind::Textarea)
            .label("Comments")
            .missing("Please enter your comments."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_ids() {
        assert_eq!(indicator_id("name", Failure::Missing), "name_error");
        assert_eq!(indicator_id("phone", Failure::Length), "phone_lengtherror");
        assert_eq!(indicator_id("email", Failure::Format), "email_formaterror");
    }

    #[test]
    fn test_field_indicators() {
        let fields = contact_fields();
        let keys: Vec<_> = fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["name", "phone", "email", "comments"]);

        assert_eq!(fields[0].indicator_ids(), ["name_error"]);
        assert_eq!(
            fields[1].indicator_ids(),
            ["phone_error", "phone_lengtherror", "phone_formaterror"]
        );
        assert_eq!(fields[2].indicator_ids(), ["email_error", "email_formaterror"]);
        assert_eq!(fields[3].indicator_ids(), ["comments_error"]);
    }

    #[test]
    fn test_message_fallback() {
        let field = FieldSpec::new("city", FieldKind::Text).label("City");
        assert_eq!(field.message(Failure::Missing), "City is required");

        let field = field.missing("Where do you live?");
        assert_eq!(field.message(Failure::Missing), "Where do you live?");
    }

    #[test]
    fn test_select_rules() {
        assert!(Failure::Missing.selects_text(FieldKind::Email));
        assert!(Failure::Format.selects_text(FieldKind::Tel));
        assert!(!Failure::Format.selects_text(FieldKind::Email));
    }
}
