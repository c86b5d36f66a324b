//! Contact Form Core
//!
//! Client-side validation for a contact form: presence checks on every
//! required field, a length and digits check on the phone number, and a
//! format check on the email address. The validator drives its host
//! document through the [`Page`] trait, so the browser binding and the
//! tests share the same logic.
//!
//! ```
//! use contact_form_core::{FormConfig, FormValidator, MemoryPage, RecordedEvent};
//!
//! let config = FormConfig::default();
//! let page = MemoryPage::with_values(&config, [("name", "Ada"), ("phone", "12345")]);
//! let mut validator = FormValidator::new(page, config).unwrap();
//!
//! let event = RecordedEvent::new();
//! assert!(!validator.validate(&event).unwrap());
//! assert!(event.is_default_prevented());
//! assert!(validator.page().is_visible("phone_lengtherror"));
//! ```

pub mod check;
pub mod config;
pub mod contract;
pub mod email;
pub mod error;
pub mod field;
pub mod memory;
pub mod page;
pub mod phone;
pub mod state;
pub mod text;
pub mod validator;

#[cfg(feature = "markup")]
pub mod markup;

pub use check::{check_field, check_values, error_check};
pub use config::FormConfig;
pub use email::{is_valid_email, EMAIL_PATTERN};
pub use error::{PageError, PageResult};
pub use field::{contact_fields, indicator_id, Failure, FieldKind, FieldMessages, FieldSpec};
pub use memory::{MemoryPage, RecordedEvent};
pub use page::{FormEvent, FormEventKind, Page};
pub use phone::{check_phone, is_valid_phone, PHONE_LENGTH};
pub use state::{ErrorState, FieldError, FormState};
pub use text::{has_input, trim};
pub use validator::FormValidator;
