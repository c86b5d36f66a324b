//! Elements a page must expose for the validator to bind to

use tracing::warn;

use crate::config::FormConfig;
use crate::error::{PageError, PageResult};
use crate::page::Page;

/// Every element id the page must contain: the form, each input, and each
/// indicator of each input.
pub fn required_ids(config: &FormConfig) -> Vec<String> {
    let mut ids = vec![config.form_id.clone()];

    for field in &config.fields {
        ids.push(field.key.clone());
        ids.extend(field.indicator_ids());
    }

    ids
}

/// Checks the page for every required id and reports all missing ones at once.
pub fn verify<P: Page + ?Sized>(page: &P, config: &FormConfig) -> PageResult<()> {
    let missing: Vec<String> = required_ids(config)
        .into_iter()
        .filter(|id| !page.has_element(id))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        warn!(missing = ?missing, "Page does not satisfy the form contract");
        Err(PageError::Contract { missing })
    }
}
