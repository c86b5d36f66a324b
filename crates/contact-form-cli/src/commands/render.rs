use anyhow::{Context, Result};
use colored::Colorize;
use contact_form_core::{markup, FormConfig};
use std::fs;
use std::path::Path;

pub fn execute(
    config: &FormConfig,
    output: Option<&Path>,
    title: &str,
    bundle: &str,
    form_only: bool,
) -> Result<()> {
    let html = if form_only {
        markup::contact_form(config)
    } else {
        markup::contact_page(title, config, bundle)
    }
    .into_string();

    match output {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = html.len(), "Rendered contact page");

            println!("{}", "Contact page rendered".green().bold());
            println!("Output: {}", path.display().to_string().cyan());
        }
        None => println!("{}", html),
    }

    Ok(())
}
