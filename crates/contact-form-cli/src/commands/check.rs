use anyhow::{bail, Result};
use colored::Colorize;
use contact_form_core::{ErrorState, FormConfig, FormValidator, MemoryPage, RecordedEvent};

/// Parses a `KEY=VALUE` argument.
pub fn parse_assignment(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", arg)),
    }
}

/// Runs the submit handler over a page holding `values`.
pub fn run(config: &FormConfig, values: &[(String, String)]) -> Result<(bool, ErrorState)> {
    for (key, _) in values {
        if config.field(key).is_none() {
            bail!("'{}' is not a field of form '{}'", key, config.form_id);
        }
    }

    let page = MemoryPage::with_values(config, values.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let mut validator = FormValidator::new(page, config.clone())?;

    let event = RecordedEvent::new();
    let passed = validator.validate(&event)?;
    let errors = validator.collect_errors()?;

    Ok((passed, errors))
}

pub fn execute(config: &FormConfig, values: &[(String, String)], json: bool) -> Result<bool> {
    let (passed, errors) = run(config, values)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&errors)?);
        return Ok(passed);
    }

    if passed {
        println!("{}", "✓ All fields valid - form would submit".green().bold());
        return Ok(true);
    }

    println!("{}", "✗ Submission blocked".red().bold());
    println!();
    for error in &errors.errors {
        let message = config
            .field(&error.field)
            .map(|spec| spec.message(error.failure))
            .unwrap_or_default();
        println!(
            "  {:<10} {:<20} {}",
            error.field.cyan(),
            error.indicator().yellow(),
            message
        );
    }

    if let Some(first) = errors.first_offender() {
        println!();
        println!("Focus: {}", first.field.bold());
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contact_form_core::Failure;
    use pretty_assertions::assert_eq;

    fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("phone=555 1234"),
            Ok(("phone".to_string(), "555 1234".to_string()))
        );
        assert_eq!(
            parse_assignment("comments="),
            Ok(("comments".to_string(), String::new()))
        );
        assert!(parse_assignment("novalue").is_err());
        assert!(parse_assignment("=value").is_err());
    }

    #[test]
    fn test_run_valid() {
        let values = owned(&[
            ("name", "A"),
            ("phone", "1234567890"),
            ("email", "a@b.com"),
            ("comments", "hi"),
        ]);
        let (passed, errors) = run(&FormConfig::default(), &values).unwrap();
        assert!(passed);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_run_reports_failures() {
        let values = owned(&[("name", "A"), ("phone", "12345"), ("email", "nope")]);
        let (passed, errors) = run(&FormConfig::default(), &values).unwrap();

        assert!(!passed);
        assert_eq!(errors.failure_for("phone"), Some(Failure::Length));
        assert_eq!(errors.failure_for("email"), Some(Failure::Format));
        assert_eq!(errors.failure_for("comments"), Some(Failure::Missing));
        assert_eq!(errors.failure_for("name"), None);
    }

    #[test]
    fn test_run_rejects_unknown_field() {
        let err = run(&FormConfig::default(), &owned(&[("age", "42")])).unwrap_err();
        assert!(err.to_string().contains("not a field"));
    }
}
