mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use contact_form_core::FormConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contact-form")]
#[command(version, about = "Contact form validator - render the form and check values", long_about = None)]
struct Cli {
    /// Form configuration file (TOML). Defaults to the built-in contact form.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the contact page markup
    Render {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Page title
        #[arg(short, long, default_value = "Contact Me")]
        title: String,

        /// URL of the wasm-pack bundle the page loads
        #[arg(long, default_value = contact_form_core::markup::DEFAULT_BUNDLE)]
        bundle: String,

        /// Emit only the <form> element
        #[arg(long)]
        form_only: bool,
    },

    /// Validate field values the way the page would on submit
    Check {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        comments: Option<String>,

        /// Any other field, as KEY=VALUE
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = commands::check::parse_assignment)]
        set: Vec<(String, String)>,

        /// Print the error state as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let config = FormConfig::load_or_default(cli.config.as_ref())?;

    // Execute command
    match cli.command {
        Commands::Render {
            output,
            title,
            bundle,
            form_only,
        } => {
            commands::render::execute(&config, output.as_deref(), &title, &bundle, form_only)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            name,
            phone,
            email,
            comments,
            set,
            json,
        } => {
            let mut values: Vec<(String, String)> = [
                ("name", name),
                ("phone", phone),
                ("email", email),
                ("comments", comments),
            ]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
            .collect();
            values.extend(set);

            let passed = commands::check::execute(&config, &values, json)?;
            Ok(if passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
