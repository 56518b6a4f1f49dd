//! Command-line interface for the glossary harvester.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{
    self, default_config_path, default_rules_path, validate_url, UserConfig, DEFAULT_GLOSSARY_URL,
};
use crate::error::Result;
use crate::harvest::harvest_terms;
use crate::rules::save_rules;

/// Glossary harvester - fetch a glossary web page and generate a spellcheck rules file.
#[derive(Parser)]
#[command(name = "glossary-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the glossary page and generate the rules file.
    Generate {
        /// Glossary page URL (default: config URL, else the built-in AWS glossary)
        #[arg(short, long)]
        url: Option<String>,

        /// Config file path (default: config.json beside the executable)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output rules file (default: glossary_rules.yml beside the executable)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            url,
            config,
            output,
        } => generate_command(url.as_deref(), config.as_deref(), output.as_deref()),
    }
}

/// Load the user config, treating any failure as "no config".
///
/// The fallback is the config file's contract: a missing or malformed file
/// means defaults, distinguished only in diagnostics.
fn load_optional_config(path: &Path) -> Option<UserConfig> {
    match config::load_config(path) {
        Ok(config) => {
            println!(
                "{} {}",
                style("Config:").bold(),
                style(path.display()).cyan()
            );
            Some(config)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "No usable config, using defaults");
            None
        }
    }
}

/// Execute the generate command.
fn generate_command(
    url: Option<&str>,
    config_path: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let config_path = match config_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    let user_config = load_optional_config(&config_path);

    // Precedence: flag > config > built-in default
    let url = url
        .or_else(|| user_config.as_ref().and_then(UserConfig::url))
        .unwrap_or(DEFAULT_GLOSSARY_URL)
        .to_string();
    validate_url(&url)?;

    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => default_rules_path()?,
    };

    println!(
        "{} {}",
        style("Fetching").bold(),
        style(&url).cyan()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Downloading glossary page...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let terms = match harvest_terms(&url) {
        Ok(terms) => terms,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Writing rules file...");

    let written = match save_rules(&terms, user_config.as_ref(), &output_path) {
        Ok(path) => path,
        Err(e) => {
            pb.finish_and_clear();
            // A partial file may be left behind; the caller gets the error
            tracing::error!(path = %output_path.display(), error = %e, "Rules write failed");
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!("  Terms: {}", style(terms.len()).green());
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        written.display()
    );

    Ok(())
}
