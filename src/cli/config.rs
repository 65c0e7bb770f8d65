//! `packget config` command implementation
//!
//! Shows the resolved configuration and where it came from.

use crate::cli::output_format::{to_json, OutputFormat};
use crate::cli::{user_config, GlobalArgs};
use crate::config::{generate_user_config_template, get_config_path, resolve_pack_root};
use crate::error::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

#[derive(Args)]
#[command(after_help = "\
Examples:
  packget config                          Show resolved settings
  packget config --template               Print a commented config file")]
pub struct ConfigArgs {
    /// Print a config file template instead
    #[arg(long)]
    pub template: bool,

    /// Output format: human (default) or json
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct ConfigOutput {
    config_path: Option<String>,
    pack_root: Option<String>,
    public_index_url: String,
    timeout_secs: u64,
}

pub fn execute(args: &ConfigArgs, globals: &GlobalArgs) -> Result<()> {
    if args.template {
        print!("{}", generate_user_config_template());
        return Ok(());
    }

    let config = user_config()?;
    let output = ConfigOutput {
        config_path: get_config_path().map(|p| p.display().to_string()),
        pack_root: resolve_pack_root(globals.pack_root.as_deref(), &config),
        public_index_url: config.index_url().to_string(),
        timeout_secs: config.timeout().as_secs(),
    };

    match args.format {
        OutputFormat::Json => println!("{}", to_json(&output)),
        OutputFormat::Human => {
            let unset = "(not set)".dimmed().to_string();
            println!(
                "{:<18} {}",
                "Config file:".bold(),
                output.config_path.as_deref().unwrap_or(&unset)
            );
            println!(
                "{:<18} {}",
                "Pack root:".bold(),
                output.pack_root.as_deref().unwrap_or(&unset)
            );
            println!("{:<18} {}", "Public index:".bold(), output.public_index_url);
            println!("{:<18} {}s", "Timeout:".bold(), output.timeout_secs);
        }
    }

    Ok(())
}
