//! `packget list` command implementation
//!
//! Lists installed packs, the archive cache, or the public index.

use crate::cli::output_format::{to_json, OutputFormat};
use crate::cli::{open_installation, GlobalArgs};
use crate::error::Result;
use crate::installer::{list_installed_packs, PackListing};
use crate::utils::output::{format_pack_line, print_info};
use clap::Args;
use colored::Colorize;

#[derive(Args)]
#[command(after_help = "\
Examples:
  packget list                            Installed packs
  packget list --cached                   Archives in the download cache
  packget list --public --format json     Public index as JSON")]
pub struct ListArgs {
    /// List archives in the download cache
    #[arg(short, long)]
    pub cached: bool,

    /// List packs from the public index (wins over --cached)
    #[arg(long)]
    pub public: bool,

    /// Output format: human (default) or json
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

pub fn execute(args: &ListArgs, globals: &GlobalArgs) -> Result<()> {
    let installation = open_installation(globals, false)?;
    let listing = list_installed_packs(&installation, args.cached, args.public)?;

    match args.format {
        OutputFormat::Json => println!("{}", to_json(&listing)),
        OutputFormat::Human => print_human_output(&listing),
    }

    Ok(())
}

fn print_human_output(listing: &PackListing) {
    if listing.is_empty() {
        print_info(&listing.empty_message().dimmed().to_string());
        return;
    }

    for pack in &listing.packs {
        print_info(&format_pack_line(
            &pack.key,
            pack.status.map(|s| s.as_str()),
        ));
    }
}
