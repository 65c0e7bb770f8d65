//! `packget index` command implementation

use crate::cli::{open_installation, user_config, GlobalArgs};
use crate::error::Result;
use crate::installer::update_public_index;
use crate::utils::output::print_success;
use clap::Args;

#[derive(Args)]
#[command(after_help = "\
Examples:
  packget index --force                                 Refresh from the configured URL
  packget index https://www.keil.com/pack/index.pidx --force")]
pub struct IndexArgs {
    /// Public index URL (https:// only); defaults to `public_index_url` from the config
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Overwrite the existing public index
    #[arg(short, long)]
    pub force: bool,
}

pub fn execute(args: &IndexArgs, globals: &GlobalArgs) -> Result<()> {
    let url = match &args.url {
        Some(url) => url.clone(),
        None => user_config()?.index_url().to_string(),
    };

    let mut installation = open_installation(globals, false)?;
    update_public_index(&mut installation, &url, args.force)?;

    if !globals.quiet {
        print_success(&format!(
            "Public index updated ({} pack(s))",
            installation.public_index_xml.entries().len()
        ));
    }
    Ok(())
}
