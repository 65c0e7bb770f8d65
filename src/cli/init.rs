//! `packget init` command implementation
//!
//! Creates the pack root layout:
//! - .Download/ (archive cache)
//! - .Local/ (locally registered manifests)
//! - .Web/ (public index and manifests)
//!
//! and optionally pulls a public index into it.

use crate::cli::{open_installation, GlobalArgs};
use crate::error::Result;
use crate::installer::update_public_index;
use crate::utils::output::print_success;
use clap::Args;

#[derive(Args)]
#[command(after_help = "\
Examples:
  packget init                                        Create the pack root
  packget init https://www.keil.com/pack/index.pidx   Also download the public index
  packget -R ./packs init --force <URL>               Replace an existing index")]
pub struct InitArgs {
    /// Public index to download (https:// only)
    #[arg(value_name = "INDEX_URL")]
    pub index_url: Option<String>,

    /// Overwrite an existing public index
    #[arg(long)]
    pub force: bool,
}

pub fn execute(args: &InitArgs, globals: &GlobalArgs) -> Result<()> {
    let mut installation = open_installation(globals, true)?;

    if let Some(url) = &args.index_url {
        update_public_index(&mut installation, url, args.force)?;
    }

    if !globals.quiet {
        print_success(&format!(
            "Pack root ready at {}",
            installation.pack_root.display()
        ));
    }
    Ok(())
}
