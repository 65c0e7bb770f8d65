//! Command line interface
//!
//! One file per subcommand, each exposing an `Args` struct and `execute`.

pub mod add;
pub mod config;
pub mod index;
pub mod init;
pub mod list;
pub mod output_format;
pub mod rm;

use crate::config::{load_user_config, resolve_pack_root, UserConfig};
use crate::error::Result;
use crate::installer::Installation;
use crate::utils::download::HttpDownloader;
use clap::Args;

/// Options accepted by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Pack root directory (default: $CMSIS_PACK_ROOT, then user config)
    #[arg(short = 'R', long, global = true, value_name = "DIR")]
    pub pack_root: Option<String>,

    /// Show debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// User config, or defaults when there is none.
pub fn user_config() -> Result<UserConfig> {
    Ok(load_user_config()?.unwrap_or_default())
}

/// Open the pack root selected by flags, environment and user config.
pub fn open_installation(globals: &GlobalArgs, create: bool) -> Result<Installation> {
    let config = user_config()?;
    let pack_root = resolve_pack_root(globals.pack_root.as_deref(), &config).unwrap_or_default();

    let mut downloader = HttpDownloader::new(config.timeout());
    if globals.quiet {
        downloader = downloader.without_progress();
    }

    Installation::initialize(&pack_root, create, Box::new(downloader))
}

/// Whether a command argument names a manifest rather than a pack.
pub fn is_pdsc_path(input: &str) -> bool {
    input.trim().to_ascii_lowercase().ends_with(".pdsc")
}
