//! `packget rm` command implementation

use crate::cli::{is_pdsc_path, open_installation, GlobalArgs};
use crate::error::Result;
use crate::installer::{remove_pack, remove_pdsc};
use crate::utils::output::print_success;
use clap::Args;

#[derive(Args)]
#[command(after_help = "\
Examples:
  packget rm ARM.CMSIS.5.9.0                 Uninstall one release
  packget rm ARM.CMSIS --purge               Uninstall all releases and drop cached archives
  packget rm ./work/Acme.Widgets.pdsc        Unregister a local manifest")]
pub struct RmArgs {
    /// Packs or manifests to remove
    #[arg(value_name = "PACK|PDSC", required = true)]
    pub packs: Vec<String>,

    /// Also delete cached archives and extracted licenses
    #[arg(short, long)]
    pub purge: bool,
}

pub fn execute(args: &RmArgs, globals: &GlobalArgs) -> Result<()> {
    let mut installation = open_installation(globals, false)?;

    for input in &args.packs {
        if is_pdsc_path(input) {
            remove_pdsc(&mut installation, input)?;
        } else {
            remove_pack(&mut installation, input, args.purge)?;
        }

        if !globals.quiet {
            print_success(&format!("Removed {}", input));
        }
    }

    Ok(())
}
