//! `packget add` command implementation
//!
//! Installs packs (by file, URL or id) and registers local manifests.

use crate::cli::{is_pdsc_path, open_installation, GlobalArgs};
use crate::error::Result;
use crate::installer::{add_pack, add_pdsc, InstallOutcome};
use crate::utils::output::{print_info, print_success};
use clap::Args;

#[derive(Args)]
#[command(after_help = "\
Examples:
  packget add ARM.CMSIS                      Latest public release
  packget add ARM.CMSIS.5.9.0                Specific release
  packget add ./ARM.CMSIS.5.9.0.pack         Local archive
  packget add https://x.example/A.B.1.0.0.pack
  packget add ./work/Acme.Widgets.pdsc       Register a local manifest")]
pub struct AddArgs {
    /// Packs or manifests to add
    #[arg(value_name = "PACK|PDSC", required = true)]
    pub packs: Vec<String>,

    /// Accept embedded licenses without prompting
    #[arg(short = 'a', long)]
    pub agree_embedded_license: bool,

    /// Save embedded licenses to the download cache instead of installing
    #[arg(short = 'x', long, conflicts_with = "agree_embedded_license")]
    pub extract_embedded_license: bool,
}

pub fn execute(args: &AddArgs, globals: &GlobalArgs) -> Result<()> {
    let mut installation = open_installation(globals, false)?;

    for input in &args.packs {
        if is_pdsc_path(input) {
            add_pdsc(&mut installation, input)?;
            if !globals.quiet {
                print_success(&format!("Registered {}", input));
            }
            continue;
        }

        let outcome = add_pack(
            &mut installation,
            input,
            !args.agree_embedded_license,
            args.extract_embedded_license,
        )?;

        if globals.quiet {
            continue;
        }
        match outcome {
            InstallOutcome::Installed(dir) => {
                print_success(&format!("Installed {} into {}", input, dir.display()))
            }
            InstallOutcome::LicenseExtracted(Some(path)) => {
                print_success(&format!("License saved to {}", path.display()))
            }
            InstallOutcome::LicenseExtracted(None) => {
                print_info(&format!("{} has no embedded license", input))
            }
        }
    }

    Ok(())
}
