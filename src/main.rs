use clap::{Parser, Subcommand};
use packget::cli::{self, GlobalArgs};
use packget::utils::output::print_error;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "packget")]
#[command(version)]
#[command(about = "Install and manage CMSIS software packs")]
#[command(
    long_about = "packget downloads, installs and removes CMSIS packs in a pack root \
directory, and keeps the public and local pack indexes up to date."
)]
#[command(after_help = "\
Getting started:
  packget init https://www.keil.com/pack/index.pidx   Create the pack root
  packget add ARM.CMSIS                               Install the latest CMSIS pack
  packget list                                        Show installed packs

The pack root defaults to $CMSIS_PACK_ROOT. Set RUST_LOG for finer log control.")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    // === Pack root (1-9) ===
    /// Create the pack root and optionally download the public index
    #[command(display_order = 1)]
    Init(cli::init::InitArgs),
    /// Replace the public index
    #[command(display_order = 2)]
    Index(cli::index::IndexArgs),

    // === Packs (10-19) ===
    /// Install packs or register local manifests
    #[command(display_order = 10)]
    Add(cli::add::AddArgs),
    /// Uninstall packs or unregister local manifests
    #[command(display_order = 11, visible_alias = "remove")]
    Rm(cli::rm::RmArgs),
    /// List installed, cached or public packs
    #[command(display_order = 12)]
    List(cli::list::ListArgs),

    // === Info (20-29) ===
    /// Show the resolved configuration
    #[command(display_order = 20)]
    Config(cli::config::ConfigArgs),
}

fn init_logging(global: &GlobalArgs) {
    let default_level = if global.quiet {
        "warn"
    } else if global.verbose {
        "debug"
    } else {
        "info"
    };

    let filter = if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(format!("packget={}", default_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.global);

    let result = match &cli.command {
        Commands::Init(args) => cli::init::execute(args, &cli.global),
        Commands::Index(args) => cli::index::execute(args, &cli.global),
        Commands::Add(args) => cli::add::execute(args, &cli.global),
        Commands::Rm(args) => cli::rm::execute(args, &cli.global),
        Commands::List(args) => cli::list::execute(args, &cli.global),
        Commands::Config(args) => cli::config::execute(args, &cli.global),
    };

    if let Err(e) = result {
        tracing::debug!(
            "Failed with {} error (exit code {})",
            e.category().as_str(),
            e.exit_code()
        );
        print_error(&e.to_string());
        process::exit(e.exit_code());
    }
}
