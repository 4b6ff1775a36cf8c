//! calcula - Entry Point

use calcula::config::Settings;
use calcula::state::Ledger;
use calcula::view::{MenuMode, Repl};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;

/// Terminal calculator with operation history, statistics, and export.
#[derive(Parser, Debug)]
#[command(name = "calcula")]
#[command(version)]
#[command(about = "Calculadora de terminal com histórico de operações")]
pub struct Args {
    /// Use the simple 1-5 menu (four operations + quit, no history)
    #[arg(long)]
    pub simple: bool,

    /// Initial decimal precision (0-10)
    #[arg(short, long)]
    pub precision: Option<u8>,

    /// Initial numbers-per-operation limit (2-100)
    #[arg(short = 'm', long)]
    pub max_operands: Option<usize>,

    /// Directory where history exports are written
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Resolve configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = calcula::config::load_config_with_precedence(args.config.clone())?;
        let merged = calcula::config::merge_config(config_file);
        let with_env = calcula::config::apply_env_overrides(merged);
        calcula::config::apply_cli_overrides(
            with_env,
            args.precision,
            args.max_operands,
            args.export_dir.clone(),
        )
    };

    // The guard keeps the background log writer alive for the process.
    let _guard = calcula::logging::init(&config.log_file_path)?;

    info!(config = ?config, "configuration loaded and resolved");

    // Bounds are enforced here no matter where the values came from.
    let settings = Settings::new(config.precision, config.max_operands)?;

    let mode = if args.simple {
        MenuMode::Simple
    } else {
        MenuMode::Advanced
    };

    let stdin = io::stdin();
    let mut repl = Repl::new(
        stdin.lock(),
        io::stdout(),
        Ledger::new(settings),
        mode,
        config.export_dir,
    );
    repl.run()?;

    Ok(())
}
