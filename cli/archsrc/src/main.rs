//! archsrc — resolve architecture descriptions from source specifiers.

mod commands;
mod config;
mod flags;

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use arch_source::ProviderRegistry;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::convert::EncodingArg;
use commands::show::ShowFormat;
use config::Config;
use flags::ArchitectureFlags;

#[derive(Parser)]
#[command(name = "archsrc", version, about = "Resolve architecture descriptions")]
struct Cli {
    /// Architecture source: 'pbtxt:<path>', 'pb:<path>' or 'registered:<name>'
    #[arg(long, global = true)]
    architecture: Option<String>,
    /// Microarchitecture id [default: hsw]
    #[arg(long, global = true)]
    microarchitecture: Option<String>,
    /// Treat an unrecognized architecture source as a file path
    #[arg(long, global = true)]
    allow_bare_path: bool,
    /// Config file (default: ./archsrc.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved architecture
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = ShowFormat::Toml)]
        format: ShowFormat,
    },
    /// Write the resolved architecture to a file
    Convert {
        /// Output file
        #[arg(long)]
        output: PathBuf,
        /// Output encoding (default: binary for .pb, text otherwise)
        #[arg(long, value_enum)]
        encoding: Option<EncodingArg>,
    },
    /// List registered architecture providers
    Providers,
    /// Describe the selected microarchitecture
    Microarch,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::load(cli.config.as_deref(), &cwd)?;
    let flags = ArchitectureFlags::merge(
        cli.architecture,
        cli.microarchitecture,
        cli.allow_bare_path,
        &config.source,
    );

    match cli.command {
        Commands::Show { format } => {
            let architecture = flags::get_architecture_or_die(&flags);
            commands::show::run(&architecture, format)
        }
        Commands::Convert { output, encoding } => {
            let architecture = flags::get_architecture_or_die(&flags);
            commands::convert::run(&architecture, &output, encoding)
        }
        Commands::Providers => {
            let registry = ProviderRegistry::global().context("building provider registry")?;
            commands::providers::run(registry)
        }
        Commands::Microarch => {
            let data = flags::get_microarchitecture_data_or_die(&flags);
            commands::microarch::run(&data)
        }
    }
}
