mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lumen",
    about = "Spectral lighting schedules for circadian (human) and growth (plant) profiles",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from lumen.yaml or .git/)
    #[arg(long, global = true, env = "LUMEN_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the schedule document and write it to disk
    Generate {
        /// Destination path, or '-' for stdout (default: `output` from lumen.yaml)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Number of days to generate (default: `days` from lumen.yaml)
        #[arg(long)]
        days: Option<u32>,
    },

    /// Sample a profile's spectrum at a point in a day
    Sample {
        /// Profile: human or plant
        #[arg(long)]
        profile: String,

        /// Day index (clamped to the schedule length)
        #[arg(long, default_value = "0")]
        day: usize,

        /// Time of day as a fraction in [0, 1]
        #[arg(long, default_value = "0")]
        tod: f64,

        /// Schedule file to sample (default: the generated 30-day schedule)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Check a schedule file against the frontend contract
    Validate {
        /// Schedule JSON file
        file: PathBuf,
    },

    /// Create or inspect the project configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Serve the schedule over HTTP
    Serve {
        /// Interface to bind (default: server.host from lumen.yaml)
        #[arg(long, env = "HOST")]
        host: Option<String>,

        /// Port to listen on (default: server.port from lumen.yaml)
        #[arg(long, env = "PORT")]
        port: Option<u16>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Generate { out, days } => cmd::generate::run(&root, out, days, cli.json),
        Commands::Sample {
            profile,
            day,
            tod,
            file,
        } => cmd::sample::run(&root, &profile, day, tod, file, cli.json),
        Commands::Validate { file } => cmd::validate::run(&root, &file, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
        Commands::Serve { host, port } => cmd::serve::run(&root, host, port),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
