//! umlgen CLI
//!
//! Generates one Rust module per class of a UML/XMI model.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use umlgen::{Generator, UmlgenConfig};

#[derive(Parser)]
#[command(name = "umlgen")]
#[command(about = "Generate Rust classes from a UML/XMI object model")]
#[command(version)]
struct Cli {
    /// Debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Warnings and errors only
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Write the log to this file instead of stderr
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    /// Configuration file, read after the default locations
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate classes from a model
    Generate {
        /// Output root directory
        outdir: PathBuf,

        /// XMI model file
        umlfile: PathBuf,

        /// Generate only these classes (name or xmi:id)
        #[arg(long, value_name = "NAME")]
        only: Vec<String>,

        /// Resolve and render without writing
        #[arg(long)]
        dry_run: bool,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        report: ReportFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn init_logging(verbose: bool, quiet: bool, log: Option<&Path>) -> Result<()> {
    let level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet, cli.log.as_deref())?;

    let mut config = UmlgenConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;

    match cli.command {
        Commands::Generate {
            outdir,
            umlfile,
            only,
            dry_run,
            report,
        } => {
            config.generate.only.extend(only);
            let generator = Generator::new(config);
            let result = generator
                .generate_file(&umlfile, &outdir, dry_run)
                .with_context(|| format!("generation from {} failed", umlfile.display()))?;

            match report {
                ReportFormat::Text => print!("{result}"),
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
        }
    }

    Ok(())
}
