//! CAF naming CLI.
//!
//! Generates and checks Azure resource names that satisfy each resource
//! type's length and character constraints.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `generate` - Generate names for a resource type
//! - `resource-types` - List the supported resource types
//! - `validate` - Check an existing name
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # A storage account name with a prefix
//! caf-naming generate --resource-type st --name log --prefix rdmi-
//!
//! # Five key vault names, one per line
//! caf-naming --format text generate -t kv -n vault -p dev- --count 5
//! ```

use anyhow::Result;
use caf_naming_cli::cli::{ExitCode, OutputFormat};
use caf_naming_cli::commands;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// CAF naming - constraint-compliant Azure resource names.
#[derive(Parser, Debug)]
#[command(name = "caf-naming")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    format: String,

    /// Attempts per randomized name before giving up
    #[arg(long, global = true, env = "CAF_MAX_ATTEMPTS")]
    max_attempts: Option<u32>,

    /// Random characters drawn before length fitting
    #[arg(long, global = true, env = "CAF_FILLER_LENGTH")]
    filler_length: Option<usize>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate names for a resource type.
    ///
    /// # Examples
    ///
    /// ```bash
    /// caf-naming generate --resource-type rg --name myrg --prefix "(_124)-"
    /// caf-naming generate -t kv -n vault -p dev --convention cafclassic
    /// ```
    Generate {
        /// Resource type code (see `resource-types`)
        #[arg(short = 't', long)]
        resource_type: String,

        /// Base name to embed
        #[arg(short, long, default_value = "")]
        name: String,

        /// Prefix placed at the start of the name
        #[arg(short, long, default_value = "")]
        prefix: String,

        /// Naming convention (cafrandom, random, cafclassic, passthrough)
        #[arg(short, long)]
        convention: Option<String>,

        /// Number of names to generate
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=1000))]
        count: u32,
    },

    /// List the supported resource types.
    ResourceTypes,

    /// Check an existing name against a resource type.
    ///
    /// Exits with code 1 when the name does not conform.
    Validate {
        /// Resource type code
        resource_type: String,

        /// Name to check
        value: String,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let Ok(output_format) = cli.format.parse::<OutputFormat>() else {
        eprintln!(
            "{} invalid output format: '{}' (expected: json, text, or pretty)",
            "error:".red().bold(),
            cli.format
        );
        std::process::exit(ExitCode::INVALID_INPUT.as_i32());
    };

    let exit_code = execute_command(cli, output_format)?;

    std::process::exit(exit_code.as_i32());
}

/// Initializes logging infrastructure.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` applies, defaulting
/// to warnings only so that stdout and stderr stay clean for scripts.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Routes the parsed command to its handler.
fn execute_command(cli: Cli, output_format: OutputFormat) -> Result<ExitCode> {
    if let Commands::Completions { shell } = cli.command {
        use clap::CommandFactory;
        let mut cmd = Cli::command();
        return commands::completions::run(shell, &mut cmd);
    }

    let engine = match commands::build_engine(cli.max_attempts, cli.filler_length) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return Ok(commands::exit_code_for(&err));
        }
    };

    match cli.command {
        Commands::Generate {
            resource_type,
            name,
            prefix,
            convention,
            count,
        } => commands::generate::run(
            &engine,
            resource_type,
            name,
            prefix,
            convention.as_deref(),
            count,
            output_format,
        ),
        Commands::ResourceTypes => commands::resource_types::run(engine.catalog(), output_format),
        Commands::Validate {
            resource_type,
            value,
        } => commands::validate::run(&engine, &resource_type, &value, output_format),
        Commands::Completions { .. } => Ok(ExitCode::SUCCESS),
    }
}
