//! sevlog CLI
//!
//! Emits a single log line from the shell through the process-wide logger.

use clap::{Parser, Subcommand};
use sevlog_core::logging_facility::{self, Profile};
use sevlog_core::{CustomTagPolicy, Logger, LoggerConfig, Severity};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "sevlog")]
#[command(about = "sevlog - leveled logging from the shell", long_about = None)]
struct Cli {
    /// Minimum severity to emit (overrides SEVLOG_LEVEL)
    #[arg(short, long, global = true)]
    threshold: Option<Severity>,

    /// Report file:line of the logging call (also SEVLOG_CALL_SITE)
    #[arg(long, global = true)]
    call_site: bool,

    /// Drop lines whose tag is not a predefined severity
    #[arg(long, global = true)]
    suppress_custom_tags: bool,

    /// Print the logger's own diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Emit values joined with no separator
    Emit(commands::emit::EmitArgs),
    /// Emit a template with `{}` placeholders filled in order
    Emitf(commands::emit::EmitfArgs),
}

fn install_logger(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = LoggerConfig::from_env()?;
    if let Some(threshold) = cli.threshold {
        config.threshold = Some(threshold);
    }
    config.call_site |= cli.call_site;
    if cli.suppress_custom_tags {
        config.custom_tags = CustomTagPolicy::Suppress;
    }
    sevlog_core::init(Logger::builder().config(config).build())?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        logging_facility::init(Profile::Development);
    }

    let result = install_logger(&cli).and_then(|()| match cli.command {
        Commands::Emit(args) => commands::emit::execute(args),
        Commands::Emitf(args) => commands::emit::execute_format(args),
    });

    // Exit status 1 is reserved for Fatal lines
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }
}
