//! GameShelf CLI
//!
//! Runs the interactive catalog screen, or prints the catalog and
//! studio-filtered listings straight to stdout.

use clap::{Parser, Subcommand};
use console::style;
use gameshelf::logging::{self, GameShelfLogger, LogLevel};
use gameshelf::report::{self, OutputFormat};
use gameshelf::{AppConfig, MatchMode};
use std::path::PathBuf;

/// GameShelf - browse a game catalog by studio
#[derive(Parser)]
#[command(name = "gameshelf")]
#[command(author = "GameShelf Contributors")]
#[command(version)]
#[command(about = "Terminal game catalog with a studio filter", long_about = None)]
struct Cli {
    /// JSON catalog to use instead of the builtin one
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Match studio names ignoring case
    #[arg(short, long, global = true)]
    ignore_case: bool,

    /// Write a log file (defaults to gameshelf.log next to the executable with --verbose)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log every screen transition
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive screen (default)
    Tui,

    /// Print games, optionally filtered by studio substring
    List {
        /// Studio substring to filter by
        #[arg(short, long)]
        studio: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the distinct studios in the catalog
    Studios,
}

impl Cli {
    fn config(&self) -> AppConfig {
        let log_path = match (&self.log_file, self.verbose) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => Some(GameShelfLogger::default_path()),
            (None, false) => None,
        };

        AppConfig {
            catalog_path: self.catalog.clone(),
            match_mode: if self.ignore_case {
                MatchMode::IgnoreCase
            } else {
                MatchMode::CaseSensitive
            },
            log_path,
            log_level: if self.verbose {
                LogLevel::Debug
            } else {
                LogLevel::Info
            },
            ..Default::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config();

    if let Some(path) = &config.log_path {
        if !logging::init(path, config.log_level) {
            eprintln!(
                "{} could not open log file {}",
                style("Warning:").yellow().bold(),
                path.display()
            );
        }
    }
    logging::separator(&format!("GameShelf {}", gameshelf::VERSION));

    let result = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => gameshelf::tui::run(&config),
        Commands::List { studio, format } => cmd_list(&config, studio.as_deref(), format),
        Commands::Studios => cmd_studios(&config),
    };

    if let Err(e) = result {
        logging::error("MAIN", &e.to_string());
        eprintln!("{} {}", style("Error:").red().bold(), e);
        if e.is_catalog_error() {
            eprintln!("  {}", style("Check the file passed to --catalog").dim());
        }
        std::process::exit(1);
    }
}

/// List command implementation
fn cmd_list(config: &AppConfig, studio: Option<&str>, format: OutputFormat) -> gameshelf::Result<()> {
    let catalog = config.load_catalog()?;
    let games = match studio {
        Some(query) => catalog.games_by_studio(query),
        None => catalog.all_games(),
    };

    let output = report::render_games(&games, studio, catalog.len(), format)?;
    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

/// Studios command implementation
fn cmd_studios(config: &AppConfig) -> gameshelf::Result<()> {
    let catalog = config.load_catalog()?;
    print!("{}", report::studios_text(&catalog));
    Ok(())
}
