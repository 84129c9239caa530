//! GameShelf - terminal game catalog with a studio filter
//!
//! Lists a fixed catalog of games, lets the user type a studio-name substring
//! to filter it, and renders the result as a row of studio cards above a list
//! of game cards.
//!
//! # Example
//!
//! ```
//! use gameshelf::{Action, Catalog, ScreenController};
//!
//! let mut screen = ScreenController::new(Catalog::builtin());
//! screen.apply(Action::TextChanged("Nintendo".to_string()));
//! let state = screen.apply(Action::Search);
//!
//! assert!(state.visible_games.iter().all(|g| g.studio == "Nintendo"));
//! assert!(screen.is_clear_visible());
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod report;
pub mod screen;
pub mod tui;

// Re-export main types
pub use catalog::{Catalog, Game, MatchMode};
pub use error::{GameShelfError, Result};
pub use report::OutputFormat;
pub use screen::{Action, ScreenController, ScreenState};

use logging::LogLevel;
use std::path::PathBuf;
use std::time::Duration;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON catalog to load instead of the builtin one
    pub catalog_path: Option<PathBuf>,
    /// How studio queries are matched
    pub match_mode: MatchMode,
    /// Log file, `None` disables logging
    pub log_path: Option<PathBuf>,
    /// Minimum level written to the log file
    pub log_level: LogLevel,
    /// Event poll interval of the TUI loop
    pub tick_rate: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            match_mode: MatchMode::CaseSensitive,
            log_path: None,
            log_level: LogLevel::Info,
            tick_rate: Duration::from_millis(50),
        }
    }
}

impl AppConfig {
    /// Build the catalog this configuration describes
    pub fn load_catalog(&self) -> Result<Catalog> {
        let catalog = match &self.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin(),
        };
        Ok(catalog.with_match_mode(self.match_mode))
    }
}
