pub mod app;
pub mod colors;
pub mod search;
pub mod table;
pub mod ui;

use crate::screen::ScreenController;
use crate::AppConfig;

/// Entry point: take over the terminal and run the catalog screen until quit
pub fn run(config: &AppConfig) -> crate::Result<()> {
    let catalog = config.load_catalog()?;
    crate::logging::info(
        "TUI",
        &format!("Starting screen with {} games ({:?})", catalog.len(), catalog.match_mode()),
    );

    let mut app = app::App::new(ScreenController::new(catalog), config);

    let mut terminal = ratatui::try_init()?;
    let result = app.run(&mut terminal);
    ratatui::restore();

    if let Err(ref e) = result {
        crate::logging::error("TUI", &e.to_string());
    }
    crate::logging::info("TUI", "Screen closed");
    result
}
