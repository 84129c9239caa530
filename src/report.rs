//! Non-interactive listings printed by the `list` and `studios` commands

use crate::catalog::{Catalog, Game};
use crate::error::Result;
use console::style;
use std::fmt::Write;

/// Output format of the `list` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render games in the requested format. `query` is the studio filter that
/// produced `games`, if any; `total` is the catalog size.
pub fn render_games(
    games: &[Game],
    query: Option<&str>,
    total: usize,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => games_json(games),
        OutputFormat::Text => Ok(games_text(games, query, total)),
    }
}

pub fn games_json(games: &[Game]) -> Result<String> {
    Ok(serde_json::to_string_pretty(games)?)
}

pub fn games_text(games: &[Game], query: Option<&str>, total: usize) -> String {
    let mut out = String::new();

    match query {
        Some(query) => {
            let _ = writeln!(
                out,
                "{} Games from studios matching '{}':",
                style("→").cyan().bold(),
                style(query).yellow()
            );
        }
        None => {
            let _ = writeln!(out, "{} All games:", style("→").cyan().bold());
        }
    }
    out.push('\n');

    if games.is_empty() {
        let _ = writeln!(out, "  {}", style("No games found").dim());
        return out;
    }

    let title_width = games.iter().map(|g| g.title.chars().count()).max().unwrap_or(0);
    for game in games {
        let _ = writeln!(
            out,
            "  {:>3}  {:<width$}  {}  {}",
            style(game.id).dim(),
            style(&game.title).bold(),
            style(game.release_year).blue().bold(),
            game.studio,
            width = title_width
        );
    }

    out.push('\n');
    let _ = writeln!(out, "{} of {} games", style(games.len()).green(), total);
    out
}

/// Distinct studios with their game counts, in catalog order
pub fn studios_text(catalog: &Catalog) -> String {
    let mut out = String::new();
    let studios = catalog.studios();

    for studio in &studios {
        let count = catalog.iter().filter(|g| g.studio == *studio).count();
        let _ = writeln!(out, "  {:<24} {}", studio, style(count).cyan());
    }

    out.push('\n');
    let _ = writeln!(out, "{} studios", style(studios.len()).green());
    out
}
