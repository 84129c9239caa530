//! Game catalog
//!
//! A read-only, ordered collection of [`Game`] records built once at start-up.
//! Lookups never mutate the catalog and never fail; an empty result is a
//! normal answer.

use crate::error::{GameShelfError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A single game record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: u32,
    pub title: String,
    pub studio: String,
    pub release_year: i32,
}

impl Game {
    pub fn new(id: u32, title: impl Into<String>, studio: impl Into<String>, release_year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            studio: studio.into(),
            release_year,
        }
    }
}

/// How a studio query is compared against a studio name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Plain substring match, "nin" does not match "Nintendo"
    #[default]
    CaseSensitive,
    /// Both sides lowercased before the substring test
    IgnoreCase,
}

impl MatchMode {
    /// Check whether `studio` contains `query` under this mode.
    /// An empty query matches every studio.
    pub fn matches(self, studio: &str, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        match self {
            MatchMode::CaseSensitive => studio.contains(query),
            MatchMode::IgnoreCase => studio.to_lowercase().contains(&query.to_lowercase()),
        }
    }
}

/// The ordered, immutable game catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    games: Vec<Game>,
    match_mode: MatchMode,
}

impl Catalog {
    /// Build a catalog from games, rejecting duplicate ids.
    /// Insertion order is kept as the display order.
    pub fn from_games(games: Vec<Game>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(games.len());
        for game in &games {
            if !seen.insert(game.id) {
                return Err(GameShelfError::DuplicateId(game.id));
            }
        }

        Ok(Self {
            games,
            match_mode: MatchMode::default(),
        })
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> Self {
        let games = BUILTIN_GAMES
            .iter()
            .map(|&(id, title, studio, year)| Game::new(id, title, studio, year))
            .collect();

        Self {
            games,
            match_mode: MatchMode::default(),
        }
    }

    /// Load a catalog from a JSON array of games
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| GameShelfError::CatalogRead(path.to_path_buf(), e))?;
        let games: Vec<Game> = serde_json::from_str(&raw)
            .map_err(|e| GameShelfError::CatalogParse(path.to_path_buf(), e))?;

        if games.is_empty() {
            return Err(GameShelfError::EmptyCatalog(path.to_path_buf()));
        }

        let catalog = Self::from_games(games)?;
        crate::logging::info(
            "CATALOG",
            &format!("Loaded {} games from {}", catalog.len(), path.display()),
        );
        Ok(catalog)
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// The full catalog in insertion order
    pub fn all_games(&self) -> Vec<Game> {
        self.games.clone()
    }

    /// Games whose studio contains `query`, in catalog order.
    /// An empty query returns the full catalog.
    pub fn games_by_studio(&self, query: &str) -> Vec<Game> {
        self.games
            .iter()
            .filter(|game| self.match_mode.matches(&game.studio, query))
            .cloned()
            .collect()
    }

    /// Distinct studio names in first-seen order
    pub fn studios(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.games
            .iter()
            .map(|game| game.studio.as_str())
            .filter(|studio| seen.insert(*studio))
            .collect()
    }

    pub fn get(&self, id: u32) -> Option<&Game> {
        self.games.iter().find(|game| game.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Game> {
        self.games.iter()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

// (id, title, studio, release year)
const BUILTIN_GAMES: &[(u32, &str, &str, i32)] = &[
    (1, "The Legend of Zelda: Breath of the Wild", "Nintendo", 2017),
    (2, "Super Mario Odyssey", "Nintendo", 2017),
    (3, "God of War", "Santa Monica Studio", 2018),
    (4, "The Last of Us Part II", "Naughty Dog", 2020),
    (5, "Uncharted 4: A Thief's End", "Naughty Dog", 2016),
    (6, "Halo Infinite", "343 Industries", 2021),
    (7, "Forza Horizon 5", "Playground Games", 2021),
    (8, "The Witcher 3: Wild Hunt", "CD Projekt Red", 2015),
    (9, "Cyberpunk 2077", "CD Projekt Red", 2020),
    (10, "Red Dead Redemption 2", "Rockstar Games", 2018),
    (11, "Grand Theft Auto V", "Rockstar Games", 2013),
    (12, "Elden Ring", "FromSoftware", 2022),
    (13, "Dark Souls III", "FromSoftware", 2016),
    (14, "Hollow Knight", "Team Cherry", 2017),
    (15, "Animal Crossing: New Horizons", "Nintendo", 2020),
    (16, "Horizon Forbidden West", "Guerrilla Games", 2022),
];
