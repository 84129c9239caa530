//! Screen state controller
//!
//! Holds the filter text and the visible list, and applies the four user
//! actions against the catalog. The presentation layer reads [`ScreenState`]
//! after each [`ScreenController::apply`], or registers a listener with
//! [`ScreenController::subscribe`] to be told about every transition.

use crate::catalog::{Catalog, Game};

/// User actions the screen reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The search field now contains this text
    TextChanged(String),
    /// The search icon was activated
    Search,
    /// The "clear filter" control was activated
    Clear,
    /// The studio card at this position of the visible list was activated
    StudioTapped(usize),
}

impl Action {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Action::TextChanged(_) => "TextChanged",
            Action::Search => "Search",
            Action::Clear => "Clear",
            Action::StudioTapped(_) => "StudioTapped",
        }
    }
}

/// Snapshot of what the screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenState {
    pub filter_text: String,
    pub visible_games: Vec<Game>,
}

type Listener = Box<dyn FnMut(&ScreenState)>;

pub struct ScreenController {
    catalog: Catalog,
    state: ScreenState,
    listeners: Vec<Listener>,
}

impl ScreenController {
    pub fn new(catalog: Catalog) -> Self {
        let state = ScreenState {
            filter_text: String::new(),
            visible_games: catalog.all_games(),
        };

        Self {
            catalog,
            state,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Register a callback invoked with the new snapshot after every transition
    pub fn subscribe(&mut self, listener: impl FnMut(&ScreenState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// The clear control is shown while there is filter text, or while the
    /// visible list differs from the full catalog.
    pub fn is_clear_visible(&self) -> bool {
        !self.state.filter_text.is_empty() || self.state.visible_games.iter().ne(self.catalog.iter())
    }

    /// Apply one action and return the resulting snapshot.
    ///
    /// A `StudioTapped` index past the end of the visible list leaves the
    /// state untouched and notifies nobody.
    pub fn apply(&mut self, action: Action) -> &ScreenState {
        let before = self.state.visible_games.len();

        match &action {
            Action::TextChanged(text) => {
                self.state.filter_text = text.clone();
            }
            Action::Search => {
                self.state.visible_games = self.catalog.games_by_studio(&self.state.filter_text);
            }
            Action::Clear => {
                self.state.filter_text.clear();
                self.state.visible_games = self.catalog.all_games();
            }
            Action::StudioTapped(index) => {
                let Some(game) = self.state.visible_games.get(*index) else {
                    crate::logging::warn(
                        "SCREEN",
                        &format!("Studio card {} out of range ({} visible)", index, before),
                    );
                    return &self.state;
                };
                let studio = game.studio.clone();
                self.state.visible_games = self.catalog.games_by_studio(&studio);
                self.state.filter_text = studio;
            }
        }

        crate::logging::log_transition(
            action.name(),
            &self.state.filter_text,
            before,
            self.state.visible_games.len(),
        );

        for listener in &mut self.listeners {
            listener(&self.state);
        }

        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn nintendo() -> Game {
        Game::new(1, "A", "Nintendo", 2020)
    }

    fn sony() -> Game {
        Game::new(2, "B", "Sony", 2021)
    }

    fn controller() -> ScreenController {
        ScreenController::new(Catalog::from_games(vec![nintendo(), sony()]).unwrap())
    }

    #[test]
    fn starts_with_full_catalog_and_no_clear() {
        let screen = controller();
        assert_eq!(screen.state().filter_text, "");
        assert_eq!(screen.state().visible_games, vec![nintendo(), sony()]);
        assert!(!screen.is_clear_visible());
    }

    #[test]
    fn typing_does_not_filter_until_search() {
        let mut screen = controller();
        let state = screen.apply(Action::TextChanged("Nin".into()));
        assert_eq!(state.filter_text, "Nin");
        assert_eq!(state.visible_games.len(), 2);
        assert!(screen.is_clear_visible());

        let state = screen.apply(Action::Search);
        assert_eq!(state.visible_games, vec![nintendo()]);
    }

    #[test]
    fn search_with_empty_text_shows_everything() {
        let mut screen = controller();
        screen.apply(Action::Search);
        assert_eq!(screen.state().visible_games, vec![nintendo(), sony()]);
        assert!(!screen.is_clear_visible());
    }

    #[test]
    fn studio_tap_fills_filter_and_filters() {
        let mut screen = controller();
        let state = screen.apply(Action::StudioTapped(1));
        assert_eq!(state.filter_text, "Sony");
        assert_eq!(state.visible_games, vec![sony()]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut screen = controller();
        screen.apply(Action::TextChanged("Sony".into()));
        screen.apply(Action::Search);
        assert!(screen.is_clear_visible());

        let state = screen.apply(Action::Clear);
        assert_eq!(state.filter_text, "");
        assert_eq!(state.visible_games, vec![nintendo(), sony()]);
        assert!(!screen.is_clear_visible());
    }

    #[test]
    fn clear_stays_visible_after_text_is_erased() {
        let mut screen = controller();
        screen.apply(Action::TextChanged("Sony".into()));
        screen.apply(Action::Search);
        screen.apply(Action::TextChanged(String::new()));
        assert!(screen.is_clear_visible());
    }

    #[test]
    fn search_without_matches_keeps_clear_visible() {
        let mut screen = controller();
        screen.apply(Action::TextChanged("Sega".into()));
        screen.apply(Action::Search);
        assert!(screen.state().visible_games.is_empty());
        assert!(screen.is_clear_visible());
    }

    #[test]
    fn out_of_range_tap_is_ignored() {
        let mut screen = controller();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        screen.subscribe(move |_| *counter.borrow_mut() += 1);

        let state = screen.apply(Action::StudioTapped(5)).clone();
        assert_eq!(state.visible_games.len(), 2);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn listeners_see_every_new_snapshot() {
        let mut screen = controller();
        let seen: Rc<RefCell<Vec<ScreenState>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        screen.subscribe(move |state| sink.borrow_mut().push(state.clone()));

        screen.apply(Action::TextChanged("Nin".into()));
        screen.apply(Action::Search);
        screen.apply(Action::Clear);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].visible_games.len(), 2);
        assert_eq!(seen[1].visible_games, vec![nintendo()]);
        assert_eq!(seen[2].filter_text, "");
    }
}
