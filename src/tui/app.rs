use crate::screen::{Action, ScreenController, ScreenState};
use crate::tui::search::SearchState;
use crate::tui::table::CardListState;
use crate::tui::ui;
use crate::{AppConfig, GameShelfError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Which widget receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Studios,
    Games,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Studios,
            Focus::Studios => Focus::Games,
            Focus::Games => Focus::Search,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::Games,
            Focus::Studios => Focus::Search,
            Focus::Games => Focus::Studios,
        }
    }
}

pub struct App {
    pub screen: ScreenController,

    // Sub-states
    pub search: SearchState,
    pub studios: CardListState,
    pub games: CardListState,
    pub focus: Focus,

    pub status_message: String,
    tick_rate: Duration,

    // Set by the screen listener when the visible list was replaced
    list_changed: Rc<Cell<bool>>,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    pub fn new(mut screen: ScreenController, config: &AppConfig) -> Self {
        let list_changed = Rc::new(Cell::new(false));

        let flag = Rc::clone(&list_changed);
        let mut last_ids = visible_ids(screen.state());
        screen.subscribe(move |state| {
            let ids = visible_ids(state);
            if ids != last_ids {
                last_ids = ids;
                flag.set(true);
            }
        });

        let total = screen.state().visible_games.len();
        let mut studios = CardListState::default();
        let mut games = CardListState::default();
        studios.reset(total);
        games.reset(total);

        let mut app = Self {
            screen,
            search: SearchState::default(),
            studios,
            games,
            focus: Focus::Search,
            status_message: String::new(),
            tick_rate: config.tick_rate,
            list_changed,
            should_quit: false,
        };
        app.refresh_status();
        app
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> crate::Result<()> {
        loop {
            terminal
                .draw(|frame| ui::draw(frame, self))
                .map_err(|e| GameShelfError::Terminal(e.to_string()))?;

            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Apply an action to the screen and bring the widgets in line with the
    /// new snapshot.
    pub fn dispatch(&mut self, action: Action) {
        self.screen.apply(action);

        let filter_text = &self.screen.state().filter_text;
        if self.search.query != *filter_text {
            let text = filter_text.clone();
            self.search.set_text(&text);
        }

        if self.list_changed.replace(false) {
            let total = self.screen.state().visible_games.len();
            self.studios.reset(total);
            self.games.reset(total);
        }

        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        let state = self.screen.state();
        let total = self.screen.catalog().len();
        self.status_message = if state.visible_games.is_empty() {
            format!("No games from '{}'", state.filter_text)
        } else {
            format!("{} of {} games", state.visible_games.len(), total)
        };
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.dispatch(Action::Clear);
                return;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::Studios => self.handle_studios_key(key),
            Focus::Games => self.handle_games_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let changed = match key.code {
            KeyCode::Char(c) => {
                self.search.insert(c);
                true
            }
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Delete => self.search.delete(),
            KeyCode::Left => {
                self.search.move_left();
                false
            }
            KeyCode::Right => {
                self.search.move_right();
                false
            }
            KeyCode::Home => {
                self.search.move_home();
                false
            }
            KeyCode::End => {
                self.search.move_end();
                false
            }
            KeyCode::Enter => {
                self.dispatch(Action::Search);
                false
            }
            KeyCode::Down => {
                self.focus = Focus::Studios;
                false
            }
            KeyCode::Esc => {
                if self.screen.is_clear_visible() {
                    self.dispatch(Action::Clear);
                } else {
                    self.should_quit = true;
                }
                false
            }
            _ => false,
        };

        if changed {
            self.dispatch(Action::TextChanged(self.search.query.clone()));
        }
    }

    fn handle_studios_key(&mut self, key: KeyEvent) {
        let total = self.screen.state().visible_games.len();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.studios.select_prev(total),
            KeyCode::Right | KeyCode::Char('l') => self.studios.select_next(total),
            KeyCode::Home => self.studios.select_first(total),
            KeyCode::End => self.studios.select_last(total),
            KeyCode::Up => self.focus = Focus::Search,
            KeyCode::Down => self.focus = Focus::Games,
            KeyCode::Esc => self.focus = Focus::Search,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(index) = self.studios.selected {
                    self.dispatch(Action::StudioTapped(index));
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.type_into_search(c);
            }
            _ => {}
        }
    }

    fn handle_games_key(&mut self, key: KeyEvent) {
        let total = self.screen.state().visible_games.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.games.selected == Some(0) {
                    self.focus = Focus::Studios;
                } else {
                    self.games.select_prev(total);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.games.select_next(total),
            KeyCode::PageUp => self.games.page_up(total),
            KeyCode::PageDown => self.games.page_down(total),
            KeyCode::Home => self.games.select_first(total),
            KeyCode::End => self.games.select_last(total),
            KeyCode::Esc => self.focus = Focus::Search,

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.type_into_search(c);
            }
            _ => {}
        }
    }

    fn type_into_search(&mut self, c: char) {
        self.focus = Focus::Search;
        self.search.move_end();
        self.search.insert(c);
        self.dispatch(Action::TextChanged(self.search.query.clone()));
    }
}

fn visible_ids(state: &ScreenState) -> Vec<u32> {
    state.visible_games.iter().map(|g| g.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Game};

    fn app() -> App {
        let catalog = Catalog::from_games(vec![
            Game::new(1, "A", "Nintendo", 2020),
            Game::new(2, "B", "Sony", 2021),
            Game::new(3, "C", "Nintendo", 2022),
        ])
        .unwrap();
        App::new(ScreenController::new(catalog), &AppConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_updates_filter_but_not_list() {
        let mut app = app();
        type_text(&mut app, "Sony");
        assert_eq!(app.screen.state().filter_text, "Sony");
        assert_eq!(app.screen.state().visible_games.len(), 3);
        assert!(app.screen.is_clear_visible());
    }

    #[test]
    fn enter_runs_the_search() {
        let mut app = app();
        type_text(&mut app, "Nin");
        press(&mut app, KeyCode::Enter);
        let ids = visible_ids(app.screen.state());
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(app.status_message, "2 of 3 games");
    }

    #[test]
    fn escape_clears_then_quits() {
        let mut app = app();
        type_text(&mut app, "Sony");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.search.query, "");
        assert_eq!(app.screen.state().visible_games.len(), 3);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn studio_card_enter_filters_and_fills_search() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Studios);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.search.query, "Sony");
        assert_eq!(app.search.cursor_pos, 4);
        assert_eq!(visible_ids(app.screen.state()), vec![2]);
        assert_eq!(app.studios.selected, Some(0));
        assert_eq!(app.games.selected, Some(0));
    }

    #[test]
    fn ctrl_l_clears_from_any_focus() {
        let mut app = app();
        type_text(&mut app, "Sony");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Games);

        app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert_eq!(app.screen.state().filter_text, "");
        assert!(!app.screen.is_clear_visible());
    }

    #[test]
    fn empty_result_is_reported_in_status() {
        let mut app = app();
        type_text(&mut app, "Sega");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status_message, "No games from 'Sega'");
        assert_eq!(app.games.selected, None);
    }

    #[test]
    fn navigation_on_empty_result_selects_nothing() {
        let mut app = app();
        type_text(&mut app, "Sega");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.studios.selected, None);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen.state().filter_text, "Sega");
        assert!(app.screen.state().visible_games.is_empty());

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::PageUp);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.games.selected, None);
    }

    #[test]
    fn typing_in_games_list_jumps_to_search() {
        let mut app = app();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Games);
        press(&mut app, KeyCode::Char('S'));
        assert_eq!(app.focus, Focus::Search);
        assert_eq!(app.search.query, "S");
    }
}
