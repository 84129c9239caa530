use gameshelf::{Action, Catalog, Game, MatchMode, ScreenController};

fn nintendo() -> Game {
    Game::new(1, "A", "Nintendo", 2020)
}

fn sony() -> Game {
    Game::new(2, "B", "Sony", 2021)
}

fn catalog() -> Catalog {
    Catalog::from_games(vec![nintendo(), sony()]).unwrap()
}

#[test]
fn query_nin_keeps_only_nintendo() {
    let mut screen = ScreenController::new(catalog());
    screen.apply(Action::TextChanged("Nin".to_string()));
    let state = screen.apply(Action::Search);
    assert_eq!(state.visible_games, vec![nintendo()]);
}

#[test]
fn tapping_sony_card_filters_by_sony() {
    let mut screen = ScreenController::new(catalog());
    let state = screen.apply(Action::StudioTapped(1));
    assert_eq!(state.filter_text, "Sony");
    assert_eq!(state.visible_games, vec![sony()]);
}

#[test]
fn clear_after_filter_restores_catalog_and_hides_control() {
    let mut screen = ScreenController::new(catalog());
    screen.apply(Action::StudioTapped(0));
    assert!(screen.is_clear_visible());

    let state = screen.apply(Action::Clear);
    assert_eq!(state.filter_text, "");
    assert_eq!(state.visible_games, catalog().all_games());
    assert!(!screen.is_clear_visible());
}

#[test]
fn tapping_inside_a_filtered_list_uses_the_filtered_position() {
    let catalog = Catalog::from_games(vec![
        Game::new(1, "A", "Nintendo", 2020),
        Game::new(2, "B", "Sony", 2021),
        Game::new(3, "C", "Sony Santa Monica", 2018),
    ])
    .unwrap();
    let mut screen = ScreenController::new(catalog);
    screen.apply(Action::TextChanged("Sony".to_string()));
    screen.apply(Action::Search);

    // Position 1 of the filtered list is game 3
    let state = screen.apply(Action::StudioTapped(1));
    assert_eq!(state.filter_text, "Sony Santa Monica");
    assert_eq!(state.visible_games.len(), 1);
    assert_eq!(state.visible_games[0].id, 3);
}

#[test]
fn ignore_case_catalog_matches_lowercase_query() {
    let mut screen = ScreenController::new(catalog().with_match_mode(MatchMode::IgnoreCase));
    screen.apply(Action::TextChanged("sony".to_string()));
    let state = screen.apply(Action::Search);
    assert_eq!(state.visible_games, vec![sony()]);
}
