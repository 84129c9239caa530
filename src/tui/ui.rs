use crate::catalog::Game;
use crate::tui::app::{App, Focus};
use crate::tui::colors;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const TITLE: &str = "My favourite games";
pub const CLEAR_LABEL: &str = "Clear filter";

/// Outer width of one studio card, borders included
const STUDIO_CARD_WIDTH: u16 = 18;
const STUDIO_ROW_HEIGHT: u16 = 5;
/// Outer height of one game card, borders included
const GAME_CARD_HEIGHT: u16 = 4;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let clear_visible = app.screen.is_clear_visible();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                                 // Title
            Constraint::Length(1),                                 // Spacer
            Constraint::Length(3),                                 // Search bar
            Constraint::Length(if clear_visible { 1 } else { 0 }), // Clear filter
            Constraint::Length(1),                                 // Spacer
            Constraint::Length(STUDIO_ROW_HEIGHT),                 // Studio cards
            Constraint::Min(GAME_CARD_HEIGHT),                     // Game cards
            Constraint::Length(1),                                 // Status bar
        ])
        .split(area);

    draw_title(frame, chunks[0]);
    draw_search_bar(frame, app, chunks[2]);
    if clear_visible {
        draw_clear_action(frame, chunks[3]);
    }
    draw_studio_row(frame, app, chunks[5]);
    draw_game_list(frame, app, chunks[6]);
    draw_status_bar(frame, app, chunks[7]);

    if app.focus == Focus::Search {
        // border (1) + leading space (1)
        let cursor_x = chunks[2].x + 2 + app.search.cursor_column() as u16;
        let cursor_y = chunks[2].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(
        format!(" {}", TITLE),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, area);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Search;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::border_color(focused)))
        .title(" Studio name ")
        .title_bottom(Line::from(" Enter: search ").right_aligned());

    let paragraph = Paragraph::new(format!(" {}", app.search.query))
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn draw_clear_action(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {}", CLEAR_LABEL),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (Esc / Ctrl+L)", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_studio_row(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Studios;
    let games = &app.screen.state().visible_games;

    let fit = (area.width / STUDIO_CARD_WIDTH).max(1) as usize;
    app.studios.set_visible(fit);

    let start = app.studios.scroll_offset.min(games.len());
    let end = (start + fit).min(games.len());

    for (slot, index) in (start..end).enumerate() {
        let Some(game) = games.get(index) else {
            break;
        };
        let card_area = Rect::new(
            area.x + slot as u16 * STUDIO_CARD_WIDTH,
            area.y,
            STUDIO_CARD_WIDTH.min(area.width),
            area.height,
        );
        let selected = app.studios.selected == Some(index);
        draw_studio_card(frame, game, selected, focused, card_area);
    }
}

fn draw_studio_card(frame: &mut Frame, game: &Game, selected: bool, focused: bool, area: Rect) {
    let accent = colors::color_for_studio(&game.studio);
    let border = if selected && focused {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .style(Style::default().bg(colors::card_background(selected, focused)));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Vertically centre the single line of text
    let text_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1) / 2,
        inner.width,
        inner.height.min(1),
    );
    let name = truncate(&game.studio, inner.width as usize);
    let paragraph = Paragraph::new(Span::styled(name, Style::default().fg(accent)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, text_area);
}

fn draw_game_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Games;
    let games = &app.screen.state().visible_games;

    if games.is_empty() {
        let empty = Paragraph::new(" No games match this studio.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let fit = (area.height / GAME_CARD_HEIGHT).max(1) as usize;
    app.games.set_visible(fit);

    let start = app.games.scroll_offset.min(games.len());
    let end = (start + fit).min(games.len());

    for (slot, index) in (start..end).enumerate() {
        let y = area.y + slot as u16 * GAME_CARD_HEIGHT;
        if y + GAME_CARD_HEIGHT > area.y + area.height {
            break;
        }
        let card_area = Rect::new(area.x, y, area.width, GAME_CARD_HEIGHT);
        let selected = app.games.selected == Some(index);
        draw_game_card(frame, &games[index], selected, focused, card_area);
    }
}

fn draw_game_card(frame: &mut Frame, game: &Game, selected: bool, focused: bool, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::border_color(selected && focused)))
        .style(Style::default().bg(colors::card_background(selected, focused)));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Title and studio on the left, year on the right (3:1)
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(3, 4), Constraint::Ratio(1, 4)])
        .split(inner);

    let left_width = columns[0].width.saturating_sub(1) as usize;
    let left = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {}", truncate(&game.title, left_width)),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", truncate(&game.studio, left_width)),
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(left, columns[0]);

    let year = Paragraph::new(Span::styled(
        format!("{} ", game.release_year),
        Style::default()
            .fg(colors::color_for_year())
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(year, columns[1]);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = format!(" {}", app.status_message);
    let right_text = " Tab:Focus  Enter:Search/Select  Esc:Clear  Ctrl+Q:Quit ";

    let available_width = area.width as usize;
    let left_len = left_text.width();
    let right_len = right_text.width();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        // Not enough space, just show left text
        format!("{:width$}", left_text, width = available_width)
    };

    let paragraph = Paragraph::new(status_str).style(
        Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(0, 95, 135)),
    );
    frame.render_widget(paragraph, area);
}

/// Cut `text` to at most `max_width` display columns, ending in '…' when cut
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('\u{2026}');
    out
}
