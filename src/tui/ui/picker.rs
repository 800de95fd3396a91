use crate::cards::{Card, Suite};
use crate::hand::MAX_KNOWN;
use crate::tui::app::{AppState, Scene};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::centered_fixed;

const WIDTH: u16 = 64;
const HEIGHT: u16 = 28;

fn suite_color(suite: Suite) -> Color {
    match suite {
        Suite::Heart | Suite::Diamond => Color::Red,
        Suite::Spade | Suite::Club => Color::White,
    }
}

fn card_span(card: Card) -> Span<'static> {
    Span::styled(
        format!("{} {}", card.suite().symbol(), card.rank().name()),
        Style::default().fg(suite_color(card.suite())).add_modifier(Modifier::BOLD),
    )
}

pub(super) fn draw_picker(f: &mut Frame, app: &AppState) {
    let area = centered_fixed(WIDTH, HEIGHT, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // cards
            Constraint::Length(3),  // hand
            Constraint::Length(12), // histogram
            Constraint::Length(4),  // keys
            Constraint::Min(3),     // status
        ])
        .split(area);

    // Picked cards, plus the suite of a half-picked one
    let mut spans: Vec<Span> = Vec::new();
    for (i, &card) in app.cards().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(card_span(card));
    }
    if let Some(suite) = app.pending_suite() {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("{} ?", suite.symbol()),
            Style::default().fg(suite_color(suite)).add_modifier(Modifier::DIM),
        ));
    }
    let cards = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!("texas-rs: cards {}/{MAX_KNOWN}", app.cards().len()))
            .borders(Borders::ALL),
    );
    f.render_widget(cards, chunks[0]);

    let hand_text = match app.hand() {
        Some(hand) => hand.to_string(),
        None => format!("pick at least {} cards", AppState::MIN_CARDS_FOR_HAND),
    };
    let hand = Paragraph::new(hand_text).block(Block::default().title("Best hand").borders(Borders::ALL));
    f.render_widget(hand, chunks[1]);

    let hist_lines: Vec<Line> = match app.histogram() {
        Some(rows) => rows
            .iter()
            .map(|row| {
                Line::from(format!(
                    "{:<16} {:>8.2}%   acc {:>7.2}%",
                    row.category.name(),
                    row.probability * 100.0,
                    row.cumulative_probability * 100.0
                ))
            })
            .collect(),
        None => vec![Line::from(Span::styled(
            "Probabilities: input more to calculate...",
            Style::default().add_modifier(Modifier::DIM),
        ))],
    };
    let title = if app.calculating() { "Probabilities (calculating…)" } else { "Probabilities" };
    let hist = Paragraph::new(hist_lines).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(hist, chunks[2]);

    let keys = match app.scene {
        Scene::PickSuite => "[S]pade [H]eart [C]lub [D]iamond",
        Scene::PickRank => "[2]-[9] [T]/[0]=10 [J] [Q] [K] [A]   [Esc] Back",
    };
    let extra = match app.scene {
        Scene::PickSuite => "[X] Clear  [Q]/[Esc] Quit",
        Scene::PickRank => "[X] Clear",
    };
    let key_lines = vec![
        Line::from(keys),
        Line::from(Span::styled(extra, Style::default().add_modifier(Modifier::DIM))),
    ];
    let keys = Paragraph::new(key_lines).block(Block::default().title("Keys").borders(Borders::ALL));
    f.render_widget(keys, chunks[3]);

    let status = Paragraph::new(app.status().to_string())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[4]);
}
