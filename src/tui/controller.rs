use crate::cards::{Rank, Suite};
use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.poll_histogram();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Map a key to an action. Returns true when the user asked to quit.
///
/// `q` quits only while a suite is expected; in the rank scene it picks a Queen.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if let KeyCode::Char('x') | KeyCode::Char('X') = code {
        let _ = app.handle_input(InputAction::Clear);
        return false;
    }

    match app.scene {
        Scene::PickSuite => match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            KeyCode::Char(c) => {
                if let Some(suite) = suite_for_key(c) {
                    let _ = app.handle_input(InputAction::PickSuite(suite));
                }
            }
            _ => {}
        },
        Scene::PickRank => match code {
            KeyCode::Esc | KeyCode::Backspace => {
                let _ = app.handle_input(InputAction::Back);
            }
            KeyCode::Char(c) => {
                if let Some(rank) = rank_for_key(c) {
                    let _ = app.handle_input(InputAction::PickRank(rank));
                }
            }
            _ => {}
        },
    }
    false
}

pub fn suite_for_key(c: char) -> Option<Suite> {
    match c.to_ascii_lowercase() {
        's' => Some(Suite::Spade),
        'h' => Some(Suite::Heart),
        'c' => Some(Suite::Club),
        'd' => Some(Suite::Diamond),
        _ => None,
    }
}

/// `2`-`9` as themselves, `t` or `0` for ten, then the face letters.
pub fn rank_for_key(c: char) -> Option<Rank> {
    match c.to_ascii_lowercase() {
        '0' | 't' => Some(Rank::Ten),
        'j' => Some(Rank::Jack),
        'q' => Some(Rank::Queen),
        'k' => Some(Rank::King),
        'a' => Some(Rank::Ace),
        d => d.to_digit(10).and_then(|v| Rank::from_value(v as u8)),
    }
}
