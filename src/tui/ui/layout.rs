use ratatui::layout::Constraint;
use ratatui::prelude::{Layout, Rect};

/// A box `width` x `height` cells centered in `r`, clipped to `r`.
pub(super) fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(ratatui::prelude::Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(height.min(r.height)), Constraint::Fill(1)])
        .split(r);
    let horizontal = Layout::default()
        .direction(ratatui::prelude::Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(width.min(r.width)), Constraint::Fill(1)])
        .split(vertical[1]);
    horizontal[1]
}
