mod layout;
mod picker;

use crate::tui::app::AppState;
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    picker::draw_picker(f, app);
}
