// src/ui/widgets/input.rs
use crate::app::{App, AppState, InputMode};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the top bar: the scan file path while idle, the search term once
/// a scan is shown.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let (title, text, editing) = match app.state {
        AppState::Finished => {
            let editing = app.input_mode == InputMode::Search;
            let title = if editing { "Search (Enter/Esc to finish)" } else { "Search (press /)" };
            (title, app.search.as_str(), editing)
        }
        _ => ("Nmap Scan File", app.input.as_str(), app.state == AppState::Idle),
    };

    let style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let input_paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(style);
    frame.render_widget(input_paragraph, area);

    if editing {
        frame.set_cursor_position(Position::new(
            area.x + text.chars().count() as u16 + 1,
            area.y + 1,
        ));
    }
}
