// src/ui/widgets/footer.rs

use crate::app::{App, AppState, InputMode};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let spans = match (app.state, app.input_mode) {
        (AppState::Idle, _) => Line::from(vec![
            Span::raw("Type a path and press "),
            key("Enter"),
            Span::raw(" to load, "),
            key("Esc"),
            Span::raw(" to quit."),
        ]),
        (AppState::Loading, _) => Line::from("Loading scan... Press Esc to quit."),
        (AppState::Finished, InputMode::Search) => Line::from(vec![
            Span::raw("Type to filter, "),
            key("Enter"),
            Span::raw("/"),
            key("Esc"),
            Span::raw(" to return to the list."),
        ]),
        (AppState::Finished, InputMode::Browse) => Line::from(vec![
            key("[/]"),
            Span::raw("Search "),
            key("[G]"),
            Span::raw(format!("roup: {} ", app.group_by)),
            key("[E]"),
            Span::raw("HTML "),
            key("[J]"),
            Span::raw("SON "),
            key("[L]"),
            Span::raw("ogs "),
            key("[N]"),
            Span::raw("ew file "),
            key("[?]"),
            Span::raw("Help "),
            key("[Q]"),
            Span::raw("uit"),
        ]),
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
