// src/ui/widgets/help_popup.rs

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const KEYS: &[(&str, &str)] = &[
    ("↑ ↓", "Select host"),
    ("PgUp PgDn", "Scroll host details"),
    ("/", "Search by IP, hostname, service or port"),
    ("g", "Cycle grouping: none, system type, risk level"),
    ("e", "Export HTML report"),
    ("j", "Export JSON report"),
    ("l", "Toggle log panel"),
    ("← →", "Scroll log lines"),
    ("n", "Open another scan file"),
    ("?", "Toggle this help"),
    ("q", "Quit"),
];

/// Renders the key reference on top of the existing UI.
pub fn render_help_popup(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("KEYBOARD SHORTCUTS".bold().yellow()), Line::from("")];
    lines.extend(KEYS.iter().map(|(key, action)| {
        Line::from(vec![
            Span::styled(format!("{:>10}  ", key), Style::default().bold().fg(Color::Yellow)),
            Span::raw(*action),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from("Exports include only the hosts matching the current search.".italic()));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let popup_area = centered_rect(60, 70, area);
    let popup = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });

    // Clear first so the list underneath does not bleed through.
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// Rectangle of the given percentage size centred in `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
