// src/ui/widgets/log_view.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation},
};

/// Renders the tail of the log file with a dimmed timestamp and a horizontal
/// scrollbar for long lines. The newest lines are kept in view.
pub fn render_log_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title("Logs (scroll with ← →)")
        .borders(Borders::ALL);
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let max_width = app
        .log_content
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    app.log_horizontal_scroll_state = app.log_horizontal_scroll_state.content_length(max_width);

    let log_lines: Vec<Line> = app.log_content.iter().map(|line| style_log_line(line)).collect();

    // Leave the bottom row for the scrollbar.
    let visible = inner_area.height.saturating_sub(1) as usize;
    let top = log_lines.len().saturating_sub(visible) as u16;
    let log_paragraph = Paragraph::new(log_lines).scroll((top, app.log_horizontal_scroll as u16));
    frame.render_widget(log_paragraph, inner_area);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::HorizontalBottom).thumb_symbol("■");
    let scrollbar_area = Rect {
        x: inner_area.x,
        y: inner_area.y + inner_area.height.saturating_sub(1),
        width: inner_area.width,
        height: 1,
    };
    frame.render_stateful_widget(scrollbar, scrollbar_area, &mut app.log_horizontal_scroll_state);
}

/// A log line reads "DATE TIME LEVEL MESSAGE"; anything else is shown as-is.
fn style_log_line(line: &str) -> Line<'_> {
    let mut parts = line.splitn(3, ' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(date), Some(time), Some(rest)) => Line::from(vec![
            Span::styled(format!("{} {}", date, time), Style::default().fg(Color::DarkGray)),
            Span::styled(format!(" {}", rest), level_style(rest)),
        ]),
        _ => Line::from(line),
    }
}

fn level_style(rest: &str) -> Style {
    match rest.trim_start().split(' ').next() {
        Some("ERROR") => Style::default().fg(Color::Red),
        Some("WARN") => Style::default().fg(Color::Yellow),
        Some("DEBUG") | Some("TRACE") => Style::default().fg(Color::Gray),
        _ => Style::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_split_from_message() {
        let line = style_log_line("2024-05-01 10:00:00  INFO Scan loaded into view.");
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, "2024-05-01 10:00:00");
        assert_eq!(line.spans[1].content, "  INFO Scan loaded into view.");
    }

    #[test]
    fn errors_are_highlighted() {
        let line = style_log_line("2024-05-01 10:00:00 ERROR Report export failed.");
        assert_eq!(line.spans[1].style.fg, Some(Color::Red));
    }

    #[test]
    fn short_lines_are_kept_whole() {
        let line = style_log_line("backtrace:");
        assert_eq!(line.spans.len(), 1);
    }
}
