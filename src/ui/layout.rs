// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas for one frame. `log_panel` is empty when logs are hidden.
pub struct AppLayout {
    pub input: Rect,
    pub hosts: Rect,
    pub detail: Rect,
    pub summary: Rect,
    pub log_panel: Rect,
    pub footer: Rect,
}

/// Splits the frame into an input bar on top, a footer line at the bottom and
/// the content columns in between: host list, host detail, and a right column
/// holding the summary (and the log panel under it when shown).
pub fn create_layout(frame_size: Rect, show_logs: bool) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(45),
            Constraint::Percentage(25),
        ])
        .split(main_chunks[1]);

    let (summary, log_panel) = if show_logs {
        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(content_chunks[2]);
        (side[0], side[1])
    } else {
        (content_chunks[2], Rect::default())
    };

    AppLayout {
        input: main_chunks[0],
        hosts: content_chunks[0],
        detail: content_chunks[1],
        summary,
        log_panel,
        footer: main_chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_panel_only_when_requested() {
        let area = Rect::new(0, 0, 120, 40);
        assert_eq!(create_layout(area, false).log_panel, Rect::default());

        let layout = create_layout(area, true);
        assert!(layout.log_panel.height > 0);
        assert_eq!(layout.summary.x, layout.log_panel.x);
    }

    #[test]
    fn input_and_footer_frame_the_content() {
        let layout = create_layout(Rect::new(0, 0, 100, 30), false);
        assert_eq!(layout.input.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.footer.y, 29);
        assert_eq!(layout.hosts.y, 3);
    }
}
