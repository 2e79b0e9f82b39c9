// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    let layout = layout::create_layout(area, app.show_logs);

    widgets::input::render_input(frame, app, layout.input);
    widgets::host_list::render_host_list(frame, app, layout.hosts);
    widgets::host_detail::render_host_detail(frame, app, layout.detail);
    widgets::summary::render_summary(frame, app, layout.summary);
    if app.show_logs {
        widgets::log_view::render_log_view(frame, app, layout.log_panel);
    }
    widgets::footer::render_footer(frame, app, layout.footer);

    if app.show_help {
        widgets::help_popup::render_help_popup(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::config::Config;
    use crate::core::models::{Host, Port, PortState};
    use crate::core::source::LoadedScan;
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;

    fn busy_host() -> Host {
        let mut host = Host::new("10.0.0.1");
        for port in 1..=40 {
            host.ports.push(Port::new(port, PortState::Open, "http"));
        }
        host
    }

    fn loaded_app() -> App {
        let mut app = App::new(Config::default());
        app.input = "scan.txt".to_string();
        app.start_loading();
        app.finish_loading(Ok(LoadedScan {
            path: PathBuf::from("scan.txt"),
            hosts: vec![busy_host(), Host::new("10.0.0.2")],
        }));
        app
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
    }

    #[test]
    fn every_state_renders() {
        let mut app = App::new(Config::default());
        draw(&mut app);

        app.state = AppState::Loading;
        draw(&mut app);

        let mut app = loaded_app();
        app.show_logs = true;
        app.log_content = vec!["2024-05-01 10:00:00  INFO Scan loaded into view.".to_string()];
        app.show_help = true;
        app.cycle_group_by();
        draw(&mut app);

        app.search = "no such host".to_string();
        draw(&mut app);
    }

    #[test]
    fn detail_scroll_is_clamped_to_content() {
        let mut app = loaded_app();
        draw(&mut app);
        let max = app.detail_max_scroll;
        assert!(max > 0);

        for _ in 0..100 {
            app.scroll_detail_down();
        }
        assert_eq!(app.detail_scroll, max);
        draw(&mut app);
        assert_eq!(app.detail_scroll, max);

        // A short host has nothing to scroll.
        app.select_next();
        draw(&mut app);
        assert_eq!(app.detail_max_scroll, 0);
        app.scroll_detail_down();
        assert_eq!(app.detail_scroll, 0);
    }
}
