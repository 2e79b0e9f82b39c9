// src/ui/widgets/host_list.rs

use crate::app::{App, AppState, SPINNER_CHARS};
use crate::core::classifier::{risk_level, RiskLevel};
use crate::core::models::Host;
use crate::core::query::{GroupBy, HostGroup};
use crate::core::service_catalog::category_of;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::High => Color::Red,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::Low => Color::Green,
    }
}

/// Renders the grouped host list. Group headings take a row each, so the
/// selected host is mapped to its row before rendering.
pub fn render_host_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Hosts ({}/{})", app.visible_host_count(), app.hosts.len()));

    match app.state {
        AppState::Idle => {
            let mut lines = vec![Line::from("Enter the path of an Nmap text report to begin.")];
            if let Some(err) = &app.load_error {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(err.clone(), Style::default().fg(Color::Red))));
            }
            let p = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
            frame.render_widget(p, area);
            return;
        }
        AppState::Loading => {
            let spinner_char = SPINNER_CHARS[app.spinner_frame];
            let p = Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", spinner_char), Style::default().fg(Color::Cyan)),
                Span::raw("Parsing scan..."),
            ]))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(p, area);
            return;
        }
        AppState::Finished => {}
    }

    let groups = app.groups();
    if groups.iter().all(|g| g.hosts.is_empty()) {
        let message = if app.hosts.is_empty() {
            "No hosts found in this scan."
        } else {
            "No hosts match the search."
        };
        frame.render_widget(Paragraph::new(message).block(block), area);
        return;
    }

    let show_headers = app.group_by != GroupBy::None;
    let preview = app.config.preview_ports;
    let mut items: Vec<ListItem<'static>> = Vec::new();
    for group in &groups {
        if show_headers {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("▼ {} ({})", group.label, group.hosts.len()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))));
        }
        for host in &group.hosts {
            items.push(host_item(host, preview));
        }
    }
    let row = host_row_index(&groups, app.selected, show_headers);

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    app.host_list_state.select(row);
    frame.render_stateful_widget(list, area, &mut app.host_list_state);
}

fn host_item(host: &Host, preview: usize) -> ListItem<'static> {
    let risk = risk_level(host);
    let mut title = vec![
        Span::styled("● ", Style::default().fg(risk_color(risk))),
        Span::styled(host.ip.clone(), Style::default().bold()),
    ];
    if let Some(name) = &host.hostname {
        title.push(Span::styled(format!(" ({})", name), Style::default().fg(Color::DarkGray)));
    }

    let mut ports: Vec<Span<'static>> = host
        .open_ports()
        .take(preview)
        .map(|p| {
            Span::styled(
                format!("[{}] {}/{} ", category_of(&p.service).tag(), p.port, p.service),
                Style::default().fg(Color::Gray),
            )
        })
        .collect();
    let hidden = host.open_port_count().saturating_sub(preview);
    if hidden > 0 {
        ports.push(Span::styled(format!("+{} more", hidden), Style::default().fg(Color::DarkGray)));
    }
    ports.insert(0, Span::raw("  "));

    ListItem::new(vec![Line::from(title), Line::from(ports)])
}

/// Row of the `selected`-th host once group headings are counted in.
fn host_row_index(groups: &[HostGroup<'_>], selected: usize, with_headers: bool) -> Option<usize> {
    let mut seen = 0;
    let mut row = 0;
    for group in groups {
        if with_headers {
            row += 1;
        }
        if selected < seen + group.hosts.len() {
            return Some(row + selected - seen);
        }
        seen += group.hosts.len();
        row += group.hosts.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_row_skips_group_headings() {
        let a = Host::new("10.0.0.1");
        let b = Host::new("10.0.0.2");
        let c = Host::new("10.0.0.3");
        let groups = vec![
            HostGroup { label: "Linux".into(), hosts: vec![&a, &b] },
            HostGroup { label: "Windows".into(), hosts: vec![&c] },
        ];
        assert_eq!(host_row_index(&groups, 0, true), Some(1));
        assert_eq!(host_row_index(&groups, 1, true), Some(2));
        assert_eq!(host_row_index(&groups, 2, true), Some(4));
        assert_eq!(host_row_index(&groups, 2, false), Some(2));
        assert_eq!(host_row_index(&groups, 3, true), None);
    }
}
