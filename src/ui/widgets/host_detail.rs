// src/ui/widgets/host_detail.rs

use crate::app::{App, AppState};
use crate::core::classifier::{risk_level, system_type};
use crate::core::models::{Host, Port, PortState};
use crate::core::service_catalog::{category_of, get_service_detail};
use crate::ui::widgets::host_list::risk_color;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders everything known about the selected host. Scrolls with PgUp/PgDn,
/// and records how far it can scroll so the offset never passes the last line.
pub fn render_host_detail(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Host Details (scroll with PgUp PgDn)");
    app.detail_max_scroll = 0;

    if app.state != AppState::Finished {
        frame.render_widget(block, area);
        return;
    }

    let Some(text) = app.selected_host().map(build_detail_text) else {
        let p = Paragraph::new("Select a host to see its ports and services.")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(p, area);
        return;
    };

    let inner = block.inner(area);
    let p = Paragraph::new(text).wrap(Wrap { trim: false });
    let overflow = p.line_count(inner.width).saturating_sub(inner.height as usize);
    app.detail_max_scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
    app.detail_scroll = app.detail_scroll.min(app.detail_max_scroll);

    frame.render_widget(p.scroll((app.detail_scroll, 0)).block(block), area);
}

fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::DarkGray))
}

fn build_detail_text(host: &Host) -> Text<'static> {
    let risk = risk_level(host);
    let mut lines = vec![
        Line::from(Span::styled(host.ip.clone(), Style::default().bold().fg(Color::Cyan))),
        Line::from(vec![label("Hostname:  "), Span::raw(host.hostname.clone().unwrap_or_else(|| "N/A".into()))]),
        Line::from(vec![label("System:    "), Span::raw(system_type(host).to_string())]),
        Line::from(vec![
            label("Risk:      "),
            Span::styled(risk.label(), Style::default().fg(risk_color(risk)).bold()),
        ]),
    ];
    if let Some(os) = &host.os {
        lines.push(Line::from(vec![label("OS:        "), Span::raw(os.clone())]));
    }
    if let Some(distance) = host.distance {
        lines.push(Line::from(vec![label("Distance:  "), Span::raw(format!("{} hop(s)", distance))]));
    }
    lines.push(Line::from(vec![
        label("Ports:     "),
        Span::raw(format!(
            "{} open, {} filtered, {} listed",
            host.open_port_count(),
            host.filtered_port_count(),
            host.ports.len()
        )),
    ]));

    for port in &host.ports {
        lines.push(Line::from(""));
        lines.extend(port_lines(port));
    }

    Text::from(lines)
}

fn port_lines(port: &Port) -> Vec<Line<'static>> {
    let state_style = match port.state {
        PortState::Open => Style::default().fg(Color::Green),
        PortState::Filtered => Style::default().fg(Color::Yellow),
        PortState::Closed => Style::default().fg(Color::Red),
    };
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("[{}] ", category_of(&port.service).tag()), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{}/tcp ", port.port), Style::default().bold()),
        Span::styled(format!("{} ", port.state), state_style),
        Span::raw(port.service.clone()),
    ])];

    let software: Vec<&str> = [&port.product, &port.version, &port.extra_info]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .collect();
    if !software.is_empty() {
        lines.push(Line::from(vec![label("  Software: "), Span::raw(software.join(" "))]));
    }

    if let Some(detail) = get_service_detail(&port.service) {
        lines.push(Line::from(Span::styled(
            format!("  {} ({}): {}", detail.title, detail.category, detail.description),
            Style::default().fg(Color::Gray).italic(),
        )));
    }

    if let Some(ssl) = &port.ssl {
        lines.push(Line::from("  SSL certificate".yellow()));
        for (name, value) in [
            ("    Subject:     ", &ssl.subject),
            ("    Valid from:  ", &ssl.valid_from),
            ("    Valid until: ", &ssl.valid_until),
        ] {
            if let Some(value) = value {
                lines.push(Line::from(vec![label(name), Span::raw(value.clone())]));
            }
        }
    }

    if !port.ssh_host_keys.is_empty() {
        lines.push(Line::from("  SSH host keys".yellow()));
        for key in &port.ssh_host_keys {
            lines.push(Line::from(vec![
                Span::styled(format!("    {:<8}", key.key_type), Style::default().fg(Color::Cyan)),
                Span::raw(key.fingerprint.clone()),
            ]));
        }
    }

    if !port.scripts.is_empty() {
        lines.push(Line::from("  Script output".yellow()));
        for script in &port.scripts {
            lines.push(Line::from(Span::styled(format!("    {}", script), Style::default().fg(Color::Gray))));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_scan;

    fn plain(text: &Text) -> Vec<String> {
        text.lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.to_string()).collect())
            .collect()
    }

    #[test]
    fn detail_lists_port_extras() {
        let hosts = parse_scan(
            "Nmap scan report for web.local (10.0.0.5)\n\
             443/tcp open https nginx 1.18.0\n\
             | ssl-cert: Subject: commonName=web.local\n\
             | Not valid before: 2024-01-01T00:00:00\n\
             | Not valid after:  2025-01-01T00:00:00\n",
        );
        let text = plain(&build_detail_text(&hosts[0]));
        assert_eq!(text[0], "10.0.0.5");
        assert!(text.iter().any(|l| l.contains("Hostname:  web.local")));
        assert!(text.iter().any(|l| l.contains("Software: nginx 1.18.0")));
        assert!(text.iter().any(|l| l.contains("Subject:") && l.contains("commonName=web.local")));
        assert!(text.iter().any(|l| l.contains("Script output")));
    }

    #[test]
    fn detail_marks_unknown_hostname() {
        let host = Host::new("192.168.1.9");
        let text = plain(&build_detail_text(&host));
        assert!(text.iter().any(|l| l == "Hostname:  N/A"));
        assert!(text.iter().any(|l| l.contains("0 open, 0 filtered, 0 listed")));
    }
}
