// src/ui/widgets/summary.rs

use crate::app::{App, AppState, ExportStatus};
use crate::core::classifier::RiskLevel;
use crate::ui::widgets::host_list::risk_color;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

/// Renders the summary widget: headline counts, the risk breakdown with a
/// gauge of how many hosts are low risk, systems seen, and the outcome of the
/// last export.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let title = match &app.source {
        Some(path) => format!("Summary: {}", path.display()),
        None => "Summary".to_string(),
    };
    let summary_container = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(summary_container, area);

    let summary_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Counts
            Constraint::Length(1), // Spacer
            Constraint::Length(4), // Risk breakdown
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Systems
            Constraint::Length(2), // Export status
        ])
        .split(area);

    if !matches!(app.state, AppState::Finished) {
        return;
    }
    let summary = &app.summary;

    let counts = Text::from(vec![
        Line::from(vec![Span::raw("Hosts:           "), Span::raw(summary.total_hosts.to_string()).bold()]),
        Line::from(vec![Span::raw("Open ports:      "), Span::raw(summary.open_ports.to_string()).bold()]),
        Line::from(vec![Span::raw("Unique services: "), Span::raw(summary.unique_services.to_string()).bold()]),
    ]);
    frame.render_widget(Paragraph::new(counts), summary_chunks[0]);

    let breakdown = &summary.risk_breakdown;
    let mut risk_lines = vec![Line::from("RISK".bold())];
    for (risk, count) in [
        (RiskLevel::High, breakdown.high),
        (RiskLevel::Medium, breakdown.medium),
        (RiskLevel::Low, breakdown.low),
    ] {
        risk_lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", risk.label()), Style::default().fg(risk_color(risk))),
            Span::raw(count.to_string()),
        ]));
    }
    frame.render_widget(Paragraph::new(risk_lines), summary_chunks[2]);

    let low_percent = if summary.total_hosts == 0 {
        0
    } else {
        (breakdown.low * 100 / summary.total_hosts) as u16
    };
    let gauge = Gauge::default()
        .percent(low_percent)
        .label(format!("{}% low risk", low_percent))
        .style(Style::default().fg(if low_percent >= 80 {
            Color::Green
        } else if low_percent >= 50 {
            Color::Yellow
        } else {
            Color::Red
        }));
    frame.render_widget(gauge, summary_chunks[3]);

    let mut system_lines = vec![Line::from("SYSTEMS".bold())];
    for (system, count) in &summary.operating_systems {
        system_lines.push(Line::from(vec![
            Span::raw("- "),
            Span::styled(system.clone(), Style::default().fg(Color::Cyan)),
            Span::raw(format!(": {}", count)),
        ]));
    }
    frame.render_widget(Paragraph::new(system_lines), summary_chunks[5]);

    let status = match &app.export_status {
        ExportStatus::Idle => Line::from(""),
        ExportStatus::Success(path) => Line::from(Span::styled(
            format!("✓ Saved {}", path),
            Style::default().fg(Color::Green),
        )),
        ExportStatus::Error(e) => Line::from(Span::styled(
            format!("✗ Export failed: {}", e),
            Style::default().fg(Color::Red),
        )),
    };
    frame.render_widget(Paragraph::new(status).wrap(Wrap { trim: true }), summary_chunks[6]);
}
