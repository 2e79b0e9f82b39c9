// src/core/report/html.rs

use super::{HostReport, Report};

const STYLE: &str = r#"
    :root {
        --bg: #1d2021; --bg-soft: #282828; --fg: #ebdbb2; --gray: #928374;
        --red: #fb4934; --green: #b8bb26; --yellow: #fabd2f; --blue: #83a598; --aqua: #8ec07c;
    }
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
           background: var(--bg); color: var(--fg); line-height: 1.6; margin: 0; padding: 2rem; }
    .container { max-width: 1200px; margin: 0 auto; }
    .report-header { text-align: center; margin-bottom: 3rem; padding: 2rem; background: var(--bg-soft);
                     border-radius: 1rem; border: 1px solid rgba(235, 219, 178, 0.1); }
    .report-header h1 { font-size: 2.5rem; margin: 0; color: var(--aqua); }
    .timestamp { color: var(--gray); margin-top: 1rem; }
    .executive-summary { background: rgba(131, 165, 152, 0.1); border: 1px solid rgba(131, 165, 152, 0.2);
                         padding: 2rem; border-radius: 1rem; margin: 2rem 0; }
    .stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 1.5rem; }
    .stat-box { background: rgba(40, 40, 40, 0.5); padding: 1.5rem; border-radius: 0.75rem;
                border: 1px solid rgba(235, 219, 178, 0.1); }
    .stat-box h3 { color: var(--aqua); margin: 0 0 0.5rem 0; }
    .host-card { background: var(--bg-soft); border: 1px solid rgba(235, 219, 178, 0.1);
                 border-radius: 1rem; padding: 2rem; margin: 1.5rem 0; }
    .host-header { display: flex; justify-content: space-between; align-items: center; }
    .host-title { color: var(--blue); font-size: 1.5rem; margin: 0; }
    table { width: 100%; border-collapse: separate; border-spacing: 0; margin: 1.5rem 0; }
    th { background: rgba(50, 48, 47, 0.7); padding: 1rem; text-align: left; color: var(--aqua); }
    td { padding: 1rem; background: rgba(50, 48, 47, 0.3); border-top: 1px solid rgba(235, 219, 178, 0.1); }
    .risk-high { color: var(--red); }
    .risk-medium { color: var(--yellow); }
    .risk-low { color: var(--green); }
    .script-output { background: rgba(40, 40, 40, 0.7); padding: 1rem; border-radius: 0.5rem;
                     font-family: monospace; white-space: pre-wrap; margin: 0; }
    .report-footer { text-align: center; color: var(--gray); margin-top: 3rem; }
"#;

/// Renders a self-contained HTML document for `report`.
pub fn render_html(report: &Report) -> String {
    let summary = &report.summary;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape(&report.title)));
    html.push_str(&format!("<style>{}</style>\n</head>\n<body>\n<div class=\"container\">\n", STYLE));

    html.push_str("<div class=\"report-header\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&report.title)));
    html.push_str(&format!(
        "<div class=\"timestamp\">Generated on {}</div>\n</div>\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    // --- Executive summary ---
    html.push_str("<div class=\"executive-summary\">\n<h2>Executive Summary</h2>\n<div class=\"stats-grid\">\n");
    html.push_str("<div class=\"stat-box\">\n<h3>Infrastructure Overview</h3>\n");
    html.push_str(&format!("<p>Total Hosts: {}</p>\n", summary.total_hosts));
    html.push_str(&format!("<p>Open Ports: {}</p>\n", summary.open_ports));
    html.push_str(&format!("<p>Unique Services: {}</p>\n</div>\n", summary.unique_services));

    html.push_str("<div class=\"stat-box\">\n<h3>Risk Assessment</h3>\n");
    html.push_str(&format!(
        "<p class=\"risk-high\">High Risk: {} hosts</p>\n",
        summary.risk_breakdown.high
    ));
    html.push_str(&format!(
        "<p class=\"risk-medium\">Medium Risk: {} hosts</p>\n",
        summary.risk_breakdown.medium
    ));
    html.push_str(&format!(
        "<p class=\"risk-low\">Low Risk: {} hosts</p>\n</div>\n",
        summary.risk_breakdown.low
    ));

    html.push_str("<div class=\"stat-box\">\n<h3>Operating Systems</h3>\n");
    for (os, count) in &summary.operating_systems {
        html.push_str(&format!("<p>{}: {} hosts</p>\n", html_escape(os), count));
    }
    html.push_str("</div>\n</div>\n</div>\n");

    // --- Host details ---
    html.push_str("<div class=\"host-details\">\n<h2>Host Details</h2>\n");
    for host in &report.hosts {
        render_host(&mut html, host);
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"report-footer\"><p>Generated by scanview</p></div>\n");
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_host(html: &mut String, host: &HostReport) {
    let title = if host.has_hostname() {
        format!("{} ({})", html_escape(&host.ip), html_escape(&host.hostname))
    } else {
        html_escape(&host.ip)
    };

    html.push_str("<div class=\"host-card\">\n<div class=\"host-header\">\n");
    html.push_str(&format!("<h3 class=\"host-title\">{}</h3>\n", title));
    html.push_str(&format!(
        "<span class=\"risk-{}\">{} RISK</span>\n</div>\n",
        host.risk_level,
        host.risk_level.to_string().to_uppercase()
    ));
    html.push_str(&format!("<p>Operating System: {}</p>\n", html_escape(&host.os)));
    if let Some(details) = &host.os_details {
        html.push_str(&format!("<p>OS Details: {}</p>\n", html_escape(details)));
    }
    if let Some(distance) = host.distance {
        html.push_str(&format!("<p>Network Distance: {} hops</p>\n", distance));
    }

    html.push_str("<table>\n<thead>\n<tr><th>Port</th><th>State</th><th>Service</th><th>Version</th><th>Extra Info</th></tr>\n</thead>\n<tbody>\n");
    for port in &host.ports {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{} {}</td><td>{}</td></tr>\n",
            port.port,
            port.state,
            html_escape(&port.service),
            html_escape(&port.product),
            html_escape(&port.version),
            html_escape(&port.extra_info)
        ));
        if !port.scripts.is_empty() {
            html.push_str(&format!(
                "<tr><td colspan=\"5\"><pre class=\"script-output\">{}</pre></td></tr>\n",
                html_escape(&port.scripts.join("\n"))
            ));
        }
    }
    html.push_str("</tbody>\n</table>\n</div>\n");
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
