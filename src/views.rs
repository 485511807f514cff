//! HTML views. Pages are plain string templates around a shared layout; all
//! session-derived text goes through `escape_html`.

use crate::{
    models::{ActivityItem, DashboardStats, SystemHealth, UserInfo},
    nav::NavSection,
};

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0;color:#1b2430}\
header,footer{padding:1rem 2rem;background:#0f2a44;color:#fff}\
header a{color:#fff;margin-right:1rem;text-decoration:none}\
main{padding:2rem}.cards{display:flex;gap:1rem;flex-wrap:wrap}\
.card{border:1px solid #d5dde6;border-radius:8px;padding:1rem;min-width:12rem}\
.layout{display:flex;gap:2rem}nav.side{min-width:14rem}\
.error{color:#b00020}";

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\
<html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{title} | EDRS</title><style>{STYLE}</style></head>\
<body><header><strong>EDRS</strong> \
<a href=\"/\">Home</a><a href=\"/about\">About</a><a href=\"/services\">Services</a>\
<a href=\"/contact\">Contact</a><a href=\"/dashboard\">Dashboard</a></header>\
<main>{body}</main>\
<footer>Engineering Document Recognition System</footer></body></html>",
        title = escape_html(title),
    )
}

// --- Public pages ---

pub fn landing_page() -> String {
    layout(
        "Home",
        "<h1>Engineering documents, read by machines</h1>\
<p>EDRS turns P&amp;IDs, datasheets and drawing registers into structured, \
searchable engineering data.</p>\
<div class=\"cards\">\
<div class=\"card\"><h3>Digitize</h3><p>Scan-to-data for legacy drawings.</p></div>\
<div class=\"card\"><h3>Extract</h3><p>Tags, line numbers and equipment lists.</p></div>\
<div class=\"card\"><h3>Review</h3><p>Engineer-in-the-loop validation.</p></div>\
</div><p><a href=\"/login\">Sign in</a></p>",
    )
}

pub fn about_page() -> String {
    layout(
        "About",
        "<h1>About us</h1><p>We build document intelligence for process, \
energy and infrastructure engineering teams.</p>",
    )
}

pub fn services_page() -> String {
    layout(
        "Services",
        "<h1>Services</h1><ul><li>Drawing digitization</li>\
<li>Tag and line-list extraction</li><li>Document register management</li>\
<li>Engineering data validation</li></ul>",
    )
}

pub fn contact_page() -> String {
    layout(
        "Contact",
        "<h1>Contact</h1><p>Email <a href=\"mailto:hello@edrs.example\">\
hello@edrs.example</a> to book a demo.</p>",
    )
}

pub fn login_page(error: Option<&str>) -> String {
    let error = error
        .map(|message| format!("<p class=\"error\">{}</p>", escape_html(message)))
        .unwrap_or_default();
    layout(
        "Sign in",
        &format!(
            "<h1>Sign in</h1>{error}\
<form method=\"post\" action=\"/login\">\
<p><label>Email <input type=\"email\" name=\"email\" required></label></p>\
<p><label>Name <input type=\"text\" name=\"name\"></label></p>\
<p><label>Role <select name=\"role\">\
<option value=\"ENGINEER\">Engineer</option>\
<option value=\"PM\">Project manager</option>\
<option value=\"SUPER_ADMIN\">Super admin</option>\
</select></label></p>\
<p><button type=\"submit\">Sign in</button></p></form>"
        ),
    )
}

/// The denial view. Offers exactly one action: one step back in history.
pub fn access_denied_page() -> String {
    layout(
        "Access denied",
        "<h1>Access denied</h1>\
<p>You do not have permission to view this page.</p>\
<button type=\"button\" onclick=\"history.back()\">Go back</button>",
    )
}

// --- Dashboards ---

fn navigation(sections: &[NavSection]) -> String {
    let mut html = String::from("<nav class=\"side\">");
    for section in sections {
        let state = if section.expanded { " open" } else { "" };
        html.push_str(&format!(
            "<details{state}><summary><a href=\"?open={}\">{}</a></summary><ul>",
            section.id, section.title
        ));
        for link in &section.links {
            html.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>",
                link.path, link.label
            ));
        }
        html.push_str("</ul></details>");
    }
    html.push_str("<p><a href=\"/logout\">Sign out</a></p></nav>");
    html
}

fn stat_cards(stats: &DashboardStats) -> String {
    format!(
        "<div class=\"cards\">\
<div class=\"card\"><h3>Documents processed</h3><p>{}</p></div>\
<div class=\"card\"><h3>Pending reviews</h3><p>{}</p></div>\
<div class=\"card\"><h3>Active engineers</h3><p>{}</p></div>\
<div class=\"card\"><h3>Extraction accuracy</h3><p>{:.1}%</p></div></div>",
        stats.documents_processed,
        stats.pending_reviews,
        stats.active_engineers,
        stats.extraction_accuracy,
    )
}

fn dashboard_shell(title: &str, sections: &[NavSection], content: &str) -> String {
    layout(
        title,
        &format!(
            "<div class=\"layout\">{}<section>{content}</section></div>",
            navigation(sections)
        ),
    )
}

pub fn dashboard_page(
    user: Option<&UserInfo>,
    role_code: &str,
    stats: &DashboardStats,
    activity: &[ActivityItem],
    sections: &[NavSection],
) -> String {
    let greeting = user
        .map(|user| escape_html(user.display_name()))
        .unwrap_or_else(|| "there".to_string());
    let role = if role_code.is_empty() {
        String::new()
    } else {
        format!(" <small>({})</small>", escape_html(role_code))
    };
    let feed: String = activity
        .iter()
        .map(|item| {
            format!(
                "<li>{} by {} at {}</li>",
                escape_html(&item.title),
                escape_html(&item.actor),
                item.at.format("%Y-%m-%d %H:%M UTC")
            )
        })
        .collect();

    dashboard_shell(
        "Dashboard",
        sections,
        &format!(
            "<h1>Welcome, {greeting}{role}</h1>{}<h2>Recent activity</h2><ul>{feed}</ul>",
            stat_cards(stats)
        ),
    )
}

pub fn super_admin_page(
    stats: &DashboardStats,
    health: &[SystemHealth],
    sections: &[NavSection],
) -> String {
    let rows: String = health
        .iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{:.2}%</td></tr>",
                escape_html(&row.service),
                escape_html(&row.status),
                row.uptime_percent
            )
        })
        .collect();
    dashboard_shell(
        "Super admin",
        sections,
        &format!(
            "<h1>Super-admin console</h1>{}<h2>System health</h2>\
<table><tr><th>Service</th><th>Status</th><th>Uptime</th></tr>{rows}</table>",
            stat_cards(stats)
        ),
    )
}

pub fn engineer_page(sections: &[NavSection]) -> String {
    dashboard_shell(
        "Engineer workspace",
        sections,
        "<h1>Engineer workspace</h1><p>Extraction results awaiting your review \
appear here.</p><ul><li>P&amp;ID-104 rev C: 12 tags flagged</li>\
<li>DS-PMP-221: datasheet mismatch on design pressure</li></ul>",
    )
}

/// EdrsPanel
///
/// The EDRS feature panels reachable from the dashboard sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdrsPanel {
    Upload,
    Documents,
    Insights,
}

pub fn edrs_panel_page(panel: EdrsPanel, sections: &[NavSection]) -> String {
    let (title, content) = match panel {
        EdrsPanel::Upload => (
            "Upload documents",
            "<h1>Upload documents</h1>\
<form><input type=\"file\" multiple disabled> \
<button type=\"button\" disabled>Upload</button></form>\
<p>Supported: PDF, TIFF, DWG exports.</p>",
        ),
        EdrsPanel::Documents => (
            "Document register",
            "<h1>Document register</h1><table>\
<tr><th>Number</th><th>Title</th><th>Status</th></tr>\
<tr><td>P&amp;ID-104</td><td>Crude feed system</td><td>In review</td></tr>\
<tr><td>DS-PMP-221</td><td>Feed pump datasheet</td><td>Extracted</td></tr>\
<tr><td>GA-300-02</td><td>Compressor house layout</td><td>Queued</td></tr>\
</table>",
        ),
        EdrsPanel::Insights => (
            "AI insights",
            "<h1>AI insights</h1><ul>\
<li>3 instrument tags appear on drawings but not in the index.</li>\
<li>Line 6\"-P-1041 changes spec between sheets 2 and 3.</li></ul>",
        ),
    };
    dashboard_shell(title, sections, content)
}
