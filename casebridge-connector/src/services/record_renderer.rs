//! Read-only candidate summary rendering
//!
//! Pure HTML snippet for the host's candidate list: case number, external
//! deep link, title as a link, status badge. Link targets are sanitized
//! before embedding and all text is escaped. No network, no mutation.

use crate::models::CandidateRecord;
use casebridge_common::url_utils::sanitize_url;

/// Render one candidate as a read-only HTML summary
pub fn render(record: &CandidateRecord) -> String {
    let title = escape_html(&record.name);
    let case_number = escape_html(&record.case_number);
    let status_badge = record
        .status
        .as_deref()
        .map(render_status)
        .unwrap_or_default();

    let (title_html, external_link) = match sanitize_url(&record.url) {
        Some(href) => (
            format!(r#"<a href="{}" class="case-title">{}</a>"#, href, title),
            format!(
                r#" <a href="{}" class="case-external-link" target="_blank" rel="noopener">&#8599;</a>"#,
                href
            ),
        ),
        None => (
            format!(r#"<span class="case-title">{}</span>"#, title),
            String::new(),
        ),
    };

    format!(
        "<div class=\"case-card\">\n\
         <div class=\"case-header\"><span class=\"case-number\">{}</span>{}</div>\n\
         {}\n\
         {}\n\
         </div>",
        case_number, external_link, title_html, status_badge
    )
}

fn render_status(status: &str) -> String {
    let class_suffix: String = status
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    format!(
        r#"<span class="case-status case-status-{}">{}</span>"#,
        class_suffix,
        escape_html(status)
    )
}

/// Minimal HTML escaping for text interpolated into markup
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
