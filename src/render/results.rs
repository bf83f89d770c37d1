use std::fmt::Write;

use super::escape_html;
use crate::models::EvidenceItem;

pub fn render_result_count(count: usize) -> String {
    format!(r#"<p class="result-count">{} result(s) found</p>"#, count)
}

/// Result table, one row per item in filter order / 结果表格
///
/// Page entries carry their (row, page) address for the click handler.
pub fn render_results(results: &[EvidenceItem], link_base: &str) -> String {
    let mut html = render_result_count(results.len());
    html.push_str(
        "<table><thead><tr><th>Evidence Title</th><th>Pages</th><th>Inquiry Page</th></tr></thead><tbody>",
    );

    for (row, item) in results.iter().enumerate() {
        let pages = if item.pages.is_empty() {
            "No matching pages found.".to_string()
        } else {
            let mut list = String::from(r#"<ul class="page-list">"#);
            for (idx, page) in item.pages.iter().enumerate() {
                let _ = write!(
                    list,
                    r#"<li class="clickable-page" data-row="{}" data-page="{}">Page {}</li>"#,
                    row, idx, page.page_number
                );
            }
            list.push_str("</ul>");
            list
        };

        let _ = write!(
            html,
            r#"<tr><td><strong>{}</strong></td><td>{}</td><td><a href="{}" target="_blank" rel="noreferrer">View</a></td></tr>"#,
            escape_html(&item.title),
            pages,
            escape_html(&item.external_url(link_base)),
        );
    }

    html.push_str("</tbody></table>");
    html
}
