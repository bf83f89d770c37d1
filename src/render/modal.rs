use super::escape_html;
use crate::search::highlight::{paragraphs, Highlighter, Segment};
use crate::search::HighlightMode;
use crate::session::Modal;

fn render_line(line: &str, highlighter: &Highlighter) -> String {
    let mut html = String::from("<p>");
    for segment in highlighter.segments(line) {
        match segment {
            Segment::Plain(text) => html.push_str(&escape_html(text)),
            Segment::Mark(text) => {
                html.push_str(r#"<span class="highlight">"#);
                html.push_str(&escape_html(text));
                html.push_str("</span>");
            }
        }
    }
    html.push_str("</p>");
    html
}

/// Page viewer overlay, one paragraph per line / 页面查看弹窗
pub fn render_modal(modal: &Modal, mode: HighlightMode) -> String {
    let highlighter = Highlighter::new(modal.query(), mode);
    let body: String = paragraphs(modal.text())
        .into_iter()
        .map(|line| render_line(line, &highlighter))
        .collect();

    format!(
        r#"<div class="modal" id="modal"><div class="modal-content" id="modal-content"><span class="close" id="modal-close">&times;</span>{}</div></div>"#,
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DocumentEvents;

    #[test]
    fn test_three_lines_three_paragraphs() {
        let document = DocumentEvents::new();
        let modal = Modal::open(&document, "A\nB\nC".to_string(), String::new());
        let html = render_modal(&modal, HighlightMode::Literal);

        assert_eq!(html.matches("<p>").count(), 3);
        let a = html.find("<p>A</p>").unwrap();
        let b = html.find("<p>B</p>").unwrap();
        let c = html.find("<p>C</p>").unwrap();
        assert!(a < b && b < c);
        assert!(!html.contains("highlight"));
    }

    #[test]
    fn test_highlight_per_line() {
        let document = DocumentEvents::new();
        let modal = Modal::open(
            &document,
            "Horizon data\nno match\nhorizon & more".to_string(),
            "HORIZON".to_string(),
        );
        let html = render_modal(&modal, HighlightMode::Literal);

        assert!(html.contains(r#"<p><span class="highlight">Horizon</span> data</p>"#));
        assert!(html.contains("<p>no match</p>"));
        assert!(html.contains(r#"<p><span class="highlight">horizon</span> &amp; more</p>"#));
    }
}
