//! Server-side HTML rendering / 服务端页面渲染
//!
//! Produces the full page and the fragments the browser script swaps in
//! after each event. All corpus text goes through `escape_html`.

pub mod modal;
pub mod results;

use uuid::Uuid;

use crate::search::HighlightMode;
use crate::session::SearchSession;

pub use modal::render_modal;
pub use results::{render_result_count, render_results};

pub const PAGE_TITLE: &str = "Post Office Horizon IT Inquiry Evidence Search";
pub const LOADING_TEXT: &str = "Loading the evidence data...";

/// Display settings taken from config / 渲染参数
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub link_base: String,
    pub highlight_mode: HighlightMode,
}

impl From<&crate::config::AppConfig> for RenderOptions {
    fn from(config: &crate::config::AppConfig) -> Self {
        Self {
            link_base: config.search.link_base.clone(),
            highlight_mode: config.search.highlight_mode,
        }
    }
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn document(body: &str, head_extra: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{PAGE_TITLE}</title>
    {head_extra}
    <link rel="stylesheet" href="/app.css" />
  </head>
  <body>
{body}
  </body>
</html>
"#
    )
}

/// Page shown while the corpus is still loading / 加载中页面
///
/// Nothing interactive is rendered; the page refreshes itself until the
/// corpus is ready.
pub fn render_loading_page() -> String {
    document(
        &format!(r#"    <div class="App">{LOADING_TEXT}</div>"#),
        r#"<meta http-equiv="refresh" content="1" />"#,
    )
}

/// The interactive page for one view / 视图主页面
///
/// The view id is carried on the root element so the browser script can
/// address this page's state.
pub fn render_app_page(session: &SearchSession, view: Uuid, options: &RenderOptions) -> String {
    let search = session.search();
    let modal = session
        .modal()
        .map(|m| render_modal(m, options.highlight_mode))
        .unwrap_or_default();

    let body = format!(
        r#"    <div class="App" id="app" data-view="{view}">
      <h1>{PAGE_TITLE}</h1>
      <div class="searchForm">
        <form id="search-form">
          <input type="text" name="query" id="search-input" placeholder="Search..." autocomplete="off" value="{query}" />
          <button type="submit">Search</button>
        </form>
      </div>
      <div class="results" id="results">{results}</div>
      <div id="modal-root">{modal}</div>
    </div>
    <script src="/app.js" defer></script>"#,
        query = escape_html(search.query()),
        results = render_results(search.results(), &options.link_base),
    );

    document(&body, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EvidenceItem, Page};

    fn options() -> RenderOptions {
        RenderOptions {
            link_base: crate::config::DEFAULT_LINK_BASE.to_string(),
            highlight_mode: HighlightMode::Literal,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"R&D"</b> 'x'"#),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; &#39;x&#39;"
        );
    }

    #[test]
    fn test_loading_page_has_nothing_interactive() {
        let html = render_loading_page();
        assert!(html.contains(LOADING_TEXT));
        assert!(!html.contains("<form"));
        assert!(!html.contains("result(s) found"));
    }

    #[test]
    fn test_app_page() {
        let corpus = vec![EvidenceItem {
            title: "Witness A".to_string(),
            link: "/a".to_string(),
            pages: vec![Page {
                page_number: 1,
                page_text: "hello world".to_string(),
            }],
        }];
        let mut session = SearchSession::new();
        session.submit(&corpus, "\"hello\"", 1);

        let view = Uuid::new_v4();
        let html = render_app_page(&session, view, &options());
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains(&format!(r#"data-view="{}""#, view)));
        assert!(html.contains(r#"value="&quot;hello&quot;""#));
        assert!(html.contains("0 result(s) found"));
        assert!(!html.contains(r#"class="modal""#));

        session.submit(&corpus, "hello", 2);
        session.open_page(0, 0, 2).unwrap();
        let html = render_app_page(&session, view, &options());
        assert!(html.contains("1 result(s) found"));
        assert!(html.contains(r#"<span class="highlight">hello</span>"#));
    }
}
