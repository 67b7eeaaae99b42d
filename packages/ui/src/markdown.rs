//! Markdown rendering for concept summaries.

use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Render markdown to HTML. Raw HTML in the source is escaped, not passed through.
pub fn render_markdown(source: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, opts).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[component]
pub fn Markdown(source: String, #[props(default = "".to_string())] class: String) -> Element {
    let html = render_markdown(&source);
    rsx! {
        div {
            class: "markdown {class}",
            dangerous_inner_html: "{html}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_and_list() {
        let html = render_markdown("**Bitcoin** is:\n\n- decentralised\n- scarce");
        assert!(html.contains("<strong>Bitcoin</strong>"));
        assert!(html.contains("<li>decentralised</li>"));
    }

    #[test]
    fn test_raw_html_escaped() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
