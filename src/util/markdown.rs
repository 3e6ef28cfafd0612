//! Markdown rendering for bot replies.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

/// Convert markdown text to an HTML string for `inner_html` rendering.
pub fn to_html(markdown: &str) -> String {
    let parser = pulldown_cmark::Parser::new(markdown);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}
