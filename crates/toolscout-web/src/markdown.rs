//! Markdown to HTML conversion for the results area.

use pulldown_cmark::{html, Event, Options, Parser};

/// Render markdown to an HTML fragment.
///
/// Raw HTML in the input is emitted as escaped text, since result
/// documents embed scraped content and error messages.
pub fn to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}
