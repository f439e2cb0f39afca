//! Tree to HTML serialization.
//!
//! Block structure comes from the processor chain; inline formatting inside
//! text-bearing elements (emphasis, code spans, links) is rendered here with
//! pulldown-cmark. Code bodies are raw zones and only get escaped.

use pulldown_cmark::{Event, Parser, Tag, TagEnd, html};

use crate::tree::{Document, Element};

/// Tags whose text is escaped verbatim instead of inline-rendered.
const RAW_TEXT_TAGS: &[&str] = &["code"];

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img"];

/// Renders a parsed document to an HTML fragment.
///
/// Each top-level block ends with a newline. Child blocks are placed on
/// their own lines, except inside `<pre>` where whitespace is significant.
pub fn render_document(doc: &Document) -> String {
    let mut out = String::new();
    for block in doc.blocks() {
        render_element(block, &mut out);
        out.push('\n');
    }
    out
}

fn render_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for (key, value) in &el.attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');

    if VOID_TAGS.contains(&el.tag.as_str()) {
        return;
    }

    if let Some(text) = &el.text {
        if RAW_TEXT_TAGS.contains(&el.tag.as_str()) {
            out.push_str(&html_escape::encode_text(text));
        } else {
            out.push_str(&render_inline(text));
        }
    }

    // <pre> children stay inline so the code body keeps its exact shape.
    let block_children = !el.children.is_empty() && el.tag != "pre";
    for child in &el.children {
        if block_children {
            out.push('\n');
        }
        render_element(child, out);
    }
    if block_children {
        out.push('\n');
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

/// Renders Markdown text as inline HTML, dropping the paragraph wrapper
/// pulldown-cmark puts around loose text.
fn render_inline(text: &str) -> String {
    let events = Parser::new(text).filter(|event| {
        !matches!(
            event,
            Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph)
        )
    });
    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}
