pub mod html;
pub mod io;
pub mod parsing;
pub mod tree;

// Re-export key types for easier usage
pub use html::render_document;
pub use parsing::{ParseOptions, parse_document, parse_with};
pub use tree::{Document, Element};

/// Parses `source` and renders it to HTML with default options.
pub fn to_html(source: &str) -> String {
    render_document(&parse_document(source))
}

pub fn to_html_with(source: &str, options: ParseOptions) -> String {
    render_document(&parse_with(source, options))
}
