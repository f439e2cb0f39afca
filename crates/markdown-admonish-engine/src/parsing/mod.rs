pub mod blocks;
pub mod snapshot;

use crate::tree::Document;
use blocks::{BlockParser, Processors};

/// Spaces per indentation stop.
pub const TAB_LENGTH: usize = 4;

/// One indentation stop as literal spaces.
pub const INDENT: &str = "    ";

/// Knobs that change how the built-in processors build the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Emit HTMLBook-flavored callouts: `data-type` containers with `h1`
    /// titles instead of classed `div`/`p` pairs.
    pub htmlbook: bool,
}

/// Parses `source` with the built-in processor set and default options.
pub fn parse_document(source: &str) -> Document {
    parse_with(source, ParseOptions::default())
}

pub fn parse_with(source: &str, options: ParseOptions) -> Document {
    BlockParser::new(Processors::builtin(options)).parse(source)
}

/// Unifies line endings to `\n` and expands tabs to spaces at
/// [`TAB_LENGTH`] stops.
pub fn normalize_source(source: &str) -> String {
    let unified = source.replace("\r\n", "\n").replace('\r', "\n");
    if !unified.contains('\t') {
        return unified;
    }

    let mut out = String::with_capacity(unified.len());
    let mut col = 0usize;
    for ch in unified.chars() {
        match ch {
            '\n' => {
                out.push('\n');
                col = 0;
            }
            '\t' => {
                let pad = TAB_LENGTH - col % TAB_LENGTH;
                out.extend(std::iter::repeat_n(' ', pad));
                col += pad;
            }
            c => {
                out.push(c);
                col += 1;
            }
        }
    }
    out
}

/// Splits normalized source into chunks separated by blank lines.
///
/// Blank lines (whitespace-only) are the only separator at this stage.
/// Indentation inside a chunk is preserved verbatim; later processors decide
/// what it means.
pub fn split_blocks(source: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in source.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
