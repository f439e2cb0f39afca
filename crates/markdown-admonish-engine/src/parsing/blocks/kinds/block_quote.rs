use std::collections::VecDeque;

use crate::parsing::blocks::processor::{BlockParser, BlockProcessor};
use crate::tree::Element;

/// Blockquote syntax knowledge: one `>` level per parse pass, nesting is
/// handled by recursion.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    /// Whether a line opens a quote (up to three leading spaces allowed).
    pub fn is_quoted(line: &str) -> bool {
        let mut rest = line;
        let mut spaces = 0;
        while spaces < 3 && rest.starts_with(' ') {
            rest = &rest[1..];
            spaces += 1;
        }
        rest.starts_with(Self::PREFIX)
    }

    /// Strips one quote level from a line.
    ///
    /// Unquoted lines are returned unchanged (lazy continuation).
    pub fn clean(line: &str) -> &str {
        if line.trim() == ">" {
            return "";
        }
        let mut rest = line;
        let mut spaces = 0;
        while spaces < 3 && rest.starts_with(' ') {
            rest = &rest[1..];
            spaces += 1;
        }
        match rest.strip_prefix(Self::PREFIX) {
            Some(r) => r.strip_prefix(' ').unwrap_or(r),
            None => line,
        }
    }
}

pub struct BlockQuoteProcessor;

impl BlockProcessor for BlockQuoteProcessor {
    fn test(&self, _parent: &Element, block: &str) -> bool {
        BlockQuote::is_quoted(block.lines().next().unwrap_or_default())
    }

    fn run(&self, parent: &mut Element, blocks: &mut VecDeque<String>, parser: &BlockParser) {
        let block = blocks.pop_front().unwrap_or_default();
        let cleaned = block
            .split('\n')
            .map(BlockQuote::clean)
            .collect::<Vec<_>>()
            .join("\n");

        // Consecutive quoted chunks merge into the previous blockquote.
        let merge = matches!(parent.last_child(), Some(el) if el.tag == "blockquote");
        if !merge {
            parent.children.push(Element::new("blockquote"));
        }
        if let Some(quote) = parent.last_child_mut() {
            parser.parse_chunk(quote, &cleaned);
        }
    }
}
