use std::collections::VecDeque;

use crate::parsing::blocks::processor::{BlockParser, BlockProcessor};
use crate::tree::Element;

/// ATX heading syntax knowledge.
pub struct HashHeading;

impl HashHeading {
    pub const MAX_LEVEL: usize = 6;

    /// Parses a single line as a heading, returning level and text.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let hashes = line.bytes().take_while(|&b| b == b'#').count();
        if hashes == 0 || hashes > Self::MAX_LEVEL {
            return None;
        }
        let rest = &line[hashes..];
        if !rest.is_empty() && !rest.starts_with(' ') {
            return None;
        }
        Some((hashes as u8, rest.trim()))
    }

    /// Finds the first heading line in a chunk, returning the byte range of
    /// the line plus the parsed heading.
    fn find(block: &str) -> Option<(usize, usize, u8, &str)> {
        let mut offset = 0;
        for line in block.split('\n') {
            if let Some((level, text)) = Self::parse(line) {
                return Some((offset, offset + line.len(), level, text));
            }
            offset += line.len() + 1;
        }
        None
    }
}

pub struct HashHeadingProcessor;

impl BlockProcessor for HashHeadingProcessor {
    fn test(&self, _parent: &Element, block: &str) -> bool {
        HashHeading::find(block).is_some()
    }

    fn run(&self, parent: &mut Element, blocks: &mut VecDeque<String>, parser: &BlockParser) {
        let block = blocks.pop_front().unwrap_or_default();
        let Some((start, end, level, text)) = HashHeading::find(&block) else {
            return;
        };

        if start > 0 {
            parser.parse_chunk(parent, &block[..start]);
        }

        let mut heading = Element::new(format!("h{level}"));
        heading.set_text(text);
        parent.children.push(heading);

        if end < block.len() {
            let rest = &block[end + 1..];
            if !rest.is_empty() {
                blocks.push_front(rest.to_string());
            }
        }
    }
}
