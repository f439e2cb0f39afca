use std::collections::VecDeque;

use crate::parsing::blocks::processor::{BlockParser, BlockProcessor};
use crate::tree::Element;

/// Fallback processor: claims every chunk and wraps it in a `<p>`.
///
/// Must be registered at the lowest priority so every other processor gets a
/// look first.
pub struct ParagraphProcessor;

impl BlockProcessor for ParagraphProcessor {
    fn test(&self, _parent: &Element, _block: &str) -> bool {
        true
    }

    fn run(&self, parent: &mut Element, blocks: &mut VecDeque<String>, _parser: &BlockParser) {
        let Some(block) = blocks.pop_front() else {
            return;
        };
        let text = block.trim();
        if text.is_empty() {
            return;
        }
        let mut para = Element::new("p");
        para.set_text(text);
        parent.children.push(para);
    }
}
