use std::collections::VecDeque;

use crate::parsing::{INDENT, ParseOptions, normalize_source, split_blocks};
use crate::tree::{Document, Element};

use super::kinds::{
    AdmonitionProcessor, BlockQuoteProcessor, FencedCodeProcessor, HashHeadingProcessor,
    ParagraphProcessor,
};

/// A block-level extension point.
///
/// Implementations claim blank-line separated chunks via [`test`] and mutate
/// the element tree via [`run`]. `run` must pop at least the front chunk and
/// may push a remainder back onto the front of the queue; it receives the
/// parser so container processors can recurse into their own content.
///
/// [`test`]: BlockProcessor::test
/// [`run`]: BlockProcessor::run
pub trait BlockProcessor {
    /// Whether this processor claims the front chunk under `parent`.
    fn test(&self, parent: &Element, block: &str) -> bool;

    /// Consumes the front chunk (and possibly more) from `blocks`.
    fn run(&self, parent: &mut Element, blocks: &mut VecDeque<String>, parser: &BlockParser);
}

struct Registration {
    name: &'static str,
    priority: u8,
    processor: Box<dyn BlockProcessor>,
}

/// Priority-ordered set of block processors.
///
/// Higher priorities are consulted first. Registering a duplicate name
/// replaces the existing entry.
pub struct Processors {
    entries: Vec<Registration>,
}

impl Processors {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The built-in processor set.
    ///
    /// Priorities leave gaps so callers can slot their own processors
    /// between the built-ins.
    pub fn builtin(options: ParseOptions) -> Self {
        let mut set = Self::empty();
        // Fences outrank everything: a raw zone must be claimed before the
        // admonition pattern can look inside it.
        set.register("fenced-code", 110, Box::new(FencedCodeProcessor));
        set.register(
            "admonition",
            105,
            Box::new(AdmonitionProcessor::new(options.htmlbook)),
        );
        set.register("hash-heading", 70, Box::new(HashHeadingProcessor));
        set.register("block-quote", 20, Box::new(BlockQuoteProcessor));
        set.register("paragraph", 10, Box::new(ParagraphProcessor));
        set
    }

    pub fn register(&mut self, name: &'static str, priority: u8, processor: Box<dyn BlockProcessor>) {
        self.entries.retain(|e| e.name != name);
        let at = self
            .entries
            .iter()
            .position(|e| e.priority < priority)
            .unwrap_or(self.entries.len());
        self.entries.insert(
            at,
            Registration {
                name,
                priority,
                processor,
            },
        );
    }

    /// Removes a processor by name. Returns whether it was registered.
    pub fn deregister(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        self.entries.len() != before
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    fn claim(&self, parent: &Element, block: &str) -> Option<&dyn BlockProcessor> {
        self.entries
            .iter()
            .find(|e| e.processor.test(parent, block))
            .map(|e| e.processor.as_ref())
    }
}

/// Drives the processor chain over a chunk queue.
pub struct BlockParser {
    processors: Processors,
}

impl BlockParser {
    pub fn new(processors: Processors) -> Self {
        Self { processors }
    }

    /// Parses a full source string into a document tree.
    pub fn parse(&self, source: &str) -> Document {
        let normalized = normalize_source(source);
        let mut root = Element::new("div");
        let mut blocks: VecDeque<String> = split_blocks(&normalized).into();
        self.parse_blocks(&mut root, &mut blocks);
        Document { root }
    }

    /// Chunks `text` and parses it into `parent`.
    ///
    /// This is the recursion entry point for container processors filling an
    /// element they created.
    pub fn parse_chunk(&self, parent: &mut Element, text: &str) {
        let mut blocks: VecDeque<String> = split_blocks(text).into();
        self.parse_blocks(parent, &mut blocks);
    }

    /// Runs the chain until the queue is empty.
    ///
    /// A chunk no processor claims is dropped; the built-in paragraph
    /// processor claims everything, so that only happens with a custom
    /// registry.
    pub fn parse_blocks(&self, parent: &mut Element, blocks: &mut VecDeque<String>) {
        while !blocks.is_empty() {
            let claimed = {
                let front = blocks.front().map(String::as_str).unwrap_or_default();
                self.processors.claim(parent, front)
            };
            match claimed {
                Some(processor) => processor.run(parent, blocks, self),
                None => {
                    blocks.pop_front();
                }
            }
        }
    }
}

/// Splits `text` into an indented head, with one indentation stop removed
/// from each line, and the remainder starting at the first unindented
/// non-blank line.
pub fn detab(text: &str) -> (String, String) {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut head: Vec<&str> = Vec::new();

    for line in &lines {
        if let Some(stripped) = line.strip_prefix(INDENT) {
            head.push(stripped);
        } else if line.trim().is_empty() {
            head.push("");
        } else {
            break;
        }
    }
    let rest = lines[head.len()..].join("\n");
    (head.join("\n"), rest)
}
