use std::collections::VecDeque;

use crate::parsing::blocks::processor::{BlockParser, BlockProcessor};
use crate::tree::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// Fence syntax knowledge: opening and closing line detection.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Detects a fence opener, returning the kind and the info string.
    pub fn open(line: &str) -> Option<(FenceKind, Option<String>)> {
        let t = line.trim_end();
        for (kind, marker) in [
            (FenceKind::Backticks, Self::BACKTICKS),
            (FenceKind::Tildes, Self::TILDES),
        ] {
            if let Some(rest) = t.strip_prefix(marker) {
                let info = rest.trim();
                let info = (!info.is_empty()).then(|| info.to_string());
                return Some((kind, info));
            }
        }
        None
    }

    /// A closing line is fence characters only, at least three of them.
    pub fn closes(kind: FenceKind, line: &str) -> bool {
        let t = line.trim();
        let ch = match kind {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        };
        t.len() >= 3 && t.chars().all(|c| c == ch)
    }
}

/// Turns fenced chunks into `<pre><code>` raw zones.
///
/// The body is kept verbatim and never reparsed. An unterminated fence
/// swallows subsequent chunks until a closing line or end of input.
pub struct FencedCodeProcessor;

impl FencedCodeProcessor {
    /// Collects body lines until a closing fence; returns the tail after the
    /// close, or `None` if the fence stays open.
    fn consume(kind: FenceKind, lines: &[&str], body: &mut Vec<String>) -> Option<String> {
        for (i, line) in lines.iter().enumerate() {
            if CodeFence::closes(kind, line) {
                return Some(lines[i + 1..].join("\n"));
            }
            body.push((*line).to_string());
        }
        None
    }
}

impl BlockProcessor for FencedCodeProcessor {
    fn test(&self, _parent: &Element, block: &str) -> bool {
        CodeFence::open(block.lines().next().unwrap_or_default()).is_some()
    }

    fn run(&self, parent: &mut Element, blocks: &mut VecDeque<String>, _parser: &BlockParser) {
        let block = blocks.pop_front().unwrap_or_default();
        let lines: Vec<&str> = block.split('\n').collect();
        let Some((kind, info)) = CodeFence::open(lines.first().copied().unwrap_or_default())
        else {
            return;
        };

        let mut body: Vec<String> = Vec::new();
        let mut rest = Self::consume(kind, &lines[1..], &mut body);

        // Blank lines between swallowed chunks belong to the code body.
        while rest.is_none() {
            match blocks.pop_front() {
                Some(next) => {
                    body.push(String::new());
                    let next_lines: Vec<&str> = next.split('\n').collect();
                    rest = Self::consume(kind, &next_lines, &mut body);
                }
                None => break,
            }
        }

        let mut pre = Element::new("pre");
        let mut code = Element::new("code");
        if let Some(info) = info {
            code.set_attr("class", format!("language-{info}"));
        }
        if !body.is_empty() {
            code.set_text(body.join("\n") + "\n");
        }
        pre.children.push(code);
        parent.children.push(pre);

        if let Some(rest) = rest
            && !rest.is_empty()
        {
            blocks.push_front(rest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        let (kind, info) = CodeFence::open("```rust").unwrap();
        assert_eq!(kind, FenceKind::Backticks);
        assert_eq!(info.as_deref(), Some("rust"));
    }

    #[test]
    fn detect_tilde_fence() {
        let (kind, info) = CodeFence::open("~~~").unwrap();
        assert_eq!(kind, FenceKind::Tildes);
        assert!(info.is_none());
    }

    #[test]
    fn no_fence() {
        assert!(CodeFence::open("hello").is_none());
    }

    #[test]
    fn closes_matching_fence() {
        assert!(CodeFence::closes(FenceKind::Backticks, "```"));
        assert!(CodeFence::closes(FenceKind::Backticks, "`````"));
        assert!(CodeFence::closes(FenceKind::Tildes, "  ~~~  "));
    }

    #[test]
    fn does_not_close_mismatched_fence() {
        assert!(!CodeFence::closes(FenceKind::Backticks, "~~~"));
        assert!(!CodeFence::closes(FenceKind::Tildes, "```"));
        assert!(!CodeFence::closes(FenceKind::Backticks, "```rust"));
    }
}
