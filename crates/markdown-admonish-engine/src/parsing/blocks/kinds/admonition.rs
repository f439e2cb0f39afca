use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parsing::INDENT;
use crate::parsing::blocks::processor::{BlockParser, BlockProcessor, detab};
use crate::tree::Element;

/// Callout types with dedicated styling in HTMLBook output.
pub const KNOWN_TYPES: &[&str] = &["note", "warning", "tip", "caution", "important"];

pub const CLASSNAME: &str = "admonition";
pub const CLASSNAME_TITLE: &str = "admonition-title";

/// Opener line: `!!! type [more-classes] ["Optional title"]`.
static OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^!!! ?([\w\-]+(?: +[\w\-]+)*)(?: +"(.*?)")? *$"#).expect("opener pattern")
});

static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"  +").expect("space pattern"));

/// Recognizes `!!!` callout openers and their indented continuations, and
/// builds styled container elements for them.
///
/// An opener starts a container; subsequent chunks indented by one stop merge
/// into the most recent container. Unindented lines inside a claimed chunk
/// are pushed back for reprocessing outside the container.
pub struct AdmonitionProcessor {
    htmlbook: bool,
}

impl AdmonitionProcessor {
    pub fn new(htmlbook: bool) -> Self {
        Self { htmlbook }
    }

    /// Whether `sibling` is a callout container that indented chunks may
    /// continue into.
    fn is_admonition(&self, sibling: Option<&Element>) -> bool {
        let Some(sibling) = sibling else {
            return false;
        };
        if self.htmlbook {
            sibling
                .attr("data-type")
                .is_some_and(|t| KNOWN_TYPES.contains(&t))
        } else {
            sibling
                .attr("class")
                .is_some_and(|c| c.contains(CLASSNAME))
        }
    }

    /// Extracts the class list and title from a matched opener.
    ///
    /// Classes are lowercased with space runs collapsed. A missing title
    /// defaults to the capitalized first class; an explicitly empty title
    /// (`""`) suppresses the title element.
    fn class_and_title(caps: &Captures) -> (String, Option<String>) {
        let raw = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let classes = SPACE_RUNS.replace_all(raw, " ").to_lowercase();
        let title = match caps.get(2) {
            None => {
                let first = classes.split(' ').next().unwrap_or_default();
                Some(capitalize(first))
            }
            Some(t) if t.as_str().is_empty() => None,
            Some(t) => Some(t.as_str().to_string()),
        };
        (classes, title)
    }

    fn open_container(&self, parent: &mut Element, classes: &str, title: Option<String>) {
        let mut div = Element::new("div");
        if self.htmlbook {
            // Unknown classifications degrade to plain notes.
            let kind = if KNOWN_TYPES.contains(&classes) {
                classes
            } else {
                "note"
            };
            div.set_attr("data-type", kind);
            if let Some(title) = title {
                let mut heading = Element::new("h1");
                heading.set_text(title);
                div.children.push(heading);
            }
        } else {
            div.set_attr("class", format!("{CLASSNAME} {classes}"));
            if let Some(title) = title {
                let mut para = Element::new("p");
                para.set_attr("class", CLASSNAME_TITLE);
                para.set_text(title);
                div.children.push(para);
            }
        }
        parent.children.push(div);
    }
}

impl BlockProcessor for AdmonitionProcessor {
    fn test(&self, parent: &Element, block: &str) -> bool {
        OPENER.is_match(block)
            || (block.starts_with(INDENT) && self.is_admonition(parent.last_child()))
    }

    fn run(&self, parent: &mut Element, blocks: &mut VecDeque<String>, parser: &BlockParser) {
        let mut block = blocks.pop_front().unwrap_or_default();

        let opener = OPENER.captures(&block).map(|caps| {
            let m = caps.get(0).expect("whole match");
            (m.start(), m.end(), Self::class_and_title(&caps))
        });

        if let Some((start, end, _)) = &opener {
            if *start > 0 {
                // Text ahead of the opener is not part of the callout.
                parser.parse_chunk(parent, &block[..*start]);
            }
            let after = &block[*end..];
            block = after.strip_prefix('\n').unwrap_or(after).to_string();
        }

        let (body, rest) = detab(&block);

        if let Some((_, _, (classes, title))) = opener {
            self.open_container(parent, &classes, title);
        }
        if let Some(container) = parent.last_child_mut() {
            parser.parse_chunk(container, &body);
        }

        if !rest.is_empty() {
            blocks.push_front(rest);
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
