use std::collections::VecDeque;

use markdown_admonish_engine::parsing::blocks::{BlockParser, BlockProcessor, Processors};
use markdown_admonish_engine::parsing::{ParseOptions, parse_with, snapshot};
use markdown_admonish_engine::tree::Element;
use markdown_admonish_engine::{render_document, to_html};
use pretty_assertions::assert_eq;

#[test]
fn fixture_admonition_basic() {
    assert_fixture("admonition_basic");
}

#[test]
fn fixture_admonition_titled() {
    assert_fixture("admonition_titled");
}

#[test]
fn fixture_admonition_no_title() {
    assert_fixture("admonition_no_title");
}

#[test]
fn fixture_admonition_continuation() {
    assert_fixture("admonition_continuation");
}

#[test]
fn fixture_admonition_nested() {
    assert_fixture("admonition_nested");
}

#[test]
fn fixture_admonition_htmlbook() {
    assert_fixture_with("admonition_htmlbook", ParseOptions { htmlbook: true });
}

#[test]
fn fixture_document_mix() {
    assert_fixture("document_mix");
}

fn assert_fixture(name: &str) {
    assert_fixture_with(name, ParseOptions::default());
}

fn assert_fixture_with(name: &str, options: ParseOptions) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let expected = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.html",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let doc = parse_with(&md, options);
    snapshot::invariants(&doc);

    assert_eq!(render_document(&doc), expected);
}

#[test]
fn default_title_comes_from_the_type() {
    let html = to_html("!!! note\n    Body text.");
    insta::assert_snapshot!(html.trim_end(), @r#"
    <div class="admonition note">
    <p class="admonition-title">Note</p>
    <p>Body text.</p>
    </div>
    "#);
}

#[test]
fn explicit_empty_title_renders_no_title_row() {
    let html = to_html("!!! warning \"\"\n    Quiet.");
    insta::assert_snapshot!(html.trim_end(), @r#"
    <div class="admonition warning">
    <p>Quiet.</p>
    </div>
    "#);
}

#[test]
fn multi_class_openers_keep_every_class() {
    let html = to_html("!!! note important \"Both\"\n    x");
    assert_eq!(
        html,
        "<div class=\"admonition note important\">\n<p class=\"admonition-title\">Both</p>\n<p>x</p>\n</div>\n"
    );
}

/// Fence interiors are raw zones: a `!!!` line inside one is code, not a
/// callout opener.
#[test]
fn fences_shield_admonition_sigils() {
    let html = to_html("```\n!!! note\n    not a callout\n```");
    assert_eq!(
        html,
        "<pre><code>!!! note\n    not a callout\n</code></pre>\n"
    );
}

#[test]
fn indented_chunk_without_sibling_stays_a_paragraph() {
    let html = to_html("    just indented text");
    assert_eq!(html, "<p>just indented text</p>\n");
}

#[test]
fn normalized_tree_exposes_container_nesting() {
    let doc = parse_with(
        "!!! note \"Outer\"\n    Outer body.\n\n    !!! tip\n        Inner body.",
        ParseOptions::default(),
    );
    snapshot::invariants(&doc);

    let snap = snapshot::normalize(&doc);
    assert_eq!(snap.blocks.len(), 1);
    assert_eq!(snap.blocks[0].attrs, vec!["class=admonition note"]);

    let inner = &snap.blocks[0].children[2];
    assert_eq!(inner.tag, "div");
    assert_eq!(inner.attrs, vec!["class=admonition tip"]);
}

#[test]
fn deregistered_admonition_falls_through_to_paragraph() {
    let mut processors = Processors::builtin(ParseOptions::default());
    assert!(processors.deregister("admonition"));

    let parser = BlockParser::new(processors);
    let doc = parser.parse("!!! note\n    text");
    let html = render_document(&doc);
    assert!(html.starts_with("<p>!!! note"), "got: {html}");
}

struct ThematicBreakProcessor;

impl BlockProcessor for ThematicBreakProcessor {
    fn test(&self, _parent: &Element, block: &str) -> bool {
        block.trim() == "---"
    }

    fn run(&self, parent: &mut Element, blocks: &mut VecDeque<String>, _parser: &BlockParser) {
        blocks.pop_front();
        parent.children.push(Element::new("hr"));
    }
}

#[test]
fn custom_processor_slots_between_builtins() {
    let mut processors = Processors::builtin(ParseOptions::default());
    processors.register("thematic-break", 50, Box::new(ThematicBreakProcessor));

    let parser = BlockParser::new(processors);
    let doc = parser.parse("above\n\n---\n\nbelow");
    assert_eq!(
        render_document(&doc),
        "<p>above</p>\n<hr>\n<p>below</p>\n"
    );
}

#[test]
fn unterminated_fence_swallows_following_chunks() {
    let html = to_html("```\nfirst\n\nsecond");
    assert_eq!(html, "<pre><code>first\n\nsecond\n</code></pre>\n");
}

#[test]
fn quoted_chunks_merge_into_one_blockquote() {
    let html = to_html("> one\n\n> two");
    assert_eq!(
        html,
        "<blockquote>\n<p>one</p>\n<p>two</p>\n</blockquote>\n"
    );
}
