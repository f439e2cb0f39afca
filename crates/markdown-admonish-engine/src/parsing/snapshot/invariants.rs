use crate::tree::{Document, Element};

/// Asserts structural invariants on a parsed tree. Test helper.
pub fn check(doc: &Document) {
    for block in doc.blocks() {
        check_element(block);
    }
}

fn check_element(el: &Element) {
    assert!(!el.tag.is_empty(), "element with empty tag");

    for (i, (key, _)) in el.attrs.iter().enumerate() {
        assert!(!key.is_empty(), "empty attribute key on <{}>", el.tag);
        assert!(
            !el.attrs[..i].iter().any(|(k, _)| k == key),
            "duplicate attribute {key:?} on <{}>",
            el.tag
        );
    }

    if el.tag == "pre" {
        assert_eq!(
            el.children.len(),
            1,
            "<pre> must wrap exactly one code element"
        );
        assert_eq!(el.children[0].tag, "code");
    }
    if el.tag == "code" {
        assert!(el.children.is_empty(), "code bodies are leaves");
    }

    for child in &el.children {
        check_element(child);
    }
}
