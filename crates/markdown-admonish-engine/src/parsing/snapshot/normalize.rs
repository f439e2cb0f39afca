use serde::Serialize;

use crate::tree::{Document, Element};

/// Serializable view of a parsed tree for snapshots and assertions.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<ElementSnap>,
}

#[derive(Debug, Serialize)]
pub struct ElementSnap {
    pub tag: String,
    /// Attributes flattened to `key=value` strings.
    pub attrs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub children: Vec<ElementSnap>,
}

pub fn normalize(doc: &Document) -> Snap {
    Snap {
        blocks: doc.blocks().iter().map(snap_element).collect(),
    }
}

fn snap_element(el: &Element) -> ElementSnap {
    ElementSnap {
        tag: el.tag.clone(),
        attrs: el
            .attrs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect(),
        text: el.text.clone(),
        children: el.children.iter().map(snap_element).collect(),
    }
}
