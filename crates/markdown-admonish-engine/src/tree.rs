/// An element in the output tree built by the block processor chain.
///
/// Attributes keep insertion order so serialized output is deterministic.
/// `text` holds raw Markdown content; whether it is escaped verbatim or
/// inline-rendered is decided at serialization time based on the tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Sets an attribute, replacing an existing value in place so the
    /// original attribute order is kept.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.attrs.push((key, value));
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn last_child(&self) -> Option<&Element> {
        self.children.last()
    }

    pub fn last_child_mut(&mut self) -> Option<&mut Element> {
        self.children.last_mut()
    }
}

/// A parsed document: the root element holding the top-level blocks.
#[derive(Debug, Clone)]
pub struct Document {
    pub root: Element,
}

impl Document {
    /// Top-level block elements in source order.
    pub fn blocks(&self) -> &[Element] {
        &self.root.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attr_appends_new_key() {
        let mut el = Element::new("div");
        el.set_attr("class", "admonition note");
        assert_eq!(el.attr("class"), Some("admonition note"));
    }

    #[test]
    fn set_attr_replaces_in_place() {
        let mut el = Element::new("div");
        el.set_attr("class", "a");
        el.set_attr("data-type", "note");
        el.set_attr("class", "b");
        assert_eq!(el.attrs.len(), 2);
        assert_eq!(el.attrs[0], ("class".to_string(), "b".to_string()));
    }

    #[test]
    fn missing_attr_is_none() {
        let el = Element::new("p");
        assert_eq!(el.attr("class"), None);
    }

    #[test]
    fn last_child_mut_targets_most_recent() {
        let mut el = Element::new("div");
        el.children.push(Element::new("p"));
        el.children.push(Element::new("blockquote"));
        assert_eq!(el.last_child_mut().unwrap().tag, "blockquote");
    }
}
