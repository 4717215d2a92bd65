use std::collections::BTreeMap;

/// A node in a materialized transcript tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Shorthand for a text node
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    /// Concatenated text of this node and all of its descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.text_content(),
        }
    }
}

/// An element with its attributes and an ordered list of children.
///
/// Children are stored in a vector so that "next sibling" is simply the
/// entry at `index + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Local element name, without namespace
    pub name: String,
    /// Attribute values keyed by local name
    pub attributes: BTreeMap<String, String>,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder: set an attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder: append a text child
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Builder: append an element child
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Look up an attribute value; absence is `None`, not an error
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Element children only, in document order
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First element child with the given name
    pub fn first_child_named(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.is(name))
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if child.is(name) {
                found.push(child);
            }
            child.collect_named(name, found);
        }
    }
}

/// A fully materialized transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Every utterance (`u`) element in document order, at any depth
    pub fn utterances(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        if self.root.is("u") {
            found.push(&self.root);
        }
        self.root.collect_named("u", &mut found);
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_is_recursive() {
        let element = Element::new("w")
            .with_text("wha")
            .with_child(Element::new("shortening").with_text("t"))
            .with_text("'s");

        assert_eq!(element.text_content(), "what's");
    }

    #[test]
    fn test_missing_attribute_is_none() {
        let element = Element::new("t").with_attr("type", "p");

        assert_eq!(element.attr("type"), Some("p"));
        assert_eq!(element.attr("who"), None);
        assert!(!element.has_attr("untranscribed"));
    }

    #[test]
    fn test_utterances_in_document_order() {
        let root = Element::new("CHAT")
            .with_child(Element::new("u").with_attr("uID", "u0"))
            .with_child(
                Element::new("div").with_child(Element::new("u").with_attr("uID", "u1")),
            )
            .with_child(Element::new("u").with_attr("uID", "u2"));
        let doc = Document::new(root);

        let ids: Vec<_> = doc
            .utterances()
            .iter()
            .filter_map(|u| u.attr("uID"))
            .collect();
        assert_eq!(ids, vec!["u0", "u1", "u2"]);
    }
}
