use crate::models::{Element, Node};

/// Role of an utterance child that takes part in cleaning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `<pause>`
    Pause,
    /// `<t type="...">`
    Terminal,
    /// `<g>` grouped-token wrapper
    Grouped,
    /// `<w>`
    Word,
}

/// Role of a child inside a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordPart {
    /// `<replacement>` wrapping alternative words
    Replacement,
    /// `<shortening>` omitted-sound marker
    Shortening,
    /// `<wk type="cmp">` compound split
    Compound,
    /// `<p type="drawl">` prolonged sound
    Drawl,
    /// Plain text
    Text,
    /// Annotations and anything else; contributes nothing
    Other,
}

/// Classify an utterance child by element name.
///
/// Returns `None` for every element outside the four recognized kinds.
pub fn classify(element: &Element) -> Option<NodeKind> {
    match element.name.as_str() {
        "pause" => Some(NodeKind::Pause),
        "t" => Some(NodeKind::Terminal),
        "g" => Some(NodeKind::Grouped),
        "w" => Some(NodeKind::Word),
        _ => None,
    }
}

/// Classify a child of a word element
pub fn classify_word_part(node: &Node) -> WordPart {
    let element = match node {
        Node::Text(_) => return WordPart::Text,
        Node::Element(element) => element,
    };
    match (element.name.as_str(), element.attr("type")) {
        ("replacement", _) => WordPart::Replacement,
        ("shortening", _) => WordPart::Shortening,
        ("wk", Some("cmp")) => WordPart::Compound,
        ("p", Some("drawl")) => WordPart::Drawl,
        _ => WordPart::Other,
    }
}

/// Punctuation for a terminal marker; unknown or missing types map to ""
pub fn terminal_punctuation(element: &Element) -> &'static str {
    match element.attr("type") {
        Some("p") => ".",
        Some("q") => "?",
        Some("e") => "!",
        _ => "",
    }
}

pub fn is_retracing(element: &Element) -> bool {
    element.attr("type") == Some("retracing")
}

pub fn is_untranscribed(element: &Element) -> bool {
    element.has_attr("untranscribed")
}
