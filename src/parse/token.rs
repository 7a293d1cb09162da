use scraper::{node::Element, Html, Node};

/// One unit of a page walked in document order.
///
/// End tags are not represented: a start tag's element stays "open" only
/// until the next start tag, which is all the extractors look at.
#[derive(Debug, Clone, Copy)]
pub enum Token<'a> {
    StartTag(&'a Element),
    Text(&'a str),
    Other,
}

impl<'a> Token<'a> {
    /// Returns the element if this is a start tag named `name`.
    pub fn start_tag_named(self, name: &str) -> Option<&'a Element> {
        match self {
            Self::StartTag(element) if element.name() == name => Some(element),
            _ => None,
        }
    }
}

/// Walks every node of `document` in document order.
pub fn tokens(document: &Html) -> impl Iterator<Item = Token<'_>> {
    document
        .tree
        .root()
        .descendants()
        .map(|node| match node.value() {
            Node::Element(element) => Token::StartTag(element),
            Node::Text(text) => Token::Text(&**text),
            _ => Token::Other,
        })
}

/// Text between tags that only carries the page's indentation.
pub fn is_layout_whitespace(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}
