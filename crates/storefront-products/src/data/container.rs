use std::fmt::Write;

/// Identifier of the element products are rendered into.
pub const DEFAULT_CONTAINER_ID: &str = "products";

/// A child of a [`Container`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A bare text node.
    Text(String),
    /// An element holding a single text node.
    Element { tag: String, text: String },
}

impl Node {
    pub fn div(text: impl Into<String>) -> Self {
        Node::Element {
            tag: "div".to_string(),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Node::Text(t) => t,
            Node::Element { text, .. } => text,
        }
    }
}

/// An output element located by a fixed identifier.
///
/// Mirrors the small part of a document element the renderer touches:
/// clearing children, appending children and replacing the text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: String,
    children: Vec<Node>,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn append_child(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Replace every child with a single text node.
    pub fn set_text_content(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.children.clear();
        if !text.is_empty() {
            self.children.push(Node::Text(text));
        }
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text).collect()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "<div id=\"{}\">", escape(&self.id));
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(&escape(t)),
                Node::Element { tag, text } => {
                    let _ = write!(out, "<{tag}>{}</{tag}>", escape(text));
                }
            }
        }
        out.push_str("</div>");
        out
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_ID)
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
