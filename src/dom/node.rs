//! SSML node tree
//!
//! A document is one root [`Element`]; every element exclusively owns its
//! attributes and children. Trees are immutable once built: fields are only
//! reachable through read-only accessors.

use crate::core::attributes::Attributes;

/// A node in the tree: element or text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text content, already unescaped
    Text(String),
}

/// An element with a name, attributes and ordered children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Attributes,
    children: Vec<Node>,
}

impl Node {
    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(t),
            Node::Element(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants, in document order
    pub fn text_content(&self) -> String {
        self.descendants().filter_map(Node::as_text).collect()
    }

    /// Pre-order iterator over this node and all of its descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Element {
    /// Create an element with no attributes and no children
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub(crate) fn from_parts(name: String, attributes: Attributes, children: Vec<Node>) -> Self {
        Element {
            name,
            attributes,
            children,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements only, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }
}

/// Iterator returned by [`Node::descendants`]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Node::Element(element) = node {
            self.stack.extend(element.children.iter().rev());
        }
        Some(node)
    }
}
