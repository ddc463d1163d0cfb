//! Tree to SSML text
//!
//! Elements are always written as an explicit open/close pair, even when they
//! have no children: self-closing is input syntax only. Attribute values are
//! written verbatim, text content is escaped.

use super::node::{Element, Node};
use crate::config::{EntityMode, WriterConfig};
use crate::core::entities::escape_with;
use std::fmt;

/// Serialize a node with default options
pub fn to_text(node: &Node) -> String {
    to_text_with(node, &WriterConfig::default())
}

/// Serialize a node
pub fn to_text_with(node: &Node, config: &WriterConfig) -> String {
    let mut out = String::new();
    write_node(node, config.entity_mode, &mut out);
    out
}

/// Write a node using an explicit stack so deep trees cannot overflow
fn write_node(node: &Node, mode: EntityMode, out: &mut String) {
    // Stack entries: Either entering a node or need to write closing tag
    enum StackEntry<'a> {
        Enter(&'a Node),
        Close(&'a Element),
    }

    let mut stack: Vec<StackEntry<'_>> = Vec::with_capacity(64);
    stack.push(StackEntry::Enter(node));

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Close(element) => {
                out.push_str("</");
                out.push_str(element.name());
                out.push('>');
            }
            StackEntry::Enter(Node::Text(text)) => out.push_str(&escape_with(text, mode)),
            StackEntry::Enter(Node::Element(element)) => {
                write_start_tag(element, out);
                // Closing tag first, processed after children
                stack.push(StackEntry::Close(element));
                stack.extend(element.children().iter().rev().map(StackEntry::Enter));
            }
        }
    }
}

fn write_start_tag(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.name());
    for (name, value) in element.attributes().iter() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_text(self))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_start_tag(self, &mut out);
        for child in self.children() {
            write_node(child, EntityMode::default(), &mut out);
        }
        out.push_str("</");
        out.push_str(self.name());
        out.push('>');
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(to_text(&Node::text("a < b & c")), "a &lt; b &amp; c");
    }

    #[test]
    fn test_empty_element_not_self_closing() {
        let node: Node = Element::new("break").with_attribute("time", "500ms").into();
        assert_eq!(to_text(&node), "<break time=\"500ms\"></break>");
    }

    #[test]
    fn test_attributes_in_order_and_verbatim() {
        let node: Node = Element::new("say")
            .with_attribute("interpret", "characters")
            .with_attribute("alias", "a<b")
            .with_child(Node::text("abc"))
            .into();
        assert_eq!(
            node.to_string(),
            "<say interpret=\"characters\" alias=\"a<b\">abc</say>"
        );
    }

    #[test]
    fn test_nested() {
        let node: Node = Element::new("speak")
            .with_child(Node::text("Hello, "))
            .with_child(Element::new("break").with_attribute("time", "500ms"))
            .with_child(Node::text("world!"))
            .into();
        assert_eq!(
            to_text(&node),
            "<speak>Hello, <break time=\"500ms\"></break>world!</speak>"
        );
    }

    #[test]
    fn test_sequential_mode() {
        let node = Node::text("<");
        let config = WriterConfig::new().with_entity_mode(EntityMode::Sequential);
        assert_eq!(to_text_with(&node, &config), "&amp;lt;");
    }

    #[test]
    fn test_element_display() {
        let element = Element::new("p").with_child(Node::text("x"));
        assert_eq!(element.to_string(), "<p>x</p>");
    }
}
