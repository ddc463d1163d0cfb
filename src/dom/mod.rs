//! DOM Module - owned SSML node tree
//!
//! - `node`: the `Node` sum type (element or text) and tree helpers
//! - `writer`: serialization back to SSML text

pub mod node;
pub mod writer;

pub use crate::core::attributes::{Attribute, Attributes};
pub use node::{Descendants, Element, Node};
pub use writer::{to_text, to_text_with};
