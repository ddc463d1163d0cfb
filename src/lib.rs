//! RustySSML - Hand-written SSML parsing and serialization
//!
//! Parses the speech-synthesis markup subset of XML (elements, double-quoted
//! attributes, and the `&lt;` `&gt;` `&amp;` entities) into an owned node
//! tree and writes it back out.
//!
//! ```
//! let root = rustyssml::parse("<speak>Hello, <break time=\"500ms\"/>world!</speak>").unwrap();
//! assert_eq!(root.text_content(), "Hello, world!");
//! assert_eq!(
//!     rustyssml::to_text(&root),
//!     "<speak>Hello, <break time=\"500ms\"></break>world!</speak>"
//! );
//! ```
//!
//! Modules:
//! - core: scanner, entity codec, attributes, recursive-descent parser
//! - dom: node tree and serializer
//! - cache: LRU cache and parse memoization
//! - strategy: parallel batch parsing
//! - nif (feature `nif`): Elixir bindings

pub mod cache;
pub mod config;
pub mod core;
pub mod dom;
pub mod error;
pub mod strategy;

#[cfg(feature = "nif")]
mod nif;
#[cfg(feature = "nif")]
mod resource;
#[cfg(feature = "nif")]
mod term;

pub use cache::{ParseCache, RecencyCache};
pub use config::{EntityMode, ParserConfig, WriterConfig};
pub use crate::core::entities::{escape, escape_sequential, unescape, unescape_sequential};
pub use crate::core::parser::{parse, parse_with};
pub use dom::{to_text, to_text_with, Attribute, Attributes, Element, Node};
pub use error::{CacheError, ErrorKind, ParseError};

// ============================================================================
// Allocator Configuration
// ============================================================================

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;
