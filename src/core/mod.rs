//! Core SSML parsing primitives
//!
//! This module contains the fundamental building blocks for SSML parsing:
//! - Scanner: character cursor with memchr delimiter search
//! - Entities: `&lt;` `&gt;` `&amp;` encoding and decoding (Cow, zero-copy when possible)
//! - Attributes: attribute list parsing and storage
//! - Parser: recursive-descent document parser

pub mod attributes;
pub mod entities;
pub mod parser;
pub mod scanner;
