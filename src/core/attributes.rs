//! SSML Attribute Parsing
//!
//! Parses the attribute list of a start tag. Values are raw text between
//! double quotes: no entity decoding, no single quotes, no bare values.

use super::scanner::Scanner;
use crate::error::{ErrorKind, ParseError};

/// A parsed attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Attributes of one element, unique by name, kept in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    items: Vec<Attribute>,
}

impl Attributes {
    pub fn new() -> Self {
        Attributes { items: Vec::new() }
    }

    /// Insert or replace. A replaced attribute keeps its original position.
    /// Returns the previous value, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.items.iter_mut().find(|a| a.name == name) {
            Some(existing) => Some(std::mem::replace(&mut existing.value, value)),
            None => {
                self.items.push(Attribute { name, value });
                None
            }
        }
    }

    /// Get attribute value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate `(name, value)` pairs in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items
            .iter()
            .map(|a| (a.name.as_str(), a.value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

/// Characters that end an attribute name
#[inline]
fn is_name_char(c: char) -> bool {
    !matches!(c, '=' | '>' | '/') && !c.is_whitespace()
}

/// Parse attributes after the element name, up to (not including) '/' or '>'
pub fn parse_attributes(scanner: &mut Scanner<'_>) -> Result<Attributes, ParseError> {
    let mut attrs = Attributes::new();

    loop {
        scanner.skip_whitespace();

        // Check for end of attributes (/ or >)
        match scanner.peek() {
            None => return Err(eof(scanner)),
            Some('/') | Some('>') => break,
            Some(_) => {}
        }

        let name_start = scanner.position();
        let name = scanner.read_while(is_name_char);
        if name.is_empty() {
            return Err(ParseError::new(ErrorKind::EmptyAttributeName, name_start));
        }

        scanner.skip_whitespace();
        expect(scanner, '=')?;
        scanner.skip_whitespace();

        let quote_pos = scanner.position();
        expect(scanner, '"')?;

        let value = scanner
            .read_until(b'"')
            .ok_or_else(|| ParseError::new(ErrorKind::UnterminatedAttribute, quote_pos))?;
        scanner.advance(); // Skip closing quote

        attrs.insert(name, value);
    }

    Ok(attrs)
}

/// Require `c` at the current position
fn expect(scanner: &mut Scanner<'_>, c: char) -> Result<(), ParseError> {
    if scanner.eat(c) {
        return Ok(());
    }
    if scanner.is_eof() {
        Err(eof(scanner))
    } else {
        Err(ParseError::new(
            ErrorKind::UnterminatedAttribute,
            scanner.position(),
        ))
    }
}

#[inline]
fn eof(scanner: &Scanner<'_>) -> ParseError {
    ParseError::new(ErrorKind::UnexpectedEof, scanner.position())
}
