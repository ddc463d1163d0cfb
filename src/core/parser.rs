//! Recursive-descent SSML parser
//!
//! One routine per grammar rule: document, element (name, attributes,
//! closing decision) and element content. The grammar is LL(1), so every
//! routine commits on its first character and the first violation aborts the
//! whole parse.
//!
//! ```text
//! document := ws element ws EOF
//! element  := '<' ws name attrs ( '/>' | '>' content* '</' ws name ws '>' )
//! content  := element | text
//! ```

use super::attributes::parse_attributes;
use super::entities::unescape_with;
use super::scanner::Scanner;
use crate::config::ParserConfig;
use crate::dom::{Element, Node};
use crate::error::{ErrorKind, ParseError};
use log::{debug, trace};

/// Parse a document with default options
pub fn parse(input: &str) -> Result<Node, ParseError> {
    parse_with(input, &ParserConfig::default())
}

/// Parse a document
pub fn parse_with(input: &str, config: &ParserConfig) -> Result<Node, ParseError> {
    Parser::new(input, config)
        .parse_document()
        .inspect_err(|e| debug!("ssml parse failed: {e}"))
}

/// Parser state for a single document
pub struct Parser<'a, 'c> {
    input: &'a str,
    scanner: Scanner<'a>,
    config: &'c ParserConfig,
}

impl<'a, 'c> Parser<'a, 'c> {
    pub fn new(input: &'a str, config: &'c ParserConfig) -> Self {
        Parser {
            input,
            scanner: Scanner::new(input),
            config,
        }
    }

    /// Parse the whole input as one document rooted at the configured root
    pub fn parse_document(mut self) -> Result<Node, ParseError> {
        self.scanner.skip_whitespace();
        if self.scanner.peek() != Some('<') {
            return Err(self.error(ErrorKind::ExpectedElement));
        }

        let root = self.parse_element(1)?;

        self.scanner.skip_whitespace();
        if !self.scanner.is_eof() {
            return Err(self.error(ErrorKind::TrailingContent));
        }

        Ok(Node::Element(root))
    }

    /// Parse one element starting at '<'
    fn parse_element(&mut self, depth: usize) -> Result<Element, ParseError> {
        if depth > self.config.max_depth {
            return Err(self.error(ErrorKind::DepthLimitExceeded));
        }

        self.scanner.advance(); // Skip '<'
        self.scanner.skip_whitespace();

        let name_start = self.scanner.position();
        let name = self.scanner.read_while(char::is_alphanumeric);
        if self.scanner.is_eof() {
            return Err(self.error(ErrorKind::UnexpectedEof));
        }
        if name.is_empty() {
            return Err(ParseError::new(ErrorKind::EmptyTagName, name_start));
        }
        if depth == 1 && name != self.config.root_name {
            return Err(ParseError::new(ErrorKind::InvalidRoot, name_start));
        }

        let attributes = parse_attributes(&mut self.scanner)?;

        // Self-closing tag
        if self.scanner.eat('/') {
            return match self.scanner.peek() {
                Some('>') => {
                    self.scanner.advance();
                    trace!("empty <{name}> at depth {depth}");
                    Ok(Element::from_parts(name.to_string(), attributes, Vec::new()))
                }
                None => Err(self.error(ErrorKind::UnexpectedEof)),
                Some(_) => Err(self.error(ErrorKind::ExpectedTagEnd)),
            };
        }

        self.scanner.advance(); // Skip '>'
        let children = self.parse_content(name, depth)?;
        trace!("closed <{name}> with {} children at depth {depth}", children.len());

        Ok(Element::from_parts(name.to_string(), attributes, children))
    }

    /// Parse children of `name` up to and including its closing tag
    fn parse_content(&mut self, name: &str, depth: usize) -> Result<Vec<Node>, ParseError> {
        let mut children = Vec::new();

        loop {
            if self.scanner.is_eof() {
                return Err(self.error(ErrorKind::UnterminatedElement));
            }

            if self.scanner.starts_with("</") {
                if let Some((close_name, after)) = self.closing_tag()? {
                    if close_name != name {
                        return Err(self.error(ErrorKind::MismatchedClosingTag));
                    }
                    self.scanner = after;
                    return Ok(children);
                }
            }

            if self.scanner.peek() == Some('<') {
                let child = self.parse_element(depth + 1)?;
                children.push(Node::Element(child));
            } else {
                let text = self
                    .scanner
                    .read_until(b'<')
                    .ok_or_else(|| ParseError::new(ErrorKind::UnterminatedElement, self.input.len()))?;
                let text = unescape_with(text, self.config.entity_mode);
                children.push(Node::Text(text.into_owned()));
            }
        }
    }

    /// Look ahead for `</ name >` at the current position
    ///
    /// Returns the closing name and a scanner positioned past '>', or `None`
    /// when the characters do not form a closing tag.
    fn closing_tag(&self) -> Result<Option<(&'a str, Scanner<'a>)>, ParseError> {
        let mut ahead = self.scanner;
        ahead.advance();
        ahead.advance();
        ahead.skip_whitespace();
        let close_name = ahead.read_while(char::is_alphanumeric);
        ahead.skip_whitespace();

        match ahead.peek() {
            Some('>') => {
                ahead.advance();
                Ok(Some((close_name, ahead)))
            }
            None => Err(ParseError::new(ErrorKind::UnexpectedEof, ahead.position())),
            Some(_) => Ok(None),
        }
    }

    #[inline]
    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.scanner.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EntityMode;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn element(node: &Node) -> &Element {
        node.as_element().expect("element")
    }

    #[test]
    fn test_break_example() {
        let root = parse("<speak>Hello, <break time=\"500ms\"/>world!</speak>").unwrap();
        let expected: Node = Element::new("speak")
            .with_child(Node::text("Hello, "))
            .with_child(Element::new("break").with_attribute("time", "500ms"))
            .with_child(Node::text("world!"))
            .into();
        assert_eq!(root, expected);
    }

    #[test]
    fn test_empty_root() {
        let root = parse("<speak></speak>").unwrap();
        assert_eq!(root, Node::Element(Element::new("speak")));
        let root = parse("<speak/>").unwrap();
        assert_eq!(root, Node::Element(Element::new("speak")));
    }

    #[test]
    fn test_whitespace_inside_tags() {
        let root = parse("  < speak  version=\"1.1\" >hi</ speak >\n").unwrap();
        let speak = element(&root);
        assert_eq!(speak.attribute("version"), Some("1.1"));
        assert_eq!(speak.children(), &[Node::text("hi")]);
    }

    #[test]
    fn test_whitespace_text_nodes_kept() {
        let root = parse("<speak> <p>a</p> <p>b</p> </speak>").unwrap();
        let speak = element(&root);
        assert_eq!(speak.children().len(), 5);
        assert_eq!(speak.children()[0], Node::text(" "));
        assert_eq!(speak.children()[4], Node::text(" "));
        assert_eq!(speak.child_elements().count(), 2);
    }

    #[test]
    fn test_nested_elements() {
        let input = "<speak><p><s>One.</s><s>Two <emphasis level=\"strong\">now</emphasis></s></p></speak>";
        let root = parse(input).unwrap();
        let p = element(&root).child_elements().next().unwrap();
        assert_eq!(p.name(), "p");
        let sentences: Vec<_> = p.child_elements().collect();
        assert_eq!(sentences.len(), 2);
        let emphasis = sentences[1].child_elements().next().unwrap();
        assert_eq!(emphasis.attribute("level"), Some("strong"));
        assert_eq!(root.text_content(), "One.Two now");
    }

    #[test]
    fn test_nested_root_name_allowed() {
        let root = parse("<speak><speak>x</speak></speak>").unwrap();
        assert_eq!(element(&root).child_elements().next().unwrap().name(), "speak");
    }

    #[test]
    fn test_text_is_unescaped() {
        let root = parse("<speak>a &lt; b &amp; c &gt; d</speak>").unwrap();
        assert_eq!(element(&root).children(), &[Node::text("a < b & c > d")]);
    }

    #[test]
    fn test_attribute_values_raw() {
        let root = parse("<speak><sub alias=\"a &amp; b\">x</sub></speak>").unwrap();
        let sub = element(&root).child_elements().next().unwrap();
        assert_eq!(sub.attribute("alias"), Some("a &amp; b"));
    }

    #[test]
    fn test_unicode_names_and_text() {
        let root = parse("<speak><voix nom=\"été\">ça va</voix></speak>").unwrap();
        let voix = element(&root).child_elements().next().unwrap();
        assert_eq!(voix.attribute("nom"), Some("été"));
        assert_eq!(voix.children(), &[Node::text("ça va")]);
    }

    #[test]
    fn test_custom_root() {
        let config = ParserConfig::new().with_root_name("voice");
        assert!(parse_with("<voice>hi</voice>", &config).is_ok());
        assert_eq!(
            parse_with("<speak>hi</speak>", &config).unwrap_err().kind,
            ErrorKind::InvalidRoot
        );
    }

    #[test]
    fn test_sequential_entity_mode() {
        let config = ParserConfig::new().with_entity_mode(EntityMode::Sequential);
        let root = parse_with("<speak>&amp;lt;</speak>", &config).unwrap();
        assert_eq!(element(&root).children(), &[Node::text("&lt;")]);
    }

    #[test]
    fn test_depth_limit() {
        let config = ParserConfig::new().with_max_depth(2);
        assert!(parse_with("<speak><p>x</p></speak>", &config).is_ok());
        let err = parse_with("<speak><p><s>x</s></p></speak>", &config).unwrap_err();
        assert_eq!(err, ParseError::new(ErrorKind::DepthLimitExceeded, 10));
    }

    #[test]
    fn test_deep_nesting_is_an_error_not_a_crash() {
        let input = format!("<speak>{}", "<a>".repeat(100_000));
        assert_eq!(parse(&input).unwrap_err().kind, ErrorKind::DepthLimitExceeded);
    }

    #[rstest]
    #[case("", ErrorKind::ExpectedElement, 0)]
    #[case("   ", ErrorKind::ExpectedElement, 3)]
    #[case("hello", ErrorKind::ExpectedElement, 0)]
    #[case("<foo></foo>", ErrorKind::InvalidRoot, 1)]
    #[case("<Speak></Speak>", ErrorKind::InvalidRoot, 1)]
    #[case("<speak><a></b></speak>", ErrorKind::MismatchedClosingTag, 10)]
    #[case("<speak></speak >x", ErrorKind::TrailingContent, 16)]
    #[case("<speak/>x", ErrorKind::TrailingContent, 8)]
    #[case("<speak>unterminated", ErrorKind::UnterminatedElement, 19)]
    #[case("<speak>", ErrorKind::UnterminatedElement, 7)]
    #[case("<speak><p>", ErrorKind::UnterminatedElement, 10)]
    #[case("<speak", ErrorKind::UnexpectedEof, 6)]
    #[case("<", ErrorKind::UnexpectedEof, 1)]
    #[case("<speak time=\"1\"", ErrorKind::UnexpectedEof, 15)]
    #[case("<speak></speak", ErrorKind::UnexpectedEof, 14)]
    #[case("<speak>a</", ErrorKind::UnexpectedEof, 10)]
    #[case("<speak/", ErrorKind::UnexpectedEof, 7)]
    #[case("<>", ErrorKind::EmptyTagName, 1)]
    #[case("<speak><></speak>", ErrorKind::EmptyTagName, 8)]
    #[case("<speak></ x y></speak>", ErrorKind::EmptyTagName, 8)]
    #[case("<speak =\"1\"></speak>", ErrorKind::EmptyAttributeName, 7)]
    #[case("<speak a=1></speak>", ErrorKind::UnterminatedAttribute, 9)]
    #[case("<speak a=\"1></speak>", ErrorKind::UnterminatedAttribute, 9)]
    #[case("<speak/x></speak>", ErrorKind::ExpectedTagEnd, 7)]
    fn test_errors(#[case] input: &str, #[case] kind: ErrorKind, #[case] position: usize) {
        assert_eq!(parse(input).unwrap_err(), ParseError::new(kind, position));
    }
}
