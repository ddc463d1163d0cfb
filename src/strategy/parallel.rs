//! Parallel batch parsing
//!
//! Uses Rayon to parse independent documents on the global thread pool.
//! Each document gets its own parser, so nothing is shared between workers.

use rayon::prelude::*;
use crate::config::{ParserConfig, WriterConfig};
use crate::core::parser::parse_with;
use crate::dom::{to_text_with, Node};
use crate::error::ParseError;

/// Parse multiple documents in parallel, results in input order
pub fn parse_batch(inputs: &[&str], config: &ParserConfig) -> Vec<Result<Node, ParseError>> {
    inputs
        .par_iter()
        .map(|input| parse_with(input, config))
        .collect()
}

/// Parse and re-serialize multiple documents in parallel
///
/// Produces the canonical text of each document: explicit close tags,
/// attributes in source order, text re-escaped.
pub fn normalize_batch(
    inputs: &[&str],
    parser: &ParserConfig,
    writer: &WriterConfig,
) -> Vec<Result<String, ParseError>> {
    inputs
        .par_iter()
        .map(|input| parse_with(input, parser).map(|node| to_text_with(&node, writer)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parallel_parse_keeps_order() {
        let inputs = ["<speak>a</speak>", "<foo/>", "<speak><b/></speak>"];
        let results = parse_batch(&inputs, &ParserConfig::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().text_content(), "a");
        assert_eq!(results[1].as_ref().unwrap_err().kind, ErrorKind::InvalidRoot);
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_normalize_batch() {
        let inputs = ["<speak>Hi<break/></speak>", "<speak>"];
        let results = normalize_batch(&inputs, &ParserConfig::default(), &WriterConfig::default());
        assert_eq!(results[0].as_deref(), Ok("<speak>Hi<break></break></speak>"));
        assert_eq!(results[1].as_ref().unwrap_err().kind, ErrorKind::UnterminatedElement);
    }
}
