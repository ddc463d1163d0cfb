//! Parser and writer options
//!
//! Defaults match the behaviour of [`crate::parse`] and [`crate::to_text`].

use std::borrow::Cow;

/// Root element name every document must use
pub const DEFAULT_ROOT: &str = "speak";

/// Maximum element nesting accepted by default (the root is depth 1)
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// How `&lt;`, `&gt;` and `&amp;` are translated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityMode {
    /// Left-to-right scan, each entity decoded exactly once (lossless)
    #[default]
    SinglePass,
    /// Whole-string replacement in fixed order, compatible with legacy output
    Sequential,
}

/// Options for [`crate::parse_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    pub root_name: Cow<'static, str>,
    pub entity_mode: EntityMode,
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            root_name: Cow::Borrowed(DEFAULT_ROOT),
            entity_mode: EntityMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.root_name = name.into();
        self
    }

    pub fn with_entity_mode(mut self, mode: EntityMode) -> Self {
        self.entity_mode = mode;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Options for [`crate::to_text_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriterConfig {
    pub entity_mode: EntityMode,
}

impl WriterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity_mode(mut self, mode: EntityMode) -> Self {
        self.entity_mode = mode;
        self
    }
}
