//! ResourceArc Wrappers
//!
//! Persistent parse cache state shared with the BEAM.

use crate::cache::ParseCache;
use crate::error::CacheError;
use rustler::ResourceArc;
use std::sync::Mutex;

/// Wrapper for ParseCache that can be stored in a ResourceArc
pub struct ParseCacheResource {
    pub inner: Mutex<ParseCache>,
}

impl ParseCacheResource {
    pub fn new(item_limit: usize) -> Result<Self, CacheError> {
        Ok(ParseCacheResource {
            inner: Mutex::new(ParseCache::new(item_limit)?),
        })
    }
}

#[rustler::resource_impl]
impl rustler::Resource for ParseCacheResource {}

/// Type alias for the ResourceArc
pub type ParseCacheRef = ResourceArc<ParseCacheResource>;
