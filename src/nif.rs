//! NIF entry points for `Elixir.RustySSML.Native`

use crate::resource::{ParseCacheRef, ParseCacheResource};
use crate::term::{node_to_term, ok_tuple, parse_error_to_term, str_to_binary, term_to_node};
use rustler::{Encoder, Env, Error, NifResult, ResourceArc, Term};

/// Parse SSML, returning `{:ok, node}` or `{:error, {kind, position}}`
#[rustler::nif]
fn parse<'a>(env: Env<'a>, input: &str) -> NifResult<Term<'a>> {
    match crate::parse(input) {
        Ok(node) => Ok(ok_tuple(env, node_to_term(env, &node))),
        Err(e) => parse_error_to_term(env, &e),
    }
}

/// Serialize a node term back to SSML text
#[rustler::nif]
fn to_text<'a>(env: Env<'a>, node: Term<'a>) -> NifResult<Term<'a>> {
    let node = term_to_node(node)?;
    Ok(str_to_binary(env, &crate::to_text(&node)))
}

/// Parse and re-serialize in one call, without building BEAM terms for the tree
#[rustler::nif]
fn normalize<'a>(env: Env<'a>, input: &str) -> NifResult<Term<'a>> {
    match crate::parse(input) {
        Ok(node) => Ok(ok_tuple(env, str_to_binary(env, &crate::to_text(&node)))),
        Err(e) => parse_error_to_term(env, &e),
    }
}

#[rustler::nif]
fn escape<'a>(env: Env<'a>, input: &str) -> Term<'a> {
    str_to_binary(env, &crate::escape(input))
}

#[rustler::nif]
fn unescape<'a>(env: Env<'a>, input: &str) -> Term<'a> {
    str_to_binary(env, &crate::unescape(input))
}

/// Create a parse cache holding at most `item_limit` documents
#[rustler::nif]
fn cache_new(item_limit: usize) -> NifResult<ParseCacheRef> {
    ParseCacheResource::new(item_limit)
        .map(ResourceArc::new)
        .map_err(|_| Error::BadArg)
}

/// Parse through the cache
#[rustler::nif]
fn cache_parse<'a>(env: Env<'a>, cache: ParseCacheRef, input: &str) -> NifResult<Term<'a>> {
    let mut inner = cache
        .inner
        .lock()
        .map_err(|_| Error::Term(Box::new("mutex_poisoned")))?;
    match inner.parse(input) {
        Ok(node) => Ok(ok_tuple(env, node_to_term(env, &node))),
        Err(e) => parse_error_to_term(env, &e),
    }
}

/// Number of cached documents
#[rustler::nif]
fn cache_size<'a>(env: Env<'a>, cache: ParseCacheRef) -> NifResult<Term<'a>> {
    let inner = cache
        .inner
        .lock()
        .map_err(|_| Error::Term(Box::new("mutex_poisoned")))?;
    Ok(inner.len().encode(env))
}

rustler::init!("Elixir.RustySSML.Native");
