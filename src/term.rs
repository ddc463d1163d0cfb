//! Elixir Term Conversion Utilities
//!
//! Converts SSML trees to Elixir terms and back.
//!
//! - element: `{:element, name, [{attr_name, attr_value}], children}`
//! - text: a binary

use crate::dom::{Element, Node};
use crate::error::ParseError;
use rustler::{Atom, Encoder, Env, Error, NewBinary, NifResult, Term};

// Pre-defined atoms for efficiency - created once at compile time
rustler::atoms! {
    ok,
    error,
    element,
}

/// Convert a node to an Elixir term
pub fn node_to_term<'a>(env: Env<'a>, node: &Node) -> Term<'a> {
    match node {
        Node::Text(text) => str_to_binary(env, text),
        Node::Element(el) => {
            let name_term = str_to_binary(env, el.name());

            // Build lists in reverse order with list_prepend
            let pairs: Vec<(&str, &str)> = el.attributes().iter().collect();
            let mut attrs = Term::list_new_empty(env);
            for (name, value) in pairs.into_iter().rev() {
                let attr_tuple = (str_to_binary(env, name), str_to_binary(env, value));
                attrs = attrs.list_prepend(attr_tuple.encode(env));
            }

            let mut children = Term::list_new_empty(env);
            for child in el.children().iter().rev() {
                children = children.list_prepend(node_to_term(env, child));
            }

            (element(), name_term, attrs, children).encode(env)
        }
    }
}

/// Convert an Elixir term back into a node
///
/// # Errors
///
/// Returns `BadArg` when the term is neither a binary nor an element tuple.
pub fn term_to_node(term: Term<'_>) -> NifResult<Node> {
    if term.is_binary() {
        let text: String = term.decode()?;
        return Ok(Node::Text(text));
    }

    let (tag, name, attrs, children): (Atom, String, Vec<(String, String)>, Vec<Term<'_>>) =
        term.decode()?;
    if tag != element() {
        return Err(Error::BadArg);
    }

    let mut el = Element::new(name);
    for (attr_name, attr_value) in attrs {
        el = el.with_attribute(attr_name, attr_value);
    }
    for child in children {
        el = el.with_child(term_to_node(child)?);
    }
    Ok(Node::Element(el))
}

/// `{:ok, value}`
pub fn ok_tuple<'a>(env: Env<'a>, value: Term<'a>) -> Term<'a> {
    (ok(), value).encode(env)
}

/// `{:error, {kind, position}}`
pub fn parse_error_to_term<'a>(env: Env<'a>, err: &ParseError) -> NifResult<Term<'a>> {
    let kind = Atom::from_str(env, err.kind.as_str())?;
    Ok((error(), (kind, err.position)).encode(env))
}

/// Convert a string to a binary term (more efficient than .encode())
#[inline]
pub fn str_to_binary<'a>(env: Env<'a>, s: &str) -> Term<'a> {
    let bytes = s.as_bytes();
    let mut binary = NewBinary::new(env, bytes.len());
    binary.as_mut_slice().copy_from_slice(bytes);
    binary.into()
}
