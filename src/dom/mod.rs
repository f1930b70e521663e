//! Parsed HTML documents
//!
//! This module turns HTML source into a read-only element tree that the
//! matcher walks in document order. It includes:
//! - ElementNode: a tag with its attributes, descendant text and children
//! - AttributeValue: single or whitespace-tokenized attribute values
//! - DomTree: the parsed document with pre-order traversal

pub mod element;
pub mod tree;

pub use element::{AttributeValue, ElementNode};
pub use tree::{DomTree, PreOrder};

use crate::error::Result;

/// Parse an HTML string into a DomTree
pub fn parse_html(html: &str) -> DomTree {
    DomTree::parse(html)
}

/// Parse raw HTML bytes into a DomTree
pub fn parse_html_bytes(html: &[u8]) -> Result<DomTree> {
    DomTree::parse_bytes(html)
}
