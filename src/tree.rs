//! Text-to-tree parsing seam.
//!
//! Documents are consumed as `serde_json::Value` trees. Turning SNBT text into
//! such a tree is the job of a [`TreeParser`]; [`JsonTreeParser`] handles
//! documents that were already exported as JSON.

use crate::error::Result;
use serde_json::Value;

pub trait TreeParser {
    fn parse_tree(&self, text: &str) -> Result<Value>;
}

/// Parses JSON text with `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTreeParser;

impl TreeParser for JsonTreeParser {
    fn parse_tree(&self, text: &str) -> Result<Value> {
        Ok(serde_json::from_str(text)?)
    }
}

impl<F> TreeParser for F
where
    F: Fn(&str) -> Result<Value>,
{
    fn parse_tree(&self, text: &str) -> Result<Value> {
        self(text)
    }
}

/// Decode `bytes` as UTF-8 and hand the text to `parser`.
pub fn parse_buffer<P: TreeParser + ?Sized>(parser: &P, bytes: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(bytes)?;
    parser.parse_tree(text)
}
