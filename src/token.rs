//! Token and trace types produced by tokenization.
//!
//! The token callback only sees `(text, name)` pairs. The owned types here
//! back the collecting helpers, the trace output and the CLI.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name reported for characters no rule matches.
pub const UNKNOWN_TOKEN: &str = "_unknown_";

/// An emitted token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The matched text
    pub text: String,
    /// Name of the rule that matched, or [`UNKNOWN_TOKEN`]
    pub name: String,
}

impl Token {
    /// Create a new token.
    pub fn new<T: Into<String>, N: Into<String>>(text: T, name: N) -> Self {
        Token {
            text: text.into(),
            name: name.into(),
        }
    }

    /// Whether this is a single-character fallback token.
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_TOKEN
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( word: {}; token: {} )", self.text, self.name)
    }
}

/// How a span of input was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Matched a rule and was delivered to the callback.
    Emitted,
    /// Matched an ignored rule; not delivered.
    Ignored,
    /// Matched no rule; delivered as a single-character unknown token.
    Unknown,
    /// Left pending at a flush with no rule matching it; not delivered.
    Dropped,
}

/// A resolved span of input, including spans never delivered to the callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// The covered text
    pub text: String,
    /// Rule name, absent for dropped text
    pub name: Option<String>,
    /// Resolution
    pub kind: SegmentKind,
}

impl Segment {
    /// Whether the callback received this span.
    pub fn is_delivered(&self) -> bool {
        matches!(self.kind, SegmentKind::Emitted | SegmentKind::Unknown)
    }
}

/// Counters collected over one tokenize call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizeStats {
    /// Tokens delivered for non-ignored rules
    pub emitted: usize,
    /// Matches of ignored rules
    pub ignored: usize,
    /// Single-character unknown tokens delivered
    pub unknown: usize,
    /// Pending buffers discarded at flush time
    pub dropped: usize,
    /// Top-level chunks streamed
    pub chunks: usize,
}

impl TokenizeStats {
    /// Total number of callback invocations.
    pub fn delivered(&self) -> usize {
        self.emitted + self.unknown
    }
}
