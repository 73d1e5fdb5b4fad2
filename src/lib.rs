//! # chunklex
//!
//! A streaming, rule-driven tokenizer.
//!
//! Text is classified into named tokens by an ordered list of fully anchored
//! regular-expression rules. Matching is greedy (maximal munch), and the input
//! is streamed in bounded chunks so the matcher never holds more than a small
//! pending buffer of unresolved text.
//!
//! ## Features
//!
//! - Priority by declaration order, first matching rule wins
//! - Ignored rules that consume text without reporting it
//! - Single-character `_unknown_` fallback, so tokenization never fails
//! - Configurable chunk and step sizes and flush policy
//! - JSON rule files and a command line front end

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod rule;
pub mod stream;
pub mod token;
pub mod tokenizer;

pub mod prelude {
    pub use crate::config::{FlushPolicy, TokenizerConfig};
    pub use crate::error::{ChunklexError, Result};
    pub use crate::rule::{Rule, RuleFile, RuleSpec, RuleTable};
    pub use crate::token::{Segment, SegmentKind, Token, TokenizeStats, UNKNOWN_TOKEN};
    pub use crate::tokenizer::Tokenizer;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
