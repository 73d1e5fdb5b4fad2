//! Serializable rule definitions.
//!
//! A rule file is a JSON document listing rules in priority order, the names
//! to ignore, and optionally a tokenizer configuration:
//!
//! ```json
//! {
//!   "config": { "chunk_size": 256, "step_size": 32 },
//!   "rules": [
//!     { "pattern": "^,$", "name": "comma" },
//!     { "pattern": "^[a-z]+$", "name": "word" },
//!     { "pattern": "^\\s+$", "name": "whitespace" }
//!   ],
//!   "ignore": ["whitespace"]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::rule::Rule;
use crate::config::TokenizerConfig;
use crate::error::Result;

/// Serializable form of a single [`Rule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Regular expression matched against whole candidates
    pub pattern: String,
    /// Token name
    pub name: String,
    /// Whether matches are suppressed
    #[serde(default)]
    pub ignored: bool,
}

impl RuleSpec {
    /// Compile this definition into a [`Rule`].
    pub fn compile(&self) -> Result<Rule> {
        Ok(Rule::new(self.pattern.as_str(), self.name.as_str())?.with_ignored(self.ignored))
    }
}

impl From<&Rule> for RuleSpec {
    fn from(rule: &Rule) -> Self {
        RuleSpec {
            pattern: rule.pattern().to_string(),
            name: rule.name().to_string(),
            ignored: rule.is_ignored(),
        }
    }
}

/// A complete tokenizer definition as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFile {
    /// Streaming configuration
    #[serde(default)]
    pub config: TokenizerConfig,
    /// Rules in priority order
    pub rules: Vec<RuleSpec>,
    /// Token names to mark ignored after all rules are added
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl RuleFile {
    /// Parse a rule file from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a rule file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize this rule file as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
