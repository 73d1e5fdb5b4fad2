//! A single pattern-to-name token rule.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use regex::Regex;

use crate::error::{ChunklexError, Result};

/// Wrap a pattern so it only accepts whole-string matches.
///
/// Patterns that already carry `^`/`$` anchors are unaffected.
pub(crate) fn anchor(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}

/// A regular expression paired with the token name it produces.
///
/// Two rules are equal when they share the same pattern and ignored status;
/// the name does not take part in equality.
#[derive(Clone, Debug)]
pub struct Rule {
    /// The pattern as supplied by the caller
    pattern: String,
    /// Token name reported for matches
    name: String,
    /// Whether matches are withheld from the token callback
    ignored: bool,
    /// Compiled, anchored form of `pattern`
    regex: Arc<Regex>,
}

impl Rule {
    /// Compile a new, not-ignored rule.
    pub fn new<P: Into<String>, N: Into<String>>(pattern: P, name: N) -> Result<Self> {
        let pattern = pattern.into();
        let regex = Regex::new(&anchor(&pattern))
            .map_err(|e| ChunklexError::invalid_pattern(pattern.as_str(), e))?;

        Ok(Rule {
            pattern,
            name: name.into(),
            ignored: false,
            regex: Arc::new(regex),
        })
    }

    /// Set the ignored status of this rule.
    pub fn with_ignored(mut self, ignored: bool) -> Self {
        self.ignored = ignored;
        self
    }

    /// The pattern as supplied by the caller.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The token name this rule produces.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether matches of this rule are suppressed.
    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    pub(crate) fn set_ignored(&mut self, ignored: bool) {
        self.ignored = ignored;
    }

    /// Check whether the whole of `candidate` matches this rule.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.ignored == other.ignored
    }
}

impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.ignored.hash(state);
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.pattern)?;
        if self.ignored {
            write!(f, " [ignored]")?;
        }
        Ok(())
    }
}
