//! Priority-ordered rule table.

use ahash::AHashMap;
use log::warn;
use regex::RegexSet;

use super::rule::{Rule, anchor};
use crate::error::{ChunklexError, Result};

/// An ordered collection of rules where declaration order is match priority.
///
/// All anchored patterns are compiled into a single [`RegexSet`], so checking
/// a candidate against every rule is one pass, and the lowest matching index
/// is the highest-priority rule.
#[derive(Clone, Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
    /// Lowercased token name to the index of the first rule with that name
    names: AHashMap<String, usize>,
    set: RegexSet,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleTable {
    /// Create an empty rule table.
    pub fn new() -> Self {
        RuleTable {
            rules: Vec::new(),
            names: AHashMap::new(),
            set: RegexSet::empty(),
        }
    }

    /// Compile and append a not-ignored rule.
    pub fn add<P: Into<String>, N: Into<String>>(&mut self, pattern: P, name: N) -> Result<()> {
        self.push(Rule::new(pattern, name)?)
    }

    /// Append an already compiled rule with the lowest priority so far.
    ///
    /// Fails with [`ChunklexError::DuplicateRule`] if a rule with the same
    /// pattern and ignored status exists. The table is unchanged on error.
    pub fn push(&mut self, rule: Rule) -> Result<()> {
        if self.rules.iter().any(|existing| existing == &rule) {
            return Err(ChunklexError::duplicate_rule(rule.name(), rule.pattern()));
        }

        let set = RegexSet::new(
            self.rules
                .iter()
                .chain(std::iter::once(&rule))
                .map(|r| anchor(r.pattern())),
        )
        .map_err(|e| ChunklexError::invalid_pattern(rule.pattern(), e))?;

        self.names
            .entry(rule.name().to_lowercase())
            .or_insert(self.rules.len());
        self.rules.push(rule);
        self.set = set;
        Ok(())
    }

    /// Mark the first rule named `name` (case-insensitive) as ignored.
    ///
    /// An unknown name is logged as a warning and otherwise ignored. Returns
    /// whether a rule was updated.
    pub fn set_ignored(&mut self, name: &str) -> bool {
        match self.names.get(&name.to_lowercase()) {
            Some(&index) => {
                self.rules[index].set_ignored(true);
                true
            }
            None => {
                warn!("Could not find token {name} in the rules list");
                false
            }
        }
    }

    /// Index of the highest-priority rule fully matching `candidate`.
    pub fn first_match(&self, candidate: &str) -> Option<usize> {
        self.set.matches(candidate).iter().next()
    }

    /// The highest-priority rule fully matching `candidate`.
    pub fn match_rule(&self, candidate: &str) -> Option<&Rule> {
        self.first_match(candidate).map(|index| &self.rules[index])
    }

    /// Whether any rule fully matches `candidate`.
    pub fn any_match(&self, candidate: &str) -> bool {
        self.set.is_match(candidate)
    }

    /// Rule at priority position `index`.
    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Iterate rules in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
