//! Token rules and the priority-ordered rule table.
//!
//! A [`Rule`] pairs a fully anchored regular expression with a token name.
//! Rules live in a [`RuleTable`], where declaration order is match priority:
//! when several rules match the same text, the one added first wins.

#[allow(clippy::module_inception)]
pub mod rule;
pub mod spec;
pub mod table;

pub use rule::Rule;
pub use spec::{RuleFile, RuleSpec};
pub use table::RuleTable;
