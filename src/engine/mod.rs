//! Incremental maximal-munch matching.
//!
//! The [`MatchEngine`] consumes text one increment at a time and resolves the
//! longest rule-matching prefix into a token as soon as it can no longer be
//! extended. A match that covers everything seen so far stays pending until
//! more input arrives or a flush forces it out. Resolved spans go to an
//! [`Emitter`], which hands non-ignored tokens to the caller's callback.

pub mod emitter;
pub mod matcher;

pub use emitter::Emitter;
pub use matcher::MatchEngine;
