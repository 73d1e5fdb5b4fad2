//! Bounded streaming of input text.
//!
//! Text is cut into top-level chunks, and each chunk into smaller steps that
//! are fed one at a time to the matching engine. Sizes are counted in
//! characters, so slices always fall on `char` boundaries.

pub mod chunk;

pub use chunk::{ChunkStream, Steps};
