//! Configuration for tokenization runs.

use serde::{Deserialize, Serialize};

use crate::error::{ChunklexError, Result};

/// Default number of characters in a top-level chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 0x100;

/// Default number of characters fed to the matching engine at once.
pub const DEFAULT_STEP_SIZE: usize = 0x20;

/// When the matching engine is forced to commit its pending buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlushPolicy {
    /// Flush after the last step of every chunk and at end of stream.
    ///
    /// A token still extendable when a chunk ends is committed as-is, even if
    /// the next chunk would have extended it.
    #[default]
    PerChunk,

    /// Flush only once, at end of stream.
    EndOfStream,
}

/// Configuration for a [`Tokenizer`](crate::tokenizer::Tokenizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Number of characters per top-level chunk.
    pub chunk_size: usize,

    /// Number of characters per step fed to the matching engine.
    pub step_size: usize,

    /// Pending-buffer flush behavior at chunk boundaries.
    pub flush_policy: FlushPolicy,

    /// Whether leading and trailing whitespace is trimmed before streaming.
    pub trim_input: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            step_size: DEFAULT_STEP_SIZE,
            flush_policy: FlushPolicy::PerChunk,
            trim_input: true,
        }
    }
}

impl TokenizerConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the step size.
    pub fn with_step_size(mut self, step_size: usize) -> Self {
        self.step_size = step_size;
        self
    }

    /// Set the flush policy.
    pub fn with_flush_policy(mut self, flush_policy: FlushPolicy) -> Self {
        self.flush_policy = flush_policy;
        self
    }

    /// Enable or disable input trimming.
    pub fn with_trim_input(mut self, trim_input: bool) -> Self {
        self.trim_input = trim_input;
        self
    }

    /// Check that the sizes describe a usable streaming layout.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ChunklexError::invalid_config(
                "chunk size must be greater than zero",
            ));
        }
        if self.step_size == 0 {
            return Err(ChunklexError::invalid_config(
                "step size must be greater than zero",
            ));
        }
        if self.step_size > self.chunk_size {
            return Err(ChunklexError::invalid_config(format!(
                "step size ({}) must not exceed chunk size ({})",
                self.step_size, self.chunk_size
            )));
        }
        Ok(())
    }
}
