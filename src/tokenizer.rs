//! Rule-driven streaming tokenizer.
//!
//! # Examples
//!
//! ```
//! use chunklex::tokenizer::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::new();
//! tokenizer.add_rule("^,$", "comma").unwrap();
//! tokenizer.add_rule("^[a-z]+$", "word").unwrap();
//! tokenizer.add_rule(r"^\s+$", "whitespace").unwrap();
//! tokenizer.set_ignored("whitespace");
//!
//! let mut tokens = Vec::new();
//! tokenizer.tokenize("cat, dog", |text, name| {
//!     tokens.push(format!("{name}:{text}"));
//! });
//! assert_eq!(tokens, vec!["word:cat", "comma:,", "word:dog"]);
//! ```

use std::path::Path;

use log::{debug, trace};

use crate::config::{FlushPolicy, TokenizerConfig};
use crate::engine::{Emitter, MatchEngine};
use crate::error::Result;
use crate::rule::{Rule, RuleFile, RuleTable};
use crate::stream::{ChunkStream, Steps};
use crate::token::{Segment, Token, TokenizeStats};

/// Extracts named tokens from text using an ordered list of rules.
///
/// Rules are tried in the order they were added; the first rule fully
/// matching a span names it. Each tokenize call gets its own matching engine,
/// so a tokenizer can be shared freely once its rules are set up.
#[derive(Clone, Debug, Default)]
pub struct Tokenizer {
    rules: RuleTable,
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a tokenizer with no rules and the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with no rules and a custom configuration.
    pub fn with_config(config: TokenizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Tokenizer {
            rules: RuleTable::new(),
            config,
        })
    }

    /// Build a tokenizer from a parsed rule file.
    ///
    /// Rules are added in file order, then every name in `ignore` is marked
    /// ignored.
    pub fn from_rule_file(file: &RuleFile) -> Result<Self> {
        let mut tokenizer = Self::with_config(file.config.clone())?;
        for spec in &file.rules {
            tokenizer.rules.push(spec.compile()?)?;
        }
        for name in &file.ignore {
            tokenizer.set_ignored(name);
        }
        Ok(tokenizer)
    }

    /// Build a tokenizer from a JSON rule file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_rule_file(&RuleFile::from_path(path)?)
    }

    /// Build a tokenizer from a JSON rule file held in memory.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_rule_file(&RuleFile::from_json(json)?)
    }

    /// The active configuration.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: TokenizerConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// The rules in priority order.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Add a rule with the lowest priority so far.
    ///
    /// Fails if a not-ignored rule with the same pattern exists, or if the
    /// pattern does not compile.
    pub fn add_rule<P: Into<String>, N: Into<String>>(&mut self, pattern: P, name: N) -> Result<()> {
        self.rules.add(pattern, name)
    }

    /// Add a rule whose matches are consumed but never reported.
    pub fn add_ignored_rule<P: Into<String>, N: Into<String>>(
        &mut self,
        pattern: P,
        name: N,
    ) -> Result<()> {
        self.rules.push(Rule::new(pattern, name)?.with_ignored(true))
    }

    /// Mark the first rule named `name` (case-insensitive) as ignored.
    ///
    /// Unknown names are reported as a warning, not an error. Returns whether
    /// a rule was updated.
    pub fn set_ignored(&mut self, name: &str) -> bool {
        self.rules.set_ignored(name)
    }

    /// Tokenize `text`, calling `on_token(text, name)` for every reported token
    /// in input order.
    pub fn tokenize<F>(&self, text: &str, on_token: F) -> TokenizeStats
    where
        F: FnMut(&str, &str),
    {
        let mut emitter = Emitter::new(on_token);
        self.run(text, &mut emitter);
        emitter.stats()
    }

    /// Tokenize `text` and collect the reported tokens.
    pub fn tokenize_to_vec(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.tokenize(text, |text, name| tokens.push(Token::new(text, name)));
        tokens
    }

    /// Tokenize `text` and record how every span was resolved, including
    /// ignored matches and text dropped at a flush.
    pub fn trace(&self, text: &str) -> (Vec<Segment>, TokenizeStats) {
        let mut emitter = Emitter::with_trace(|_: &str, _: &str| {});
        self.run(text, &mut emitter);
        let (stats, segments) = emitter.finish();
        (segments, stats)
    }

    fn run<F>(&self, text: &str, emitter: &mut Emitter<F>)
    where
        F: FnMut(&str, &str),
    {
        let stream = ChunkStream::new(text, self.config.chunk_size, self.config.trim_input);
        debug!(
            "Tokenizing {} bytes with {} rules",
            stream.data().len(),
            self.rules.len()
        );

        let mut engine = MatchEngine::new(&self.rules);
        for chunk in stream {
            emitter.count_chunk();
            trace!("Processing chunk of {} bytes", chunk.len());

            for step in Steps::new(chunk, self.config.step_size) {
                trace!("Feeding step {step:?}");
                engine.feed(step, emitter);
            }

            if self.config.flush_policy == FlushPolicy::PerChunk {
                engine.flush(emitter);
            }
        }
        engine.flush(emitter);

        debug!("Tokenization finished: {:?}", emitter.stats());
    }
}
