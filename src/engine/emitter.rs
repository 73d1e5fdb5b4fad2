//! Token delivery to the caller's callback.

use crate::rule::Rule;
use crate::token::{Segment, SegmentKind, TokenizeStats, UNKNOWN_TOKEN};

/// Delivers resolved spans to a `(text, name)` callback.
///
/// Matches of ignored rules are counted but never delivered. When tracing is
/// enabled every span is also recorded as a [`Segment`], including ignored
/// and dropped ones.
pub struct Emitter<F>
where
    F: FnMut(&str, &str),
{
    on_token: F,
    trace: Option<Vec<Segment>>,
    stats: TokenizeStats,
}

impl<F> Emitter<F>
where
    F: FnMut(&str, &str),
{
    /// Create an emitter that only invokes `on_token`.
    pub fn new(on_token: F) -> Self {
        Emitter {
            on_token,
            trace: None,
            stats: TokenizeStats::default(),
        }
    }

    /// Create an emitter that also records every resolved span.
    pub fn with_trace(on_token: F) -> Self {
        Emitter {
            on_token,
            trace: Some(Vec::new()),
            stats: TokenizeStats::default(),
        }
    }

    /// Deliver `text` as a match of `rule`, unless the rule is ignored.
    pub fn emit(&mut self, text: &str, rule: &Rule) {
        if rule.is_ignored() {
            self.stats.ignored += 1;
            self.record(text, Some(rule.name()), SegmentKind::Ignored);
        } else {
            self.stats.emitted += 1;
            (self.on_token)(text, rule.name());
            self.record(text, Some(rule.name()), SegmentKind::Emitted);
        }
    }

    /// Deliver a character no rule matches.
    pub fn emit_unknown(&mut self, text: &str) {
        self.stats.unknown += 1;
        (self.on_token)(text, UNKNOWN_TOKEN);
        self.record(text, Some(UNKNOWN_TOKEN), SegmentKind::Unknown);
    }

    /// Account for pending text discarded at a flush.
    pub fn drop_pending(&mut self, text: &str) {
        self.stats.dropped += 1;
        self.record(text, None, SegmentKind::Dropped);
    }

    pub(crate) fn count_chunk(&mut self) {
        self.stats.chunks += 1;
    }

    /// Counters collected so far.
    pub fn stats(&self) -> TokenizeStats {
        self.stats
    }

    /// Consume the emitter, returning its counters and recorded trace.
    ///
    /// The trace is empty unless the emitter was built with [`Emitter::with_trace`].
    pub fn finish(self) -> (TokenizeStats, Vec<Segment>) {
        (self.stats, self.trace.unwrap_or_default())
    }

    fn record(&mut self, text: &str, name: Option<&str>, kind: SegmentKind) {
        if let Some(trace) = self.trace.as_mut() {
            trace.push(Segment {
                text: text.to_string(),
                name: name.map(str::to_string),
                kind,
            });
        }
    }
}
