//! Pending-buffer matching engine.

use log::debug;

use super::emitter::Emitter;
use crate::rule::RuleTable;

/// Stateful maximal-munch matcher for one tokenize call.
///
/// Holds the pending buffer: text already consumed whose every prefix, and
/// the whole, matches some rule, so more input could still extend it.
#[derive(Debug)]
pub struct MatchEngine<'r> {
    rules: &'r RuleTable,
    pending: String,
}

impl<'r> MatchEngine<'r> {
    /// Create an engine with an empty pending buffer.
    pub fn new(rules: &'r RuleTable) -> Self {
        MatchEngine {
            rules,
            pending: String::new(),
        }
    }

    /// Text consumed but not yet resolved into a token.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Feed the next increment of input.
    ///
    /// Every token that can no longer be extended is emitted in input order.
    /// Whatever still matches in full is kept pending for the next call.
    pub fn feed<F>(&mut self, data: &str, emitter: &mut Emitter<F>)
    where
        F: FnMut(&str, &str),
    {
        let mut whole = std::mem::take(&mut self.pending);
        // Every prefix of the carried-over buffer already matched.
        let mut known = whole.len();
        whole.push_str(data);

        let mut start = 0;
        while start < whole.len() {
            let rest = &whole[start..];
            let end = self.longest_match(rest, known);
            known = 0;

            if end == 0 {
                let width = rest.chars().next().map_or(rest.len(), char::len_utf8);
                emitter.emit_unknown(&rest[..width]);
                start += width;
            } else if end == rest.len() {
                whole.drain(..start);
                self.pending = whole;
                return;
            } else {
                let text = &rest[..end];
                let rule = self.rules.match_rule(text);
                debug_assert!(rule.is_some(), "scanned prefix {text:?} has no rule");
                if let Some(rule) = rule {
                    emitter.emit(text, rule);
                }
                start += end;
            }
        }
    }

    /// Force the pending buffer out as a token.
    ///
    /// If no rule matches the buffer as a whole, its text is discarded without
    /// an unknown-token fallback. The buffer is empty afterwards.
    pub fn flush<F>(&mut self, emitter: &mut Emitter<F>)
    where
        F: FnMut(&str, &str),
    {
        if self.pending.is_empty() {
            return;
        }

        let pending = std::mem::take(&mut self.pending);
        match self.rules.match_rule(&pending) {
            Some(rule) => emitter.emit(&pending, rule),
            None => {
                debug!(
                    "Dropping {} unresolved pending characters at flush",
                    pending.chars().count()
                );
                emitter.drop_pending(&pending);
            }
        }
    }

    /// Byte length of the longest run of prefixes of `text`, growing one
    /// character at a time, that each fully match some rule.
    ///
    /// Scanning stops at the first length no rule matches, so a longer match
    /// behind a gap is never seen. The first `known` bytes are taken as
    /// already matched and are not rescanned.
    fn longest_match(&self, text: &str, known: usize) -> usize {
        let mut end = known;
        for (index, ch) in text[known..].char_indices() {
            let next = known + index + ch.len_utf8();
            if !self.rules.any_match(&text[..next]) {
                break;
            }
            end = next;
        }
        end
    }
}
