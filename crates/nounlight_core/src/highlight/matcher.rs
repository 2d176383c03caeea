//! Whole-word, case-insensitive noun matching.
//!
//! # Invariants
//! - Noun strings are escaped with `regex::escape` before compilation, so
//!   metacharacters in a noun are matched literally.
//! - A match is whole-word when neither neighbour is a word character. An
//!   apostrophe or hyphen glued to a letter counts as part of the word, so
//!   `dog` does not match inside `dog's` or `dog-house`.
//! - With several nouns, the longest noun wins at a given position and
//!   matches never overlap.

use log::warn;
use regex::{Regex, RegexBuilder};
use std::ops::Range;

/// One accepted match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounMatch {
    /// Byte range of the occurrence in the searched text.
    pub range: Range<usize>,
    /// Index into [`NounMatcher::nouns`].
    pub noun: usize,
}

struct Candidate {
    noun: String,
    anchored: Regex,
}

/// Matcher over a fixed set of nouns.
pub struct NounMatcher {
    candidates: Vec<Candidate>,
    search: Option<Regex>,
}

impl NounMatcher {
    /// Builds a matcher for `nouns`; empty strings are ignored.
    ///
    /// Longer nouns are tried first, ties broken by string order.
    pub fn new<I, S>(nouns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered: Vec<String> = nouns
            .into_iter()
            .map(|noun| noun.as_ref().to_string())
            .filter(|noun| !noun.is_empty())
            .collect();
        ordered.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        ordered.dedup();

        let candidates: Vec<Candidate> = ordered
            .into_iter()
            .filter_map(|noun| {
                let anchored = compile(&format!(r"\A(?:{})", regex::escape(&noun)))?;
                Some(Candidate { noun, anchored })
            })
            .collect();

        let search = if candidates.is_empty() {
            None
        } else {
            let alternation = candidates
                .iter()
                .map(|candidate| regex::escape(&candidate.noun))
                .collect::<Vec<_>>()
                .join("|");
            compile(&alternation)
        };

        Self { candidates, search }
    }

    /// Matched nouns in priority order.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|candidate| candidate.noun.as_str())
    }

    /// Returns the noun behind a [`NounMatch::noun`] index.
    pub fn noun(&self, index: usize) -> Option<&str> {
        self.candidates.get(index).map(|candidate| candidate.noun.as_str())
    }

    /// All non-overlapping whole-word matches, left to right.
    pub fn find_all(&self, text: &str) -> Vec<NounMatch> {
        let Some(search) = &self.search else {
            return Vec::new();
        };

        let mut found = Vec::new();
        let mut pos = 0;
        while pos < text.len() {
            let Some(hit) = search.find_at(text, pos) else {
                break;
            };
            let start = hit.start();
            match self.accept_at(text, start) {
                Some(accepted) => {
                    pos = accepted.range.end.max(start + 1);
                    found.push(accepted);
                }
                None => pos = start + next_char_len(&text[start..]),
            }
            while !text.is_char_boundary(pos) {
                pos += 1;
            }
        }
        found
    }

    /// Number of whole-word matches in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.find_all(text).len()
    }

    fn accept_at(&self, text: &str, start: usize) -> Option<NounMatch> {
        if glued(text[..start].chars().rev()) {
            return None;
        }
        let tail = &text[start..];
        self.candidates
            .iter()
            .enumerate()
            .find_map(|(index, candidate)| {
                let hit = candidate.anchored.find(tail)?;
                let end = start + hit.end();
                (hit.end() > 0 && !glued(text[end..].chars())).then(|| NounMatch {
                    range: start..end,
                    noun: index,
                })
            })
    }
}

/// Counts whole-word, case-insensitive occurrences of one noun.
pub fn count_occurrences(text: &str, noun: &str) -> usize {
    NounMatcher::new([noun]).count(text)
}

fn compile(pattern: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(regex) => Some(regex),
        Err(err) => {
            // Escaped input always parses; only size limits can land here.
            warn!(
                "event=noun_pattern module=highlight status=error error_code=compile_failed pattern_len={} error={}",
                pattern.len(),
                crate::logging::one_line_summary(&err.to_string(), 80)
            );
            None
        }
    }
}

fn next_char_len(tail: &str) -> usize {
    tail.chars().next().map_or(1, char::len_utf8)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_joiner(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '-')
}

/// Whether the characters walking away from a match boundary continue a word.
fn glued(mut away: impl Iterator<Item = char>) -> bool {
    match away.next() {
        Some(c) if is_word_char(c) => true,
        Some(c) if is_joiner(c) => away.next().is_some_and(char::is_alphanumeric),
        _ => false,
    }
}
