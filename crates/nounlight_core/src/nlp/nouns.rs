//! Noun set extraction on top of a [`PartOfSpeechTagger`].

use super::tagger::{LexiconTagger, PartOfSpeechTagger, TaggedToken};
use std::collections::BTreeSet;

/// Extracts nouns with the built-in [`LexiconTagger`].
pub fn extract_nouns(text: &str) -> BTreeSet<String> {
    extract_nouns_with(&LexiconTagger, text)
}

/// Returns every noun token plus every compound noun phrase.
///
/// A compound phrase is a run of two or more noun tokens separated by single
/// spaces ("ice cream", "New York"). The result is deduplicated by exact
/// string.
pub fn extract_nouns_with(tagger: &dyn PartOfSpeechTagger, text: &str) -> BTreeSet<String> {
    let tokens = tagger.tag(text);
    let mut nouns = BTreeSet::new();
    let mut run: Vec<&TaggedToken> = Vec::new();

    for token in &tokens {
        if !token.pos.is_noun() {
            push_compound(text, &run, &mut nouns);
            run.clear();
            continue;
        }

        if !token.joined_by_space {
            push_compound(text, &run, &mut nouns);
            run.clear();
        }
        nouns.insert(token.text.clone());
        run.push(token);
    }
    push_compound(text, &run, &mut nouns);

    nouns
}

fn push_compound(text: &str, run: &[&TaggedToken], nouns: &mut BTreeSet<String>) {
    if let [first, .., last] = run {
        nouns.insert(text[first.range.start..last.range.end].to_string());
    }
}
