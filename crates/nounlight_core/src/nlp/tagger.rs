//! Rule-based part-of-speech tagging.
//!
//! Three passes over the input:
//!
//! | Pass      | Input                  | Output                         |
//! |-----------|------------------------|--------------------------------|
//! | tokenize  | raw text               | word spans + gap metadata      |
//! | tag       | one word at a time     | lexicon hit or suffix guess    |
//! | context   | neighbouring tags      | corrected noun/verb guesses    |
//!
//! No model weights and no allocation beyond the token list, so tagging is
//! cheap enough to rerun on every keystroke.

use super::lexicon;
use std::ops::Range;

/// Simplified part-of-speech classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pos {
    Noun,
    ProperNoun,
    Pronoun,
    Verb,
    Auxiliary,
    Modal,
    Adjective,
    Adverb,
    Determiner,
    Preposition,
    Conjunction,
    Numeral,
    Other,
}

impl Pos {
    /// Noun classes that feed highlighting. Pronouns are excluded.
    pub fn is_noun(self) -> bool {
        matches!(self, Pos::Noun | Pos::ProperNoun)
    }
}

/// One tagged word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// Exact surface text.
    pub text: String,
    pub pos: Pos,
    /// Byte range in the source text.
    pub range: Range<usize>,
    /// Only whitespace separates this token from the previous one.
    pub joined_by_space: bool,
}

/// Assigns a [`Pos`] to every word of a text.
pub trait PartOfSpeechTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

/// Lexicon + suffix heuristics tagger for English prose.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl PartOfSpeechTagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let words = tokenize(text);
        let mut tags: Vec<Tag> = words
            .iter()
            .map(|word| tag_word(&text[word.range.clone()], word.sentence_start))
            .collect();
        apply_context_rules(&words, &mut tags, text);

        words
            .into_iter()
            .zip(tags)
            .map(|(word, tag)| TaggedToken {
                text: text[word.range.clone()].to_string(),
                pos: tag.pos,
                joined_by_space: word.joined_by_space,
                range: word.range,
            })
            .collect()
    }
}

struct WordSpan {
    range: Range<usize>,
    sentence_start: bool,
    joined_by_space: bool,
    /// No punctuation between this word and the previous one.
    adjacent: bool,
}

#[derive(Clone, Copy)]
struct Tag {
    pos: Pos,
    /// Came from the default fallback rather than the lexicon or a rule.
    guessed: bool,
}

impl Tag {
    fn known(pos: Pos) -> Self {
        Self {
            pos,
            guessed: false,
        }
    }
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

fn is_joiner(c: char) -> bool {
    is_apostrophe(c) || c == '-'
}

/// Splits text into words. Apostrophes and hyphens stay inside a word only
/// when letters or digits follow them.
fn tokenize(text: &str) -> Vec<WordSpan> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    let mut sentence_start = true;
    let mut gap_start = 0;

    for (i, &(offset, c)) in chars.iter().enumerate() {
        let next_is_word = chars
            .get(i + 1)
            .is_some_and(|&(_, next)| next.is_alphanumeric());

        if c.is_alphanumeric() || (start.is_some() && is_joiner(c) && next_is_word) {
            if start.is_none() {
                start = Some(offset);
            }
            continue;
        }

        if let Some(word_start) = start.take() {
            spans.push(word_span(text, word_start..offset, gap_start, sentence_start));
            sentence_start = false;
            gap_start = offset;
        }
        let blank_line = c == '\n' && text[gap_start..offset].contains('\n');
        if matches!(c, '.' | '!' | '?') || blank_line {
            sentence_start = true;
        }
    }

    if let Some(word_start) = start {
        spans.push(word_span(text, word_start..text.len(), gap_start, sentence_start));
    }

    spans
}

fn word_span(
    text: &str,
    range: Range<usize>,
    gap_start: usize,
    sentence_start: bool,
) -> WordSpan {
    let gap = &text[gap_start..range.start];
    let first = gap_start == 0;
    WordSpan {
        joined_by_space: !first && gap == " ",
        adjacent: !first && gap.chars().all(char::is_whitespace),
        sentence_start,
        range,
    }
}

fn tag_word(word: &str, sentence_start: bool) -> Tag {
    let normalized = word.replace('\u{2019}', "'").to_lowercase();

    if let Some(pos) = lexicon::lookup(&normalized) {
        return Tag::known(pos);
    }

    if normalized
        .chars()
        .all(|c| c.is_ascii_digit() || c == '-' || c == '\'')
    {
        return Tag::known(Pos::Numeral);
    }

    let capitalized = word.chars().next().is_some_and(char::is_uppercase);

    if let Some(base) = normalized.strip_suffix("'s") {
        return match lexicon::lookup(base) {
            Some(Pos::Pronoun | Pos::Determiner) => Tag::known(Pos::Pronoun),
            _ if capitalized => Tag::known(Pos::ProperNoun),
            _ => Tag::known(Pos::Noun),
        };
    }
    if normalized.ends_with("n't") {
        return Tag::known(Pos::Auxiliary);
    }
    if ["'ll", "'re", "'ve", "'d", "'m"]
        .iter()
        .any(|suffix| normalized.ends_with(suffix))
    {
        return Tag::known(Pos::Pronoun);
    }

    if capitalized && !sentence_start {
        return Tag::known(Pos::ProperNoun);
    }

    infer_from_suffix(&normalized)
}

const NOUN_SUFFIXES: &[&str] = &[
    "ness", "tion", "sion", "ment", "ity", "ship", "hood", "ism", "er", "or",
];
const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "less", "ous", "ive", "able", "ible", "ish", "ical"];

fn infer_from_suffix(lower: &str) -> Tag {
    let len = lower.chars().count();
    if len == 1 {
        return Tag::known(Pos::Other);
    }

    if len >= 5 && lower.ends_with("ly") {
        return Tag::known(Pos::Adverb);
    }
    if (len >= 5 && lower.ends_with("ed")) || (len >= 6 && lower.ends_with("ing")) {
        return Tag::known(Pos::Verb);
    }
    if ends_with_any(lower, NOUN_SUFFIXES) {
        return Tag::known(Pos::Noun);
    }
    if ends_with_any(lower, ADJECTIVE_SUFFIXES) {
        return Tag::known(Pos::Adjective);
    }

    Tag {
        pos: Pos::Noun,
        guessed: true,
    }
}

fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| word.ends_with(suffix))
}

const SUBJECT_PRONOUNS: &[&str] = &["i", "we", "they", "he", "she"];

fn apply_context_rules(words: &[WordSpan], tags: &mut [Tag], text: &str) {
    for i in 1..words.len() {
        if !words[i].adjacent {
            continue;
        }
        let prev = tags[i - 1];
        let prev_word = &text[words[i - 1].range.clone()];
        let prev_lower = prev_word.to_lowercase();
        let current = tags[i];

        let prev_is_possessive = prev.pos.is_noun()
            && (prev_lower.ends_with("'s") || prev_lower.ends_with("\u{2019}s"));

        // "the run", "a long walk", "the dog's bark"
        if current.pos == Pos::Verb
            && (matches!(prev.pos, Pos::Determiner | Pos::Adjective) || prev_is_possessive)
        {
            tags[i] = Tag::known(Pos::Noun);
            continue;
        }

        // "will jump", "they jump"
        if current.guessed
            && (prev.pos == Pos::Modal || SUBJECT_PRONOUNS.contains(&prev_lower.as_str()))
        {
            tags[i] = Tag::known(Pos::Verb);
            continue;
        }

        // "the dog barks", "Maria swims"; not "the dog houses are"
        let word = text[words[i].range.clone()].to_lowercase();
        if current.guessed
            && words[i].joined_by_space
            && prev.pos.is_noun()
            && !prev_is_possessive
            && looks_third_person(&word)
            && !starts_predicate_or_phrase(words.get(i + 1), tags.get(i + 1))
        {
            tags[i] = Tag::known(Pos::Verb);
        }
    }
}

/// `-s` forms that are not `-ss`/`-us`/`-is` nouns ("glass", "cactus", "basis").
fn looks_third_person(word: &str) -> bool {
    word.chars().count() >= 3
        && word.ends_with('s')
        && !ends_with_any(word, &["ss", "us", "is", "'s"])
}

/// Whether the following word keeps the current one inside a noun phrase.
fn starts_predicate_or_phrase(next: Option<&WordSpan>, tag: Option<&Tag>) -> bool {
    match (next, tag) {
        (Some(next), Some(tag)) if next.joined_by_space => {
            tag.pos.is_noun() || matches!(tag.pos, Pos::Verb | Pos::Auxiliary | Pos::Modal)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{tokenize, LexiconTagger, PartOfSpeechTagger, Pos};

    fn pos_of(text: &str, word: &str) -> Pos {
        LexiconTagger
            .tag(text)
            .into_iter()
            .find(|token| token.text == word)
            .map(|token| token.pos)
            .unwrap_or_else(|| panic!("`{word}` should be a token of `{text}`"))
    }

    #[test]
    fn tokenizer_keeps_inner_apostrophes_and_hyphens() {
        let text = "The dog's well-known 'bark' -- dogs' bowls";
        let words: Vec<&str> = tokenize(text)
            .iter()
            .map(|span| &text[span.range.clone()])
            .collect();
        assert_eq!(
            words,
            vec!["The", "dog's", "well-known", "bark", "dogs", "bowls"]
        );
    }

    #[test]
    fn tokenizer_tracks_single_space_gaps() {
        let spans = tokenize("ice cream,  ice\ncream");
        let joined: Vec<bool> = spans.iter().map(|span| span.joined_by_space).collect();
        assert_eq!(joined, vec![false, true, false, false]);
    }

    #[test]
    fn simple_sentence_is_tagged() {
        let text = "The cat sat on the mat.";
        assert_eq!(pos_of(text, "The"), Pos::Determiner);
        assert_eq!(pos_of(text, "cat"), Pos::Noun);
        assert_eq!(pos_of(text, "sat"), Pos::Verb);
        assert_eq!(pos_of(text, "on"), Pos::Preposition);
        assert_eq!(pos_of(text, "mat"), Pos::Noun);
    }

    #[test]
    fn capitalized_words_inside_a_sentence_are_proper_nouns() {
        let text = "Yesterday we visited Lisbon with Maria.";
        assert_eq!(pos_of(text, "Lisbon"), Pos::ProperNoun);
        assert_eq!(pos_of(text, "Maria"), Pos::ProperNoun);
    }

    #[test]
    fn possessives_and_contractions_are_classified() {
        let text = "The dog's bone isn't where it's supposed to be.";
        assert_eq!(pos_of(text, "dog's"), Pos::Noun);
        assert_eq!(pos_of(text, "isn't"), Pos::Auxiliary);
        assert_eq!(pos_of(text, "it's"), Pos::Pronoun);
    }

    #[test]
    fn verbs_after_determiners_become_nouns() {
        assert_eq!(pos_of("She went for a run.", "run"), Pos::Noun);
        assert_eq!(pos_of("The building was tall.", "building"), Pos::Noun);
        assert_eq!(pos_of("They run home.", "run"), Pos::Verb);
    }

    #[test]
    fn unknown_words_after_modals_and_subjects_are_verbs() {
        assert_eq!(pos_of("Frogs can jump.", "jump"), Pos::Verb);
        assert_eq!(pos_of("They jump.", "jump"), Pos::Verb);
        assert_eq!(pos_of("Frogs can jump.", "Frogs"), Pos::Noun);
    }

    #[test]
    fn third_person_verbs_after_noun_subjects_are_verbs() {
        assert_eq!(pos_of("The dog barks.", "barks"), Pos::Verb);
        let text = "The sun shines and the bird sings.";
        assert_eq!(pos_of(text, "shines"), Pos::Verb);
        assert_eq!(pos_of(text, "sings"), Pos::Verb);
        assert_eq!(pos_of("Yesterday Maria swims.", "swims"), Pos::Verb);
    }

    #[test]
    fn plural_heads_of_noun_phrases_stay_nouns() {
        assert_eq!(pos_of("The dog houses are red.", "houses"), Pos::Noun);
        assert_eq!(pos_of("A glass of water.", "glass"), Pos::Noun);
        assert_eq!(pos_of("The dog's toys.", "toys"), Pos::Noun);
    }

    #[test]
    fn numbers_are_numerals() {
        assert_eq!(pos_of("We need 42 chairs.", "42"), Pos::Numeral);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(LexiconTagger.tag("").is_empty());
        assert!(LexiconTagger.tag("  \n\t ...").is_empty());
    }
}
