//! Built-in English word list for the tagger.
//!
//! Closed word classes are listed exhaustively enough for everyday prose;
//! open classes only carry common words whose suffix heuristics would guess
//! wrong. Every entry is lowercase with ASCII apostrophes.

use super::tagger::Pos;
use once_cell::sync::Lazy;
use std::collections::HashMap;

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "some", "any", "no", "every", "each", "either", "neither", "another", "such",
    "what", "whatever", "which", "whichever", "much", "many", "few", "several", "all", "both",
    "half", "enough", "more", "most", "less", "least", "own",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "mine", "yours",
    "hers", "ours", "theirs", "myself", "yourself", "himself", "herself", "itself", "ourselves",
    "yourselves", "themselves", "who", "whom", "whose", "whoever", "someone", "somebody",
    "something", "anyone", "anybody", "anything", "everyone", "everybody", "everything",
    "nobody", "nothing", "none", "one", "ones", "there", "here", "i'm", "i've", "i'll", "i'd",
    "you're", "you've", "you'll", "you'd", "he's", "he'll", "he'd", "she's", "she'll", "she'd",
    "it's", "it'll", "we're", "we've", "we'll", "we'd", "they're", "they've", "they'll",
    "they'd", "that's", "there's", "here's", "what's", "who's", "let's",
];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "amid", "among", "around", "as",
    "at", "before", "behind", "below", "beneath", "beside", "besides", "between", "beyond",
    "by", "despite", "down", "during", "except", "for", "from", "in", "inside", "into", "like",
    "near", "of", "off", "on", "onto", "out", "outside", "over", "past", "per", "since",
    "through", "throughout", "till", "to", "toward", "towards", "under", "underneath",
    "unlike", "until", "up", "upon", "via", "with", "within", "without",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "while",
    "whereas", "if", "unless", "whether", "than", "once", "when", "whenever", "where",
    "wherever", "why", "how",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "done",
    "have", "has", "had", "having", "isn't", "aren't", "wasn't", "weren't", "don't",
    "doesn't", "didn't", "haven't", "hasn't", "hadn't", "won't", "wouldn't", "can't",
    "cannot", "couldn't", "shouldn't", "mustn't", "mightn't", "needn't", "ain't",
];

const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would", "ought",
];

const VERBS: &[&str] = &[
    "ask", "asked", "ate", "became", "become", "began", "begin", "believe", "bought", "bring",
    "brought", "build", "built", "buy", "call", "called", "came", "carry", "caught", "chose",
    "come", "comes", "could", "cut", "die", "died", "drank", "drew", "drink", "drive", "drove",
    "eat", "eats", "fall", "feel", "feels", "fell", "felt", "find", "finds", "flew", "fly",
    "forget", "forgot", "found", "gave", "get", "gets", "give", "gives", "go", "goes", "gone",
    "got", "grew", "grow", "hear", "heard", "held", "help", "hold", "hope", "keep", "keeps",
    "kept", "knew", "know", "knows", "known", "laid", "lay", "lead", "learn", "leave",
    "leaves", "led", "left", "lie", "live", "lives", "look", "looks", "lose", "lost", "love",
    "loves", "made", "make", "makes", "mean", "means", "meant", "meet", "met", "move", "need",
    "needs", "paid", "pay", "play", "plays", "put", "puts", "ran", "rang", "read", "reads",
    "remember", "ride", "rode", "rose", "run", "runs", "said", "sang", "sat", "saw", "say",
    "says", "see", "seem", "seems", "seen", "sees", "sell", "send", "sent", "set", "shook",
    "show", "shows", "sing", "sit", "sits", "sleep", "slept", "sold", "speak", "spoke",
    "stand", "stands", "start", "stay", "stood", "swam", "swim", "take", "takes", "taken",
    "talk", "taught", "teach", "tell", "tells", "think", "thinks", "thought", "threw",
    "throw", "told", "took", "try", "tries", "understand", "understood", "use", "uses",
    "wait", "walk", "walks", "want", "wants", "watch", "went", "win", "woke", "won", "wore",
    "work", "works", "write", "writes", "written", "wrote",
];

const ADJECTIVES: &[&str] = &[
    "able", "bad", "beautiful", "best", "better", "big", "black", "blue", "bright", "brown",
    "busy", "cheap", "clean", "clear", "close", "cold", "common", "dark", "dead", "deep",
    "different", "dry", "early", "easy", "empty", "entire", "even", "every", "fair", "false",
    "far", "fast", "fine", "first", "free", "fresh", "full", "gold", "golden", "good",
    "great", "green", "grey", "gray", "happy", "hard", "heavy", "high", "hot", "huge",
    "important", "large", "last", "late", "little", "long", "loud", "low", "main", "modern",
    "new", "next", "nice", "old", "only", "open", "other", "pink", "plain", "poor", "possible",
    "pretty", "purple", "quick", "quiet", "ready", "real", "red", "rich", "right", "round",
    "sad", "safe", "same", "second", "short", "sick", "silver", "simple", "slow", "small",
    "soft", "strange", "strong", "sure", "sweet", "tall", "thick", "thin", "tiny", "true",
    "warm", "weak", "wet", "white", "whole", "wide", "wild", "wise", "wrong", "yellow",
    "young",
];

const ADVERBS: &[&str] = &[
    "again", "ago", "almost", "already", "also", "always", "away", "back", "just", "later",
    "maybe", "never", "not", "now", "often", "perhaps", "quite", "rather", "seldom",
    "sometimes", "soon", "still", "then", "there", "today", "together", "tomorrow", "too",
    "very", "well", "yesterday", "ever", "else", "instead", "indeed", "n't",
];

const INTERJECTIONS: &[&str] = &["oh", "ah", "hey", "hello", "hi", "yes", "no", "okay", "ok", "wow"];

static LEXICON: Lazy<HashMap<&'static str, Pos>> = Lazy::new(|| {
    // Later tables win, so ambiguous words end up in their most useful class.
    let tables: [(&[&str], Pos); 10] = [
        (VERBS, Pos::Verb),
        (ADJECTIVES, Pos::Adjective),
        (ADVERBS, Pos::Adverb),
        (INTERJECTIONS, Pos::Other),
        (CONJUNCTIONS, Pos::Conjunction),
        (PREPOSITIONS, Pos::Preposition),
        (MODALS, Pos::Modal),
        (AUXILIARIES, Pos::Auxiliary),
        (DETERMINERS, Pos::Determiner),
        (PRONOUNS, Pos::Pronoun),
    ];

    let mut lexicon = HashMap::new();
    for (words, pos) in tables {
        for word in words {
            lexicon.insert(*word, pos);
        }
    }
    lexicon
});

/// Looks up a lowercase, ASCII-apostrophe word.
pub(crate) fn lookup(word: &str) -> Option<Pos> {
    LEXICON.get(word).copied()
}

#[cfg(test)]
mod tests {
    use super::lookup;
    use crate::nlp::tagger::Pos;

    #[test]
    fn closed_classes_are_known() {
        assert_eq!(lookup("the"), Some(Pos::Determiner));
        assert_eq!(lookup("they"), Some(Pos::Pronoun));
        assert_eq!(lookup("on"), Some(Pos::Preposition));
        assert_eq!(lookup("didn't"), Some(Pos::Auxiliary));
        assert_eq!(lookup("sat"), Some(Pos::Verb));
    }

    #[test]
    fn ambiguous_words_resolve_to_the_later_table() {
        // "there" is both an adverb and an existential pronoun.
        assert_eq!(lookup("there"), Some(Pos::Pronoun));
        // "no" is both an interjection and a determiner.
        assert_eq!(lookup("no"), Some(Pos::Determiner));
        assert_eq!(lookup("could"), Some(Pos::Modal));
    }

    #[test]
    fn open_class_nouns_are_not_listed() {
        assert_eq!(lookup("cat"), None);
        assert_eq!(lookup("mat"), None);
    }
}
