//! Bionic reading: bold the leading half of every word.
//!
//! Runs over finished markup. Tags are copied untouched, entities never
//! start or split a word, and an apostrophe or hyphen between letters stays
//! inside the word (`dog&#39;s` is one word).

/// Emphasizes the first half (rounded up) of each word in `markup`.
pub fn emphasize(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len() + markup.len() / 2);
    let mut word: Vec<&str> = Vec::new();
    let mut rest = markup;

    while let Some(c) = rest.chars().next() {
        if c == '<' {
            flush_word(&mut out, &mut word);
            let end = rest.find('>').map_or(rest.len(), |i| i + 1);
            out.push_str(&rest[..end]);
            rest = &rest[end..];
            continue;
        }

        let unit_len = if c == '&' {
            entity_len(rest).unwrap_or(1)
        } else {
            c.len_utf8()
        };
        let (unit, after) = rest.split_at(unit_len);
        let continues_word = after.chars().next().is_some_and(char::is_alphanumeric);

        if c.is_alphanumeric() || (!word.is_empty() && is_joiner(unit) && continues_word) {
            word.push(unit);
        } else {
            flush_word(&mut out, &mut word);
            out.push_str(unit);
        }
        rest = after;
    }

    flush_word(&mut out, &mut word);
    out
}

/// Number of leading units to embolden in a word of `len` units.
pub fn fixation_len(len: usize) -> usize {
    len.div_ceil(2)
}

fn flush_word(out: &mut String, word: &mut Vec<&str>) {
    if word.is_empty() {
        return;
    }
    let (head, tail) = word.split_at(fixation_len(word.len()));
    out.push_str("<b>");
    head.iter().for_each(|unit| out.push_str(unit));
    out.push_str("</b>");
    tail.iter().for_each(|unit| out.push_str(unit));
    word.clear();
}

fn is_joiner(unit: &str) -> bool {
    matches!(unit, "-" | "'" | "\u{2019}" | "&#39;" | "&#x27;" | "&apos;" | "&rsquo;")
}

/// Length of a character reference at the start of `s`, if it is one.
fn entity_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix('&')?;
    let end = body.find(';')?;
    let name = &body[..end];
    let valid = !name.is_empty()
        && name.len() <= 10
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '#');
    valid.then_some(end + 2)
}
