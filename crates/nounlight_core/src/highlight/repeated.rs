//! Repeated-noun detection.

use super::matcher::count_occurrences;

/// Returns the nouns that occur at least `min_occurrences` times in `text`.
///
/// Occurrences are whole-word and case-insensitive, counted independently
/// per noun. The result is sorted and has no color side effects.
pub fn find_repeated_nouns<I, S>(text: &str, nouns: I, min_occurrences: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut repeated: Vec<String> = nouns
        .into_iter()
        .filter(|noun| count_occurrences(text, noun.as_ref()) >= min_occurrences)
        .map(|noun| noun.as_ref().to_string())
        .collect();
    repeated.sort();
    repeated.dedup();
    repeated
}

#[cfg(test)]
mod tests {
    use super::find_repeated_nouns;
    use crate::nlp::extract_nouns;

    #[test]
    fn only_nouns_above_the_threshold_qualify() {
        let text = "The cat sat on the mat. The cat ran.";
        let repeated = find_repeated_nouns(text, &extract_nouns(text), 2);
        assert_eq!(repeated, vec!["cat".to_string()]);
    }

    #[test]
    fn counting_ignores_case() {
        let text = "Rivers flow. A river, the River, one RIVER.";
        let repeated = find_repeated_nouns(text, ["river", "Rivers"], 2);
        assert_eq!(repeated, vec!["river".to_string()]);
    }

    #[test]
    fn higher_thresholds_are_respected() {
        let text = "cat cat dog dog dog";
        assert_eq!(find_repeated_nouns(text, ["cat", "dog"], 3), vec!["dog"]);
    }

    #[test]
    fn contracted_forms_count_on_their_own() {
        let text = "The dog's toy is by the dog's bed; a dog sleeps.";
        let repeated = find_repeated_nouns(text, ["dog's", "dog"], 2);
        assert_eq!(repeated, vec!["dog's".to_string()]);
    }

    #[test]
    fn empty_text_has_no_repeats() {
        assert!(find_repeated_nouns("", ["cat"], 2).is_empty());
    }
}
