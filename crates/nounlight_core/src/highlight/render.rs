//! Markup rendering for highlighted text.
//!
//! Output of [`render_markup`] is not yet safe to display; it must go
//! through [`super::sanitize::sanitize`] first.

use super::bionic;
use super::matcher::NounMatcher;
use crate::config::HighlightConfig;
use crate::model::color::HslColor;
use std::collections::BTreeMap;

/// Renders `text` with every occurrence of an `active` noun wrapped in a
/// colored span.
///
/// Each occurrence keeps its own casing; the color comes from the matching
/// noun key. Only nouns in `active` are wrapped.
pub fn render_markup(
    text: &str,
    active: &BTreeMap<String, HslColor>,
    bionic_reading: bool,
    config: &HighlightConfig,
) -> String {
    let matcher = NounMatcher::new(active.keys());
    let mut markup = String::with_capacity(text.len() * 2);
    let mut cursor = 0;

    for found in matcher.find_all(text) {
        push_escaped(&mut markup, &text[cursor..found.range.start]);
        let occurrence = &text[found.range.clone()];
        match matcher.noun(found.noun).and_then(|noun| active.get(noun)) {
            Some(color) => {
                markup.push_str("<span style=\"");
                markup.push_str(&color.css_declaration());
                markup.push_str("\">");
                push_escaped(&mut markup, occurrence);
                markup.push_str("</span>");
            }
            None => push_escaped(&mut markup, occurrence),
        }
        cursor = found.range.end;
    }
    push_escaped(&mut markup, &text[cursor..]);

    let markup = preserve_whitespace(&markup, config.tab_width);
    if bionic_reading {
        bionic::emphasize(&markup)
    } else {
        markup
    }
}

/// Replaces line breaks with `<br>` and tabs with `tab_width` `&nbsp;`.
pub fn preserve_whitespace(markup: &str, tab_width: usize) -> String {
    let tab = "&nbsp;".repeat(tab_width);
    markup
        .replace("\r\n", "<br>")
        .replace(['\r', '\n'], "<br>")
        .replace('\t', &tab)
}

/// Appends `text` with the five HTML-significant characters escaped.
fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{preserve_whitespace, push_escaped, render_markup};
    use crate::config::HighlightConfig;
    use crate::model::color::HslColor;
    use std::collections::BTreeMap;

    fn active(entries: &[(&str, u16)]) -> BTreeMap<String, HslColor> {
        entries
            .iter()
            .map(|(noun, hue)| (noun.to_string(), HslColor::new(*hue, 100, 50)))
            .collect()
    }

    #[test]
    fn wraps_each_occurrence_in_the_same_color() {
        let markup = render_markup(
            "The cat sat on the mat. The cat ran.",
            &active(&[("cat", 120)]),
            false,
            &HighlightConfig::default(),
        );
        assert_eq!(
            markup,
            "The <span style=\"color: hsl(120, 100%, 50%);\">cat</span> sat on the mat. \
             The <span style=\"color: hsl(120, 100%, 50%);\">cat</span> ran."
        );
    }

    #[test]
    fn occurrence_casing_is_preserved() {
        let markup = render_markup(
            "Cat and CAT",
            &active(&[("cat", 5)]),
            false,
            &HighlightConfig::default(),
        );
        assert!(markup.contains(">Cat</span>"));
        assert!(markup.contains(">CAT</span>"));
        assert!(!markup.contains(">cat</span>"));
    }

    #[test]
    fn text_is_escaped_inside_and_outside_spans() {
        let markup = render_markup(
            "<b>dog's</b> & dog's",
            &active(&[("dog's", 30)]),
            false,
            &HighlightConfig::default(),
        );
        assert!(markup.starts_with("&lt;b&gt;<span"));
        assert!(markup.contains(">dog&#39;s</span>&lt;/b&gt; &amp; <span"));
    }

    #[test]
    fn tabs_and_newlines_are_preserved() {
        let markup = render_markup("a\tb\nc", &BTreeMap::new(), false, &HighlightConfig::default());
        assert_eq!(markup, "a&nbsp;&nbsp;&nbsp;&nbsp;b<br>c");
    }

    #[test]
    fn tab_width_follows_config() {
        let config = HighlightConfig {
            tab_width: 2,
            ..HighlightConfig::default()
        };
        assert_eq!(
            render_markup("\tx", &BTreeMap::new(), false, &config),
            "&nbsp;&nbsp;x"
        );
    }

    #[test]
    fn windows_line_endings_become_single_breaks() {
        assert_eq!(preserve_whitespace("a\r\nb\rc", 4), "a<br>b<br>c");
    }

    #[test]
    fn bionic_pass_runs_over_span_markup() {
        let markup = render_markup(
            "cat cat",
            &active(&[("cat", 0)]),
            true,
            &HighlightConfig::default(),
        );
        assert_eq!(
            markup,
            "<span style=\"color: hsl(0, 100%, 50%);\"><b>ca</b>t</span> \
             <span style=\"color: hsl(0, 100%, 50%);\"><b>ca</b>t</span>"
        );
    }

    #[test]
    fn escape_covers_quotes() {
        let mut escaped = String::new();
        push_escaped(&mut escaped, r#"<"x" & 'y'>"#);
        assert_eq!(escaped, "&lt;&quot;x&quot; &amp; &#39;y&#39;&gt;");
    }
}
