//! Allow-list HTML sanitizer for rendered markup.
//!
//! # Invariants
//! - Only `span`, `br` and `b` survive; `span` keeps a `style` attribute
//!   only when it is exactly one `color: hsl(..);` declaration.
//! - `script` and `style` elements are removed together with their content.
//! - Anything not on the allow-list is dropped, never passed through.
//! - `sanitize(sanitize(x)) == sanitize(x)`.

use ammonia::Builder;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static COLOR_STYLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^color: hsl\(\d{1,3}, \d{1,3}%, \d{1,3}%\);$").expect("valid color style regex")
});

/// Strips everything but highlight spans, line breaks and bold runs.
pub fn sanitize(markup: &str) -> String {
    let mut builder = Builder::empty();
    builder
        .add_tags(&["span", "br", "b"])
        .add_tag_attributes("span", &["style"])
        .clean_content_tags(HashSet::from(["script", "style"]))
        .strip_comments(true)
        .attribute_filter(|element, attribute, value| {
            let allowed =
                element == "span" && attribute == "style" && COLOR_STYLE_RE.is_match(value);
            allowed.then(|| value.into())
        });
    builder.clean(markup).to_string()
}
