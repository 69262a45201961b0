//! Input sanitizers, composable with [`crate::compose`].

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

static HTML_TAG: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"<[^>]+>"));

/// Remove every `<...>` run holding at least one character.
///
/// An unclosed `<` and an empty `<>` are kept as text.
pub fn strip_html_tags(text: &str) -> String {
    match HTML_TAG.as_ref() {
        Ok(tag) => tag.replace_all(text, "").into_owned(),
        Err(e) => {
            tracing::warn!(error = %e, "tag pattern failed to compile, input left as is");
            text.to_owned()
        }
    }
}

/// Replace whitespace runs with one space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().join(" ")
}

/// Keep at most `max_length` characters.
pub fn limit_length(text: &str, max_length: usize) -> String {
    text.chars().take(max_length).collect()
}

/// Tag stripping, whitespace collapsing, then truncation.
///
/// ```
/// use greeter_core::sanitize::default_sanitizer;
///
/// let clean = default_sanitizer(10);
/// assert_eq!(clean("  <b>Ada</b>   Lovelace  "), "Ada Lovela");
/// ```
pub fn default_sanitizer(max_length: usize) -> impl Fn(&str) -> String {
    move |text: &str| {
        crate::pipe!(
            text,
            strip_html_tags,
            |stripped: String| collapse_whitespace(&stripped),
            |collapsed: String| limit_length(&collapsed, max_length)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_simple_tags() {
        assert_eq!(strip_html_tags("<script>alert</script>Bob"), "alertBob");
        assert_eq!(strip_html_tags("<p class=\"x\">Hi</p>"), "Hi");
    }

    #[test]
    fn keeps_unclosed_and_empty_brackets() {
        assert_eq!(strip_html_tags("a < b"), "a < b");
        assert_eq!(strip_html_tags("<>x"), "<>x");
    }

    #[test]
    fn nested_open_brackets_are_consumed_by_leftmost_match() {
        assert_eq!(strip_html_tags("<<b>x"), "x");
    }

    #[test]
    fn handles_multibyte_text() {
        assert_eq!(strip_html_tags("<i>José</i>"), "José");
    }

    #[test]
    fn tags_may_span_lines() {
        assert_eq!(strip_html_tags("<a\nhref=\"x\">Zoe</a>"), "Zoe");
    }

    #[test]
    fn tag_pattern_compiles() {
        assert!(HTML_TAG.is_ok());
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(collapse_whitespace("  a \t b\n\nc  "), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn limits_by_characters() {
        assert_eq!(limit_length("héllo", 2), "hé");
        assert_eq!(limit_length("hi", 10), "hi");
    }

    #[test]
    fn default_sanitizer_chains_steps() {
        let clean = default_sanitizer(50);
        assert_eq!(clean("  <em>mary</em>   jane "), "mary jane");
    }
}
