//! Escape resolution for the `~` marker.
//!
//! A `~` adjacent to a tag delimiter suppresses that tag; a doubled `~`
//! escapes the marker itself. Exactly one marker is consumed per escape, so
//! runs of markers degrade one level at a time.

use std::borrow::Cow;

/// The literal-escape marker character.
pub const ESCAPE_MARKER: char = '~';

/// Resolve the escape marker between a literal chunk and the tag behind it.
///
/// Returns the corrected literal and the tag that should still be
/// interpreted, if any. Rules, in precedence order:
///
/// 1. Literal starts or ends with `~~`: the marker is escaped. Drop the
///    first `~` occurrence; the tag is still interpreted.
/// 2. Literal is exactly `~`: the upcoming tag is literal text. The raw
///    token (empty if there is none) replaces the literal.
/// 3. Literal ends with a single `~` and a tag follows: strip the marker and
///    fold the raw token into the literal.
/// 4. Otherwise both pass through unchanged.
pub fn resolve_escape<'a>(
    literal: &'a str,
    tag: Option<&'a str>,
) -> (Cow<'a, str>, Option<&'a str>) {
    // Checked first so "~~~<b>" yields "~~" with the tag still live, in line
    // with "~<b>" yielding "<b>".
    if literal.starts_with("~~") || literal.ends_with("~~") {
        return (Cow::Owned(literal.replacen(ESCAPE_MARKER, "", 1)), tag);
    }

    if literal == "~" {
        return (Cow::Borrowed(tag.unwrap_or("")), None);
    }

    if literal.ends_with(ESCAPE_MARKER) {
        if let Some(tag) = tag {
            let mut folded = literal[..literal.len() - 1].to_string();
            folded.push_str(tag);
            return (Cow::Owned(folded), None);
        }
    }

    (Cow::Borrowed(literal), tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<'a>(literal: &'a str, tag: Option<&'a str>) -> (String, Option<&'a str>) {
        let (literal, tag) = resolve_escape(literal, tag);
        (literal.into_owned(), tag)
    }

    #[test]
    fn passthrough_without_marker() {
        assert_eq!(run("text", Some("<b>")), ("text".into(), Some("<b>")));
        assert_eq!(run("", Some("<b>")), ("".into(), Some("<b>")));
        assert_eq!(run("text", None), ("text".into(), None));
    }

    #[test]
    fn opening_escape_consumes_the_tag() {
        assert_eq!(run("~", Some("<b>")), ("<b>".into(), None));
    }

    #[test]
    fn closing_escape_folds_the_tag() {
        assert_eq!(run("Text~", Some("</b>")), ("Text</b>".into(), None));
    }

    #[test]
    fn double_marker_keeps_the_tag_live() {
        assert_eq!(run("~~", Some("<b>")), ("~".into(), Some("<b>")));
        assert_eq!(run("Bold~~", Some("</b>")), ("Bold~".into(), Some("</b>")));
    }

    #[test]
    fn marker_runs_degrade_one_level() {
        assert_eq!(run("~~~", Some("<b>")), ("~~".into(), Some("<b>")));
        assert_eq!(
            run("Fine ~~~", Some("<b>")),
            ("Fine ~~".into(), Some("<b>"))
        );
    }

    #[test]
    fn double_marker_drops_the_first_occurrence() {
        // The leading run is shortened even when the match is at the end.
        assert_eq!(run("~a~~", Some("<b>")), ("a~~".into(), Some("<b>")));
    }

    #[test]
    fn lone_trailing_marker_is_consumed() {
        assert_eq!(run("~", None), ("".into(), None));
    }

    #[test]
    fn trailing_marker_without_tag_passes_through() {
        assert_eq!(run("text~", None), ("text~".into(), None));
    }
}
