//! Resolution of a single tag word into qualifiers and a core name.

/// A resolved style directive: one whitespace-separated word from inside a
/// bracket group, as stored on the tag stack.
///
/// Qualifiers (`fg:`, `bg:`, `bright:`, `dark:`) are detected as substrings
/// anywhere in the word, not only as prefixes, and all occurrences are
/// stripped from the core name. Whether a word opens or closes a tag is
/// decided by its bracket group, not here.
///
/// # Examples
///
/// ```
/// use inktag::Tag;
///
/// let tag = Tag::resolve("bg:bright:red");
/// assert!(tag.background);
/// assert!(tag.bright);
/// assert_eq!(tag.core, "red");
///
/// // Shorthand names expand.
/// assert_eq!(Tag::resolve("b").core, "bold");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag<'a> {
    /// The word exactly as written.
    pub raw: &'a str,
    /// `bg:` qualifier present.
    pub background: bool,
    /// `bright:` qualifier present.
    pub bright: bool,
    /// `dark:` qualifier present. Advisory only; it selects no variant.
    pub dark: bool,
    /// Explicit `fg:` qualifier present.
    pub foreground: bool,
    /// Name with qualifiers stripped and `b`/`i` shorthand expanded.
    pub core: String,
}

impl<'a> Tag<'a> {
    /// Resolve a raw tag word.
    pub fn resolve(raw: &'a str) -> Self {
        let background = raw.contains("bg:");
        let bright = raw.contains("bright:");
        let dark = raw.contains("dark:");
        let foreground = raw.contains("fg:");

        let mut core = raw
            .replace("fg:", "")
            .replace("bg:", "")
            .replace("bright:", "")
            .replace("dark:", "");

        // Hex literals keep their name verbatim; everything else may be a
        // one-letter shorthand.
        if !core.starts_with('#') {
            core = match core.as_str() {
                "b" => "bold".to_string(),
                "i" => "italic".to_string(),
                _ => core,
            };
        }

        Self {
            raw,
            background,
            bright,
            dark,
            foreground,
            core,
        }
    }

    /// Whether the core name is a `#...` hex color literal.
    pub fn is_hex(&self) -> bool {
        self.core.starts_with('#')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_bare_name() {
        let tag = Tag::resolve("red");
        assert_eq!(tag.raw, "red");
        assert_eq!(tag.core, "red");
        assert!(!tag.background);
        assert!(!tag.bright);
        assert!(!tag.dark);
        assert!(!tag.foreground);
    }

    #[test]
    fn resolve_stacked_qualifiers() {
        let tag = Tag::resolve("bg:bright:blue");
        assert!(tag.background);
        assert!(tag.bright);
        assert_eq!(tag.core, "blue");
    }

    #[test]
    fn resolve_foreground_and_dark() {
        let tag = Tag::resolve("fg:dark:green");
        assert!(tag.foreground);
        assert!(tag.dark);
        assert!(!tag.background);
        assert_eq!(tag.core, "green");
    }

    #[test]
    fn qualifiers_match_anywhere_in_the_word() {
        // Substring detection, not prefix detection.
        let tag = Tag::resolve("odd:bg:name");
        assert!(tag.background);
        assert_eq!(tag.core, "odd:name");
    }

    #[test]
    fn shorthand_expansion() {
        assert_eq!(Tag::resolve("b").core, "bold");
        assert_eq!(Tag::resolve("i").core, "italic");
        // Only after qualifier stripping.
        assert_eq!(Tag::resolve("bright:b").core, "bold");
    }

    #[test]
    fn hex_keeps_its_name() {
        let tag = Tag::resolve("#123456");
        assert!(tag.is_hex());
        assert_eq!(tag.core, "#123456");

        let bg = Tag::resolve("bg:#0000FF");
        assert!(bg.background);
        assert!(bg.is_hex());
        assert_eq!(bg.core, "#0000FF");
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(Tag::resolve("sparkle").core, "sparkle");
        assert_eq!(Tag::resolve("").core, "");
    }
}
