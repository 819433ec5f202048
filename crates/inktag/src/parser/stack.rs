//! The ordered set of currently-open tags.

/// Ordered collection of open tag words; insertion order is open order.
///
/// Words are stored exactly as written (delimiters stripped), so a close
/// target matches by string prefix against what the author typed: `</bg>`
/// removes `bg:bright:blue`, and `</b>` removes both `bold` and its `b`
/// shorthand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagStack {
    open: Vec<String>,
}

impl TagStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// The open tag words, oldest first.
    pub fn tags(&self) -> &[String] {
        &self.open
    }

    /// Number of open tags.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Whether no tags are open.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Apply one bracketed token (delimiters included) to the stack.
    ///
    /// Words are processed left to right. A group switches permanently to
    /// closing mode at its first `</`-marked word: every later word in the
    /// same group is a close target too. Open words are pushed without
    /// deduplication or validation; closing a tag that was never opened is
    /// a no-op.
    pub fn apply(&mut self, token: &str) {
        let mut closing = false;
        for word in token.split_whitespace() {
            if closing || word.starts_with("</") {
                closing = true;
                self.close(&strip_close(word));
            } else {
                self.open.push(strip_open(word));
            }
        }
    }

    /// Remove every entry whose stored text starts with `name`. An empty
    /// name (`</>`) closes everything.
    fn close(&mut self, name: &str) {
        if name.is_empty() {
            self.open.clear();
        } else {
            self.open.retain(|tag| !tag.starts_with(name));
        }
    }
}

/// Strip one leading `</` (if present) and one `>` from a close word.
fn strip_close(word: &str) -> String {
    word.replacen("</", "", 1).replacen('>', "", 1)
}

/// Strip one `<` and one `>` from an open word.
fn strip_open(word: &str) -> String {
    word.replacen('<', "", 1).replacen('>', "", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_with(tokens: &[&str]) -> TagStack {
        let mut stack = TagStack::new();
        for token in tokens {
            stack.apply(token);
        }
        stack
    }

    #[test]
    fn open_single_tag() {
        let stack = stack_with(&["<red>"]);
        assert_eq!(stack.tags(), ["red"]);
    }

    #[test]
    fn open_group_preserves_order() {
        let stack = stack_with(&["<red bg:bright:blue bold>"]);
        assert_eq!(stack.tags(), ["red", "bg:bright:blue", "bold"]);
    }

    #[test]
    fn opens_are_not_deduplicated() {
        let stack = stack_with(&["<red>", "<red>"]);
        assert_eq!(stack.tags(), ["red", "red"]);
    }

    #[test]
    fn close_removes_by_prefix() {
        let mut stack = stack_with(&["<red bg:bright:blue bold>"]);
        stack.apply("</bg>");
        assert_eq!(stack.tags(), ["red", "bold"]);
    }

    #[test]
    fn close_prefix_can_match_several_entries() {
        let mut stack = stack_with(&["<bg:bright:blue bold>"]);
        stack.apply("</b>");
        assert!(stack.is_empty());
    }

    #[test]
    fn close_does_not_match_mid_word() {
        // "fg:red" does not start with "red"; only "</fg>" removes it.
        let mut stack = stack_with(&["<fg:red>"]);
        stack.apply("</red>");
        assert_eq!(stack.tags(), ["fg:red"]);
        stack.apply("</fg>");
        assert!(stack.is_empty());
    }

    #[test]
    fn close_all() {
        let mut stack = stack_with(&["<red>", "<bold italic>"]);
        stack.apply("</>");
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn close_never_opened_is_noop() {
        let mut stack = stack_with(&["<red>"]);
        stack.apply("</blue>");
        assert_eq!(stack.tags(), ["red"]);
    }

    #[test]
    fn group_switches_permanently_to_closing_mode() {
        let mut stack = stack_with(&["<fg:red italic bg:#0000FF>"]);
        stack.apply("</bg italic>");
        assert_eq!(stack.tags(), ["fg:red"]);
    }

    #[test]
    fn bare_words_after_close_marker_are_close_targets() {
        let mut stack = stack_with(&["<red bold italic>"]);
        stack.apply("</red bold italic>");
        assert!(stack.is_empty());
    }
}
