//! The tag parser: scanning, escape resolution, stack tracking, styling.
//!
//! [`TagParser`] drives the loop; the pieces are independently usable via
//! [`Lexer`], [`resolve_escape`], [`TagStack`], and
//! [`compose_styles`](crate::compose_styles).

mod escape;
mod lexer;
mod stack;

pub use escape::{ESCAPE_MARKER, resolve_escape};
pub use lexer::{Chunk, Lexer};
pub use stack::TagStack;

use crate::style::compose_styles;

/// Parsing context.
///
/// Holds the enabled flag: a disabled parser returns its input verbatim.
/// Parsing takes `&self` and the toggles take `&mut self`, so sharing a
/// parser across threads while toggling it requires the usual
/// synchronization.
///
/// # Examples
///
/// ```
/// use inktag::TagParser;
///
/// let mut parser = TagParser::new();
/// assert_eq!(parser.parse("<b>Hi</b>"), "\u{1b}[1mHi\u{1b}[22m");
///
/// parser.stop();
/// assert_eq!(parser.parse("<b>Hi</b>"), "<b>Hi</b>");
/// ```
#[derive(Clone, Debug)]
pub struct TagParser {
    enabled: bool,
}

impl Default for TagParser {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl TagParser {
    /// Create a parser with tag parsing enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether tag parsing is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable tag parsing.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Disable tag parsing: `parse` returns its input verbatim, markup and
    /// all, until [`resume`](Self::resume).
    pub fn stop(&mut self) {
        self.enabled = false;
    }

    /// Re-enable tag parsing.
    pub fn resume(&mut self) {
        self.enabled = true;
    }

    /// Parse tag markup in `text` into an ANSI-styled string.
    ///
    /// Input without a `<`, or any input while the parser is disabled, is
    /// returned unchanged without scanning. Otherwise each literal chunk is
    /// styled with the tags open at that point, and each surviving tag token
    /// mutates the stack for the chunks after it.
    pub fn parse(&self, text: &str) -> String {
        if !self.enabled || !text.contains('<') {
            return text.to_string();
        }

        let mut output = String::with_capacity(text.len());
        let mut stack = TagStack::new();

        for chunk in Lexer::new(text) {
            let (literal, tag) = resolve_escape(chunk.literal, chunk.tag);
            if !literal.is_empty() {
                output.push_str(&compose_styles(&literal, stack.tags()));
            }
            if let Some(token) = tag {
                stack.apply(token);
            }
        }

        output
    }
}

/// Parse tag markup with a default (enabled) context.
///
/// # Examples
///
/// ```
/// use inktag::parse_tags;
///
/// assert_eq!(parse_tags("<b>Bold</b> Normal"), "\u{1b}[1mBold\u{1b}[22m Normal");
/// assert_eq!(parse_tags("~<b>Bold~</b> Normal"), "<b>Bold</b> Normal");
/// ```
pub fn parse_tags(text: &str) -> String {
    TagParser::new().parse(text)
}
