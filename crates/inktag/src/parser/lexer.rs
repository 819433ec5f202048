//! Scanner splitting input into literal/tag chunks.

/// One scan step: a literal run followed by at most one bracketed token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Literal text before the token (possibly empty).
    pub literal: &'a str,
    /// The bracketed token, delimiters included. `None` on the final chunk.
    pub tag: Option<&'a str>,
}

/// Splits input into [`Chunk`]s such that concatenating every literal and
/// tag reconstructs the input exactly.
///
/// A token runs from a `<` to the first `>` after it, whatever lies between;
/// a `<` that is never followed by `>` is plain literal text.
///
/// # Examples
///
/// ```
/// use inktag::parser::{Chunk, Lexer};
///
/// let chunks: Vec<_> = Lexer::new("Hi <b>there</b>").collect();
/// assert_eq!(chunks[0], Chunk { literal: "Hi ", tag: Some("<b>") });
/// assert_eq!(chunks[1], Chunk { literal: "there", tag: Some("</b>") });
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        let rest = &self.input[self.pos..];
        if let Some(open) = rest.find('<') {
            if let Some(close) = rest[open..].find('>') {
                let tag_end = open + close + 1;
                self.pos += tag_end;
                return Some(Chunk {
                    literal: &rest[..open],
                    tag: Some(&rest[open..tag_end]),
                });
            }
        }

        self.pos = self.input.len();
        Some(Chunk {
            literal: rest,
            tag: None,
        })
    }
}
