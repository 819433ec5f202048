//! Inline bracket-tag markup for ANSI terminal styling.
//!
//! This crate parses a compact tag syntax embedded in plain text, turning
//! input like `<red bg:bright:blue bold>Test</bg>` into a string with the
//! matching ANSI escape sequences, so command-line tools can author styled
//! output as text instead of calling a styling API call by call.
//!
//! # Syntax
//!
//! - `<name [name2 ...]>` opens one or more tags; `</name [name2 ...]>`
//!   closes every open tag whose text starts with a given name; `</>`
//!   closes all.
//! - Qualifiers `fg:`, `bg:`, `bright:`, `dark:` combine freely inside a
//!   name: `bg:bright:red`.
//! - `b` and `i` are shorthand for `bold` and `italic`.
//! - `#RRGGBB` (or `#RGB`) is a hex color, standalone or with `bg:`.
//! - `~` next to a delimiter escapes it; `~~` escapes the marker itself.
//!
//! # Usage
//!
//! ```
//! use inktag::{TagParser, parse_tags};
//!
//! // One-shot parsing
//! let styled = parse_tags("<b>Bold</b> Normal");
//! assert_eq!(styled, "\u{1b}[1mBold\u{1b}[22m Normal");
//!
//! // Escaped delimiters stay literal
//! assert_eq!(parse_tags("~<bold>Hi~</bold>"), "<bold>Hi</bold>");
//!
//! // A parser context can be switched off and back on
//! let mut parser = TagParser::new();
//! parser.stop();
//! assert_eq!(parser.parse("<red>raw</red>"), "<red>raw</red>");
//! ```
//!
//! Unrecognized tag names, closes without a matching open, and malformed
//! words all degrade silently: the text passes through rather than erroring,
//! which is the behavior you want when markup ends up in logs.

pub mod color;
pub mod error;
pub mod parser;
pub mod style;
pub mod tag;

// Re-export main types at crate root
pub use color::Rgb;
pub use error::ColorParseError;
pub use parser::{TagParser, parse_tags};
pub use style::{Paint, compose_styles};
pub use tag::Tag;
