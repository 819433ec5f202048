//! Styling capabilities and segment composition.
//!
//! [`resolve`] maps a resolved [`Tag`] to the ANSI escape pair that
//! implements it, from a closed table of names; [`compose_styles`] applies a
//! whole stack of open tags to one literal chunk.

use crate::color::Rgb;
use crate::tag::Tag;

const CSI: &str = "\u{1b}[";

const CLOSE_FG: &str = "\u{1b}[39m";
const CLOSE_BG: &str = "\u{1b}[49m";

/// A resolved styling capability: the escape pair that wraps a chunk.
///
/// # Examples
///
/// ```
/// use inktag::{style, Tag};
///
/// let paint = style::resolve(&Tag::resolve("bold")).unwrap();
/// assert_eq!(paint.wrap("x"), "\u{1b}[1mx\u{1b}[22m");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paint {
    open: String,
    close: &'static str,
}

impl Paint {
    fn sgr(open: u8, close: &'static str) -> Self {
        Self {
            open: format!("{CSI}{open}m"),
            close,
        }
    }

    fn fg_rgb(color: Rgb) -> Self {
        Self {
            open: format!("{CSI}38;2;{};{};{}m", color.r, color.g, color.b),
            close: CLOSE_FG,
        }
    }

    fn bg_rgb(color: Rgb) -> Self {
        Self {
            open: format!("{CSI}48;2;{};{};{}m", color.r, color.g, color.b),
            close: CLOSE_BG,
        }
    }

    /// Wrap `text` in this capability's open/close sequences.
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.open, text, self.close)
    }
}

/// Look up the styling capability for a resolved tag.
///
/// The supported set is closed: the eight base colors in every
/// background/bright combination, `gray`/`grey` (which have no bright form),
/// the text modifiers (unqualified only), and `#RGB`/`#RRGGBB` hex literals.
/// Anything else returns `None` and leaves text untouched.
pub fn resolve(tag: &Tag<'_>) -> Option<Paint> {
    if tag.is_hex() {
        let color = Rgb::parse(&tag.core).ok()?;
        return Some(if tag.background {
            Paint::bg_rgb(color)
        } else {
            Paint::fg_rgb(color)
        });
    }

    if let Some(base) = base_color(&tag.core) {
        let code = base + if tag.bright { 60 } else { 0 } + if tag.background { 10 } else { 0 };
        let close = if tag.background { CLOSE_BG } else { CLOSE_FG };
        return Some(Paint::sgr(code, close));
    }

    // gray is already the bright variant of black; there is no brighter form.
    if matches!(tag.core.as_str(), "gray" | "grey") && !tag.bright {
        return Some(if tag.background {
            Paint::sgr(100, CLOSE_BG)
        } else {
            Paint::sgr(90, CLOSE_FG)
        });
    }

    if tag.background || tag.bright {
        return None;
    }

    let (open, close) = match tag.core.as_str() {
        "bold" => (1, "\u{1b}[22m"),
        "dim" => (2, "\u{1b}[22m"),
        "italic" => (3, "\u{1b}[23m"),
        "underline" => (4, "\u{1b}[24m"),
        "inverse" => (7, "\u{1b}[27m"),
        "hidden" => (8, "\u{1b}[28m"),
        "strikethrough" => (9, "\u{1b}[29m"),
        "overline" => (53, "\u{1b}[55m"),
        _ => return None,
    };
    Some(Paint::sgr(open, close))
}

fn base_color(name: &str) -> Option<u8> {
    let offset = match name {
        "black" => 0,
        "red" => 1,
        "green" => 2,
        "yellow" => 3,
        "blue" => 4,
        "magenta" => 5,
        "cyan" => 6,
        "white" => 7,
        _ => return None,
    };
    Some(30 + offset)
}

/// Apply every open tag, oldest first, to a literal chunk.
///
/// Each resolved capability wraps the previous result, so the most recently
/// opened tag contributes the outermost escape pair. Unrecognized tags are
/// skipped; an empty chunk stays empty regardless of the stack.
///
/// # Examples
///
/// ```
/// use inktag::compose_styles;
///
/// let styled = compose_styles("hi", &["red", "bold"]);
/// assert_eq!(styled, "\u{1b}[1m\u{1b}[31mhi\u{1b}[39m\u{1b}[22m");
/// ```
pub fn compose_styles<S: AsRef<str>>(text: &str, tags: &[S]) -> String {
    if text.is_empty() {
        return String::new();
    }

    tags.iter().fold(text.to_string(), |styled, raw| {
        match resolve(&Tag::resolve(raw.as_ref())) {
            Some(paint) => paint.wrap(&styled),
            None => styled,
        }
    })
}
