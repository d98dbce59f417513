//! Lexical rewriting of `.withOpacity(x)` calls into `.withAlpha(n)`.
//!
//! Matching is purely textual: the pattern below is the only definition of
//! what gets rewritten. It does not know about comments, strings, or the
//! surrounding expression, and it must not be made smarter, because callers
//! rely on exactly these occurrences being converted.
//!
//! # Example
//!
//! ```
//! use opacity_migrate::rewrite::rewrite_source;
//!
//! let rewrite = rewrite_source("Color.red.withOpacity(0.9)");
//! assert_eq!(rewrite.content(), "Color.red.withAlpha(230)");
//! assert_eq!(rewrite.count(), 1);
//! ```

use crate::convert::opacity_to_alpha;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::ops::Range;

/// `.withOpacity(` literal `)` with optional whitespace inside the parens.
/// The literal is digits with at most one decimal point and at least one
/// digit after it, or an integer.
pub const WITH_OPACITY_PATTERN: &str = r"\.withOpacity\(\s*([0-9]*\.?[0-9]+)\s*\)";

static WITH_OPACITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(WITH_OPACITY_PATTERN).expect("withOpacity pattern is a valid regex")
});

/// One rewritten occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Byte range of the whole call in the original text.
    pub span: Range<usize>,
    /// 1-based line of the match start.
    pub line: usize,
    /// Numeric literal as written.
    pub literal: String,
    /// Converted alpha value.
    pub alpha: u8,
}

impl Replacement {
    /// Text that replaces the matched call.
    pub fn replacement_text(&self) -> String {
        format_with_alpha(self.alpha)
    }
}

/// Result of rewriting one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite<'a> {
    content: Cow<'a, str>,
    replacements: Vec<Replacement>,
}

impl<'a> Rewrite<'a> {
    /// Rewritten text. Borrows the input when nothing was replaced.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> Cow<'a, str> {
        self.content
    }

    pub fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    /// Number of successful replacements.
    pub fn count(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_changed(&self) -> bool {
        !self.replacements.is_empty()
    }
}

/// Render the replacement call for an alpha value.
pub fn format_with_alpha(alpha: u8) -> String {
    format!(".withAlpha({alpha})")
}

/// Replace every `.withOpacity(x)` call in `source`.
///
/// Matches are found left to right in the original text and never overlap.
/// An occurrence whose literal fails to parse is copied through unchanged and
/// not counted. When nothing is replaced the returned content is the input,
/// byte for byte.
pub fn rewrite_source(source: &str) -> Rewrite<'_> {
    let mut replacements = Vec::new();
    let mut output: Option<String> = None;
    let mut copied_up_to = 0;
    let mut line = 1;
    let mut line_scanned_up_to = 0;

    for captures in WITH_OPACITY.captures_iter(source) {
        let (Some(whole), Some(literal)) = (captures.get(0), captures.get(1)) else {
            continue;
        };

        let opacity = match literal.as_str().parse::<f64>() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(literal = literal.as_str(), error = %e, "Leaving unparsable opacity literal unchanged");
                continue;
            }
        };

        line += count_newlines(&source[line_scanned_up_to..whole.start()]);
        line_scanned_up_to = whole.start();

        let replacement = Replacement {
            span: whole.range(),
            line,
            literal: literal.as_str().to_string(),
            alpha: opacity_to_alpha(opacity),
        };

        let buffer = output.get_or_insert_with(|| String::with_capacity(source.len()));
        buffer.push_str(&source[copied_up_to..whole.start()]);
        buffer.push_str(&replacement.replacement_text());
        copied_up_to = whole.end();

        replacements.push(replacement);
    }

    let content = match output {
        Some(mut buffer) => {
            buffer.push_str(&source[copied_up_to..]);
            Cow::Owned(buffer)
        }
        None => Cow::Borrowed(source),
    };

    Rewrite {
        content,
        replacements,
    }
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
