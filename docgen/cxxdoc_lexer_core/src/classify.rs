//! Token classification: mapping the state a token ended in to its
//! [`TokenKind`].
//!
//! Most states determine the kind outright; those resolve through
//! [`Resolution::Fixed`]. A few states are genuinely ambiguous until the
//! accumulated text is inspected (is the comment a doc comment? which
//! compound assignment is this?); those carry a resolver function instead.
//! The split keeps per-token work at a single array index for the common
//! case and one short text inspection otherwise.

use crate::table::State;
use crate::token::TokenKind;

/// How a token yielded out of a given state gets its kind.
#[derive(Clone, Copy)]
pub(crate) enum Resolution {
    /// The state alone determines the kind.
    Fixed(TokenKind),
    /// The kind depends on the accumulated text.
    Ambiguous(fn(&str) -> TokenKind),
}

/// Per-state resolution, indexed by [`State::index`].
///
/// States that never yield a well-formed token (pending backslash, open
/// literal or comment bodies, `..`) resolve to [`TokenKind::Error`]: the
/// driver only consults them when input ends mid-token.
static RESOLUTIONS: [Resolution; State::COUNT] = {
    use Resolution::{Ambiguous, Fixed};
    use TokenKind as K;
    [
        Fixed(K::Error),            // Bol (nothing pending)
        Fixed(K::Whitespace),       // Whitespace
        Fixed(K::Ident),            // Ident
        Fixed(K::Number),           // Number
        Fixed(K::Number),           // NumberExp ("1e" lexes as a number)
        Fixed(K::Number),           // NumberSuffix
        Fixed(K::Error),            // CharLit (unterminated)
        Fixed(K::CharLit),          // CharLitEnd
        Fixed(K::Error),            // StrLit (unterminated)
        Fixed(K::StringLit),        // StrLitEnd
        Ambiguous(comment_kind),    // LineComment
        Fixed(K::Error),            // BlockComment (unterminated)
        Fixed(K::Error),            // BlockCommentStar (unterminated)
        Ambiguous(comment_kind),    // BlockCommentEnd
        Ambiguous(preproc_kind),    // Preproc
        Fixed(K::Error),            // Backslash
        Fixed(K::Error),            // BackslashAcc
        Ambiguous(punct_kind),      // Punct
        Fixed(K::Ampersand),        // Ampersand
        Fixed(K::Star),             // Star
        Fixed(K::Caret),            // Caret
        Fixed(K::Colon),            // Colon
        Fixed(K::ColonColon),       // ColonColon
        Fixed(K::Dot),              // Dot
        Fixed(K::Error),            // Dot2 (".." is not a token)
        Fixed(K::Ellipsis),         // Dot3
        Fixed(K::Equal),            // Equal
        Fixed(K::Bang),             // Bang
        Fixed(K::Slash),            // Slash
        Fixed(K::Greater),          // Greater
        Fixed(K::Shr),              // Shr
        Fixed(K::Less),             // Less
        Fixed(K::Shl),              // Shl
        Fixed(K::Minus),            // Minus
        Fixed(K::Decrement),        // MinusMinus
        Fixed(K::Arrow),            // Arrow
        Fixed(K::Plus),             // Plus
        Fixed(K::Increment),        // PlusPlus
        Fixed(K::Percent),          // Percent
        Fixed(K::Pipe),             // Pipe
        Fixed(K::Tilde),            // Tilde
        Ambiguous(op_assign_kind),  // OpAssign
    ]
};

/// Resolve the kind of a token that ended in `state` with text `text`.
pub(crate) fn resolve(state: State, text: &str) -> TokenKind {
    match RESOLUTIONS[state.index()] {
        Resolution::Fixed(kind) => kind,
        Resolution::Ambiguous(f) => f(text),
    }
}

/// `//!` and `/*!` open documentation comments; everything else is an
/// ordinary comment. The marker always sits at byte 2, right after the
/// two-character opener.
fn comment_kind(text: &str) -> TokenKind {
    if text.as_bytes().get(2) == Some(&b'!') {
        TokenKind::DocComment
    } else {
        TokenKind::Comment
    }
}

/// Single-character delimiters, one kind per spelling.
fn punct_kind(text: &str) -> TokenKind {
    match text.as_bytes().first() {
        Some(b'(') => TokenKind::ParenL,
        Some(b')') => TokenKind::ParenR,
        Some(b'[') => TokenKind::BracketL,
        Some(b']') => TokenKind::BracketR,
        Some(b'{') => TokenKind::BraceL,
        Some(b'}') => TokenKind::BraceR,
        Some(b',') => TokenKind::Comma,
        Some(b';') => TokenKind::Semicolon,
        Some(b'?') => TokenKind::Question,
        _ => TokenKind::Error,
    }
}

/// Compound assignments share one terminal state; the leading character
/// (plus the second for `<`/`>`) picks the kind.
fn op_assign_kind(text: &str) -> TokenKind {
    let bytes = text.as_bytes();
    match bytes.first() {
        Some(b'!') => TokenKind::BangEqual,
        Some(b'%') => TokenKind::PercentEqual,
        Some(b'&') => TokenKind::AmpEqual,
        Some(b'*') => TokenKind::StarEqual,
        Some(b'+') => TokenKind::PlusEqual,
        Some(b'-') => TokenKind::MinusEqual,
        Some(b'/') => TokenKind::SlashEqual,
        Some(b'=') => TokenKind::EqualEqual,
        Some(b'^') => TokenKind::CaretEqual,
        Some(b'|') => TokenKind::PipeEqual,
        Some(b'<') => {
            if bytes.get(1) == Some(&b'<') {
                TokenKind::ShlEqual
            } else {
                TokenKind::LessEqual
            }
        }
        Some(b'>') => {
            if bytes.get(1) == Some(&b'>') {
                TokenKind::ShrEqual
            } else {
                TokenKind::GreaterEqual
            }
        }
        _ => TokenKind::Error,
    }
}

/// Sort a preprocessor line into the directive families the documentation
/// pass cares about. The directive name is the first identifier-shaped word
/// after the `#`, which may be separated from it by whitespace.
fn preproc_kind(text: &str) -> TokenKind {
    let after_hash = text.strip_prefix('#').unwrap_or(text);
    let rest = after_hash.trim_start();
    let end = rest
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(rest.len());
    match &rest[..end] {
        "include" => TokenKind::CppInclude,
        "define" => TokenKind::CppDefine,
        "if" | "ifdef" | "ifndef" | "elif" | "else" | "endif" => TokenKind::CppFlow,
        _ => TokenKind::CppOther,
    }
}

#[cfg(test)]
mod tests;
