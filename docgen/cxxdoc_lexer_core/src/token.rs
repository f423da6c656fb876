//! Token kinds and the owned token value handed to consumers.
//!
//! [`TokenKind`] is a one-byte tag with discriminants grouped into semantic
//! ranges (literals, comments, preprocessor, delimiters, operators, trivia,
//! terminals) so a kind's family is recoverable from its raw value.
//!
//! [`Token`] owns its text: backslash line-continuation splices characters
//! across physical lines, so token text is not in general a slice of the
//! source buffer.

/// Final classification of an emitted token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Identifiers & Literals: 0-7 ===
    /// Identifier (letters, digits, underscores, non-ASCII).
    Ident = 0,
    /// Numeric literal, including exponent and suffix forms.
    Number = 1,
    /// Double-quoted string literal, quotes included.
    StringLit = 2,
    /// Single-quoted character literal, quotes included.
    CharLit = 3,

    // === Comments: 8-9 ===
    /// Ordinary comment, `// ...` or `/* ... */`.
    Comment = 8,
    /// Documentation comment, `//! ...` or `/*! ... */`.
    DocComment = 9,

    // === Preprocessor lines: 16-19 ===
    /// `#include` directive.
    CppInclude = 16,
    /// `#define` directive.
    CppDefine = 17,
    /// Conditional-compilation directive: `#if`, `#ifdef`, `#ifndef`,
    /// `#elif`, `#else`, `#endif`.
    CppFlow = 18,
    /// Any other directive (`#pragma`, `#undef`, `#error`, ...).
    CppOther = 19,

    // === Delimiters: 32-40 ===
    /// `(`
    ParenL = 32,
    /// `)`
    ParenR = 33,
    /// `[`
    BracketL = 34,
    /// `]`
    BracketR = 35,
    /// `{`
    BraceL = 36,
    /// `}`
    BraceR = 37,
    /// `,`
    Comma = 38,
    /// `;`
    Semicolon = 39,
    /// `?`
    Question = 40,

    // === Single-character operators: 48-62 ===
    /// `&`
    Ampersand = 48,
    /// `*`
    Star = 49,
    /// `^`
    Caret = 50,
    /// `:`
    Colon = 51,
    /// `.`
    Dot = 52,
    /// `=`
    Equal = 53,
    /// `!`
    Bang = 54,
    /// `/`
    Slash = 55,
    /// `>`
    Greater = 56,
    /// `<`
    Less = 57,
    /// `-`
    Minus = 58,
    /// `%`
    Percent = 59,
    /// `|`
    Pipe = 60,
    /// `+`
    Plus = 61,
    /// `~`
    Tilde = 62,

    // === Multi-character operators: 72-78 ===
    /// `->`
    Arrow = 72,
    /// `::`
    ColonColon = 73,
    /// `--`
    Decrement = 74,
    /// `++`
    Increment = 75,
    /// `...`
    Ellipsis = 76,
    /// `<<`
    Shl = 77,
    /// `>>`
    Shr = 78,

    // === Compound assignment: 88-101 ===
    /// `&=`
    AmpEqual = 88,
    /// `!=`
    BangEqual = 89,
    /// `^=`
    CaretEqual = 90,
    /// `==`
    EqualEqual = 91,
    /// `>=`
    GreaterEqual = 92,
    /// `<=`
    LessEqual = 93,
    /// `-=`
    MinusEqual = 94,
    /// `%=`
    PercentEqual = 95,
    /// `|=`
    PipeEqual = 96,
    /// `+=`
    PlusEqual = 97,
    /// `<<=`
    ShlEqual = 98,
    /// `>>=`
    ShrEqual = 99,
    /// `/=`
    SlashEqual = 100,
    /// `*=`
    StarEqual = 101,

    // === Trivia: 112 ===
    /// Run of horizontal whitespace. Line breaks belong to no token.
    Whitespace = 112,

    // === Terminals: 240, 255 ===
    /// Terminal error marker: tokenization halted, no text recovered.
    Error = 240,
    /// Terminal end-of-input marker.
    End = 255,
}

/// Size assertion: the kind tag must stay a single byte.
const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);

impl TokenKind {
    /// Fixed source text for kinds whose spelling is always the same.
    ///
    /// Returns `None` for variable-text kinds (identifiers, literals,
    /// comments, preprocessor lines, whitespace) and for the terminals.
    #[must_use]
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::ParenL => Some("("),
            Self::ParenR => Some(")"),
            Self::BracketL => Some("["),
            Self::BracketR => Some("]"),
            Self::BraceL => Some("{"),
            Self::BraceR => Some("}"),
            Self::Comma => Some(","),
            Self::Semicolon => Some(";"),
            Self::Question => Some("?"),
            Self::Ampersand => Some("&"),
            Self::Star => Some("*"),
            Self::Caret => Some("^"),
            Self::Colon => Some(":"),
            Self::Dot => Some("."),
            Self::Equal => Some("="),
            Self::Bang => Some("!"),
            Self::Slash => Some("/"),
            Self::Greater => Some(">"),
            Self::Less => Some("<"),
            Self::Minus => Some("-"),
            Self::Percent => Some("%"),
            Self::Pipe => Some("|"),
            Self::Plus => Some("+"),
            Self::Tilde => Some("~"),
            Self::Arrow => Some("->"),
            Self::ColonColon => Some("::"),
            Self::Decrement => Some("--"),
            Self::Increment => Some("++"),
            Self::Ellipsis => Some("..."),
            Self::Shl => Some("<<"),
            Self::Shr => Some(">>"),
            Self::AmpEqual => Some("&="),
            Self::BangEqual => Some("!="),
            Self::CaretEqual => Some("^="),
            Self::EqualEqual => Some("=="),
            Self::GreaterEqual => Some(">="),
            Self::LessEqual => Some("<="),
            Self::MinusEqual => Some("-="),
            Self::PercentEqual => Some("%="),
            Self::PipeEqual => Some("|="),
            Self::PlusEqual => Some("+="),
            Self::ShlEqual => Some("<<="),
            Self::ShrEqual => Some(">>="),
            Self::SlashEqual => Some("/="),
            Self::StarEqual => Some("*="),
            _ => None,
        }
    }

    /// Human-readable kind name for diagnostics and token dumps.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Number => "number literal",
            Self::StringLit => "string literal",
            Self::CharLit => "character literal",
            Self::Comment => "comment",
            Self::DocComment => "documentation comment",
            Self::CppInclude => "#include directive",
            Self::CppDefine => "#define directive",
            Self::CppFlow => "conditional directive",
            Self::CppOther => "preprocessor directive",
            Self::Whitespace => "whitespace",
            Self::Error => "error",
            Self::End => "end of input",
            Self::ParenL => "`(`",
            Self::ParenR => "`)`",
            Self::BracketL => "`[`",
            Self::BracketR => "`]`",
            Self::BraceL => "`{`",
            Self::BraceR => "`}`",
            Self::Comma => "`,`",
            Self::Semicolon => "`;`",
            Self::Question => "`?`",
            Self::Ampersand => "`&`",
            Self::Star => "`*`",
            Self::Caret => "`^`",
            Self::Colon => "`:`",
            Self::Dot => "`.`",
            Self::Equal => "`=`",
            Self::Bang => "`!`",
            Self::Slash => "`/`",
            Self::Greater => "`>`",
            Self::Less => "`<`",
            Self::Minus => "`-`",
            Self::Percent => "`%`",
            Self::Pipe => "`|`",
            Self::Plus => "`+`",
            Self::Tilde => "`~`",
            Self::Arrow => "`->`",
            Self::ColonColon => "`::`",
            Self::Decrement => "`--`",
            Self::Increment => "`++`",
            Self::Ellipsis => "`...`",
            Self::Shl => "`<<`",
            Self::Shr => "`>>`",
            Self::AmpEqual => "`&=`",
            Self::BangEqual => "`!=`",
            Self::CaretEqual => "`^=`",
            Self::EqualEqual => "`==`",
            Self::GreaterEqual => "`>=`",
            Self::LessEqual => "`<=`",
            Self::MinusEqual => "`-=`",
            Self::PercentEqual => "`%=`",
            Self::PipeEqual => "`|=`",
            Self::PlusEqual => "`+=`",
            Self::ShlEqual => "`<<=`",
            Self::ShrEqual => "`>>=`",
            Self::SlashEqual => "`/=`",
            Self::StarEqual => "`*=`",
        }
    }

    /// Trivia is skipped by the parser: whitespace and ordinary comments.
    /// Documentation comments are significant; they are the payload.
    #[inline]
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Comment)
    }

    /// `End` or `Error`: once produced, the sequence is over.
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::End | Self::Error)
    }
}

/// One emitted token: owned text plus its final classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token text. Empty for the terminal markers.
    pub text: String,
    /// Final classification.
    pub kind: TokenKind,
}

impl Token {
    /// Build a terminal marker token (empty text).
    #[must_use]
    pub fn terminal(kind: TokenKind) -> Self {
        Self {
            text: String::new(),
            kind,
        }
    }

    /// `true` for the `End` and `Error` markers.
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }
}

#[cfg(test)]
mod tests;
