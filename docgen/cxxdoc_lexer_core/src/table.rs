//! The state/action transition table: the dense heart of the tokenizer.
//!
//! `EVOLUTIONS` maps every `(State, CharClass)` pair to an [`Evolution`]
//! (next state + action). The table is total by construction: the array
//! type covers the full cross-product. It is built at compile time from a
//! handful of row constructors:
//!
//! - `operand_end`: the shared row for states that end an operand
//!   (identifier, number, closing quote, completed operator). Any character
//!   that cannot extend the current token yields it and opens a fresh one
//!   (`OutAcc`), which is what lets `a.b` split into `a`, `.`, `b` without
//!   losing characters.
//! - `body_row`: the shared row for literal and comment bodies, which
//!   accumulate nearly everything, including otherwise-invalid characters.
//! - `uniform`: every column identical (the pending-backslash rows).
//!
//! Each row then patches only the entries where that state diverges.
//! Near-identical rows drift apart when maintained entry-by-entry; the
//! constructors plus the structural checks in `tests.rs` make every
//! divergence an explicit patch.
//!
//! # Backslash continuation
//!
//! Every state's `Bksl` column pushes the current state into the one-slot
//! continuation and enters a pending-backslash state. From there an EOL pops
//! back silently (classic line splicing, usable inside identifiers,
//! literals, comments, and operators alike); any other character pops back
//! re-accumulating a literal `\` plus that character. States with no pending
//! token content (`Bol`, `Whitespace`) use the strict variant that errors
//! instead of re-accumulating. Continuation never nests: the pending states
//! route every backslash column straight to `Pop`/`PopAcc`/`Err`.

use crate::char_class::CharClass;

/// Lexical context the engine is currently in.
///
/// States are data: transitions are pure table lookups, and the state a
/// token ends in determines its kind through the resolution layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum State {
    /// Start of a new, non-continued line. The initial state.
    Bol,
    /// Run of horizontal whitespace.
    Whitespace,
    /// Identifier.
    Ident,
    /// Number.
    Number,
    /// Number followed by `e`/`E`, either a suffix or an exponent.
    NumberExp,
    /// Suffix of a number, or the tail of an exponent.
    NumberSuffix,
    /// Single-quoted character literal, body.
    CharLit,
    /// Single-quoted character literal, after the closing quote.
    CharLitEnd,
    /// Double-quoted string literal, body.
    StrLit,
    /// Double-quoted string literal, after the closing quote.
    StrLitEnd,
    /// Single-line comment `// ...`.
    LineComment,
    /// Multi-line comment body.
    BlockComment,
    /// Multi-line comment, after a `*` (potential terminator).
    BlockCommentStar,
    /// Multi-line comment, after the closing `*/`.
    BlockCommentEnd,
    /// Preprocessor directive line.
    Preproc,
    /// Pending backslash with no token content to splice into (strict).
    Backslash,
    /// Pending backslash inside a token, literal, or comment.
    BackslashAcc,
    /// Single-character delimiter.
    Punct,
    /// `&`
    Ampersand,
    /// `*`
    Star,
    /// `^`
    Caret,
    /// `:`
    Colon,
    /// `::`
    ColonColon,
    /// `.`
    Dot,
    /// `..`, never a complete token; only `.` may follow.
    Dot2,
    /// `...`
    Dot3,
    /// `=`
    Equal,
    /// `!`
    Bang,
    /// `/`
    Slash,
    /// `>`
    Greater,
    /// `>>`
    Shr,
    /// `<`
    Less,
    /// `<<`
    Shl,
    /// `-`
    Minus,
    /// `--`
    MinusMinus,
    /// `->`
    Arrow,
    /// `+`
    Plus,
    /// `++`
    PlusPlus,
    /// `%`
    Percent,
    /// `|`
    Pipe,
    /// `~`
    Tilde,
    /// Shared compound-assignment terminal: `!= %= &= *= += -= /= == ^= |=`
    /// plus `<= >= <<= >>=`. Disambiguated from the accumulated text.
    OpAssign,
}

impl State {
    /// Number of states; the transition table has this many rows.
    pub const COUNT: usize = 42;

    /// Row index into the transition table.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// `true` for the two pending-backslash states. Reaching end of input
    /// here means a backslash had no following character, a structural
    /// error.
    #[inline]
    #[must_use]
    pub fn is_pending_backslash(self) -> bool {
        matches!(self, Self::Backslash | Self::BackslashAcc)
    }
}

/// Size assertion: the state tag must stay a single byte.
const _: () = assert!(std::mem::size_of::<State>() == 1);

/// What the driver does with the current character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Accumulate the character into the pending token.
    Acc,
    /// Structural lexical error; tokenization stops.
    Err,
    /// Yield the pending token, then start fresh, discarding the character.
    Out,
    /// Yield the pending token, then start fresh, accumulating the character.
    OutAcc,
    /// Save the current state in the continuation slot (backslash seen).
    Push,
    /// Restore the saved state, discarding the character (the line break).
    Pop,
    /// Restore the saved state, re-accumulating a literal `\` plus the
    /// character into the pending token.
    PopAcc,
}

/// One table entry: where to go and what to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evolution {
    /// Next state. Ignored for `Pop`/`PopAcc` (the saved state wins) and
    /// meaningless for `Err`.
    pub next: State,
    /// Action to interpret against the accumulator and continuation slot.
    pub action: Action,
}

/// One table row: an evolution per character class, in class order.
pub(crate) type Row = [Evolution; CharClass::COUNT];

const fn e(next: State, action: Action) -> Evolution {
    Evolution { next, action }
}

/// Row for operand-ending states: any character that cannot extend the
/// token yields it and starts the token that character begins. `this` is
/// used for the error entries (invalid characters, `#` outside column 0).
const fn operand_end(this: State) -> Row {
    use Action::{Err, Out, OutAcc, Push};
    use State::{
        Ampersand, BackslashAcc, Bang, Bol, Caret, CharLit, Colon, Dot, Equal, Greater, Ident,
        Less, Minus, Number, Percent, Pipe, Plus, Punct, Slash, Star, StrLit, Tilde, Whitespace,
    };
    [
        e(Ampersand, OutAcc),    // Amp
        e(BackslashAcc, Push),   // Bksl
        e(Caret, OutAcc),        // Caret
        e(Colon, OutAcc),        // Colon
        e(Number, OutAcc),       // Digit
        e(Dot, OutAcc),          // Dot
        e(Bol, Out),             // Eol
        e(Equal, OutAcc),        // Equal
        e(Bang, OutAcc),         // Bang
        e(Slash, OutAcc),        // Slash
        e(Greater, OutAcc),      // Gt
        e(this, Err),            // Inval
        e(Less, OutAcc),         // Lt
        e(Ident, OutAcc),        // Ltr
        e(Ident, OutAcc),        // LtrE
        e(Minus, OutAcc),        // Minus
        e(Percent, OutAcc),      // Perc
        e(Pipe, OutAcc),         // Pipe
        e(Plus, OutAcc),         // Plus
        e(this, Err),            // Hash
        e(Punct, OutAcc),        // Punct
        e(StrLit, OutAcc),       // Qdbl
        e(CharLit, OutAcc),      // Qsng
        e(Star, OutAcc),         // Star
        e(Tilde, OutAcc),        // Tilde
        e(Whitespace, OutAcc),   // Whsp
    ]
}

/// Row for literal and comment bodies: accumulate everything, including
/// characters that are invalid elsewhere. Structural characters (closing
/// quote, comment terminator, EOL where it matters) are patched per state.
const fn body_row(this: State) -> Row {
    uniform(this, Action::Acc)
}

/// Row with every column identical.
const fn uniform(next: State, action: Action) -> Row {
    [e(next, action); CharClass::COUNT]
}

/// Replace selected columns of a row.
const fn patch(mut row: Row, edits: &[(CharClass, Evolution)]) -> Row {
    let mut i = 0;
    while i < edits.len() {
        row[edits[i].0 as usize] = edits[i].1;
        i += 1;
    }
    row
}

/// The complete evolution table, `State::COUNT` rows by `CharClass::COUNT`
/// columns. Immutable, shared, process-wide configuration.
pub(crate) static EVOLUTIONS: [Row; State::COUNT] = {
    use crate::char_class::CharClass as C;
    use Action::{Acc, Err, Out, OutAcc, Pop, PopAcc, Push};
    use State::{
        Arrow, Backslash, BackslashAcc, BlockComment, BlockCommentEnd, BlockCommentStar, Bol,
        CharLit, CharLitEnd, ColonColon, Dot2, Dot3, Ident, LineComment, MinusMinus, Number,
        NumberExp, NumberSuffix, OpAssign, PlusPlus, Preproc, Shl, Shr, StrLit, StrLitEnd,
        Whitespace,
    };
    [
        // Bol: leading whitespace and blank lines vanish; `#` opens a
        // preprocessor line; a stray backslash may only splice lines.
        patch(operand_end(Bol), &[
            (C::Bksl, e(Backslash, Push)),
            (C::Hash, e(Preproc, OutAcc)),
            (C::Whsp, e(Bol, Out)),
        ]),
        // Whitespace: the run keeps absorbing horizontal whitespace.
        patch(operand_end(Whitespace), &[
            (C::Bksl, e(Backslash, Push)),
            (C::Whsp, e(Whitespace, Acc)),
        ]),
        // Ident: letters, digits, and underscores extend it.
        patch(operand_end(Ident), &[
            (C::Digit, e(Ident, Acc)),
            (C::Ltr, e(Ident, Acc)),
            (C::LtrE, e(Ident, Acc)),
        ]),
        // Number: `1.5` stays one token; `e`/`E` may open an exponent,
        // any other letter is a suffix.
        patch(operand_end(Number), &[
            (C::Digit, e(Number, Acc)),
            (C::Dot, e(Number, Acc)),
            (C::Ltr, e(NumberSuffix, Acc)),
            (C::LtrE, e(NumberExp, Acc)),
        ]),
        // NumberExp: right after `e`/`E`; a sign, digit, or letter commits
        // to the suffix/exponent tail.
        patch(operand_end(NumberExp), &[
            (C::Digit, e(NumberSuffix, Acc)),
            (C::Ltr, e(NumberSuffix, Acc)),
            (C::LtrE, e(NumberSuffix, Acc)),
            (C::Minus, e(NumberSuffix, Acc)),
            (C::Plus, e(NumberSuffix, Acc)),
        ]),
        // NumberSuffix: exponent digits or suffix letters.
        patch(operand_end(NumberSuffix), &[
            (C::Digit, e(NumberSuffix, Acc)),
            (C::Ltr, e(NumberSuffix, Acc)),
            (C::LtrE, e(NumberSuffix, Acc)),
        ]),
        // CharLit body: everything accumulates except the closing quote.
        // A raw line break cannot appear in a character literal.
        patch(body_row(CharLit), &[
            (C::Bksl, e(BackslashAcc, Push)),
            (C::Eol, e(CharLit, Err)),
            (C::Qsng, e(CharLitEnd, Acc)),
        ]),
        // CharLitEnd: a literal-suffix identifier may follow the quote.
        patch(operand_end(CharLitEnd), &[
            (C::Ltr, e(CharLitEnd, Acc)),
            (C::LtrE, e(CharLitEnd, Acc)),
        ]),
        // StrLit body: may span lines; only `"` closes it. Escapes route
        // through the pending-backslash state, so `\"` stays in the body.
        patch(body_row(StrLit), &[
            (C::Bksl, e(BackslashAcc, Push)),
            (C::Qdbl, e(StrLitEnd, Acc)),
        ]),
        // StrLitEnd: a literal-suffix identifier may follow the quote.
        patch(operand_end(StrLitEnd), &[
            (C::Ltr, e(StrLitEnd, Acc)),
            (C::LtrE, e(StrLitEnd, Acc)),
        ]),
        // LineComment: runs to end of line; a trailing backslash splices
        // the next line into the comment.
        patch(body_row(LineComment), &[
            (C::Bksl, e(BackslashAcc, Push)),
            (C::Eol, e(Bol, Out)),
        ]),
        // BlockComment: `*` arms the terminator check.
        patch(body_row(BlockComment), &[
            (C::Bksl, e(BackslashAcc, Push)),
            (C::Star, e(BlockCommentStar, Acc)),
        ]),
        // BlockCommentStar: `/` closes; another `*` stays armed; anything
        // else drops back into the body.
        patch(body_row(BlockComment), &[
            (C::Bksl, e(BackslashAcc, Push)),
            (C::Slash, e(BlockCommentEnd, Acc)),
            (C::Star, e(BlockCommentStar, Acc)),
        ]),
        // BlockCommentEnd: the comment token is complete; anything may follow.
        operand_end(BlockCommentEnd),
        // Preproc: the whole directive line is one token.
        patch(body_row(Preproc), &[
            (C::Bksl, e(BackslashAcc, Push)),
            (C::Eol, e(Bol, Out)),
            (C::Inval, e(Preproc, Err)),
        ]),
        // Backslash (strict): only a line break may follow.
        patch(uniform(Backslash, Err), &[
            (C::Eol, e(Backslash, Pop)),
        ]),
        // BackslashAcc: a line break splices silently; anything else is
        // re-accumulated literally together with the backslash.
        patch(uniform(BackslashAcc, PopAcc), &[
            (C::Eol, e(BackslashAcc, Pop)),
        ]),
        // Punct: always a single character.
        operand_end(State::Punct),
        // & &=
        patch(operand_end(State::Ampersand), &[
            (C::Equal, e(OpAssign, Acc)),
        ]),
        // * *=
        patch(operand_end(State::Star), &[
            (C::Equal, e(OpAssign, Acc)),
        ]),
        // ^ ^=
        patch(operand_end(State::Caret), &[
            (C::Equal, e(OpAssign, Acc)),
        ]),
        // : ::
        patch(operand_end(State::Colon), &[
            (C::Colon, e(ColonColon, Acc)),
        ]),
        // ::, a third colon is impossible.
        patch(operand_end(ColonColon), &[
            (C::Colon, e(ColonColon, Err)),
        ]),
        // . .. and `.5`-style numbers.
        patch(operand_end(State::Dot), &[
            (C::Digit, e(Number, Acc)),
            (C::Dot, e(Dot2, Acc)),
        ]),
        // .. is never a complete token: only a third dot continues it.
        patch(uniform(Dot2, Err), &[
            (C::Bksl, e(BackslashAcc, Push)),
            (C::Dot, e(Dot3, Acc)),
        ]),
        // ... complete.
        operand_end(Dot3),
        // = ==
        patch(operand_end(State::Equal), &[
            (C::Equal, e(OpAssign, Acc)),
        ]),
        // ! !=
        patch(operand_end(State::Bang), &[
            (C::Equal, e(OpAssign, Acc)),
        ]),
        // / // /* /=
        patch(operand_end(State::Slash), &[
            (C::Equal, e(OpAssign, Acc)),
            (C::Slash, e(LineComment, Acc)),
            (C::Star, e(BlockComment, Acc)),
        ]),
        // > >> >=
        patch(operand_end(State::Greater), &[
            (C::Equal, e(OpAssign, Acc)),
            (C::Gt, e(Shr, Acc)),
        ]),
        // >> >>=
        patch(operand_end(Shr), &[
            (C::Equal, e(OpAssign, Acc)),
        ]),
        // < << <=
        patch(operand_end(State::Less), &[
            (C::Equal, e(OpAssign, Acc)),
            (C::Lt, e(Shl, Acc)),
        ]),
        // << <<=
        patch(operand_end(Shl), &[
            (C::Equal, e(OpAssign, Acc)),
        ]),
        // - -- -> -= and signed numbers `-5`, `-.5`.
        patch(operand_end(State::Minus), &[
            (C::Digit, e(Number, Acc)),
            (C::Dot, e(Number, Acc)),
            (C::Equal, e(OpAssign, Acc)),
            (C::Gt, e(Arrow, Acc)),
            (C::Minus, e(MinusMinus, Acc)),
        ]),
        // -- complete.
        operand_end(MinusMinus),
        // -> complete.
        operand_end(Arrow),
        // + ++ += and signed numbers `+5`, `+.5`.
        patch(operand_end(State::Plus), &[
            (C::Digit, e(Number, Acc)),
            (C::Dot, e(Number, Acc)),
            (C::Equal, e(OpAssign, Acc)),
            (C::Plus, e(PlusPlus, Acc)),
        ]),
        // ++ complete.
        operand_end(PlusPlus),
        // % %=
        patch(operand_end(State::Percent), &[
            (C::Equal, e(OpAssign, Acc)),
        ]),
        // | |=
        patch(operand_end(State::Pipe), &[
            (C::Equal, e(OpAssign, Acc)),
        ]),
        // ~ is always alone.
        operand_end(State::Tilde),
        // OpAssign: every compound assignment is complete here.
        operand_end(OpAssign),
    ]
};

/// Look up the evolution for a `(state, class)` pair. Total: every pair has
/// a defined entry.
#[inline]
#[must_use]
pub fn evolve(state: State, class: CharClass) -> Evolution {
    EVOLUTIONS[state.index()][class.index()]
}
