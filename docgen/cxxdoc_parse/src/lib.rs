//! Token-stream consumer groundwork for the documentation extractor.
//!
//! [`Parser`] wraps the tokenizer with one token of lookahead and skips
//! trivia (whitespace and ordinary comments) on the way in, so grammar code
//! only ever sees significant tokens. Documentation comments are
//! significant here; collecting them is the whole point of the pipeline.
//!
//! No grammar yet. Declaration scanning builds on `peek`/`bump`.

use cxxdoc_lexer_core::{Token, TokenKind, Tokenizer};

/// Trivia-skipping cursor over the token stream.
///
/// The cursor never runs past the terminal: once `End` or `Error` is
/// reached, [`peek`] and [`bump`] keep answering that terminal token.
///
/// [`peek`]: Parser::peek
/// [`bump`]: Parser::bump
#[derive(Debug)]
pub struct Parser<'a> {
    tokens: Tokenizer<'a>,
    lookahead: Token,
}

impl<'a> Parser<'a> {
    /// Start a parser at the beginning of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let mut tokens = Tokenizer::new(source);
        let lookahead = next_significant(&mut tokens);
        Self { tokens, lookahead }
    }

    /// The next significant token, without consuming it.
    #[must_use]
    pub fn peek(&self) -> &Token {
        &self.lookahead
    }

    /// Consume and return the next significant token.
    ///
    /// At the terminal this returns the terminal token again rather than
    /// advancing, so callers can bump in a loop guarded by [`at_end`].
    ///
    /// [`at_end`]: Parser::at_end
    pub fn bump(&mut self) -> Token {
        if self.lookahead.is_terminal() {
            return self.lookahead.clone();
        }
        let next = next_significant(&mut self.tokens);
        std::mem::replace(&mut self.lookahead, next)
    }

    /// Consume the next token if it has the expected kind.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.lookahead.kind == kind {
            Some(self.bump())
        } else {
            None
        }
    }

    /// `true` once the cursor sits on `End` or `Error`.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.lookahead.is_terminal()
    }
}

/// Pull the next non-trivia token. The tokenizer's terminal idempotence
/// guarantees this loop ends.
fn next_significant(tokens: &mut Tokenizer<'_>) -> Token {
    loop {
        let token = tokens.next_token();
        if !token.kind.is_trivia() {
            return token;
        }
    }
}
