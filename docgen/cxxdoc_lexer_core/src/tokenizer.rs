//! The tokenizer driver: a thin interpreter over the evolution table.
//!
//! [`Tokenizer`] holds the whole machine state: the character cursor, the
//! current [`State`], the pending token text, the one-slot backslash
//! continuation, and the terminal marker. Each [`Tokenizer::next_token`]
//! call consumes characters until an action yields a token, input ends, or
//! a structural error halts the machine.
//!
//! Token text is owned, not sliced from the source: backslash continuation
//! can splice a token across physical lines, so its text is not always
//! contiguous in the input.

use std::str::Chars;

use crate::char_class::classify;
use crate::classify::resolve;
use crate::table::{evolve, Action, State};
use crate::token::{Token, TokenKind};

/// Streaming tokenizer over a source string.
///
/// Produces every token including whitespace and comments; consumers skip
/// trivia via [`TokenKind::is_trivia`]. After the terminal token (`End` on
/// clean exhaustion, `Error` on a structural fault) every further
/// [`next_token`] call returns the same terminal again; the [`Iterator`]
/// impl instead yields the terminal once and then fuses.
///
/// [`next_token`]: Tokenizer::next_token
#[derive(Debug)]
pub struct Tokenizer<'a> {
    chars: Chars<'a>,
    state: State,
    pending: String,
    continuation: Option<State>,
    terminal: Option<TokenKind>,
}

impl<'a> Tokenizer<'a> {
    /// Start tokenizing at the beginning of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars(),
            state: State::Bol,
            pending: String::new(),
            continuation: None,
            terminal: None,
        }
    }

    /// Produce the next token.
    ///
    /// Once a terminal token has been produced, repeated calls keep
    /// returning it.
    pub fn next_token(&mut self) -> Token {
        if let Some(kind) = self.terminal {
            return Token::terminal(kind);
        }
        loop {
            let Some(c) = self.chars.next() else {
                return self.finish();
            };
            let evo = evolve(self.state, classify(c));
            match evo.action {
                Action::Acc => {
                    self.pending.push(c);
                    self.state = evo.next;
                }
                Action::Err => {
                    self.pending.clear();
                    return self.halt(TokenKind::Error);
                }
                Action::Out | Action::OutAcc => {
                    let done = self.take_pending();
                    self.state = evo.next;
                    if evo.action == Action::OutAcc {
                        self.pending.push(c);
                    }
                    if let Some(token) = done {
                        return token;
                    }
                }
                Action::Push => {
                    self.continuation = Some(self.state);
                    self.state = evo.next;
                }
                Action::Pop | Action::PopAcc => {
                    let Some(previous) = self.continuation.take() else {
                        // Unreachable by table construction: pop actions
                        // appear only in rows entered through a push.
                        self.pending.clear();
                        return self.halt(TokenKind::Error);
                    };
                    if evo.action == Action::PopAcc {
                        // The backslash did not splice a line; it and the
                        // character after it are ordinary token content.
                        self.pending.push('\\');
                        self.pending.push(c);
                    }
                    self.state = previous;
                }
            }
        }
    }

    /// End of input: flush any pending token, then mark the terminal.
    fn finish(&mut self) -> Token {
        if self.state.is_pending_backslash() {
            // A backslash with nothing after it cannot be completed.
            self.pending.clear();
            return self.halt(TokenKind::Error);
        }
        if let Some(token) = self.take_pending() {
            // Terminal stays unset: the next call flushes to `End`.
            return token;
        }
        self.halt(TokenKind::End)
    }

    /// Yield the pending text as a token classified by the current state,
    /// or `None` when nothing has accumulated (blank lines, discarded
    /// whitespace at line start).
    fn take_pending(&mut self) -> Option<Token> {
        if self.pending.is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.pending);
        let kind = resolve(self.state, &text);
        Some(Token { text, kind })
    }

    fn halt(&mut self, kind: TokenKind) -> Token {
        self.terminal = Some(kind);
        Token::terminal(kind)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.terminal.is_some() {
            None
        } else {
            Some(self.next_token())
        }
    }
}
