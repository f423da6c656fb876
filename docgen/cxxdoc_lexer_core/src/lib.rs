//! Table-driven tokenizer for C++-like source files.
//!
//! The pipeline has four stages, each its own module:
//!
//! 1. [`char_class`]: every code point maps to one coarse [`CharClass`].
//! 2. [`table`]: a total `(State, CharClass)` transition table yields the
//!    next [`State`](table::State) and an [`Action`](table::Action).
//! 3. The driver in [`tokenizer`] interprets actions against an accumulator
//!    and a one-slot backslash continuation.
//! 4. The resolution layer maps the state a token ended in to its final
//!    [`TokenKind`].
//!
//! The machine is deliberately coarser than a C++ compiler's lexer: its
//! consumer scans declarations and documentation comments, so keywords stay
//! identifiers, numbers are not validated beyond their shape, and escape
//! sequences inside literals are kept verbatim. What it does guarantee is
//! totality (every input produces a token stream ending in `End` or
//! `Error`) and faithful text (non-discarded characters land in exactly one
//! token).
//!
//! ```
//! use cxxdoc_lexer_core::{TokenKind, Tokenizer};
//!
//! let kinds: Vec<TokenKind> = Tokenizer::new("x += 2; // bump")
//!     .map(|t| t.kind)
//!     .collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Ident,
//!         TokenKind::Whitespace,
//!         TokenKind::PlusEqual,
//!         TokenKind::Whitespace,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!         TokenKind::Whitespace,
//!         TokenKind::Comment,
//!         TokenKind::End,
//!     ]
//! );
//! ```

pub mod char_class;
mod classify;
pub mod table;
pub mod token;
pub mod tokenizer;

pub use char_class::{classify, CharClass};
pub use table::{Action, Evolution, State};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
