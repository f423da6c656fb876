use super::*;
use pretty_assertions::assert_eq;

// === Discriminant ranges ===

#[test]
fn kinds_sit_in_their_semantic_ranges() {
    // Literal family.
    assert!((TokenKind::Ident as u8) < 8);
    assert!((TokenKind::CharLit as u8) < 8);
    // Comments.
    assert_eq!(TokenKind::Comment as u8, 8);
    assert_eq!(TokenKind::DocComment as u8, 9);
    // Preprocessor.
    assert!((16..=19).contains(&(TokenKind::CppInclude as u8)));
    assert!((16..=19).contains(&(TokenKind::CppOther as u8)));
    // Delimiters.
    assert!((32..=40).contains(&(TokenKind::ParenL as u8)));
    assert!((32..=40).contains(&(TokenKind::Question as u8)));
    // Operators, single then multi then compound-assignment.
    assert!((48..=62).contains(&(TokenKind::Ampersand as u8)));
    assert!((48..=62).contains(&(TokenKind::Tilde as u8)));
    assert!((72..=78).contains(&(TokenKind::Arrow as u8)));
    assert!((72..=78).contains(&(TokenKind::Shr as u8)));
    assert!((88..=101).contains(&(TokenKind::AmpEqual as u8)));
    assert!((88..=101).contains(&(TokenKind::StarEqual as u8)));
    // Terminals stay at the top of the byte.
    assert_eq!(TokenKind::Error as u8, 240);
    assert_eq!(TokenKind::End as u8, 255);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

// === Fixed lexemes ===

#[test]
fn fixed_kinds_spell_themselves() {
    assert_eq!(TokenKind::ParenL.lexeme(), Some("("));
    assert_eq!(TokenKind::Semicolon.lexeme(), Some(";"));
    assert_eq!(TokenKind::Arrow.lexeme(), Some("->"));
    assert_eq!(TokenKind::Ellipsis.lexeme(), Some("..."));
    assert_eq!(TokenKind::ShlEqual.lexeme(), Some("<<="));
    assert_eq!(TokenKind::ShrEqual.lexeme(), Some(">>="));
    assert_eq!(TokenKind::Tilde.lexeme(), Some("~"));
}

#[test]
fn variable_text_kinds_have_no_lexeme() {
    for kind in [
        TokenKind::Ident,
        TokenKind::Number,
        TokenKind::StringLit,
        TokenKind::CharLit,
        TokenKind::Comment,
        TokenKind::DocComment,
        TokenKind::CppInclude,
        TokenKind::CppOther,
        TokenKind::Whitespace,
        TokenKind::Error,
        TokenKind::End,
    ] {
        assert_eq!(kind.lexeme(), None, "{}", kind.name());
    }
}

// === Names ===

#[test]
fn names_are_distinct_for_distinct_operators() {
    assert_eq!(TokenKind::Less.name(), "`<`");
    assert_eq!(TokenKind::Shl.name(), "`<<`");
    assert_eq!(TokenKind::ShlEqual.name(), "`<<=`");
    assert_eq!(TokenKind::CppDefine.name(), "#define directive");
}

// === Trivia and terminals ===

#[test]
fn trivia_is_whitespace_and_plain_comments_only() {
    assert!(TokenKind::Whitespace.is_trivia());
    assert!(TokenKind::Comment.is_trivia());
    // Doc comments carry the documentation payload.
    assert!(!TokenKind::DocComment.is_trivia());
    assert!(!TokenKind::Ident.is_trivia());
    assert!(!TokenKind::CppInclude.is_trivia());
}

#[test]
fn terminal_tokens() {
    assert!(TokenKind::End.is_terminal());
    assert!(TokenKind::Error.is_terminal());
    assert!(!TokenKind::Whitespace.is_terminal());

    let end = Token::terminal(TokenKind::End);
    assert!(end.is_terminal());
    assert_eq!(end.text, "");

    let word = Token {
        text: "word".to_owned(),
        kind: TokenKind::Ident,
    };
    assert!(!word.is_terminal());
}
