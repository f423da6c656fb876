use super::*;
use pretty_assertions::assert_eq;

// === Fixed resolutions ===

#[test]
fn fixed_states_ignore_text() {
    assert_eq!(resolve(State::Ident, "anything"), TokenKind::Ident);
    assert_eq!(resolve(State::Number, "1e9f"), TokenKind::Number);
    assert_eq!(resolve(State::NumberExp, "1e"), TokenKind::Number);
    assert_eq!(resolve(State::CharLitEnd, "'a'"), TokenKind::CharLit);
    assert_eq!(resolve(State::StrLitEnd, "\"s\""), TokenKind::StringLit);
    assert_eq!(resolve(State::Shl, "<<"), TokenKind::Shl);
    assert_eq!(resolve(State::Dot3, "..."), TokenKind::Ellipsis);
    assert_eq!(resolve(State::MinusMinus, "--"), TokenKind::Decrement);
}

#[test]
fn unfinished_states_resolve_to_error() {
    assert_eq!(resolve(State::CharLit, "'a"), TokenKind::Error);
    assert_eq!(resolve(State::StrLit, "\"open"), TokenKind::Error);
    assert_eq!(resolve(State::BlockComment, "/* open"), TokenKind::Error);
    assert_eq!(resolve(State::BlockCommentStar, "/* x *"), TokenKind::Error);
    assert_eq!(resolve(State::Dot2, ".."), TokenKind::Error);
    assert_eq!(resolve(State::Backslash, ""), TokenKind::Error);
    assert_eq!(resolve(State::BackslashAcc, "x"), TokenKind::Error);
}

// === Comments ===

#[test]
fn doc_comment_marker_at_byte_two() {
    assert_eq!(resolve(State::LineComment, "// plain"), TokenKind::Comment);
    assert_eq!(resolve(State::LineComment, "//! doc"), TokenKind::DocComment);
    assert_eq!(resolve(State::LineComment, "//"), TokenKind::Comment);
    assert_eq!(resolve(State::LineComment, "//!"), TokenKind::DocComment);
    assert_eq!(
        resolve(State::BlockCommentEnd, "/* plain */"),
        TokenKind::Comment
    );
    assert_eq!(
        resolve(State::BlockCommentEnd, "/*! doc */"),
        TokenKind::DocComment
    );
    // The marker must be immediately after the opener.
    assert_eq!(resolve(State::LineComment, "// !"), TokenKind::Comment);
}

// === Delimiters ===

#[test]
fn delimiters_by_spelling() {
    assert_eq!(resolve(State::Punct, "("), TokenKind::ParenL);
    assert_eq!(resolve(State::Punct, ")"), TokenKind::ParenR);
    assert_eq!(resolve(State::Punct, "["), TokenKind::BracketL);
    assert_eq!(resolve(State::Punct, "]"), TokenKind::BracketR);
    assert_eq!(resolve(State::Punct, "{"), TokenKind::BraceL);
    assert_eq!(resolve(State::Punct, "}"), TokenKind::BraceR);
    assert_eq!(resolve(State::Punct, ","), TokenKind::Comma);
    assert_eq!(resolve(State::Punct, ";"), TokenKind::Semicolon);
    assert_eq!(resolve(State::Punct, "?"), TokenKind::Question);
}

// === Compound assignment ===

#[test]
fn compound_assignment_by_leading_character() {
    assert_eq!(resolve(State::OpAssign, "!="), TokenKind::BangEqual);
    assert_eq!(resolve(State::OpAssign, "%="), TokenKind::PercentEqual);
    assert_eq!(resolve(State::OpAssign, "&="), TokenKind::AmpEqual);
    assert_eq!(resolve(State::OpAssign, "*="), TokenKind::StarEqual);
    assert_eq!(resolve(State::OpAssign, "+="), TokenKind::PlusEqual);
    assert_eq!(resolve(State::OpAssign, "-="), TokenKind::MinusEqual);
    assert_eq!(resolve(State::OpAssign, "/="), TokenKind::SlashEqual);
    assert_eq!(resolve(State::OpAssign, "=="), TokenKind::EqualEqual);
    assert_eq!(resolve(State::OpAssign, "^="), TokenKind::CaretEqual);
    assert_eq!(resolve(State::OpAssign, "|="), TokenKind::PipeEqual);
}

#[test]
fn angle_assignments_need_the_second_character() {
    assert_eq!(resolve(State::OpAssign, "<="), TokenKind::LessEqual);
    assert_eq!(resolve(State::OpAssign, "<<="), TokenKind::ShlEqual);
    assert_eq!(resolve(State::OpAssign, ">="), TokenKind::GreaterEqual);
    assert_eq!(resolve(State::OpAssign, ">>="), TokenKind::ShrEqual);
}

// === Preprocessor directives ===

#[test]
fn directive_families() {
    assert_eq!(
        resolve(State::Preproc, "#include <vector>"),
        TokenKind::CppInclude
    );
    assert_eq!(
        resolve(State::Preproc, "#define MAX 10"),
        TokenKind::CppDefine
    );
    for text in [
        "#if FOO",
        "#ifdef FOO",
        "#ifndef FOO",
        "#elif BAR",
        "#else",
        "#endif",
    ] {
        assert_eq!(resolve(State::Preproc, text), TokenKind::CppFlow, "{text}");
    }
    assert_eq!(resolve(State::Preproc, "#pragma once"), TokenKind::CppOther);
    assert_eq!(resolve(State::Preproc, "#undef MAX"), TokenKind::CppOther);
    assert_eq!(resolve(State::Preproc, "#error nope"), TokenKind::CppOther);
}

#[test]
fn directive_name_may_be_detached_from_the_hash() {
    assert_eq!(
        resolve(State::Preproc, "#  include <x>"),
        TokenKind::CppInclude
    );
    assert_eq!(resolve(State::Preproc, "# \t define X"), TokenKind::CppDefine);
}

#[test]
fn directive_prefixes_do_not_match() {
    // "includes" is not "include"; the word boundary matters.
    assert_eq!(resolve(State::Preproc, "#includes"), TokenKind::CppOther);
    assert_eq!(resolve(State::Preproc, "#defined"), TokenKind::CppOther);
    assert_eq!(resolve(State::Preproc, "#"), TokenKind::CppOther);
}
