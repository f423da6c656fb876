use super::*;
use pretty_assertions::assert_eq;

// === Table shape ===

#[test]
fn class_count_matches_last_discriminant() {
    assert_eq!(CharClass::Whsp as usize + 1, CharClass::COUNT);
}

#[test]
fn every_ascii_byte_is_classified() {
    // Totality over the table range: lookups never panic and each byte
    // lands in exactly one class.
    for cp in 0u32..128 {
        let c = char::from_u32(cp).expect("7-bit range is valid chars");
        let _ = classify(c);
    }
}

// === Spot checks per class ===

#[test]
fn whitespace_and_eol() {
    assert_eq!(classify(' '), CharClass::Whsp);
    assert_eq!(classify('\t'), CharClass::Whsp);
    assert_eq!(classify('\u{b}'), CharClass::Whsp);
    assert_eq!(classify('\u{c}'), CharClass::Whsp);
    // Only LF is end-of-line; a lone CR is horizontal whitespace.
    assert_eq!(classify('\r'), CharClass::Whsp);
    assert_eq!(classify('\n'), CharClass::Eol);
}

#[test]
fn letters_and_exponent_letters() {
    assert_eq!(classify('a'), CharClass::Ltr);
    assert_eq!(classify('Z'), CharClass::Ltr);
    assert_eq!(classify('_'), CharClass::Ltr);
    assert_eq!(classify('e'), CharClass::LtrE);
    assert_eq!(classify('E'), CharClass::LtrE);
    assert_eq!(classify('d'), CharClass::Ltr);
    assert_eq!(classify('f'), CharClass::Ltr);
}

#[test]
fn digits() {
    for c in '0'..='9' {
        assert_eq!(classify(c), CharClass::Digit, "digit {c:?}");
    }
}

#[test]
fn operator_characters_have_own_classes() {
    assert_eq!(classify('&'), CharClass::Amp);
    assert_eq!(classify('*'), CharClass::Star);
    assert_eq!(classify('^'), CharClass::Caret);
    assert_eq!(classify(':'), CharClass::Colon);
    assert_eq!(classify('.'), CharClass::Dot);
    assert_eq!(classify('='), CharClass::Equal);
    assert_eq!(classify('!'), CharClass::Bang);
    assert_eq!(classify('/'), CharClass::Slash);
    assert_eq!(classify('<'), CharClass::Lt);
    assert_eq!(classify('>'), CharClass::Gt);
    assert_eq!(classify('-'), CharClass::Minus);
    assert_eq!(classify('%'), CharClass::Perc);
    assert_eq!(classify('|'), CharClass::Pipe);
    assert_eq!(classify('+'), CharClass::Plus);
    assert_eq!(classify('~'), CharClass::Tilde);
    assert_eq!(classify('\\'), CharClass::Bksl);
    assert_eq!(classify('#'), CharClass::Hash);
}

#[test]
fn shared_punct_class() {
    for c in ['(', ')', ',', ';', '?', '[', ']', '{', '}'] {
        assert_eq!(classify(c), CharClass::Punct, "delimiter {c:?}");
    }
}

#[test]
fn quotes() {
    assert_eq!(classify('"'), CharClass::Qdbl);
    assert_eq!(classify('\''), CharClass::Qsng);
}

#[test]
fn invalid_characters() {
    assert_eq!(classify('\u{0}'), CharClass::Inval);
    assert_eq!(classify('\u{1}'), CharClass::Inval);
    assert_eq!(classify('\u{1b}'), CharClass::Inval);
    assert_eq!(classify('\u{7f}'), CharClass::Inval);
    assert_eq!(classify('$'), CharClass::Inval);
    assert_eq!(classify('@'), CharClass::Inval);
    assert_eq!(classify('`'), CharClass::Inval);
}

// === Non-ASCII fallback ===

#[test]
fn non_ascii_defaults_to_letter() {
    assert_eq!(classify('é'), CharClass::Ltr);
    assert_eq!(classify('λ'), CharClass::Ltr);
    assert_eq!(classify('中'), CharClass::Ltr);
    assert_eq!(classify('\u{1F600}'), CharClass::Ltr);
    // U+0080, first code point past the table.
    assert_eq!(classify('\u{80}'), CharClass::Ltr);
}
