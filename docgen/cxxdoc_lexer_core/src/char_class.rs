//! Character classification: the first stage of the tokenizer pipeline.
//!
//! Every input code point is sorted into one coarse [`CharClass`] bucket
//! before the transition-table lookup. Grouping keeps the table narrow:
//! all evolutions for `A` always apply to `B`, so letters share one column.
//!
//! Classification is a pure function over a fixed 128-entry table for the
//! 7-bit ASCII range. Code points at or above 128 default to [`CharClass::Ltr`],
//! which permits non-ASCII identifiers without full Unicode category tables.

/// Coarse character class driving the transition-table column.
///
/// Closed set: every `char` maps to exactly one class. Characters that can
/// begin or extend a multi-character operator each get their own class;
/// delimiters that are always single-character tokens share [`Punct`].
///
/// [`Punct`]: CharClass::Punct
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CharClass {
    /// Ampersand `&`.
    Amp,
    /// Backslash `\`.
    Bksl,
    /// Caret `^`.
    Caret,
    /// Colon `:`.
    Colon,
    /// Decimal digit `0`-`9`.
    Digit,
    /// Dot `.`.
    Dot,
    /// End-of-line (`\n`).
    Eol,
    /// Equal sign `=`.
    Equal,
    /// Exclamation point `!`.
    Bang,
    /// Forward slash `/`.
    Slash,
    /// Greater-than sign `>`.
    Gt,
    /// Invalid character: admissible only inside literal and comment bodies.
    Inval,
    /// Less-than sign `<`.
    Lt,
    /// Letter or underscore.
    Ltr,
    /// Letter `e` or `E`, distinguished to detect floating-point exponents.
    LtrE,
    /// Minus sign `-`.
    Minus,
    /// Percent sign `%`.
    Perc,
    /// Pipe `|`.
    Pipe,
    /// Plus sign `+`.
    Plus,
    /// Pound sign `#`.
    Hash,
    /// Single-character delimiter: `( ) , ; ? [ ] { }`.
    Punct,
    /// Double quote `"`.
    Qdbl,
    /// Single quote `'`.
    Qsng,
    /// Star `*`.
    Star,
    /// Tilde `~`.
    Tilde,
    /// Horizontal whitespace (space, `\t`, `\v`, `\f`, `\r`).
    Whsp,
}

impl CharClass {
    /// Number of character classes; the transition table has this many columns.
    pub const COUNT: usize = 26;

    /// Column index into the transition table.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Size assertion: the class tag must stay a single byte.
const _: () = assert!(std::mem::size_of::<CharClass>() == 1);

/// Mapping from 7-bit ASCII values to character classes.
///
/// Shared, read-only, process-wide configuration. Layout notes:
/// control characters not used as whitespace are `Inval`; `$`, `@`, backtick
/// and DEL are `Inval` too (they cannot appear outside literals); only `\n`
/// is `Eol`; a lone `\r` joins a whitespace run instead.
#[rustfmt::skip]
static ASCII_CLASSES: [CharClass; 128] = {
    use CharClass as C;
    [
        /*00*/ C::Inval, /*01*/ C::Inval, /*02*/ C::Inval, /*03*/ C::Inval,
        /*04*/ C::Inval, /*05*/ C::Inval, /*06*/ C::Inval, /*\a*/ C::Inval,
        /*08*/ C::Inval, /*\t*/ C::Whsp,  /*\n*/ C::Eol,   /*\v*/ C::Whsp,
        /*\f*/ C::Whsp,  /*\r*/ C::Whsp,  /*0e*/ C::Inval, /*0f*/ C::Inval,
        /*10*/ C::Inval, /*11*/ C::Inval, /*12*/ C::Inval, /*13*/ C::Inval,
        /*14*/ C::Inval, /*15*/ C::Inval, /*16*/ C::Inval, /*17*/ C::Inval,
        /*18*/ C::Inval, /*19*/ C::Inval, /*1a*/ C::Inval, /*\e*/ C::Inval,
        /*1c*/ C::Inval, /*1d*/ C::Inval, /*1e*/ C::Inval, /*1f*/ C::Inval,
        /*sp*/ C::Whsp,  /* !*/ C::Bang,  /* "*/ C::Qdbl,  /* #*/ C::Hash,
        /* $*/ C::Inval, /* %*/ C::Perc,  /* &*/ C::Amp,   /* '*/ C::Qsng,
        /* (*/ C::Punct, /* )*/ C::Punct, /* **/ C::Star,  /* +*/ C::Plus,
        /* ,*/ C::Punct, /* -*/ C::Minus, /* .*/ C::Dot,   /* / */ C::Slash,
        /* 0*/ C::Digit, /* 1*/ C::Digit, /* 2*/ C::Digit, /* 3*/ C::Digit,
        /* 4*/ C::Digit, /* 5*/ C::Digit, /* 6*/ C::Digit, /* 7*/ C::Digit,
        /* 8*/ C::Digit, /* 9*/ C::Digit, /* :*/ C::Colon, /* ;*/ C::Punct,
        /* <*/ C::Lt,    /* =*/ C::Equal, /* >*/ C::Gt,    /* ?*/ C::Punct,
        /* @*/ C::Inval, /* A*/ C::Ltr,   /* B*/ C::Ltr,   /* C*/ C::Ltr,
        /* D*/ C::Ltr,   /* E*/ C::LtrE,  /* F*/ C::Ltr,   /* G*/ C::Ltr,
        /* H*/ C::Ltr,   /* I*/ C::Ltr,   /* J*/ C::Ltr,   /* K*/ C::Ltr,
        /* L*/ C::Ltr,   /* M*/ C::Ltr,   /* N*/ C::Ltr,   /* O*/ C::Ltr,
        /* P*/ C::Ltr,   /* Q*/ C::Ltr,   /* R*/ C::Ltr,   /* S*/ C::Ltr,
        /* T*/ C::Ltr,   /* U*/ C::Ltr,   /* V*/ C::Ltr,   /* W*/ C::Ltr,
        /* X*/ C::Ltr,   /* Y*/ C::Ltr,   /* Z*/ C::Ltr,   /* [*/ C::Punct,
        /* \*/ C::Bksl,  /* ]*/ C::Punct, /* ^*/ C::Caret, /* _*/ C::Ltr,
        /* `*/ C::Inval, /* a*/ C::Ltr,   /* b*/ C::Ltr,   /* c*/ C::Ltr,
        /* d*/ C::Ltr,   /* e*/ C::LtrE,  /* f*/ C::Ltr,   /* g*/ C::Ltr,
        /* h*/ C::Ltr,   /* i*/ C::Ltr,   /* j*/ C::Ltr,   /* k*/ C::Ltr,
        /* l*/ C::Ltr,   /* m*/ C::Ltr,   /* n*/ C::Ltr,   /* o*/ C::Ltr,
        /* p*/ C::Ltr,   /* q*/ C::Ltr,   /* r*/ C::Ltr,   /* s*/ C::Ltr,
        /* t*/ C::Ltr,   /* u*/ C::Ltr,   /* v*/ C::Ltr,   /* w*/ C::Ltr,
        /* x*/ C::Ltr,   /* y*/ C::Ltr,   /* z*/ C::Ltr,   /* {*/ C::Punct,
        /* |*/ C::Pipe,  /* }*/ C::Punct, /* ~*/ C::Tilde, /*7f*/ C::Inval,
    ]
};

/// Classify one code point. Total; never fails.
///
/// ASCII goes through the fixed table; everything else is treated as a
/// letter, so non-ASCII identifiers lex without being rejected.
#[inline]
#[must_use]
pub fn classify(c: char) -> CharClass {
    match u32::from(c) {
        cp @ 0..=127 => ASCII_CLASSES[cp as usize],
        _ => CharClass::Ltr,
    }
}

#[cfg(test)]
mod tests;
