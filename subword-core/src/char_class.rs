//! Character classification for sub-word boundary detection
//!
//! ASCII characters resolve through a 128-entry table evaluated at compile
//! time. Everything else falls back to the Unicode general category.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Classification of characters for boundary detection
///
/// The discriminants are the codes used to index the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CharClass {
    /// Anything not covered by another class
    Other = 0,
    /// Uppercase letter
    Uppercase = 1,
    /// Lowercase letter
    Lowercase = 2,
    /// Numeric character
    Numeral = 3,
    /// The `_` character
    Underscore = 4,
    /// Horizontal whitespace
    Whitespace = 5,
    /// Carriage return or line feed
    Linebreak = 6,
    /// One of `()[]{}`
    Bracket = 7,
    /// One of `. , = + - * / % < > & | ^`
    Operator = 8,
}

impl CharClass {
    /// Number of distinct classes
    pub const COUNT: usize = 9;

    /// All classes in code order
    pub const ALL: [CharClass; Self::COUNT] = [
        CharClass::Other,
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Numeral,
        CharClass::Underscore,
        CharClass::Whitespace,
        CharClass::Linebreak,
        CharClass::Bracket,
        CharClass::Operator,
    ];

    /// Numeric code of this class
    #[inline]
    pub const fn code(self) -> usize {
        self as usize
    }

    /// Short lowercase name, used in table dumps
    pub const fn name(self) -> &'static str {
        match self {
            CharClass::Other => "other",
            CharClass::Uppercase => "upper",
            CharClass::Lowercase => "lower",
            CharClass::Numeral => "numeral",
            CharClass::Underscore => "underscore",
            CharClass::Whitespace => "whitespace",
            CharClass::Linebreak => "linebreak",
            CharClass::Bracket => "bracket",
            CharClass::Operator => "operator",
        }
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const fn build_ascii_table() -> [CharClass; 128] {
    let mut table = [CharClass::Other; 128];

    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = CharClass::Uppercase;
        i += 1;
    }

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = CharClass::Lowercase;
        i += 1;
    }

    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = CharClass::Numeral;
        i += 1;
    }

    table[b'_' as usize] = CharClass::Underscore;

    table[b' ' as usize] = CharClass::Whitespace;
    table[b'\t' as usize] = CharClass::Whitespace;
    table[0x0B] = CharClass::Whitespace; // vertical tab
    table[0x0C] = CharClass::Whitespace; // form feed

    table[b'\r' as usize] = CharClass::Linebreak;
    table[b'\n' as usize] = CharClass::Linebreak;

    let brackets = b"()[]{}";
    let mut i = 0;
    while i < brackets.len() {
        table[brackets[i] as usize] = CharClass::Bracket;
        i += 1;
    }

    let operators = b".,=+-*/%<>&|^";
    let mut i = 0;
    while i < operators.len() {
        table[operators[i] as usize] = CharClass::Operator;
        i += 1;
    }

    table
}

/// ASCII lookup table for chars 0-127
static ASCII_CLASSES: [CharClass; 128] = build_ascii_table();

#[cold]
fn classify_non_ascii(ch: char) -> CharClass {
    if ch.is_whitespace() {
        return CharClass::Whitespace;
    }
    // Only cased letters count; `char::is_uppercase` also admits Nl and So
    match get_general_category(ch) {
        GeneralCategory::UppercaseLetter => CharClass::Uppercase,
        GeneralCategory::LowercaseLetter => CharClass::Lowercase,
        _ if ch.is_numeric() => CharClass::Numeral,
        _ => CharClass::Other,
    }
}

/// Classify a character - hot path
#[inline]
pub fn classify(ch: char) -> CharClass {
    if ch.is_ascii() {
        // Fast path: direct array lookup
        ASCII_CLASSES[ch as usize]
    } else {
        classify_non_ascii(ch)
    }
}

/// Pure character classification logic
pub trait CharClassifier: Send + Sync {
    /// Classify a character
    fn classify(&self, ch: char) -> CharClass;
}

/// The classifier used unless a caller supplies its own
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardClassifier;

impl CharClassifier for StandardClassifier {
    #[inline]
    fn classify(&self, ch: char) -> CharClass {
        classify(ch)
    }
}
