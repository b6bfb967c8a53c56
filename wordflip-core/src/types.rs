//! Character classification

use core::fmt;

/// Letter/separator classification of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII letter, part of a word
    Letter,
    /// Anything else: whitespace, punctuation, digits, symbols, non-ASCII
    Separator,
}

impl CharClass {
    /// Classify a character
    pub fn of(ch: char) -> Self {
        match ch {
            'a'..='z' | 'A'..='Z' => CharClass::Letter,
            _ => CharClass::Separator,
        }
    }

    /// Whether this class belongs to a word
    pub fn is_letter(self) -> bool {
        self == CharClass::Letter
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Letter => write!(f, "letter"),
            CharClass::Separator => write!(f, "separator"),
        }
    }
}

/// Whether `ch` is part of a word
#[inline]
pub fn is_word_char(ch: char) -> bool {
    CharClass::of(ch).is_letter()
}
