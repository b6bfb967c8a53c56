//! Segmentation into word and separator runs
//!
//! Offsets are character offsets, matching the buffer the reverser works on.

use core::iter::Peekable;
use core::str::Chars;

use crate::types::CharClass;

/// A maximal run of characters sharing one class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Class shared by every character in the run
    pub class: CharClass,
    /// Character offset of the first character
    pub start: usize,
    /// Number of characters
    pub len: usize,
}

impl Run {
    /// Character offset one past the last character
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Whether this run is a word
    pub fn is_word(&self) -> bool {
        self.class.is_letter()
    }
}

/// Iterator over the runs of a string, see [`runs`]
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    chars: Peekable<Chars<'a>>,
    pos: usize,
}

/// Split `text` into alternating word and separator runs.
///
/// The runs cover the text exactly once, in order, and no two neighbouring
/// runs share a class.
pub fn runs(text: &str) -> Runs<'_> {
    Runs {
        chars: text.chars().peekable(),
        pos: 0,
    }
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let class = CharClass::of(self.chars.next()?);
        let mut len = 1;
        while self
            .chars
            .next_if(|&ch| CharClass::of(ch) == class)
            .is_some()
        {
            len += 1;
        }

        let run = Run {
            class,
            start: self.pos,
            len,
        };
        self.pos += len;
        Some(run)
    }
}
