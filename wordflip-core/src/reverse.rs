//! Two-pass in-place reversal

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

use crate::types::is_word_char;

/// Reverse the half-open range `start..end` of `buf` in place.
///
/// Empty and single-element ranges are left untouched.
///
/// # Panics
///
/// Panics if `start > end` or `end > buf.len()`.
#[inline]
pub fn reverse_span(buf: &mut [char], start: usize, end: usize) {
    assert!(
        start <= end && end <= buf.len(),
        "span {start}..{end} out of bounds for buffer of length {}",
        buf.len()
    );
    buf[start..end].reverse();
}

/// Pass 1: reverse the whole buffer end to end.
pub fn mirror(buf: &mut [char]) {
    let len = buf.len();
    reverse_span(buf, 0, len);
}

/// Pass 2: reverse each letter run back into reading order.
///
/// Separators are never moved. Two adjacent separators, or a separator at
/// index 0, produce an empty run which is a no-op.
pub fn unmirror_words(buf: &mut [char]) {
    let len = buf.len();
    let mut start = 0;

    for i in 0..len {
        if !is_word_char(buf[i]) {
            reverse_span(buf, start, i);
            start = i + 1;
        }
    }

    // No separator follows the last word, flush it here
    reverse_span(buf, start, len);
}

/// Reverse word order in a caller-owned buffer.
pub fn reverse_words_in_place(buf: &mut [char]) {
    mirror(buf);
    unmirror_words(buf);
}

/// Reverse word order in `input`, returning a new string with the same
/// number of characters.
#[cfg(feature = "alloc")]
pub fn reverse_words(input: &str) -> String {
    let mut buf: Vec<char> = input.chars().collect();
    reverse_words_in_place(&mut buf);
    buf.into_iter().collect()
}
