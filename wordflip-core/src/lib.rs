//! Word order reversal using a two-pass in-place mirror
//!
//! A word is a maximal run of ASCII letters. Everything else (spaces,
//! punctuation, digits, symbols, non-ASCII characters) is a separator.
//!
//! The transformation works on a single character buffer:
//!
//! 1. **Mirror**: the whole buffer is reversed end to end. Word order is now
//!    reversed, but every word is spelled backwards.
//! 2. **Un-mirror**: each word is reversed back in place. Separator runs are
//!    left exactly where the mirror put them.
//!
//! Because separators are only moved by the mirror, punctuation does not
//! follow its original word:
//!
//! ```rust
//! use wordflip_core::reverse_words;
//!
//! assert_eq!(reverse_words("how, are, you!"), "!you ,are ,how");
//! assert_eq!(reverse_words("a,b"), "b,a");
//! ```
//!
//! The crate has no dependencies and works without `std`; disable default
//! features and enable `alloc` to get the `String` based entry point.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod reverse;
pub mod runs;
pub mod types;

pub use reverse::{mirror, reverse_span, reverse_words_in_place, unmirror_words};
#[cfg(feature = "alloc")]
pub use reverse::reverse_words;
pub use runs::{runs, Run, Runs};
pub use types::{is_word_char, CharClass};
