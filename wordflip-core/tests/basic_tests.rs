//! Basic tests for wordflip-core

use wordflip_core::*;

#[test]
fn test_punctuation_stays_at_mirrored_position() {
    assert_eq!(reverse_words("how, are, you!"), "!you ,are ,how");
}

#[test]
fn test_empty_input() {
    assert_eq!(reverse_words(""), "");
}

#[test]
fn test_single_word_unchanged() {
    assert_eq!(reverse_words("hello"), "hello");
}

#[test]
fn test_two_words() {
    assert_eq!(reverse_words("a b"), "b a");
}

#[test]
fn test_leading_and_trailing_spaces() {
    // mirror: "  ih  ", then the only word is flipped back
    assert_eq!(reverse_words("  hi  "), "  hi  ");
}

#[test]
fn test_comma_between_single_letters() {
    assert_eq!(reverse_words("a,b"), "b,a");
}

#[test]
fn test_case_is_preserved() {
    assert_eq!(reverse_words("Hello World"), "World Hello");
}

#[test]
fn test_separator_runs_are_mirrored_not_reattached() {
    // ", " belonged after "one"; after the mirror it reads " ,"
    assert_eq!(reverse_words("one, two."), ".two ,one");
    assert_eq!(reverse_words("(hi) there"), "there )hi(");
    assert_eq!(reverse_words("say: \"yes\""), "\"yes\" :say");
}

#[test]
fn test_digits_split_words() {
    assert_eq!(reverse_words("abc1def"), "def1abc");
    assert_eq!(reverse_words("route 66 west"), "west 66 route");
}

#[test]
fn test_non_ascii_letters_are_separators() {
    // 'é' is not an ASCII letter, so "café" is the word "caf" followed by 'é'
    assert_eq!(reverse_words("café au"), "au écaf");
    assert_eq!(reverse_words("日本 go"), "go 本日");
}

#[test]
fn test_multi_line_text_is_one_sentence() {
    assert_eq!(reverse_words("first\nsecond"), "second\nfirst");
}

#[test]
fn test_in_place_matches_string_entry_point() {
    let text = "The quick, brown fox; jumps!";
    let mut buf: Vec<char> = text.chars().collect();
    reverse_words_in_place(&mut buf);
    let in_place: String = buf.into_iter().collect();
    assert_eq!(in_place, reverse_words(text));
    assert_eq!(in_place, "!jumps ;fox brown ,quick The");
}

#[test]
fn test_passes_compose_to_reverse_words() {
    let text = "one two, three";
    let mut buf: Vec<char> = text.chars().collect();
    mirror(&mut buf);
    assert_eq!(buf.iter().collect::<String>(), "eerht ,owt eno");
    unmirror_words(&mut buf);
    assert_eq!(buf.iter().collect::<String>(), "three ,two one");
}

#[test]
fn test_runs_cover_text() {
    let text = "how, are, you!";
    let total: usize = runs(text).map(|run| run.len).sum();
    assert_eq!(total, text.chars().count());
    assert_eq!(runs(text).filter(Run::is_word).count(), 3);
}

#[test]
fn test_applying_twice_restores_input() {
    for text in ["how, are, you!", "  hi  ", "a,b", "x.y..z", ""] {
        assert_eq!(reverse_words(&reverse_words(text)), text);
    }
}

#[test]
fn test_not_idempotent() {
    let once = reverse_words("a b");
    assert_ne!(reverse_words(&once), once);
}
