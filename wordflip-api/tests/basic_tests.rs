//! Basic tests for wordflip-api

use std::fs;
use tempfile::TempDir;
use wordflip_api::*;

#[test]
fn test_input_text_processing() {
    let input = Input::Text("Hello world.".to_string());
    let text = input.read_text().unwrap();
    assert_eq!(text, "Hello world.");
}

#[test]
fn test_input_bytes_processing() {
    let bytes = b"Hello world.".to_vec();
    let input = Input::Bytes(bytes);
    let text = input.read_text().unwrap();
    assert_eq!(text, "Hello world.");
}

#[test]
fn test_config_builder() {
    let config = Config::builder()
        .scope(Scope::Line)
        .max_chars(Some(1024))
        .build()
        .unwrap();

    assert_eq!(config.scope, Scope::Line);
    assert_eq!(config, Config {
        scope: Scope::Line,
        max_chars: Some(1024),
    });
}

#[test]
fn test_reverse_text_convenience() {
    let output = reverse_text("how, are, you!").unwrap();

    assert_eq!(output.text, "!you ,are ,how");
    assert_eq!(output.metadata.total_bytes, 14);
    // Processing time should be recorded
    let _ = output.metadata.processing_time_ms;
}

#[test]
fn test_empty_input_is_not_an_error() {
    let output = reverse_text("").unwrap();
    assert_eq!(output.text, "");
    assert_eq!(output.metadata.word_count, 0);
    assert_eq!(output.metadata.separator_runs, 0);
    assert_eq!(output.metadata.lines, 0);
}

#[test]
fn test_text_scope_reverses_across_lines() {
    let output = reverse_text("one two\nthree").unwrap();
    assert_eq!(output.text, "three\ntwo one");
    assert_eq!(output.metadata.lines, 2);
}

#[test]
fn test_line_scope_reverses_each_line() {
    let reverser = WordReverser::with_config(Config::per_line());
    let output = reverser.reverse_text("one two\nthree four\n").unwrap();
    assert_eq!(output.text, "two one\nfour three\n");
    assert_eq!(output.metadata.scope, Scope::Line);
}

#[test]
fn test_process_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("input.txt");
    fs::write(&path, "a,b").unwrap();

    let output = reverse_file(&path).unwrap();
    assert_eq!(output.text, "b,a");
}

#[test]
fn test_missing_file() {
    let result = reverse_file("/nonexistent/input.txt");
    assert!(matches!(result, Err(ApiError::Io(_))));
}

#[test]
fn test_limit_rejects_long_input() {
    let config = Config::builder().max_chars(Some(4)).build().unwrap();
    let reverser = WordReverser::with_config(config);

    assert!(reverser.reverse_text("a b").is_ok());
    let err = reverser.reverse_text("hello").unwrap_err();
    assert_eq!(err.to_string(), "input of 5 characters exceeds limit of 4");
}

#[test]
#[cfg(feature = "serde")]
fn test_output_serialization() {
    let output = reverse_text("a b").unwrap();

    let json = output.to_json().unwrap();
    assert!(json.contains("\"text\":\"b a\""));
    assert!(json.contains("\"scope\":\"text\""));

    let deserialized: Output = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.text, output.text);
    assert_eq!(deserialized.metadata.word_count, 2);
}

#[test]
fn test_error_conversions() {
    use std::io;

    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let api_error: ApiError = io_error.into();

    match api_error {
        ApiError::Io(_) => (), // Expected
        _ => panic!("Wrong error type"),
    }
}

#[test]
fn test_shared_between_threads() {
    let reverser = std::sync::Arc::new(WordReverser::new());
    let handles: Vec<_> = ["a b", "c, d", "e.f"]
        .into_iter()
        .map(|text| {
            let reverser = reverser.clone();
            std::thread::spawn(move || reverser.reverse_text(text).unwrap().text)
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, ["b a", "d ,c", "f.e"]);
}
