//! Basic usage example for wordflip-api

use wordflip_api::{reverse_text, Config, Input, Scope, WordReverser};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with convenience function
    println!("=== Method 1: Convenience Function ===");
    let output = reverse_text("how, are, you!")?;
    println!("{}", output.text);
    println!(
        "{} words, {} separator runs\n",
        output.metadata.word_count, output.metadata.separator_runs
    );

    // Method 2: Per-line scope
    println!("=== Method 2: Per-line Scope ===");
    let reverser = WordReverser::with_config(Config::builder().scope(Scope::Line).build()?);
    let output = reverser.process(Input::from_text("first line here\nsecond line here\n"))?;
    print!("{}", output.text);

    // Method 3: Size limit
    println!("\n=== Method 3: Size Limit ===");
    let reverser = WordReverser::with_config(Config::builder().max_chars(Some(8)).build()?);
    match reverser.reverse_text("this sentence is too long") {
        Ok(output) => println!("{}", output.text),
        Err(e) => println!("rejected: {e}"),
    }

    Ok(())
}
