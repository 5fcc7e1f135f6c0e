//! Basic usage example of the psycial-data library
//!
//! Run with: RUST_LOG=trace cargo run --example basic_usage

use psycial_data::{
    clean_and_tokenize, BigFiveSample, Dimension, MbtiSample, PersonalityType, TextSample,
};
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Basic Psycial Data Usage ===\n");

    // 1. Tokenize
    let (tokens, vocab) = clean_and_tokenize("Hello, world! Hello again.");
    println!("Tokens: {:?}", tokens);
    println!("Vocabulary: {:?}\n", vocab);

    // 2. Resolve personality types
    let mbti: PersonalityType = "intj".parse()?;
    println!("Resolved {} (ordinal {:#06b})", mbti, mbti.ordinal());
    for dim in Dimension::all() {
        println!("  {:?}: {}", dim, mbti.pole(dim));
    }
    if let Err(e) = "ZZZZ".parse::<PersonalityType>() {
        println!("  ZZZZ -> {}\n", e);
    }

    // 3. Build samples
    let sample = MbtiSample::new(
        "I love spending time alone. Reading books is my favourite thing.",
        mbti,
    );
    println!("MBTI sample ({}): {:?}", sample.mbti(), sample.text());

    let big_five = BigFiveSample::new(vec!["I like parties."], true, 0.5, false, 0.8, false)
        .with_uid("u1");
    println!(
        "Big Five sample {:?}: {:?}",
        big_five.uid(),
        big_five.traits()
    );

    println!("\nJSON: {}", serde_json::to_string(&big_five)?);

    Ok(())
}
