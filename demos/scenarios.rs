//! Walks through the two reference scenarios and a snapshot round trip.
//!
//! Run with `RUST_LOG=multistack=trace cargo run --example scenarios` to see every push,
//! pop and repack.

use multistack::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn letters() -> Result<MultiStack<char>> {
    let mut stacks = MultiStack::new(3, 3);
    for letter in ['a', 'b', 'c'] {
        stacks.push(0, letter)?;
    }
    for letter in ['f', 'g', 'h'] {
        stacks.push(1, letter)?;
    }
    stacks.push(2, 'j')?;
    print!("3 x 3 before repack: {stacks}");

    stacks.push(1, 'k')?;
    print!("3 x 3 after repack:  {stacks}");
    Ok(stacks)
}

fn numbers() -> Result<MultiStack<i32>> {
    let mut stacks = MultiStack::new(2, 2);
    stacks.push(1, 2)?;
    stacks.push(0, 4)?;
    stacks.push(0, 7)?;
    stacks.push(0, 3)?;
    print!("2 x 2 after repack:  {stacks}");
    println!("minimum: {}", stacks.find_min()?);
    Ok(stacks)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "multistack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let letters = letters()?;
    let numbers = numbers()?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("letters.bin");
    letters.save(&path)?;

    let mut restored: MultiStack<char> = MultiStack::empty();
    restored.load(&path)?;
    println!("snapshot restored equal: {}", restored == letters);

    let mut text = Vec::new();
    numbers.write_text(&mut text)?;
    print!("text form of the 2 x 2 structure:\n{}", String::from_utf8(text)?);

    let mut saturated: MultiStack<i32> = MultiStack::new(2, 1);
    saturated.push(0, 1)?;
    saturated.push(1, 2)?;
    if let Err(error) = saturated.push(0, 3) {
        println!("{}", error.describe());
    }

    Ok(())
}
