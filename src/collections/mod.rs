//! Single-region fixed-capacity containers.
//!
//! [`Stack`] and [`Queue`] are the plain counterparts of [`crate::MultiStack`]: one
//! linear buffer with a capacity fixed at construction, no boundary logic. Both support
//! a minimum query and share a line-oriented text format:
//!
//! ```text
//! 3
//! first
//! second
//! third
//! ```
//!
//! The element count comes first, then one element per line (bottom to top for a stack,
//! head to tail for a queue). Readers accept any whitespace between tokens and size the
//! restored container to exactly the element count.

mod queue;
mod stack;

pub use queue::Queue;
pub use stack::Stack;

use std::{
    fmt::Display,
    io::{Read, Write},
    str::FromStr,
};

use crate::{file::text::Tokens, Result};

/// Writes the count line followed by one line per element.
fn write_lines<'a, T, W, I>(mut writer: W, len: usize, values: I) -> std::io::Result<()>
where
    T: Display + 'a,
    W: Write,
    I: IntoIterator<Item = &'a T>,
{
    writeln!(writer, "{len}")?;
    for value in values {
        writeln!(writer, "{value}")?;
    }
    writer.flush()
}

/// Parses a count followed by that many elements.
fn parse_lines<T>(input: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let mut tokens = Tokens::new(input);
    let count = tokens.count("element count")?;

    let mut values = Vec::new();
    for _ in 0..count {
        values.push(tokens.next::<T>("element")?);
    }

    tokens.finish()?;
    Ok(values)
}

/// Reads all of `reader` and parses it; I/O failures are reported under `operation`.
fn read_lines<T, R>(mut reader: R, operation: &'static str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
    R: Read,
{
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|error| io_error!(operation, error))?;
    parse_lines(&input)
}

/// Smallest element of `values`, first occurrence on ties.
fn min_of<'a, T, I>(values: I) -> Option<&'a T>
where
    T: PartialOrd + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut min: Option<&T> = None;
    for value in values {
        if min.map_or(true, |current| value < current) {
            min = Some(value);
        }
    }
    min
}
