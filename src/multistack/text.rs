//! Text rendering and the whitespace-delimited input format.
//!
//! Rendering ([`std::fmt::Display`]) produces a compact, display-only form: regions in
//! index order, elements bottom to top, `{[a,b,c],[f,g]}` followed by a newline.
//!
//! The input format is what [`MultiStack::parse_text`] reads and
//! [`MultiStack::write_text`] emits:
//!
//! ```text
//! k s
//! n0 e e e
//! n1 e
//! ...
//! ```
//!
//! `k` regions of `s` slots are created, then for every region its element count
//! followed by the elements, pushed in order. Tokens may be separated by any whitespace.

use std::{
    fmt::{self, Display},
    fs,
    io::{Read, Write},
    path::Path,
    str::FromStr,
};

use tracing::debug;

use super::MultiStack;
use crate::{file::text::Tokens, Error, LoadConfig, Result};

impl<T: Display> Display for MultiStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for region in 0..self.region_count() {
            if region > 0 {
                f.write_str(",")?;
            }
            f.write_str("[")?;
            for (index, value) in self.occupied(region).iter().enumerate() {
                if index > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{value}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("}\n")
    }
}

impl<T> MultiStack<T>
where
    T: FromStr + Default + Clone,
    T::Err: Display,
{
    /// Parses the input format with the default (strict) [`LoadConfig`].
    ///
    /// # Errors
    /// See [`MultiStack::parse_text_with`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multistack::MultiStack;
    ///
    /// let stacks = MultiStack::<i32>::parse_text("2 3\n3 5 2 8\n2 1 4\n")?;
    /// assert_eq!(stacks.to_string(), "{[5,2,8],[1,4]}\n");
    /// assert_eq!(stacks.find_min()?, 1);
    /// # Ok::<(), multistack::Error>(())
    /// ```
    pub fn parse_text(input: &str) -> Result<Self> {
        Self::parse_text_with(input, &LoadConfig::default())
    }

    /// Parses the input format, applying the checks selected by `config`.
    ///
    /// A region may receive more elements than its share of slots; the extra elements
    /// are placed by repacking exactly as [`MultiStack::push`] would.
    ///
    /// # Errors
    /// - [`crate::Error::Malformed`] if a token is missing or unparsable, the shape
    ///   overflows, exceeds `config.max_capacity`, declares more regions than the input
    ///   describes or cannot be allocated, or trailing tokens remain while
    ///   `config.reject_trailing_data` is set
    /// - [`crate::Error::StructureSaturated`] if the elements do not fit the capacity
    pub fn parse_text_with(input: &str, config: &LoadConfig) -> Result<Self> {
        let mut tokens = Tokens::new(input);

        let region_count = tokens.count("region count")?;
        let region_size = tokens.count("region size")?;
        let capacity = region_count.checked_mul(region_size).ok_or_else(|| {
            malformed_error!("Shape {} x {} overflows", region_count, region_size)
        })?;
        config.check_capacity(capacity)?;

        // Every region needs at least its element count token
        let remaining = tokens.remaining();
        if region_count > remaining {
            return Err(malformed_error!(
                "Declared {} regions but only {} tokens follow the header",
                region_count,
                remaining
            ));
        }

        let mut stacks = MultiStack::try_new(region_count, region_size)?;
        for region in 0..region_count {
            let count = tokens.count("element count")?;
            for _ in 0..count {
                let value = tokens.next::<T>("element")?;
                stacks.push(region, value)?;
            }
        }

        if config.reject_trailing_data {
            tokens.finish()?;
        }

        Ok(stacks)
    }

    /// Reads all of `reader` and parses it as the input format.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if reading fails or the input is not UTF-8,
    /// otherwise the errors of [`MultiStack::parse_text`].
    pub fn read_text<R: Read>(mut reader: R) -> Result<Self> {
        let mut input = String::new();
        reader
            .read_to_string(&mut input)
            .map_err(|error| io_error!("read_text", error))?;
        Self::parse_text(&input)
    }

    /// Replaces `self` with the structure described by the text file at `path`.
    ///
    /// On error `self` keeps its previous state.
    ///
    /// # Errors
    /// See [`MultiStack::read_text`].
    pub fn load_text(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|error| io_error!("load_text", error))?;
        *self = Self::parse_text(&input)?;

        debug!(
            path = %path.display(),
            regions = self.region_count(),
            elements = self.total_len(),
            "loaded text input"
        );
        Ok(())
    }
}

impl<T: Display> MultiStack<T> {
    /// Writes the structure in the input format.
    ///
    /// The header declares `capacity / region_count` slots per region, so a structure
    /// created with [`MultiStack::new`] parses back to one with the same capacity.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if writing fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multistack::MultiStack;
    ///
    /// let mut stacks: MultiStack<char> = MultiStack::new(2, 2);
    /// stacks.push(0, 'x')?;
    /// stacks.push(1, 'y')?;
    /// stacks.push(1, 'z')?;
    ///
    /// let mut out = Vec::new();
    /// stacks.write_text(&mut out)?;
    /// assert_eq!(String::from_utf8(out).unwrap(), "2 2\n1 x\n2 y z\n");
    /// # Ok::<(), multistack::Error>(())
    /// ```
    pub fn write_text<W: Write>(&self, writer: W) -> Result<()> {
        self.write_input_format(writer)
            .map_err(|error| io_error!("write_text", error))
    }

    /// Writes the input format to the file at `path`, replacing any existing content.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be created or written.
    pub fn save_text(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::File::create(path)
            .and_then(|file| self.write_input_format(std::io::BufWriter::new(file)))
            .map_err(|error| io_error!("save_text", error))
    }

    fn write_input_format<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        let region_size = self
            .capacity()
            .checked_div(self.region_count())
            .unwrap_or(0);
        writeln!(writer, "{} {}", self.region_count(), region_size)?;

        for region in 0..self.region_count() {
            let occupied = self.occupied(region);
            write!(writer, "{}", occupied.len())?;
            for value in occupied {
                write!(writer, " {value}")?;
            }
            writeln!(writer)?;
        }

        writer.flush()
    }
}

impl<T> FromStr for MultiStack<T>
where
    T: FromStr + Default + Clone,
    T::Err: Display,
{
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::parse_text(input)
    }
}
