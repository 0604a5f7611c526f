//! Bounds-checked byte cursor for snapshot decoding.
//!
//! This module provides the [`crate::file::parser::Parser`] type, a cursor over a byte
//! slice that decodes [`crate::file::io::SlotIO`] values in native byte order. Every read
//! validates that enough data is available first, so truncated or hostile snapshots
//! surface as [`crate::Error::OutOfBounds`] instead of panics.
//!
//! # Examples
//!
//! ```rust
//! use multistack::Parser;
//!
//! let mut data = Vec::new();
//! data.extend_from_slice(&3u64.to_ne_bytes());
//! data.extend_from_slice(&7u32.to_ne_bytes());
//!
//! let mut parser = Parser::new(&data);
//! assert_eq!(parser.read_len()?, 3);
//! assert_eq!(parser.read::<u32>()?, 7);
//! assert!(!parser.has_more_data());
//! # Ok::<(), multistack::Error>(())
//! ```

use crate::{
    file::io::{encoded_width, read_ne_at, SlotIO},
    Result,
};

/// A cursor over a byte slice.
///
/// `Parser` keeps the current position and refuses any read that would cross the end
/// of the data. The position only advances on successful reads.
pub struct Parser<'a> {
    /// The binary data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`crate::file::parser::Parser`] from a byte slice.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns the length of the underlying data buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the parser has no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if there is more data available to parse.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Get the current position
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes remaining from the current position.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Ensures that at least `needed` bytes are available from the current position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `needed` bytes remain.
    pub fn ensure_remaining(&self, needed: usize) -> Result<()> {
        if self.remaining() < needed {
            return Err(out_of_bounds_error!());
        }
        Ok(())
    }

    /// Ensures that `count` values of `T` can be read from the current position.
    ///
    /// Used before allocating storage for a snapshot section, so that a forged count
    /// cannot trigger a huge allocation for data that is not there.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the byte count overflows or exceeds the
    /// remaining data.
    pub fn ensure_values<T: SlotIO>(&self, count: usize) -> Result<()> {
        let needed = count
            .checked_mul(encoded_width::<T>())
            .ok_or(out_of_bounds_error!())?;
        self.ensure_remaining(needed)
    }

    /// Read a value of type `T` in native byte order.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if there is not enough data, or the decoding
    /// error of `T`.
    pub fn read<T: SlotIO>(&mut self) -> Result<T> {
        read_ne_at::<T>(self.data, &mut self.position)
    }

    /// Read a `u64` length or index field and convert it to `usize`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if there is not enough data, or
    /// [`crate::Error::Malformed`] if the value does not fit the platform's `usize`.
    pub fn read_len(&mut self) -> Result<usize> {
        let at = self.position;
        let value = self.read::<u64>()?;
        usize::try_from(value)
            .map_err(|_| malformed_error!("Length field {} at offset {} exceeds usize", value, at))
    }

    /// Reads `count` values of `T` into a vector.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the section is truncated, or the decoding
    /// error of the first invalid value.
    pub fn read_vec<T: SlotIO>(&mut self, count: usize) -> Result<Vec<T>> {
        self.ensure_values::<T>(count)?;

        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.read::<T>()?);
        }
        Ok(values)
    }

    /// Reads `count` `u64` fields as `usize` values.
    ///
    /// # Errors
    /// Same as [`Parser::read_len`], plus [`crate::Error::OutOfBounds`] if the section
    /// is truncated.
    pub fn read_len_vec(&mut self, count: usize) -> Result<Vec<usize>> {
        self.ensure_values::<u64>(count)?;

        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.read_len()?);
        }
        Ok(values)
    }
}
