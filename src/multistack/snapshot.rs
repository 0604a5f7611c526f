//! Binary snapshots of a [`MultiStack`].
//!
//! A snapshot is the raw in-memory state, written in native byte order:
//!
//! | Section  | Encoding                                   |
//! |----------|--------------------------------------------|
//! | capacity | `u64`                                      |
//! | count    | `u64`, number of regions                   |
//! | slots    | `capacity` elements, see [`SlotIO`]        |
//! | starts   | `count` x `u64`                            |
//! | tops     | `count` x `u64`                            |
//!
//! Every slot is written, including the unused ones, so a restored structure compares
//! equal to the saved one. The format carries no magic number and no version; it is meant
//! to be read back on the machine that wrote it with the same element type.

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

use tracing::debug;

use super::MultiStack;
use crate::{
    file::{
        io::{encoded_width, write_ne, SlotIO},
        Backend, Memory, Physical,
    },
    LoadConfig, Parser, Result,
};

impl<T: SlotIO> MultiStack<T> {
    /// Encodes the full state into a new byte vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multistack::MultiStack;
    ///
    /// let mut stacks: MultiStack<u32> = MultiStack::new(2, 2);
    /// stacks.push(1, 42)?;
    ///
    /// let bytes = stacks.to_bytes();
    /// assert_eq!(bytes.len(), 8 + 8 + 4 * 4 + 2 * 8 + 2 * 8);
    ///
    /// let restored = MultiStack::<u32>::from_bytes(&bytes)?;
    /// assert_eq!(restored, stacks);
    /// # Ok::<(), multistack::Error>(())
    /// ```
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let size = 16
            + self.capacity() * encoded_width::<T>()
            + self.region_count() * 2 * encoded_width::<u64>();
        let mut out = Vec::with_capacity(size);

        write_ne(&mut out, &(self.capacity() as u64));
        write_ne(&mut out, &(self.region_count() as u64));
        for slot in &self.slots {
            write_ne(&mut out, slot);
        }
        for start in &self.starts {
            write_ne(&mut out, &(*start as u64));
        }
        for top in &self.tops {
            write_ne(&mut out, &(*top as u64));
        }

        out
    }

    /// Writes the snapshot to `writer`.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if writing fails.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        self.write_snapshot(writer)
            .map_err(|error| io_error!("write_to", error))
    }

    fn write_snapshot<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writer.write_all(&self.to_bytes())?;
        writer.flush()
    }

    /// Writes the snapshot to the file at `path`, replacing any existing content.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        File::create(path)
            .and_then(|file| self.write_snapshot(BufWriter::new(file)))
            .map_err(|error| io_error!("save", error))?;

        debug!(
            path = %path.display(),
            capacity = self.capacity(),
            regions = self.region_count(),
            "saved snapshot"
        );
        Ok(())
    }

    /// Decodes a snapshot with the default (strict) [`LoadConfig`].
    ///
    /// # Errors
    /// See [`MultiStack::from_bytes_with`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with(data, &LoadConfig::default())
    }

    /// Decodes a snapshot, applying the checks selected by `config`.
    ///
    /// # Errors
    /// - [`crate::Error::OutOfBounds`] if a section is truncated
    /// - [`crate::Error::Malformed`] if a length does not fit `usize`, an element does
    ///   not decode, the capacity exceeds the configured limit, the boundaries violate
    ///   the region invariants or trailing bytes remain
    pub fn from_bytes_with(data: &[u8], config: &LoadConfig) -> Result<Self> {
        let mut parser = Parser::new(data);

        let capacity = parser.read_len()?;
        let count = parser.read_len()?;
        config.check_capacity(capacity)?;

        let slots = parser.read_vec::<T>(capacity)?;
        let starts = parser.read_len_vec(count)?;
        let tops = parser.read_len_vec(count)?;

        if config.reject_trailing_data && parser.has_more_data() {
            return Err(malformed_error!(
                "{} trailing bytes after snapshot at offset {}",
                parser.remaining(),
                parser.pos()
            ));
        }

        let restored = MultiStack::from_parts(slots, starts, tops);
        if config.validate_boundaries {
            restored.check_invariants()?;
        }

        Ok(restored)
    }

    /// Decodes a snapshot held by any [`Backend`].
    fn from_backend(backend: &dyn Backend, config: &LoadConfig) -> Result<Self> {
        Self::from_bytes_with(backend.data(), config)
    }

    /// Reads a complete snapshot from `reader`.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if reading fails, otherwise the errors of
    /// [`MultiStack::from_bytes`].
    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        let memory = Memory::from_reader(reader)?;
        Self::from_backend(&memory, &LoadConfig::default())
    }

    /// Memory-maps the snapshot at `path` and decodes it with the default configuration.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened, otherwise the
    /// errors of [`MultiStack::from_bytes`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, &LoadConfig::default())
    }

    /// Memory-maps the snapshot at `path` and decodes it with `config`.
    ///
    /// # Errors
    /// See [`MultiStack::open`] and [`MultiStack::from_bytes_with`].
    pub fn open_with(path: impl AsRef<Path>, config: &LoadConfig) -> Result<Self> {
        let path = path.as_ref();
        let physical = Physical::new(path)?;
        let restored = Self::from_backend(&physical, config)?;

        debug!(
            path = %path.display(),
            bytes = physical.len(),
            capacity = restored.capacity(),
            regions = restored.region_count(),
            "opened snapshot"
        );
        Ok(restored)
    }

    /// Replaces `self` with the snapshot stored at `path`.
    ///
    /// The snapshot is fully decoded and validated before anything is replaced; on error
    /// `self` keeps its previous state.
    ///
    /// # Errors
    /// See [`MultiStack::open`].
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        *self = Self::open(path)?;
        Ok(())
    }
}
