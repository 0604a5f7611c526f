//! Byte sources and low-level decoding for persisted containers.
//!
//! This module holds everything the serialization code of [`crate::MultiStack`] and the
//! single-region collections builds upon:
//!
//! - **Backend system** - [`crate::file::Backend`] abstracts over where snapshot bytes
//!   live: a memory-mapped file ([`crate::file::Physical`]) or an owned buffer
//!   ([`crate::file::Memory`]).
//! - **Binary decoding** - [`crate::file::io`] defines the fixed-width slot encoding and
//!   [`crate::file::parser::Parser`] walks a snapshot with bounds checks.
//! - **Text decoding** - [`crate::file::text::Tokens`] splits whitespace-delimited input
//!   and parses tokens with [`std::str::FromStr`].
//!
//! # Examples
//!
//! ```rust
//! use multistack::file::{Backend, Memory};
//!
//! let memory = Memory::new(vec![1, 2, 3, 4]);
//! assert_eq!(memory.len(), 4);
//! assert_eq!(memory.data_slice(1, 2)?, &[2, 3]);
//! # Ok::<(), multistack::Error>(())
//! ```

pub mod io;
pub mod parser;
pub mod text;

mod memory;
mod physical;

pub use memory::Memory;
pub use physical::Physical;

use crate::Result;

/// Backend trait for snapshot data sources.
///
/// Decoders only ever see a byte slice, so a snapshot can come from disk or from
/// memory without the decoding code knowing the difference.
pub trait Backend {
    /// Returns a slice of the data at the given offset and length.
    ///
    /// # Arguments
    ///
    /// * `offset` - The starting offset within the data.
    /// * `len` - The length of the slice in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the requested range is out of bounds.
    fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]> {
        let Some(offset_end) = offset.checked_add(len) else {
            return Err(out_of_bounds_error!());
        };

        if offset_end > self.len() {
            return Err(out_of_bounds_error!());
        }

        Ok(&self.data()[offset..offset_end])
    }

    /// Returns the entire data buffer.
    fn data(&self) -> &[u8];

    /// Returns the total length of the data buffer.
    fn len(&self) -> usize {
        self.data().len()
    }

    /// Returns `true` if the backend holds no data.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
