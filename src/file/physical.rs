//! Physical file backend for memory-mapped I/O.
//!
//! [`crate::file::Physical`] maps a snapshot file read-only into the address space so the
//! decoder can walk it as a plain byte slice. The mapping, and with it the file handle,
//! lives exactly as long as the backend value; dropping it releases both on every exit
//! path of a load.

use super::Backend;
use crate::Result;

use memmap2::Mmap;
use std::{fs, path::Path};

/// A file backend that uses memory-mapped I/O.
#[derive(Debug)]
pub struct Physical {
    /// Memory-mapped file data
    data: Mmap,
}

impl Physical {
    /// Create a new physical file backend by memory-mapping the specified file.
    ///
    /// # Arguments
    /// * `path` - Path to the snapshot on disk.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or mapped.
    pub fn new(path: impl AsRef<Path>) -> Result<Physical> {
        let file = fs::File::open(path).map_err(|error| io_error!("open", error))?;
        Physical::from_std_file(file)
    }

    /// Creates a new physical file backend from an opened [`std::fs::File`].
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if memory mapping fails.
    #[allow(clippy::needless_pass_by_value)]
    pub fn from_std_file(file: fs::File) -> Result<Physical> {
        // The mapping stays valid after `file` is dropped; snapshots are only read while
        // the backend is alive and nothing in this crate writes to a mapped file.
        let mmap = unsafe { Mmap::map(&file) }.map_err(|error| io_error!("map", error))?;

        Ok(Physical { data: mmap })
    }
}

impl Backend for Physical {
    fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
