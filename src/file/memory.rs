use super::Backend;

/// Snapshot bytes held in an owned buffer
#[derive(Debug)]
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    /// Create a new memory backend
    ///
    /// ## Arguments
    /// * 'data' - The data buffer to consume
    #[must_use]
    pub fn new(data: Vec<u8>) -> Memory {
        Memory { data }
    }

    /// Reads everything from `reader` into a new memory backend
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if reading fails.
    pub fn from_reader<R: std::io::Read>(mut reader: R) -> crate::Result<Memory> {
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|error| io_error!("read_from", error))?;
        Ok(Memory { data })
    }
}

impl Backend for Memory {
    fn data(&self) -> &[u8] {
        self.data.as_slice()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, MultiStack};

    #[test]
    fn snapshot_sections() {
        let memory = Memory::new(MultiStack::<u16>::new(2, 3).to_bytes());

        assert_eq!(memory.len(), 16 + 6 * 2 + 2 * 8 + 2 * 8);
        assert_eq!(memory.data_slice(0, 8).unwrap(), &6u64.to_ne_bytes());
        assert_eq!(memory.data_slice(8, 8).unwrap(), &2u64.to_ne_bytes());

        let starts_offset = 16 + 6 * 2;
        assert_eq!(
            memory.data_slice(starts_offset + 8, 8).unwrap(),
            &3u64.to_ne_bytes()
        );
        assert!(matches!(
            memory.data_slice(memory.len() - 4, 8),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn empty_buffer() {
        let memory = Memory::new(vec![]);

        assert!(memory.is_empty());
        assert!(memory.data_slice(0, 1).is_err());
        assert!(memory.data_slice(1, 0).is_err());
        let empty_slice: &[u8] = &[];
        assert_eq!(memory.data_slice(0, 0).unwrap(), empty_slice);
    }

    #[test]
    fn offset_overflow() {
        let memory = Memory::new(vec![0x00; 100]);
        assert!(matches!(
            memory.data_slice(usize::MAX, 1),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn from_reader() {
        let source: &[u8] = &[9, 8, 7];
        let memory = Memory::from_reader(source).unwrap();
        assert_eq!(memory.data(), &[9, 8, 7]);
    }

    struct Unreadable;

    impl std::io::Read for Unreadable {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device gone"))
        }
    }

    #[test]
    fn from_reader_failure() {
        match Memory::from_reader(Unreadable) {
            Err(error @ Error::FileError { .. }) => {
                assert_eq!(error.operation(), Some("read_from"));
                assert!(error.location().unwrap().0.ends_with("memory.rs"));
            }
            other => panic!("Expected FileError, got {other:?}"),
        }
    }
}
