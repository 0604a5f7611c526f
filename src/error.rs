use strum::{Display, EnumIter, IntoStaticStr};
use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds {
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! invalid_region {
    ($operation:expr, $region:expr, $count:expr) => {
        crate::Error::InvalidRegion {
            operation: $operation,
            region: $region,
            count: $count,
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! invalid_offset {
    ($operation:expr, $region:expr, $offset:expr, $size:expr) => {
        crate::Error::InvalidOffset {
            operation: $operation,
            region: $region,
            offset: $offset,
            size: $size,
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! empty_region {
    ($operation:expr, $region:expr) => {
        crate::Error::EmptyRegion {
            operation: $operation,
            region: $region,
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! saturated_error {
    ($operation:expr, $region:expr, $capacity:expr) => {
        crate::Error::StructureSaturated {
            operation: $operation,
            region: $region,
            capacity: $capacity,
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! structure_empty {
    ($operation:expr) => {
        crate::Error::StructureEmpty {
            operation: $operation,
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! collection_full {
    ($operation:expr, $capacity:expr) => {
        crate::Error::CollectionFull {
            operation: $operation,
            capacity: $capacity,
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! collection_empty {
    ($operation:expr) => {
        crate::Error::CollectionEmpty {
            operation: $operation,
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! invalid_index {
    ($operation:expr, $index:expr, $len:expr) => {
        crate::Error::InvalidIndex {
            operation: $operation,
            index: $index,
            len: $len,
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! io_error {
    ($operation:expr, $source:expr) => {
        crate::Error::FileError {
            operation: $operation,
            source: $source,
            file: file!(),
            line: line!(),
        }
    };
}

/// Short tag identifying the kind of an [`Error`].
///
/// Tags render in `snake_case` (`invalid_region`, `structure_saturated`, ...) and are
/// what [`Error::describe`] prints first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Region index is not below the region count
    InvalidRegion,
    /// Logical position is not below the region size
    InvalidOffset,
    /// Pop or top on a region without elements
    EmptyRegion,
    /// Every region is full, no donor for a repack
    StructureSaturated,
    /// Global minimum requested on a structure without elements
    StructureEmpty,
    /// Single-region stack or queue is full
    CollectionFull,
    /// Single-region stack or queue is empty
    CollectionEmpty,
    /// Index outside a single-region stack or queue
    InvalidIndex,
    /// Input could not be decoded or violates the boundary invariants
    Malformed,
    /// Binary input ended early
    OutOfBounds,
    /// Filesystem, stream or memory mapping failure
    IoError,
}

/// The generic Error type, which covers every failure this library reports.
///
/// Each variant raised by a container or I/O operation carries the name of the
/// operation that failed together with the source location (`file!()`/`line!()`) of the
/// check that raised it. Nothing is recovered internally: an operation that returns an error has
/// left its receiver exactly as it was before the call.
///
/// # Error Categories
///
/// ## Region Errors
/// - [`Error::InvalidRegion`] - Region index out of range
/// - [`Error::InvalidOffset`] - Position past the top of a region
/// - [`Error::EmptyRegion`] - Pop/top on an empty region
/// - [`Error::StructureSaturated`] - Push with every region full
/// - [`Error::StructureEmpty`] - Minimum of a structure without elements
///
/// ## Single-Region Collections
/// - [`Error::CollectionFull`], [`Error::CollectionEmpty`], [`Error::InvalidIndex`]
///
/// ## Serialization and I/O
/// - [`Error::Malformed`] - Corrupt snapshot or text input
/// - [`Error::OutOfBounds`] - Truncated snapshot
/// - [`Error::FileError`] - Filesystem, stream and memory mapping errors
///
/// # Examples
///
/// ```rust
/// use multistack::{Error, MultiStack};
///
/// let mut stacks: MultiStack<u32> = MultiStack::new(2, 1);
/// stacks.push(0, 1)?;
/// stacks.push(1, 2)?;
///
/// match stacks.push(0, 3) {
///     Err(Error::StructureSaturated { region, .. }) => assert_eq!(region, 0),
///     other => panic!("unexpected {other:?}"),
/// }
/// # Ok::<(), multistack::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The region index is not below the number of regions.
    #[error("{operation}: region {region} out of range for {count} regions - {file}:{line}")]
    InvalidRegion {
        /// Operation that received the index
        operation: &'static str,
        /// The rejected region index
        region: usize,
        /// Number of regions in the structure
        count: usize,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The logical position is not below the current size of the region.
    #[error("{operation}: offset {offset} past size {size} of region {region} - {file}:{line}")]
    InvalidOffset {
        /// Operation that received the offset
        operation: &'static str,
        /// Region the offset was applied to
        region: usize,
        /// The rejected offset
        offset: usize,
        /// Size of the region at the time of the call
        size: usize,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Pop or top on a region that holds no elements.
    #[error("{operation}: region {region} is empty - {file}:{line}")]
    EmptyRegion {
        /// Operation that found the region empty
        operation: &'static str,
        /// The empty region
        region: usize,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A push targeted a full region while every other region was full as well.
    #[error("{operation}: all {capacity} slots in use, region {region} cannot grow - {file}:{line}")]
    StructureSaturated {
        /// Operation that needed the repack
        operation: &'static str,
        /// Region the push targeted
        region: usize,
        /// Total slot count of the structure
        capacity: usize,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The structure holds no elements at all.
    #[error("{operation}: structure holds no elements - {file}:{line}")]
    StructureEmpty {
        /// Operation that required at least one element
        operation: &'static str,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A single-region stack or queue has no free slot left.
    #[error("{operation}: collection is full ({capacity} slots) - {file}:{line}")]
    CollectionFull {
        /// Operation that needed a free slot
        operation: &'static str,
        /// Capacity of the collection
        capacity: usize,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A single-region stack or queue holds no elements.
    #[error("{operation}: collection is empty - {file}:{line}")]
    CollectionEmpty {
        /// Operation that required an element
        operation: &'static str,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Index past the length of a single-region stack or queue.
    #[error("{operation}: index {index} out of range for length {len} - {file}:{line}")]
    InvalidIndex {
        /// Operation that received the index
        operation: &'static str,
        /// The rejected index
        index: usize,
        /// Length of the collection
        len: usize,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Input could not be decoded.
    ///
    /// Raised by the snapshot and text decoders for unparsable tokens, impossible header
    /// values and restored boundary arrays that violate the region invariants.
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A binary read would have gone past the end of the input.
    #[error("Out of Bound read would have occurred! - {file}:{line}")]
    OutOfBounds {
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Reading, writing or mapping a file or stream failed.
    #[error("{operation}: {source} - {file}:{line}")]
    FileError {
        /// Operation that performed the I/O
        operation: &'static str,
        /// The underlying I/O error
        source: std::io::Error,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },
}

impl Error {
    /// Returns the tag of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidRegion { .. } => ErrorKind::InvalidRegion,
            Error::InvalidOffset { .. } => ErrorKind::InvalidOffset,
            Error::EmptyRegion { .. } => ErrorKind::EmptyRegion,
            Error::StructureSaturated { .. } => ErrorKind::StructureSaturated,
            Error::StructureEmpty { .. } => ErrorKind::StructureEmpty,
            Error::CollectionFull { .. } => ErrorKind::CollectionFull,
            Error::CollectionEmpty { .. } => ErrorKind::CollectionEmpty,
            Error::InvalidIndex { .. } => ErrorKind::InvalidIndex,
            Error::Malformed { .. } => ErrorKind::Malformed,
            Error::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            Error::FileError { .. } => ErrorKind::IoError,
        }
    }

    /// Returns the name of the operation that raised this error, if it carries one.
    #[must_use]
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Error::InvalidRegion { operation, .. }
            | Error::InvalidOffset { operation, .. }
            | Error::EmptyRegion { operation, .. }
            | Error::StructureSaturated { operation, .. }
            | Error::StructureEmpty { operation, .. }
            | Error::CollectionFull { operation, .. }
            | Error::CollectionEmpty { operation, .. }
            | Error::InvalidIndex { operation, .. }
            | Error::FileError { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Returns the source location (`file`, `line`) of the check that raised this error.
    #[must_use]
    pub fn location(&self) -> Option<(&'static str, u32)> {
        match self {
            Error::InvalidRegion { file, line, .. }
            | Error::InvalidOffset { file, line, .. }
            | Error::EmptyRegion { file, line, .. }
            | Error::StructureSaturated { file, line, .. }
            | Error::StructureEmpty { file, line, .. }
            | Error::CollectionFull { file, line, .. }
            | Error::CollectionEmpty { file, line, .. }
            | Error::InvalidIndex { file, line, .. }
            | Error::Malformed { file, line, .. }
            | Error::FileError { file, line, .. }
            | Error::OutOfBounds { file, line } => Some((*file, *line)),
        }
    }

    /// Multi-line report of tag, operation and location.
    ///
    /// ```rust
    /// use multistack::MultiStack;
    ///
    /// let stacks: MultiStack<u8> = MultiStack::new(1, 1);
    /// let report = stacks.size(4).unwrap_err().describe();
    /// assert!(report.starts_with("Error: invalid_region"));
    /// assert!(report.contains("Operation: size"));
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        let mut report = format!("Error: {}", self.kind());
        if let Some(operation) = self.operation() {
            report.push_str(&format!("\nOperation: {operation}"));
        }
        if let Some((file, line)) = self.location() {
            report.push_str(&format!("\nFile: {file}\nLine: {line}"));
        }
        report.push_str(&format!("\nDetail: {self}"));
        report
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn kind_tags_are_snake_case() {
        assert_eq!(ErrorKind::InvalidRegion.to_string(), "invalid_region");
        assert_eq!(ErrorKind::StructureSaturated.to_string(), "structure_saturated");
        let tag: &'static str = ErrorKind::IoError.into();
        assert_eq!(tag, "io_error");

        for kind in ErrorKind::iter() {
            let tag = kind.to_string();
            assert!(!tag.is_empty());
            assert_eq!(tag, tag.to_lowercase());
        }
    }

    #[test]
    fn macros_capture_context() {
        let error = invalid_region!("push", 7, 3);
        assert_eq!(error.kind(), ErrorKind::InvalidRegion);
        assert_eq!(error.operation(), Some("push"));

        let (file, line) = error.location().unwrap();
        assert!(file.ends_with("error.rs"));
        assert!(line > 0);
    }

    #[test]
    fn describe_lists_all_parts() {
        let error = empty_region!("pop", 2);
        let report = error.describe();

        assert!(report.contains("Error: empty_region"));
        assert!(report.contains("Operation: pop"));
        assert!(report.contains("File: "));
        assert!(report.contains("region 2 is empty"));
    }

    #[test]
    fn io_errors_carry_context() {
        let error = io_error!(
            "load_text",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone")
        );
        assert_eq!(error.kind(), ErrorKind::IoError);
        assert_eq!(error.operation(), Some("load_text"));

        let (file, line) = error.location().unwrap();
        assert!(file.ends_with("error.rs"));
        assert!(line > 0);

        let report = error.describe();
        assert!(report.starts_with("Error: io_error\nOperation: load_text\nFile: "));
        assert!(report.contains("Detail: load_text: gone"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn malformed_formats_message() {
        let error = malformed_error!("bad token {} at {}", "x", 4);
        match error {
            Error::Malformed { message, .. } => assert_eq!(message, "bad token x at 4"),
            _ => panic!("Expected Malformed"),
        }
    }
}
