//! Validation configuration for restoring persisted containers
//!
//! Snapshots and text input come from outside the process and may be truncated, hand
//! edited or simply written by a different program. This module decides how much of
//! that input is checked before a restored container is handed to the caller.

/// Capacity limit of the [`LoadConfig::minimal`] and [`LoadConfig::strict`] presets.
///
/// A restored structure allocates every declared slot up front, so untrusted input is
/// capped at 16 Mi slots unless the caller raises the limit.
pub const DEFAULT_MAX_CAPACITY: usize = 1 << 24;

/// Configuration for checks applied while restoring a [`crate::MultiStack`]
///
/// The decoders always reject input they cannot read (truncated sections, unparsable
/// tokens, invalid element encodings). The switches here cover checks beyond that:
/// - Boundary arrays that violate the region invariants
/// - Bytes or tokens left over after the last section
/// - Structures larger than the caller is willing to allocate
///
/// # Examples
///
/// ```rust
/// use multistack::{LoadConfig, MultiStack};
///
/// let original: MultiStack<u16> = MultiStack::new(2, 8);
/// let bytes = original.to_bytes();
///
/// let limited = LoadConfig { max_capacity: Some(4), ..LoadConfig::default() };
/// assert!(MultiStack::<u16>::from_bytes_with(&bytes, &limited).is_err());
/// assert!(MultiStack::<u16>::from_bytes_with(&bytes, &LoadConfig::minimal()).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadConfig {
    /// Run the region invariant check on the restored boundary arrays (recommended: always true)
    /// Without it a forged snapshot can produce a structure whose later operations panic
    pub validate_boundaries: bool,

    /// Reject snapshots with bytes after the tops array and text with tokens after the
    /// last region
    pub reject_trailing_data: bool,

    /// Largest accepted total capacity, `None` for no limit
    pub max_capacity: Option<usize>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl LoadConfig {
    /// Creates a configuration that performs no checks beyond decoding
    ///
    /// **Warning**: Use only for input this process wrote itself. Without a capacity
    /// limit a forged text header can request more memory than the system has.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            validate_boundaries: false,
            reject_trailing_data: false,
            max_capacity: None,
        }
    }

    /// Creates a configuration that validates boundaries but tolerates trailing data
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            validate_boundaries: true,
            reject_trailing_data: false,
            max_capacity: Some(DEFAULT_MAX_CAPACITY),
        }
    }

    /// Creates a configuration with all checks enabled and the default capacity limit
    #[must_use]
    pub fn strict() -> Self {
        Self {
            validate_boundaries: true,
            reject_trailing_data: true,
            max_capacity: Some(DEFAULT_MAX_CAPACITY),
        }
    }

    /// Returns a copy of this configuration with `max_capacity` set
    #[must_use]
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// Checks `capacity` against `max_capacity`
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the capacity exceeds the limit.
    pub(crate) fn check_capacity(&self, capacity: usize) -> crate::Result<()> {
        match self.max_capacity {
            Some(limit) if capacity > limit => Err(malformed_error!(
                "Capacity {} exceeds configured limit {}",
                capacity,
                limit
            )),
            _ => Ok(()),
        }
    }
}
