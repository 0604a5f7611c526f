//! # multistack Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the multistack library. Import this module to get quick access to the containers,
//! the error type and the persistence settings.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all multistack operations
pub use crate::Error;

/// Tag identifying the kind of an [`Error`]
pub use crate::ErrorKind;

/// The result type used throughout multistack
pub use crate::Result;

/// Validation settings applied when restoring snapshots and text input
pub use crate::LoadConfig;

// ================================================================================================
// Containers
// ================================================================================================

/// `k` stacks sharing one fixed-capacity buffer
pub use crate::MultiStack;

/// Fixed-capacity single-region collections
pub use crate::{Queue, Stack};

// ================================================================================================
// Persistence
// ================================================================================================

/// Fixed-width element encoding used by binary snapshots
pub use crate::SlotIO;

/// Snapshot byte sources
pub use crate::file::{Backend, Memory, Physical};
