// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
//#![deny(unsafe_code)]
// - 'file/physical.rs' uses mmap to map a snapshot into memory

//! # multistack
//!
//! Several LIFO stacks sharing one fixed-capacity buffer. The buffer is split into
//! equally sized regions at construction; when a region runs out of room, its
//! boundaries are shifted so it borrows a slot from the nearest region that still has
//! space. The structure only rejects a push once every slot of the buffer is in use.
//!
//! ## Features
//!
//! - **Shared capacity** - `k` stacks over one contiguous `Vec<T>`, no per-stack allocation
//! - **Boundary repacking** - full regions borrow free slots instead of failing
//! - **Binary snapshots** - native-endian dump and memory-mapped restore
//! - **Text I/O** - compact rendering plus a whitespace-delimited input format
//! - **Single-region collections** - fixed-capacity [`Stack`] and [`Queue`]
//!
//! ## Quick Start
//!
//! ```rust
//! use multistack::prelude::*;
//!
//! let mut stacks: MultiStack<char> = MultiStack::new(3, 3);
//! for letter in ['a', 'b', 'c'] {
//!     stacks.push(0, letter)?;
//! }
//! for letter in ['f', 'g', 'h'] {
//!     stacks.push(1, letter)?;
//! }
//! stacks.push(2, 'j')?;
//! assert_eq!(stacks.to_string(), "{[a,b,c],[f,g,h],[j]}\n");
//!
//! // Region 1 is full and borrows a slot from region 2
//! stacks.push(1, 'k')?;
//! assert_eq!(stacks.to_string(), "{[a,b,c],[f,g,h,k],[j]}\n");
//! assert_eq!(stacks.region_starts(), &[0, 3, 7]);
//! # Ok::<(), multistack::Error>(())
//! ```
//!
//! ## Persistence
//!
//! ```rust,no_run
//! use multistack::{LoadConfig, MultiStack};
//!
//! let mut stacks: MultiStack<u32> = MultiStack::new(4, 16);
//! stacks.push(3, 7)?;
//! stacks.save("regions.bin")?;
//!
//! let restored = MultiStack::<u32>::open_with("regions.bin", &LoadConfig::strict())?;
//! assert_eq!(restored, stacks);
//! # Ok::<(), multistack::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). Every error records the
//! operation and source location that raised it:
//!
//! ```rust
//! use multistack::{Error, MultiStack};
//!
//! let mut stacks: MultiStack<i32> = MultiStack::new(2, 1);
//! match stacks.pop(3) {
//!     Err(Error::InvalidRegion { region, count, .. }) => {
//!         assert_eq!((region, count), (3, 2));
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! ## Development and Testing
//!
//! ### Fuzzing
//!
//! ```bash
//! cargo +nightly fuzz run snapshot --release
//! cargo +nightly fuzz run text --release
//! ```
//!
//! ### Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```
#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use multistack::prelude::*;
///
/// let mut stack: Stack<u8> = Stack::new(2);
/// stack.push(1)?;
/// # Ok::<(), multistack::Error>(())
/// ```
pub mod prelude;

/// Validation settings for restoring snapshots and text input.
///
/// See [`config::LoadConfig`].
pub mod config;

/// Byte sources and decoders used by the persistence layer.
pub mod file;

/// The partitioned stack buffer.
///
/// # Key Types
///
/// - [`multistack::MultiStack`] - `k` stacks sharing one fixed-capacity buffer
pub mod multistack;

/// Fixed-capacity single-region stack and queue.
pub mod collections;

/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `multistack` Error type
///
/// See [`Error`] for the variants and the context each one carries.
pub use error::{Error, ErrorKind};

/// Restore-time validation settings.
pub use config::LoadConfig;

/// The partitioned stack buffer.
pub use multistack::MultiStack;

/// Single-region fixed-capacity collections.
pub use collections::{Queue, Stack};

/// Provides access to low-level snapshot decoding utilities.
///
/// The [`Parser`] type walks a binary snapshot with bounds checks, decoding
/// [`SlotIO`] values in native byte order.
pub use file::{io::SlotIO, parser::Parser};
