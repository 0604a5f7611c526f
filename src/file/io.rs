//! Fixed-width raw encoding of slot values for binary snapshots.
//!
//! Snapshots store every slot of a [`crate::MultiStack`] as a fixed number of bytes in
//! native byte order. The element type decides its own representation by implementing
//! [`crate::file::io::SlotIO`]; the library never reinterprets memory generically.
//!
//! # Key Components
//!
//! - [`crate::file::io::SlotIO`] - Trait defining the raw representation of a slot value
//! - [`crate::file::io::read_ne_at`] - Read a value at an offset, advancing the offset
//! - [`crate::file::io::write_ne`] - Append a value to an output buffer
//!
//! ## Supported Types
//! - **Unsigned integers**: `u8`, `u16`, `u32`, `u64`, `u128`, `usize`
//! - **Signed integers**: `i8`, `i16`, `i32`, `i64`, `i128`, `isize`
//! - **Floating point**: `f32`, `f64`
//! - **Other**: `bool` (one byte, `0` or `1`), `char` (its `u32` scalar value)
//!
//! # Examples
//!
//! ```rust
//! use multistack::file::io::{read_ne_at, write_ne};
//!
//! let mut buffer = Vec::new();
//! write_ne(&mut buffer, &7u16);
//! write_ne(&mut buffer, &'x');
//!
//! let mut offset = 0;
//! let number: u16 = read_ne_at(&buffer, &mut offset)?;
//! let letter: char = read_ne_at(&buffer, &mut offset)?;
//! assert_eq!((number, letter), (7, 'x'));
//! assert_eq!(offset, 6);
//! # Ok::<(), multistack::Error>(())
//! ```
//!
//! # Portability
//!
//! Native byte order and `usize`/`isize` widths make snapshots platform specific.
//! Exchanging them between machines with different endianness or pointer width is the
//! caller's responsibility.

use crate::Result;

/// Fixed-width raw representation of a slot value.
///
/// Each implementation names the byte array it encodes to through the `Bytes`
/// associated type (e.g. `[u8; 4]` for `u32`). Decoding is fallible because not every
/// bit pattern is a valid value of every type (`bool`, `char`).
///
/// # Examples
///
/// Implementing the trait for a caller-defined element type:
///
/// ```rust
/// use multistack::{file::io::SlotIO, Result};
///
/// #[derive(Clone, Copy, Default, PartialEq, PartialOrd)]
/// struct Tick(u32);
///
/// impl SlotIO for Tick {
///     type Bytes = [u8; 4];
///
///     fn from_ne_bytes(bytes: Self::Bytes) -> Result<Self> {
///         Ok(Tick(u32::from_ne_bytes(bytes)))
///     }
///
///     fn to_ne_bytes(&self) -> Self::Bytes {
///         self.0.to_ne_bytes()
///     }
/// }
/// ```
pub trait SlotIO: Sized {
    /// Byte array holding the encoded value.
    type Bytes: Sized + AsRef<[u8]> + for<'a> TryFrom<&'a [u8]>;

    /// Decode a value from its native-endian bytes
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the bytes do not form a valid value.
    fn from_ne_bytes(bytes: Self::Bytes) -> Result<Self>;

    /// Encode a value to its native-endian bytes
    fn to_ne_bytes(&self) -> Self::Bytes;
}

macro_rules! impl_slot_io {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SlotIO for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn from_ne_bytes(bytes: Self::Bytes) -> Result<Self> {
                    Ok(<$ty>::from_ne_bytes(bytes))
                }

                fn to_ne_bytes(&self) -> Self::Bytes {
                    <$ty>::to_ne_bytes(*self)
                }
            }
        )*
    };
}

impl_slot_io!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize, f32, f64);

impl SlotIO for bool {
    type Bytes = [u8; 1];

    fn from_ne_bytes(bytes: Self::Bytes) -> Result<Self> {
        match bytes[0] {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(malformed_error!("Invalid bool slot value - {}", other)),
        }
    }

    fn to_ne_bytes(&self) -> Self::Bytes {
        [u8::from(*self)]
    }
}

impl SlotIO for char {
    type Bytes = [u8; 4];

    fn from_ne_bytes(bytes: Self::Bytes) -> Result<Self> {
        let scalar = u32::from_ne_bytes(bytes);
        char::from_u32(scalar)
            .ok_or_else(|| malformed_error!("Invalid char slot value - 0x{:X}", scalar))
    }

    fn to_ne_bytes(&self) -> Self::Bytes {
        u32::from(*self).to_ne_bytes()
    }
}

/// Number of bytes a value of `T` occupies in a snapshot.
#[must_use]
pub fn encoded_width<T: SlotIO>() -> usize {
    std::mem::size_of::<T::Bytes>()
}

/// Safely reads a value of type `T` in native byte order from a data buffer at a specific offset.
///
/// The offset is advanced by the encoded width of `T` after a successful read and left
/// untouched on failure.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes, or the
/// decoding error of `T`.
pub fn read_ne_at<T: SlotIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = encoded_width::<T>();
    let Some(end) = offset.checked_add(type_len) else {
        return Err(out_of_bounds_error!());
    };
    if end > data.len() {
        return Err(out_of_bounds_error!());
    }

    let Ok(read) = <T::Bytes as TryFrom<&[u8]>>::try_from(&data[*offset..end]) else {
        return Err(out_of_bounds_error!());
    };

    let value = T::from_ne_bytes(read)?;
    *offset = end;
    Ok(value)
}

/// Appends the native-endian encoding of `value` to `out`.
pub fn write_ne<T: SlotIO>(out: &mut Vec<u8>, value: &T) {
    out.extend_from_slice(value.to_ne_bytes().as_ref());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn widths() {
        assert_eq!(encoded_width::<u8>(), 1);
        assert_eq!(encoded_width::<i32>(), 4);
        assert_eq!(encoded_width::<f64>(), 8);
        assert_eq!(encoded_width::<bool>(), 1);
        assert_eq!(encoded_width::<char>(), 4);
        assert_eq!(encoded_width::<usize>(), std::mem::size_of::<usize>());
    }

    #[test]
    fn read_sequence() {
        let mut data = Vec::new();
        write_ne(&mut data, &0x0102u16);
        write_ne(&mut data, &-5i64);
        write_ne(&mut data, &1.5f32);
        write_ne(&mut data, &true);

        let mut offset = 0;
        assert_eq!(read_ne_at::<u16>(&data, &mut offset).unwrap(), 0x0102);
        assert_eq!(read_ne_at::<i64>(&data, &mut offset).unwrap(), -5);
        assert_eq!(read_ne_at::<f32>(&data, &mut offset).unwrap(), 1.5);
        assert!(read_ne_at::<bool>(&data, &mut offset).unwrap());
        assert_eq!(offset, data.len());
    }

    #[test]
    fn read_past_end_keeps_offset() {
        let data = [0x01, 0x02, 0x03];
        let mut offset = 1;

        let result = read_ne_at::<u32>(&data, &mut offset);
        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
        assert_eq!(offset, 1);

        let mut offset = usize::MAX;
        assert!(read_ne_at::<u8>(&data, &mut offset).is_err());
    }

    #[test]
    fn invalid_bool() {
        let mut offset = 0;
        let result = read_ne_at::<bool>(&[2], &mut offset);
        assert!(matches!(result, Err(Error::Malformed { .. })));
        assert_eq!(offset, 0);
    }

    #[test]
    fn invalid_char() {
        let data = 0xD800u32.to_ne_bytes();
        let mut offset = 0;
        let result = read_ne_at::<char>(&data, &mut offset);
        assert!(matches!(result, Err(Error::Malformed { .. })));
    }

    #[test]
    fn char_uses_scalar_value() {
        let mut data = Vec::new();
        write_ne(&mut data, &'ß');
        assert_eq!(data, 0xDFu32.to_ne_bytes());
    }
}
