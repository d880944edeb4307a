//! Byte-order conversion for fixed-width unsigned integers.
//!
//! This crate replaces per-platform byte-swap aliases with one portable
//! surface: [`swap16`], [`swap32`] and [`swap64`] reverse the bytes of a
//! value, [`SwapBytes`] is their generic equivalent, and [`Endian`] names a
//! byte order for conversions and the checked slice codecs in [`bytes`].
//!
//! The swap implementation is fixed at build time. The default backend uses
//! the compiler's byte-swap intrinsic; enabling the `portable-swap` feature
//! selects an explicit shift-and-mask implementation instead. The public
//! behavior is identical either way and there is no runtime dispatch.
//!
//! # Example
//!
//! ```
//! use byteswap::{swap16, to_endian, from_endian, Endian};
//!
//! assert_eq!(swap16(0x1234), 0x3412);
//!
//! let wire = to_endian(0xCAFEu16, Endian::Big);
//! assert_eq!(from_endian(wire, Endian::Big), 0xCAFE);
//! ```

pub mod bytes;
mod endian;
mod errors;
mod swap;

pub use endian::{from_endian, to_endian, Endian};
pub use errors::BufferError;
pub use swap::{swap16, swap32, swap64, swap_slice, SwapBytes};
