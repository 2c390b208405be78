//! Wide-integer helpers: fixed-width unsigned integers beyond the native
//! `u128`, decimal digit counting, and the power-of-ten cache.
//!
//! Everything here is `pub(crate)`: these are implementation primitives for
//! the rounding engine (`crate::round`) and the arithmetic operators
//! (`crate::ops`), not part of the crate's public surface.

pub(crate) mod digits;
pub(crate) mod pow10;
pub(crate) mod uint;

pub(crate) use digits::{number_of_digits, parse_digits, to_digit_string};
pub(crate) use pow10::pow10;
pub(crate) use uint::{U256, U512};
