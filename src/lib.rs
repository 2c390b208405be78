//! A 128-bit, base-10 fixed-precision decimal type for financial and
//! monetary calculations.
//!
//! [`Decimal`] stores its value as an unsigned 96-bit coefficient, a scale
//! (the number of digits right of the decimal point, `0..=28`), and a sign
//! bit, laid out bit-for-bit compatible with the Microsoft `DECIMAL` / .NET
//! `System.Decimal` type. Unlike a binary float, `1.1` is represented
//! exactly: there is no rounding error from the binary/decimal mismatch,
//! which is why this type (and not `f32`/`f64`) is the right tool for
//! money, prices, and other values defined in base 10.
//!
//! ```
//! use decimal128::Decimal;
//!
//! let price: Decimal = "19.99".parse().unwrap();
//! let quantity = Decimal::from_i64(3);
//! let total = price.checked_mul(&quantity).unwrap();
//! assert_eq!(total.to_string(), "59.97");
//! ```
//!
//! # Rounding
//!
//! Every operation whose exact mathematical result does not fit the 96-bit
//! coefficient or the `0..=28` scale falls back to [`RoundingMode`], which
//! defaults to `HalfEven` (banker's rounding) to match the convention of
//! both the underlying bit layout and most financial arithmetic.
//!
//! # Errors
//!
//! Fallible operations return [`Error`] / [`Result`]: [`Error::Overflow`]
//! when a result cannot fit the envelope, [`Error::DivisionByZero`] and
//! [`Error::InvalidOperation`] for the operations that have no defined
//! result, and [`Error::ConversionSyntax`] for unparseable text.

#![deny(
    rust_2018_idioms,
    trivial_numeric_casts,
    unreachable_pub,
    unused_must_use,
    unused_qualifications
)]

mod cmp;
mod decimal;
mod error;
mod format;
mod ops;
mod parse;
mod round;
mod rounding;
mod wide;

#[cfg(test)]
mod tests;

pub use crate::decimal::{Decimal, MAX_SCALE};
pub use crate::error::{Error, Result};
pub use crate::rounding::RoundingMode;

use core::ops::{Add, Div, Mul, Neg, Sub};

impl Decimal {
    /// `self + rhs`, rounding via `HALF_EVEN` if the sum overflows the
    /// current scale.
    pub fn checked_add(&self, rhs: &Decimal) -> Result<Decimal> {
        ops::add(self, rhs)
    }

    /// `self - rhs`.
    pub fn checked_sub(&self, rhs: &Decimal) -> Result<Decimal> {
        ops::add(self, &rhs.neg())
    }

    /// `self * rhs`.
    pub fn checked_mul(&self, rhs: &Decimal) -> Result<Decimal> {
        ops::mul(self, rhs)
    }

    /// `self / rhs`. Fails with [`Error::DivisionByZero`] if `rhs` is zero
    /// and `self` is not, or [`Error::InvalidOperation`] if both are zero.
    pub fn checked_div(&self, rhs: &Decimal) -> Result<Decimal> {
        ops::div(self, rhs)
    }

    /// The square root, via Newton-Raphson. Fails with
    /// [`Error::InvalidOperation`] for a negative operand.
    pub fn checked_sqrt(&self) -> Result<Decimal> {
        ops::sqrt(self)
    }
}

macro_rules! forward_fallible_op {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait for Decimal {
            type Output = Decimal;

            fn $method(self, rhs: Decimal) -> Decimal {
                self.$checked(&rhs)
                    .unwrap_or_else(|e| panic!("decimal {} overflowed or was invalid: {e}", stringify!($method)))
            }
        }

        impl $trait for &Decimal {
            type Output = Decimal;

            fn $method(self, rhs: &Decimal) -> Decimal {
                (*self).$checked(rhs)
                    .unwrap_or_else(|e| panic!("decimal {} overflowed or was invalid: {e}", stringify!($method)))
            }
        }
    };
}

forward_fallible_op!(Add, add, checked_add);
forward_fallible_op!(Sub, sub, checked_sub);
forward_fallible_op!(Mul, mul, checked_mul);
forward_fallible_op!(Div, div, checked_div);

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal::neg(&self)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal::neg(self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let s = <std::string::String as serde::Deserialize<'de>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
