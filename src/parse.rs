//! The string parser.
//!
//! ```text
//! number      := sign? ( digits ('.' digits?)? | '.' digits ) exponent?
//! sign        := '+' | '-'
//! digits      := DIGIT+
//! exponent    := ('e'|'E') sign? digits
//! ```
//!
//! Surrounding whitespace is trimmed; underscores between digits are
//! permitted and ignored, matching the numeric-literal convention of the
//! language this crate is written in.

use crate::decimal::{Decimal, MAX_SCALE};
use crate::error::{Error, Result};
use crate::round::{round_to_digits, MAX_COEFFICIENT};
use crate::rounding::RoundingMode;
use crate::wide::{parse_digits, U256};
use std::str::FromStr;

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Cursor { bytes, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Reads a (possibly empty) run of `DIGIT ('_' DIGIT)*`, returning the
    /// digits with underscores stripped. Fails on a leading, trailing, or
    /// doubled underscore.
    fn read_digit_run(&mut self) -> Result<String> {
        let mut out = String::new();
        let mut last_was_digit = false;
        loop {
            match self.peek() {
                Some(b) if b.is_ascii_digit() => {
                    out.push(b as char);
                    last_was_digit = true;
                    self.pos += 1;
                }
                Some(b'_') if last_was_digit => {
                    // Only consume it if a digit follows; otherwise it's a
                    // trailing separator and not part of this run.
                    if matches!(self.bytes.get(self.pos + 1), Some(b) if b.is_ascii_digit()) {
                        self.pos += 1;
                        last_was_digit = false;
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
        Ok(out)
    }
}

fn syntax_error(input: &str) -> Error {
    Error::ConversionSyntax(format!("{input:?} is not a valid decimal literal"))
}

/// Parses `input` into a `Decimal`.
pub(crate) fn parse(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(syntax_error(input));
    }
    if !trimmed.is_ascii() {
        return Err(syntax_error(input));
    }

    let mut cursor = Cursor::new(trimmed.as_bytes());

    let negative = match cursor.peek() {
        Some(b'+') => {
            cursor.bump();
            false
        }
        Some(b'-') => {
            cursor.bump();
            true
        }
        _ => false,
    };

    let int_digits = cursor.read_digit_run()?;

    let mut frac_digits = String::new();
    let mut saw_dot = false;
    if cursor.peek() == Some(b'.') {
        saw_dot = true;
        cursor.bump();
        frac_digits = cursor.read_digit_run()?;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(syntax_error(input));
    }
    if int_digits.is_empty() && !saw_dot {
        return Err(syntax_error(input));
    }

    let mut explicit_exp: i64 = 0;
    if matches!(cursor.peek(), Some(b'e') | Some(b'E')) {
        cursor.bump();
        let exp_negative = match cursor.peek() {
            Some(b'+') => {
                cursor.bump();
                false
            }
            Some(b'-') => {
                cursor.bump();
                true
            }
            _ => false,
        };
        let exp_digits = cursor.read_digit_run()?;
        if exp_digits.is_empty() {
            return Err(syntax_error(input));
        }
        let magnitude: i64 = exp_digits.parse().map_err(|_| Error::Overflow(format!(
            "exponent {exp_digits:?} is too large"
        )))?;
        explicit_exp = if exp_negative { -magnitude } else { magnitude };
    }

    if !cursor.eof() {
        return Err(syntax_error(input));
    }

    let frac_len = frac_digits.len() as i64;
    let mut combined = int_digits;
    combined.push_str(&frac_digits);

    let mut coefficient = parse_digits(combined.as_bytes())
        .ok_or_else(|| Error::Overflow(format!("{input:?} has too many significant digits")))?;

    // Required scale: positive means digits to the right of the point.
    let mut required_scale = frac_len - explicit_exp;

    if required_scale > MAX_SCALE as i64 {
        let excess = (required_scale - MAX_SCALE as i64) as u32;
        coefficient = round_to_digits_by_removing(coefficient, excess);
        required_scale = MAX_SCALE as i64;
    } else if required_scale < 0 {
        let growth = (-required_scale) as u32;
        coefficient = grow_coefficient(coefficient, growth)
            .ok_or_else(|| Error::Overflow(format!("{input:?} is too large to represent")))?;
        required_scale = 0;
    }

    let mut scale = required_scale as u32;
    let max = U256::from_u128(MAX_COEFFICIENT);
    while coefficient > max {
        if scale == 0 {
            return Err(Error::Overflow(format!("{input:?} is too large to represent")));
        }
        coefficient = round_to_digits(coefficient, crate::wide::number_of_digits(coefficient) as i64 - 1, RoundingMode::HalfEven);
        scale -= 1;
    }

    let value = coefficient.to_u128().ok_or_else(|| {
        Error::internal("coefficient fit check passed but to_u128 failed")
    })?;

    Decimal::from_coefficient(value, scale, negative)
}

/// Removes `count` low-order digits from `v` under `HALF_EVEN`, used when
/// the literal's implied scale exceeds the maximum.
fn round_to_digits_by_removing(v: U256, count: u32) -> U256 {
    if count == 0 {
        return v;
    }
    let total = crate::wide::number_of_digits(v);
    let target = total as i64 - count as i64;
    round_to_digits(v, target, RoundingMode::HalfEven)
}

/// Multiplies `v` by `10^growth`, returning `None` on overflow of the
/// wide-integer staging buffer.
fn grow_coefficient(v: U256, growth: u32) -> Option<U256> {
    let factor = crate::wide::pow10(growth)?;
    v.checked_mul(&factor)
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
