//! The formatter: renders a `Decimal` back to the shortest text that the
//! parser reads back bit-for-bit, always in plain (non-scientific)
//! notation with the scale's trailing zeros preserved.

use crate::decimal::Decimal;
use crate::wide::{to_digit_string, U256};
use std::fmt;

/// Renders `d` in plain decimal notation, e.g. `-12.340`.
pub(crate) fn format(d: &Decimal) -> String {
    let digits = to_digit_string(U256::from_u128(d.coefficient()));
    let scale = d.scale() as usize;

    let mut body = if scale == 0 {
        digits
    } else if digits.len() <= scale {
        let mut s = String::with_capacity(scale + 2);
        s.push_str("0.");
        for _ in 0..(scale - digits.len()) {
            s.push('0');
        }
        s.push_str(&digits);
        s
    } else {
        let split = digits.len() - scale;
        let mut s = String::with_capacity(digits.len() + 1);
        s.push_str(&digits[..split]);
        s.push('.');
        s.push_str(&digits[split..]);
        s
    };

    if d.is_sign_negative() {
        body.insert(0, '-');
    }
    body
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}
