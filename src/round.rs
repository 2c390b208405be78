//! The rounding engine: reducing an oversized wide integer back down to a
//! target digit count, and the specialised operation of fitting a value
//! back into the 96-bit coefficient envelope.

use crate::error::{Error, Result};
use crate::rounding::RoundingMode;
use crate::wide::{number_of_digits, pow10, U256, U512};

/// The largest coefficient a `Decimal` can hold: `2^96 - 1`.
pub(crate) const MAX_COEFFICIENT: u128 = 79_228_162_514_264_337_593_543_950_335;

/// Rounds `v` so that only its top `n` decimal digits are kept. `n` may be
/// negative (the result is then zero) or may exceed `v`'s digit count
/// (then `v` is returned unchanged).
///
/// Because rounding can carry (`999 -> 1000`), the returned value may have
/// one more digit than `n` requested; callers must re-check digit count.
pub(crate) fn round_to_digits(v: U256, n: i64, mode: RoundingMode) -> U256 {
    if n < 0 {
        return U256::from_u64(0);
    }
    let n = n as u32;
    let total = number_of_digits(v);
    if n >= total {
        return v;
    }
    let k = total - n;
    let ten_k = pow10(k).expect("digit count stays within the wide-integer ceiling");
    let (d, r) = v.divmod(&ten_k);

    match mode {
        RoundingMode::Down => d,
        RoundingMode::Up => {
            if r.is_zero() {
                d
            } else {
                d.checked_add(&U256::from_u64(1)).expect("rounded-up coefficient stays in range")
            }
        }
        RoundingMode::HalfUp => {
            let half = half_at(k);
            if r >= half {
                d.checked_add(&U256::from_u64(1)).expect("rounded-up coefficient stays in range")
            } else {
                d
            }
        }
        RoundingMode::HalfEven => {
            let half = half_at(k);
            if r > half {
                d.checked_add(&U256::from_u64(1)).expect("rounded-up coefficient stays in range")
            } else if r < half {
                d
            } else {
                let d_is_odd = d.divmod_u64(2).1 == 1;
                if d_is_odd {
                    d.checked_add(&U256::from_u64(1)).expect("rounded-up coefficient stays in range")
                } else {
                    d
                }
            }
        }
    }
}

/// `5 * 10^(k-1)`, the exact midpoint of the discarded `k` digits.
fn half_at(k: u32) -> U256 {
    let base = pow10(k - 1).expect("digit count stays within the wide-integer ceiling");
    base.checked_mul_u64(5).expect("5 * 10^(k-1) stays within the wide-integer ceiling")
}

/// Reduces `v` under `HALF_EVEN` until it fits in the 96-bit coefficient
/// envelope (`<= 2^96 - 1`). Returns the fitted coefficient and the number
/// of decimal digits that were removed from `v` to get there (the caller
/// subtracts this from its running scale).
///
/// Rounding can itself carry the candidate back out of the envelope (a
/// run of 9s rounding up gains a digit), so this retries with one more
/// digit removed whenever that happens, rather than special-casing the
/// single extra-carry digit.
pub(crate) fn truncate_to_max_coefficient(v: U256) -> (U256, u32) {
    let max = U256::from_u128(MAX_COEFFICIENT);
    if v <= max {
        return (v, 0);
    }

    let total = number_of_digits(v);
    let mut digits_to_remove = total.saturating_sub(29).max(1);
    loop {
        let target = total as i64 - digits_to_remove as i64;
        let candidate = round_to_digits(v, target, RoundingMode::HalfEven);
        if candidate <= max {
            return (candidate, digits_to_remove);
        }
        digits_to_remove += 1;
    }
}

/// Reduces a `U512` working value (division's and square root's prescaled
/// intermediates both land here) down to the 96-bit coefficient envelope,
/// dividing by ten under `HALF_EVEN` one digit at a time and giving up a
/// point of scale per digit removed. Used when the exact result of an
/// operation is computed at a wider precision than the final envelope can
/// hold.
pub(crate) fn fit_wide_coefficient(mut v: U512, mut scale: u32) -> Result<(u128, u32)> {
    loop {
        if let Some(narrowed) = v.narrow::<4>() {
            if let Some(value) = narrowed.to_u128() {
                if value <= MAX_COEFFICIENT {
                    return Ok((value, scale));
                }
            }
        }
        if scale == 0 {
            return Err(Error::Overflow(
                "result exceeds the 96-bit coefficient even at scale 0".to_string(),
            ));
        }
        let (d, r) = v.divmod_u64(10);
        v = if r > 5 {
            d.checked_add(&U512::from_u64(1)).expect("rounding up stays within U512")
        } else if r < 5 {
            d
        } else if d.divmod_u64(2).1 == 1 {
            d.checked_add(&U512::from_u64(1)).expect("rounding up stays within U512")
        } else {
            d
        };
        scale -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(s: &str) -> U256 {
        crate::wide::parse_digits(s.as_bytes()).unwrap()
    }

    #[test]
    fn half_even_carry_seed() {
        let v = u("792281625142643375935439503356");
        let result = round_to_digits(v, 29, RoundingMode::HalfEven);
        assert_eq!(result, u("79228162514264337593543950336"));
    }

    #[test]
    fn half_even_round_up_changes_digit_count() {
        let result = round_to_digits(U256::from_u64(997), 2, RoundingMode::HalfEven);
        assert_eq!(result, U256::from_u64(100));
    }

    #[test]
    fn half_even_is_parity_preserving() {
        // 2.5 rounds to 2 (even), 3.5 rounds to 4 (even).
        assert_eq!(round_to_digits(U256::from_u64(25), 1, RoundingMode::HalfEven), U256::from_u64(2));
        assert_eq!(round_to_digits(U256::from_u64(35), 1, RoundingMode::HalfEven), U256::from_u64(4));
    }

    #[test]
    fn modes_agree_away_from_the_midpoint() {
        let v = U256::from_u64(123);
        assert_eq!(round_to_digits(v, 2, RoundingMode::Down), U256::from_u64(12));
        assert_eq!(round_to_digits(v, 2, RoundingMode::Up), U256::from_u64(13));
        assert_eq!(round_to_digits(v, 2, RoundingMode::HalfUp), U256::from_u64(12));
        assert_eq!(round_to_digits(v, 2, RoundingMode::HalfEven), U256::from_u64(12));
    }

    #[test]
    fn negative_n_is_zero() {
        assert_eq!(round_to_digits(U256::from_u64(123), -1, RoundingMode::HalfEven), U256::from_u64(0));
    }

    #[test]
    fn unchanged_when_n_covers_all_digits() {
        assert_eq!(round_to_digits(U256::from_u64(123), 5, RoundingMode::HalfEven), U256::from_u64(123));
    }

    #[test]
    fn truncate_fits_max_unchanged() {
        let max = u("79228162514264337593543950335");
        let (v, removed) = truncate_to_max_coefficient(max);
        assert_eq!(v, max);
        assert_eq!(removed, 0);
    }

    #[test]
    fn truncate_general_case() {
        let v = u("792281625142643375935439503350"); // 30 digits, rounds down cleanly
        let (result, removed) = truncate_to_max_coefficient(v);
        assert_eq!(removed, 1);
        assert!(result <= U256::from_u128(MAX_COEFFICIENT));
        assert_eq!(result, u("79228162514264337593543950335"));
    }

    #[test]
    fn truncate_carry_past_max_retries_with_one_more_digit() {
        // 29-digit value one below MAX+1's last digit, forcing a carry that
        // would overflow 96 bits if stopped at 29 digits.
        let v = u("999999999999999999999999999999"); // 30 nines
        let (result, removed) = truncate_to_max_coefficient(v);
        assert!(result <= U256::from_u128(MAX_COEFFICIENT));
        assert!(removed >= 1);
    }

    #[test]
    fn fit_wide_coefficient_passes_through_when_small() {
        let v = U512::from_u128(12345);
        let (value, scale) = fit_wide_coefficient(v, 4).unwrap();
        assert_eq!(value, 12345);
        assert_eq!(scale, 4);
    }

    #[test]
    fn fit_wide_coefficient_reduces_oversized_value() {
        let v = U512::from_u128(MAX_COEFFICIENT).checked_mul(&U512::from_u64(100)).unwrap();
        let (value, scale) = fit_wide_coefficient(v, 30).unwrap();
        assert!(value <= MAX_COEFFICIENT);
        assert_eq!(scale, 28);
    }

    #[test]
    fn fit_wide_coefficient_overflows_at_scale_zero() {
        let huge = U512::from_u128(MAX_COEFFICIENT).checked_mul(&U512::from_u64(100)).unwrap();
        assert!(fit_wide_coefficient(huge, 1).is_err());
    }
}
