//! The power-of-ten cache.
//!
//! This is the one piece of shared mutable state in the whole library. It
//! is append-only and idempotent: once `pow10(n)` has been computed it
//! never changes, so growing it under a mutex is sufficient to make it
//! safe to share across threads without poisoning arithmetic correctness
//! on a stale read.

use std::sync::Mutex;

use once_cell::sync::Lazy;

use super::uint::U256;

/// `U256` can hold at most 77 decimal digits (`10^77 < 2^256 <= 10^78`);
/// every quantity this crate ever widens into a `U256` (coefficients up to
/// 29 digits, scale-aligned up to +28 digits, 96x96 products up to 58
/// digits) stays comfortably under that ceiling, so the cache never needs
/// to grow past it.
const MAX_CACHED_EXPONENT: u32 = 77;

static CACHE: Lazy<Mutex<Vec<U256>>> = Lazy::new(|| Mutex::new(vec![U256::from_u64(1)]));

/// Returns `10^n` as a `U256`, or `None` if it would not fit (`n > 77`).
pub(crate) fn pow10(n: u32) -> Option<U256> {
    if n > MAX_CACHED_EXPONENT {
        return None;
    }
    let mut cache = CACHE.lock().expect("pow10 cache poisoned");
    while (cache.len() as u32) <= n {
        let next = cache
            .last()
            .copied()
            .expect("cache is never empty")
            .checked_mul_u64(10)
            .expect("pow10 table stays within MAX_CACHED_EXPONENT");
        log::trace!("extending pow10 cache to 10^{}", cache.len());
        cache.push(next);
    }
    Some(cache[n as usize])
}
