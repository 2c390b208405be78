//! The rounding mode enum exposed on the public API.

/// How to resolve a coefficient that has more digits than the target
/// envelope allows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Truncate toward zero.
    Down,
    /// Round half away from zero.
    HalfUp,
    /// Round half to even (banker's rounding). The default.
    HalfEven,
    /// Round away from zero on any nonzero remainder.
    Up,
}

impl Default for RoundingMode {
    fn default() -> Self {
        RoundingMode::HalfEven
    }
}
