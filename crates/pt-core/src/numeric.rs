use crate::PtError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PtError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PtError::NonFinite { what, value: v })
    }
}

/// Linear interpolation of `y` at `x` between `(x1, y1)` and `(x2, y2)`.
///
/// Returns `y1` unmodified when `x2 == x1` (degenerate single-point interval)
/// rather than dividing by zero.
pub fn lerp(x: Real, x1: Real, x2: Real, y1: Real, y2: Real) -> Real {
    if x2 == x1 {
        return y1;
    }
    y1 + (x - x1) * (y2 - y1) / (x2 - x1)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lerp_inside_the_interval_stays_within_bounds(
            frac in 0.0_f64..=1.0_f64,
            y1 in -1.0e6_f64..1.0e6_f64,
            y2 in -1.0e6_f64..1.0e6_f64,
        ) {
            let (x1, x2) = (2.0, 5.0);
            let x = x1 + frac * (x2 - x1);
            let y = lerp(x, x1, x2, y1, y2);
            let (lo, hi) = (y1.min(y2), y1.max(y2));
            prop_assert!(y >= lo - 1e-9 * hi.abs().max(1.0));
            prop_assert!(y <= hi + 1e-9 * hi.abs().max(1.0));
        }
    }
}
