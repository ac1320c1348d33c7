//! Float helpers shared by the engine and its tests.

use crate::{UcError, UcResult};

/// Absolute and relative slack for comparing converted values.
///
/// Two values match when they differ by at most `abs`, or by at most `rel`
/// times the larger magnitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Tolerances {
    pub const fn new(abs: f64, rel: f64) -> Self {
        Self { abs, rel }
    }

    pub fn accepts(self, a: f64, b: f64) -> bool {
        let diff = (a - b).abs();
        diff <= self.abs || diff <= self.rel * a.abs().max(b.abs())
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::new(1e-12, 1e-9)
    }
}

pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    tol.accepts(a, b)
}

/// Pass `v` through unless it is `NaN` or infinite.
pub fn ensure_finite(v: f64, what: &'static str) -> UcResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(UcError::NonFinite { what, value: v })
    }
}
