// Our Real scalar type:
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance used across the crate for every "is close" comparison.
/// Defaults to `1e-9`, but can be overridden:
///  1) **Build-time**: set env var `ORIENT3_TOLERANCE` (e.g. `ORIENT3_TOLERANCE=1e-12 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

const DEFAULT_TOLERANCE: Real = 1e-9;

/// Returns the current tolerance.
/// If not set yet, it tries `ORIENT3_TOLERANCE` (parsed as `Real`) and
/// falls back to [`DEFAULT_TOLERANCE`].
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        // Compile-time env if provided, inherited by dependencies
        if let Some(environment_variable) = option_env!("ORIENT3_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        DEFAULT_TOLERANCE
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `orient3::float_types::set_tolerance(1e-12);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// `true` when `a` and `b` differ by no more than [`tolerance`].
///
/// ```
/// use orient3::float_types::is_close;
/// assert!(is_close(0.1 + 0.2, 0.3));
/// assert!(!is_close(1.0, 1.001));
/// ```
#[inline]
pub fn is_close(a: Real, b: Real) -> bool {
    (a - b).abs() <= tolerance()
}

/// `acos` restricted to `[-1, 1]`, so a dot product that roundoff pushed just
/// past ±1 still yields `0` or `π` instead of `NaN`.
#[inline]
pub(crate) fn clamped_acos(value: Real) -> Real {
    value.clamp(-1.0, 1.0).acos()
}

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

/// π/2
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;
