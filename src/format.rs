//! Fixed-precision, column-aligned text rendering shared by every value type.

use crate::float_types::Real;
use std::fmt;

/// Number of fractional digits printed for every component.
///
/// This counts digits after the point, not significant digits: `123.5` prints as `123.50000000`.
pub const PRECISION: usize = 8;

/// Width that fits every value right-aligned in a common column.
///
/// Driven by the widest magnitude, plus one column for a sign when any
/// value is negative.
pub fn field_width(values: &[Real]) -> usize {
    let widest = values
        .iter()
        .map(|v| format!("{:.*}", PRECISION, v.abs()).len())
        .max()
        .unwrap_or(0);
    let sign = values.iter().any(|v| v.is_sign_negative() && !v.is_nan());
    widest + usize::from(sign)
}

/// Writes `values` right-aligned to `width`, separated by `separator`.
pub(crate) fn write_row(
    f: &mut fmt::Formatter<'_>,
    values: &[Real],
    width: usize,
    separator: &str,
) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{:>width$.prec$}", value, width = width, prec = PRECISION)?;
    }
    Ok(())
}
