use crate::float_types::{self, Real};

/// Tolerance-based equality, shared by scalars and every value type in the crate.
///
/// All implementations compare against [`float_types::tolerance`], so
/// `a.is_close(&b)` means the same thing whether `a` is a `Real`, a vector,
/// a matrix or a quaternion.
///
/// ```
/// use orient3::{IsClose, Vector3};
/// assert!(0.3_f64.is_close(&(0.1 + 0.2)));
/// assert!(Vector3::new(1.0, 0.0, 0.0).is_close(&Vector3::unit_x()));
/// ```
pub trait IsClose {
    fn is_close(&self, other: &Self) -> bool;

    /// Negation of [`IsClose::is_close`].
    fn is_far(&self, other: &Self) -> bool {
        !self.is_close(other)
    }
}

impl IsClose for Real {
    #[inline]
    fn is_close(&self, other: &Self) -> bool {
        float_types::is_close(*self, *other)
    }
}

impl<const N: usize> IsClose for [Real; N] {
    fn is_close(&self, other: &Self) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| float_types::is_close(*a, *b))
    }
}
