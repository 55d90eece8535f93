//! `Matrix3`: a 3x3 real matrix with a memoized orthogonality classification,
//! plus the rotation, scaling and coordinate-system factories built on it.

use crate::errors::{ConversionError, exact_components};
use crate::float_types::{self, Real};
use crate::format;
use crate::traits::IsClose;
use crate::vector::Vector3;
use core::ops::{Add, Index, Mul, Sub};
use rand::Rng;
use std::fmt;

mod orthogonality;
use orthogonality::OrthogonalityCache;
pub use orthogonality::Orthogonality;

/// A 3x3 real matrix stored as three rows `m11..m33`.
///
/// Besides the nine entries a matrix carries a lazily resolved
/// [`Orthogonality`]. Matrices that are orthogonal by construction
/// (identity, rotations, coordinate systems, products and transposes of known
/// orthogonal matrices) start out resolved. The classification never
/// takes part in equality.
#[derive(Debug, Clone)]
pub struct Matrix3 {
    rows: [Vector3; 3],
    orthogonality: OrthogonalityCache,
}

impl Matrix3 {
    pub(crate) fn tagged(rows: [Vector3; 3], state: Orthogonality) -> Self {
        Matrix3 {
            rows,
            orthogonality: state.into(),
        }
    }

    /// Matrix with the given entries in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub fn new(
        m11: Real, m12: Real, m13: Real,
        m21: Real, m22: Real, m23: Real,
        m31: Real, m32: Real, m33: Real,
    ) -> Self {
        Self::from_rows(
            Vector3::new(m11, m12, m13),
            Vector3::new(m21, m22, m23),
            Vector3::new(m31, m32, m33),
        )
    }

    pub fn from_rows(r1: Vector3, r2: Vector3, r3: Vector3) -> Self {
        Self::tagged([r1, r2, r3], Orthogonality::Unknown)
    }

    pub fn from_columns(c1: Vector3, c2: Vector3, c3: Vector3) -> Self {
        Self::tagged(Self::transpose_rows([c1, c2, c3]), Orthogonality::Unknown)
    }

    pub fn zero() -> Self {
        Self::tagged([Vector3::zero(); 3], Orthogonality::NotOrthogonal)
    }

    pub fn identity() -> Self {
        Self::tagged(
            [Vector3::unit_x(), Vector3::unit_y(), Vector3::unit_z()],
            Orthogonality::Orthogonal,
        )
    }

    /// Matrix whose rows are each [`Vector3::random`].
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_rows(
            Vector3::random_with(rng),
            Vector3::random_with(rng),
            Vector3::random_with(rng),
        )
    }

    /// Diagonal matrix with `diagonal.x`, `diagonal.y`, `diagonal.z` on the diagonal.
    #[rustfmt::skip]
    pub fn diagonal(diagonal: Vector3) -> Self {
        Self::new(
            diagonal.x, 0.0, 0.0,
            0.0, diagonal.y, 0.0,
            0.0, 0.0, diagonal.z,
        )
    }

    /// **Mathematical Foundation: Directional Scaling**
    ///
    /// Scales by `factor` along `axis`, leaving the plane perpendicular to it unchanged:
    /// ```text
    /// S = I + (factor - 1) · û ûᵀ
    /// ```
    /// A zero `axis` has no direction and yields non-finite entries.
    pub fn create_scale(axis: Vector3, factor: Real) -> Self {
        let u = axis.unit();
        &Self::identity() + &(&Self::outer(u, u) * (factor - 1.0))
    }

    /// Orthonormal frame whose columns are `i`'s direction, `j` made perpendicular to
    /// `i` (one Gram-Schmidt step) and their cross product.
    ///
    /// The result is tagged orthogonal without checking.
    pub fn create_coordinate_system(i: Vector3, j: Vector3) -> Self {
        let i = i.unit();
        let j = j.perpendicular_to(&i).unit();
        let k = i.cross(&j);
        Self::tagged(Self::transpose_rows([i, j, k]), Orthogonality::Orthogonal)
    }

    /// **Mathematical Foundation: Rodrigues' Rotation Formula**
    ///
    /// Rotation by `theta` radians about `axis` (right-hand rule), with
    /// `c = cos θ`, `s = sin θ`, `t = 1 - c` and `(x, y, z) = û`:
    /// ```text
    ///     | t·x·x + c    t·x·y − s·z  t·x·z + s·y |
    /// R = | t·x·y + s·z  t·y·y + c    t·y·z − s·x |
    ///     | t·x·z − s·y  t·y·z + s·x  t·z·z + c   |
    /// ```
    /// Returns `None` for a zero axis. The result is tagged orthogonal.
    ///
    /// ```
    /// # use orient3::{IsClose, Matrix3, Vector3, float_types::FRAC_PI_2};
    /// let quarter_turn = Matrix3::create_rotation(Vector3::unit_z(), FRAC_PI_2).unwrap();
    /// assert!((&quarter_turn * Vector3::unit_x()).is_close(&Vector3::unit_y()));
    /// assert!(Matrix3::create_rotation(Vector3::zero(), 1.0).is_none());
    /// ```
    pub fn create_rotation(axis: Vector3, theta: Real) -> Option<Self> {
        if float_types::is_close(axis.length(), 0.0) {
            tracing::debug!(?axis, theta, "no rotation about a zero axis");
            return None;
        }
        let Vector3 { x, y, z } = axis.unit();
        let (s, c) = theta.sin_cos();
        let t = 1.0 - c;

        let rows = [
            Vector3::new(t * x * x + c, t * x * y - s * z, t * x * z + s * y),
            Vector3::new(t * x * y + s * z, t * y * y + c, t * y * z - s * x),
            Vector3::new(t * x * z - s * y, t * y * z + s * x, t * z * z + c),
        ];
        Some(Self::tagged(rows, Orthogonality::Orthogonal))
    }

    fn outer(a: Vector3, b: Vector3) -> Self {
        Self::from_rows(b * a.x, b * a.y, b * a.z)
    }

    fn transpose_rows([r1, r2, r3]: [Vector3; 3]) -> [Vector3; 3] {
        [
            Vector3::new(r1.x, r2.x, r3.x),
            Vector3::new(r1.y, r2.y, r3.y),
            Vector3::new(r1.z, r2.z, r3.z),
        ]
    }

    #[inline]
    pub const fn rows(&self) -> [Vector3; 3] {
        self.rows
    }

    pub fn columns(&self) -> [Vector3; 3] {
        Self::transpose_rows(self.rows)
    }

    /// # Panics
    /// When `index >= 3`.
    #[inline]
    pub const fn row(&self, index: usize) -> Vector3 {
        self.rows[index]
    }

    /// # Panics
    /// When `index >= 3`.
    pub fn column(&self, index: usize) -> Vector3 {
        let [r1, r2, r3] = self.rows;
        Vector3::new(r1[index], r2[index], r3[index])
    }

    /// The entries as nested row-major arrays.
    pub const fn to_array(&self) -> [[Real; 3]; 3] {
        let [r1, r2, r3] = self.rows;
        [r1.to_array(), r2.to_array(), r3.to_array()]
    }

    fn entries(&self) -> [Real; 9] {
        let [r1, r2, r3] = self.rows;
        [r1.x, r1.y, r1.z, r2.x, r2.y, r2.z, r3.x, r3.y, r3.z]
    }

    /// The transpose. Inherits this matrix's orthogonality state as-is.
    pub fn transpose(&self) -> Self {
        Self::tagged(Self::transpose_rows(self.rows), self.orthogonality())
    }

    pub fn trace(&self) -> Real {
        let [r1, r2, r3] = self.rows;
        r1.x + r2.y + r3.z
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> Real {
        let [
            Vector3 { x: m11, y: m12, z: m13 },
            Vector3 { x: m21, y: m22, z: m23 },
            Vector3 { x: m31, y: m32, z: m33 },
        ] = self.rows;

        m11 * (m22 * m33 - m23 * m32) - m12 * (m21 * m33 - m23 * m31)
            + m13 * (m21 * m32 - m22 * m31)
    }

    /// Orthogonality state as currently known, without resolving it.
    pub fn orthogonality(&self) -> Orthogonality {
        self.orthogonality.state()
    }

    /// `true` when the columns are pairwise perpendicular unit vectors.
    ///
    /// Resolved on first call and memoized for the lifetime of this instance.
    pub fn is_orthogonal(&self) -> bool {
        self.orthogonality.resolve(|| {
            let [c1, c2, c3] = self.columns();
            let orthogonal = c1.is_unit()
                && c2.is_unit()
                && c3.is_unit()
                && float_types::is_close(c1.dot(&c2), 0.0)
                && float_types::is_close(c1.dot(&c3), 0.0)
                && float_types::is_close(c2.dot(&c3), 0.0);
            tracing::trace!(orthogonal, "resolved matrix orthogonality");
            orthogonal
        })
    }

    /// The inverse matrix, or `None` when the determinant is tolerance-close to zero.
    ///
    /// Orthogonal matrices are inverted by transposition. Everything else goes
    /// through the adjugate: the columns of `adj(M)` are the cross products of
    /// pairs of rows of `M`.
    pub fn inverse(&self) -> Option<Self> {
        if self.is_orthogonal() {
            return Some(self.transpose());
        }

        let det = self.determinant();
        if float_types::is_close(det, 0.0) {
            tracing::debug!(det, "matrix is singular, no inverse");
            return None;
        }

        let [r1, r2, r3] = self.rows;
        let adjugate = Self::from_columns(r2.cross(&r3), r3.cross(&r1), r1.cross(&r2));
        Some(&adjugate * (1.0 / det))
    }
}

impl PartialEq for Matrix3 {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl IsClose for Matrix3 {
    fn is_close(&self, other: &Self) -> bool {
        self.entries().is_close(&other.entries())
    }
}

impl Add for &Matrix3 {
    type Output = Matrix3;

    fn add(self, rhs: &Matrix3) -> Matrix3 {
        let [a1, a2, a3] = self.rows;
        let [b1, b2, b3] = rhs.rows;
        Matrix3::from_rows(a1 + b1, a2 + b2, a3 + b3)
    }
}

impl Sub for &Matrix3 {
    type Output = Matrix3;

    fn sub(self, rhs: &Matrix3) -> Matrix3 {
        let [a1, a2, a3] = self.rows;
        let [b1, b2, b3] = rhs.rows;
        Matrix3::from_rows(a1 - b1, a2 - b2, a3 - b3)
    }
}

impl Mul<Real> for &Matrix3 {
    type Output = Matrix3;

    fn mul(self, scalar: Real) -> Matrix3 {
        let [r1, r2, r3] = self.rows;
        Matrix3::from_rows(r1 * scalar, r2 * scalar, r3 * scalar)
    }
}

impl Mul<Vector3> for &Matrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        let [r1, r2, r3] = self.rows;
        Vector3::new(r1.dot(&v), r2.dot(&v), r3.dot(&v))
    }
}

impl Mul for &Matrix3 {
    type Output = Matrix3;

    /// Row-by-column product. Orthogonality follows [`Orthogonality::of_product`]
    /// and is never resolved here.
    fn mul(self, rhs: &Matrix3) -> Matrix3 {
        let [c1, c2, c3] = rhs.columns();
        let row = |r: Vector3| Vector3::new(r.dot(&c1), r.dot(&c2), r.dot(&c3));
        let [r1, r2, r3] = self.rows;
        Matrix3::tagged(
            [row(r1), row(r2), row(r3)],
            Orthogonality::of_product(self.orthogonality(), rhs.orthogonality()),
        )
    }
}

macro_rules! forward_owned_binop {
    ($imp:ident, $method:ident, $rhs:ty, $out:ty) => {
        impl $imp<$rhs> for Matrix3 {
            type Output = $out;

            fn $method(self, rhs: $rhs) -> $out {
                $imp::$method(&self, rhs)
            }
        }
    };
    ($imp:ident, $method:ident) => {
        impl $imp<Matrix3> for Matrix3 {
            type Output = Matrix3;

            fn $method(self, rhs: Matrix3) -> Matrix3 {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&Matrix3> for Matrix3 {
            type Output = Matrix3;

            fn $method(self, rhs: &Matrix3) -> Matrix3 {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<Matrix3> for &Matrix3 {
            type Output = Matrix3;

            fn $method(self, rhs: Matrix3) -> Matrix3 {
                $imp::$method(self, &rhs)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);
forward_owned_binop!(Mul, mul, Real, Matrix3);
forward_owned_binop!(Mul, mul, Vector3, Vector3);

impl Mul<Matrix3> for Real {
    type Output = Matrix3;

    fn mul(self, matrix: Matrix3) -> Matrix3 {
        &matrix * self
    }
}

impl Index<(usize, usize)> for Matrix3 {
    type Output = Real;

    /// Entry at `(row, column)`, zero-based.
    fn index(&self, (row, column): (usize, usize)) -> &Real {
        &self.rows[row][column]
    }
}

impl From<[[Real; 3]; 3]> for Matrix3 {
    fn from([r1, r2, r3]: [[Real; 3]; 3]) -> Self {
        Matrix3::from_rows(r1.into(), r2.into(), r3.into())
    }
}

impl TryFrom<&[Real]> for Matrix3 {
    type Error = ConversionError;

    /// Nine entries in row-major order.
    fn try_from(values: &[Real]) -> Result<Self, Self::Error> {
        let [m11, m12, m13, m21, m22, m23, m31, m32, m33] = exact_components::<9>(values)?;
        Ok(Matrix3::new(m11, m12, m13, m21, m22, m23, m31, m32, m33))
    }
}

impl fmt::Display for Matrix3 {
    /// Renders a 3x3 grid, one bracketed row per line, all entries sharing one column width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = format::field_width(&self.entries());
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str("[")?;
            format::write_row(f, &row.to_array(), width, ", ")?;
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl approx::AbsDiffEq for Matrix3 {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        <Real as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.entries()[..], &other.entries()[..], epsilon)
    }
}

impl approx::RelativeEq for Matrix3 {
    fn default_max_relative() -> Self::Epsilon {
        <Real as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        approx::RelativeEq::relative_eq(
            &self.entries()[..],
            &other.entries()[..],
            epsilon,
            max_relative,
        )
    }
}

impl approx::UlpsEq for Matrix3 {
    fn default_max_ulps() -> u32 {
        <Real as approx::UlpsEq>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        approx::UlpsEq::ulps_eq(&self.entries()[..], &other.entries()[..], epsilon, max_ulps)
    }
}
