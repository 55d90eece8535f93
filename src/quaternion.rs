//! Quaternions as a rotation representation, with conversions to and from `Matrix3`.

use crate::errors::{ConversionError, exact_components};
use crate::float_types::{self, Real, TAU, clamped_acos};
use crate::format;
use crate::matrix::Matrix3;
use crate::traits::IsClose;
use crate::vector::Vector3;
use core::ops::{Add, Div, Mul, Neg};
use rand::Rng;
use std::fmt;

/// A quaternion `x·i + y·j + z·k + w` with imaginary part `(x, y, z)` and real part `w`.
///
/// Rotations are represented by unit quaternions. Unit norm is not enforced; use
/// [`Quaternion::create_unit`] or [`Quaternion::create_rotation`] to obtain one, or
/// check [`Quaternion::is_unit`]. `q` and `-q` encode the same rotation: see
/// [`Quaternion::is_equivalent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: Real,
    pub y: Real,
    pub z: Real,
    pub w: Real,
}

impl Quaternion {
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Quaternion { x, y, z, w }
    }

    /// The no-rotation quaternion `(0, 0, 0, 1)`.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// The given components scaled to unit norm.
    pub fn create_unit(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self::new(x, y, z, w).unit()
    }

    /// Rotation by `theta` radians about `axis`, or `None` for a zero axis.
    ///
    /// ```text
    /// q = (û · sin(θ/2), cos(θ/2))
    /// ```
    pub fn create_rotation(axis: Vector3, theta: Real) -> Option<Self> {
        if float_types::is_close(axis.length(), 0.0) {
            tracing::debug!(?axis, theta, "no rotation about a zero axis");
            return None;
        }
        let u = axis.unit();
        let (s, c) = (theta / 2.0).sin_cos();
        Some(Self::new(u.x * s, u.y * s, u.z * s, c))
    }

    /// **Mathematical Foundation: Quaternion from Rotation Matrix**
    ///
    /// Each component's magnitude follows from the diagonal alone:
    /// ```text
    /// |x| = ½·√(1 + m11 − m22 − m33)     |y| = ½·√(1 − m11 + m22 − m33)
    /// |z| = ½·√(1 − m11 − m22 + m33)     |w| = ½·√(1 + m11 + m22 + m33)
    /// ```
    /// The largest of the four (the first one on ties) is taken as-is and the other
    /// three are recovered from sums and differences of off-diagonal entries divided
    /// by four times it. Since the squares sum to one the divisor is at least 2.
    ///
    /// Radicands that roundoff pushes slightly below zero are clamped to zero.
    ///
    /// Returns `None` when `matrix` is not orthogonal.
    pub fn create_from_matrix(matrix: &Matrix3) -> Option<Self> {
        if !matrix.is_orthogonal() {
            tracing::debug!(%matrix, "matrix is not orthogonal, no rotation");
            return None;
        }

        let [[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]] = matrix.to_array();
        let half_root = |radicand: Real| radicand.max(0.0).sqrt() / 2.0;
        let candidates = [
            half_root(1.0 + m11 - m22 - m33),
            half_root(1.0 - m11 + m22 - m33),
            half_root(1.0 - m11 - m22 + m33),
            half_root(1.0 + m11 + m22 + m33),
        ];

        let mut largest = 0;
        for (i, &candidate) in candidates.iter().enumerate().skip(1) {
            if candidate > candidates[largest] {
                largest = i;
            }
        }

        let q = candidates[largest];
        let d = 4.0 * q;
        let quaternion = match largest {
            0 => Self::new(q, (m12 + m21) / d, (m13 + m31) / d, (m32 - m23) / d),
            1 => Self::new((m12 + m21) / d, q, (m23 + m32) / d, (m13 - m31) / d),
            2 => Self::new((m13 + m31) / d, (m23 + m32) / d, q, (m21 - m12) / d),
            _ => Self::new((m32 - m23) / d, (m13 - m31) / d, (m21 - m12) / d, q),
        };
        Some(quaternion)
    }

    /// A uniformly distributed rotation drawn from the thread-local generator.
    pub fn random_rotation() -> Self {
        Self::random_rotation_with(&mut rand::rng())
    }

    /// Uniformly distributed unit quaternion (Shoemake's subgroup algorithm), drawn from `rng`.
    pub fn random_rotation_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let r1: Real = rng.random();
        let r2: Real = rng.random();
        let r3: Real = rng.random();

        let one_minus_r1_sqrt = (1.0 - r1).sqrt();
        let r1_sqrt = r1.sqrt();

        let (s2, c2) = (TAU * r2).sin_cos();
        let (s3, c3) = (TAU * r3).sin_cos();
        Self::create_unit(
            one_minus_r1_sqrt * s2,
            r1_sqrt * c3,
            r1_sqrt * s3,
            one_minus_r1_sqrt * c2,
        )
    }

    /// The imaginary part `(x, y, z)`.
    #[inline]
    pub const fn imaginary(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn norm_squared(&self) -> Real {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    #[inline]
    pub fn norm(&self) -> Real {
        self.norm_squared().sqrt()
    }

    /// `true` when the squared norm is within tolerance of `1.0`.
    #[inline]
    pub fn is_unit(&self) -> bool {
        float_types::is_close(self.norm_squared(), 1.0)
    }

    /// This quaternion scaled to unit norm. Already-unit quaternions are returned
    /// unchanged; the zero quaternion yields non-finite components.
    pub fn unit(&self) -> Self {
        if self.is_unit() {
            *self
        } else {
            *self / self.norm()
        }
    }

    #[inline]
    pub const fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse `q* / |q|²`, valid for unit and non-unit quaternions alike.
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.norm_squared()
    }

    /// Rotation angle `2·acos(w)` of the unit form, in `[0, 2π]`.
    pub fn angle(&self) -> Real {
        2.0 * clamped_acos(self.unit().w)
    }

    /// Rotation axis of the unit form.
    ///
    /// `None` when the rotation angle is a multiple of `2π` (the identity, up to
    /// sign), where `sin(angle/2)` vanishes and no axis is defined.
    pub fn axis(&self) -> Option<Vector3> {
        let unit = self.unit();
        let s = (clamped_acos(unit.w)).sin();
        if float_types::is_close(s, 0.0) {
            tracing::debug!(quaternion = %self, "rotation angle is zero, axis undefined");
            return None;
        }
        Some(unit.imaginary() / s)
    }

    /// `true` when `self` and `other` encode the same rotation, i.e. `other` is close
    /// to `self` or to `-self`.
    ///
    /// ```
    /// # use orient3::{IsClose, Quaternion};
    /// let q = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    /// assert!(q.is_equivalent(&-q));
    /// assert!(!q.is_close(&-q));
    /// ```
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.is_close(other) || self.is_close(&-*other)
    }

    /// The rotation matrix of this quaternion's unit form.
    ///
    /// ```text
    ///     | 1 − 2(y² + z²)  2(xy − zw)      2(xz + yw)     |
    /// R = | 2(xy + zw)      1 − 2(x² + z²)  2(yz − xw)     |
    ///     | 2(xz − yw)      2(yz + xw)      1 − 2(x² + y²) |
    /// ```
    #[rustfmt::skip]
    pub fn to_matrix(&self) -> Matrix3 {
        let Quaternion { x, y, z, w } = self.unit();
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (xw, yw, zw) = (x * w, y * w, z * w);

        Matrix3::new(
            1.0 - 2.0 * (yy + zz), 2.0 * (xy - zw),       2.0 * (xz + yw),
            2.0 * (xy + zw),       1.0 - 2.0 * (xx + zz), 2.0 * (yz - xw),
            2.0 * (xz - yw),       2.0 * (yz + xw),       1.0 - 2.0 * (xx + yy),
        )
    }

    /// Rotates `v` by this quaternion's unit form.
    ///
    /// ```text
    /// v' = v + 2w(u × v) + 2u × (u × v),   u = (x, y, z)
    /// ```
    pub fn rotate(&self, v: Vector3) -> Vector3 {
        let unit = self.unit();
        let u = unit.imaginary();
        let t = u.cross(&v) * 2.0;
        v + t * unit.w + u.cross(&t)
    }

    /// Spherical linear interpolation between the unit forms of `self` (`t = 0`)
    /// and `other` (`t = 1`), along the shorter arc.
    pub fn slerp(&self, other: &Self, t: Real) -> Self {
        let a = self.unit();
        let mut b = other.unit();
        let mut cos_theta = a.dot(&b);
        if cos_theta < 0.0 {
            b = -b;
            cos_theta = -cos_theta;
        }

        // Nearly identical: the arc is too short for sin(θ) to be a safe divisor.
        if float_types::is_close(cos_theta, 1.0) {
            return (a * (1.0 - t) + b * t).unit();
        }

        let theta = clamped_acos(cos_theta);
        let sin_theta = theta.sin();
        let wa = ((1.0 - t) * theta).sin() / sin_theta;
        let wb = (t * theta).sin() / sin_theta;
        a * wa + b * wb
    }

    fn dot(&self, other: &Self) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// The components as an ordered `[x, y, z, w]` list.
    #[inline]
    pub const fn to_array(&self) -> [Real; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl IsClose for Quaternion {
    fn is_close(&self, other: &Self) -> bool {
        self.to_array().is_close(&other.to_array())
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        Quaternion::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Add for Quaternion {
    type Output = Quaternion;

    fn add(self, rhs: Quaternion) -> Quaternion {
        Quaternion::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Mul<Real> for Quaternion {
    type Output = Quaternion;

    fn mul(self, scalar: Real) -> Quaternion {
        Quaternion::new(self.x * scalar, self.y * scalar, self.z * scalar, self.w * scalar)
    }
}

impl Mul<Quaternion> for Real {
    type Output = Quaternion;

    fn mul(self, quaternion: Quaternion) -> Quaternion {
        quaternion * self
    }
}

impl Div<Real> for Quaternion {
    type Output = Quaternion;

    fn div(self, scalar: Real) -> Quaternion {
        Quaternion::new(self.x / scalar, self.y / scalar, self.z / scalar, self.w / scalar)
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    /// Hamilton product. `a * b` applies `b`'s rotation first, then `a`'s.
    fn mul(self, rhs: Quaternion) -> Quaternion {
        let Quaternion { x: ax, y: ay, z: az, w: aw } = self;
        let Quaternion { x: bx, y: by, z: bz, w: bw } = rhs;
        Quaternion::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }
}

impl From<[Real; 4]> for Quaternion {
    fn from([x, y, z, w]: [Real; 4]) -> Self {
        Quaternion::new(x, y, z, w)
    }
}

impl From<Quaternion> for [Real; 4] {
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

impl TryFrom<&[Real]> for Quaternion {
    type Error = ConversionError;

    /// Four components in `[x, y, z, w]` order.
    fn try_from(values: &[Real]) -> Result<Self, Self::Error> {
        exact_components::<4>(values).map(Quaternion::from)
    }
}

impl fmt::Display for Quaternion {
    /// Renders as `(x, y, z, w)` with 8 fractional digits, right-aligned to a common width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.to_array();
        let width = format::field_width(&values);
        f.write_str("(")?;
        format::write_row(f, &values, width, ", ")?;
        f.write_str(")")
    }
}

impl approx::AbsDiffEq for Quaternion {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        <Real as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.to_array()[..], &other.to_array()[..], epsilon)
    }
}

impl approx::RelativeEq for Quaternion {
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
            &self.to_array()[..],
            &other.to_array()[..],
            epsilon,
            max_relative,
        )
    }
}

impl approx::UlpsEq for Quaternion {
    fn default_max_ulps() -> u32 {
        <Real as approx::UlpsEq>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        approx::UlpsEq::ulps_eq(&self.to_array()[..], &other.to_array()[..], epsilon, max_ulps)
    }
}
