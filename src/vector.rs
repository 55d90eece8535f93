//! Struct and functions for working with three-component `Vector3`s.

use crate::errors::{ConversionError, exact_components};
use crate::float_types::{self, Real, clamped_acos};
use crate::format;
use crate::traits::IsClose;
use core::ops::{Add, Div, Index, Mul, Neg, Sub};
use rand::Rng;
use std::fmt;

/// A 3-component real vector.
///
/// No invariant is enforced at construction: a `Vector3` may be non-unit or
/// hold non-finite components. [`Vector3::is_finite`] and [`Vector3::is_unit`]
/// report those properties instead.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Vector3 {
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Vector3 { x, y, z }
    }

    /// The zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// A vector whose components are independently uniform in `[-1, 1]`,
    /// drawn from the thread-local generator.
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Same as [`Vector3::random`], drawing from `rng`.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        )
    }

    #[inline]
    pub fn dot(&self, other: &Vector3) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn length_squared(&self) -> Real {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> Real {
        self.length_squared().sqrt()
    }

    /// `true` when the squared length is within tolerance of `1.0`.
    #[inline]
    pub fn is_unit(&self) -> bool {
        float_types::is_close(self.length_squared(), 1.0)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// The unit vector pointing the same way.
    ///
    /// A vector that is already unit is returned unchanged. The zero vector
    /// has no direction: its "unit" form has non-finite components.
    ///
    /// ```
    /// # use orient3::Vector3;
    /// let v = Vector3::new(3.0, 0.0, 4.0).unit();
    /// assert_eq!(v, Vector3::new(0.6, 0.0, 0.8));
    /// assert!(!Vector3::zero().unit().is_finite());
    /// ```
    pub fn unit(&self) -> Vector3 {
        if self.is_unit() {
            *self
        } else {
            *self / self.length()
        }
    }

    pub fn distance_to(&self, other: &Vector3) -> Real {
        (*self - *other).length()
    }

    /// **Mathematical Foundation: Angle Between Vectors**
    ///
    /// ```text
    /// θ = arccos(â · b̂)
    /// ```
    ///
    /// Returns an angle in radians in `[0, π]`. The dot product of the unit forms is
    /// clamped to `[-1, 1]` first, so parallel and anti-parallel inputs give exactly
    /// `0` and `π` rather than `NaN`.
    pub fn angle_to(&self, other: &Vector3) -> Real {
        clamped_acos(self.unit().dot(&other.unit()))
    }

    /// Component of `self` parallel to `other` (the projection onto `other`'s direction).
    pub fn parallel_to(&self, other: &Vector3) -> Vector3 {
        let direction = other.unit();
        direction * self.dot(&direction)
    }

    /// Component of `self` perpendicular to `other` (the rejection from `other`).
    pub fn perpendicular_to(&self, other: &Vector3) -> Vector3 {
        *self - self.parallel_to(other)
    }

    /// Splits `self` into `(parallel, perpendicular)` components relative to `other`.
    /// The two parts always sum back to `self`.
    pub fn decompose(&self, other: &Vector3) -> (Vector3, Vector3) {
        let parallel = self.parallel_to(other);
        (parallel, *self - parallel)
    }

    /// The components as an ordered `[x, y, z]` list.
    #[inline]
    pub const fn to_array(&self) -> [Real; 3] {
        [self.x, self.y, self.z]
    }
}

impl IsClose for Vector3 {
    fn is_close(&self, other: &Self) -> bool {
        self.to_array().is_close(&other.to_array())
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<Real> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: Real) -> Vector3 {
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vector3> for Real {
    type Output = Vector3;

    fn mul(self, vector: Vector3) -> Vector3 {
        vector * self
    }
}

impl Div<Real> for Vector3 {
    type Output = Vector3;

    fn div(self, scalar: Real) -> Vector3 {
        Vector3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Index<usize> for Vector3 {
    type Output = Real;

    /// # Panics
    /// When `index >= 3`.
    fn index(&self, index: usize) -> &Real {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {index}"),
        }
    }
}

impl From<[Real; 3]> for Vector3 {
    fn from([x, y, z]: [Real; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [Real; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[Real]> for Vector3 {
    type Error = ConversionError;

    fn try_from(values: &[Real]) -> Result<Self, Self::Error> {
        exact_components::<3>(values).map(Vector3::from)
    }
}

impl fmt::Display for Vector3 {
    /// Renders as `(x, y, z)` with 8 fractional digits, right-aligned to a common width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.to_array();
        let width = format::field_width(&values);
        f.write_str("(")?;
        format::write_row(f, &values, width, ", ")?;
        f.write_str(")")
    }
}

impl approx::AbsDiffEq for Vector3 {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        <Real as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.to_array()[..], &other.to_array()[..], epsilon)
    }
}

impl approx::RelativeEq for Vector3 {
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

impl approx::UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        <Real as approx::UlpsEq>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        approx::UlpsEq::ulps_eq(&self.to_array()[..], &other.to_array()[..], epsilon, max_ulps)
    }
}
