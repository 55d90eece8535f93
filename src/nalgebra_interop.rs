//! Conversions between this crate's value types and `nalgebra`'s.

use crate::float_types::Real;
use crate::matrix::{Matrix3, Orthogonality};
use crate::quaternion::Quaternion;
use crate::vector::Vector3;

impl From<nalgebra::Vector3<Real>> for Vector3 {
    fn from(v: nalgebra::Vector3<Real>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<Real> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

/// Orthogonality of the result is left unresolved.
impl From<nalgebra::Matrix3<Real>> for Matrix3 {
    fn from(m: nalgebra::Matrix3<Real>) -> Self {
        let row = |r: usize| Vector3::new(m[(r, 0)], m[(r, 1)], m[(r, 2)]);
        Matrix3::from_rows(row(0), row(1), row(2))
    }
}

impl From<&Matrix3> for nalgebra::Matrix3<Real> {
    fn from(m: &Matrix3) -> Self {
        let [[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]] = m.to_array();
        nalgebra::Matrix3::new(m11, m12, m13, m21, m22, m23, m31, m32, m33)
    }
}

impl From<Matrix3> for nalgebra::Matrix3<Real> {
    fn from(m: Matrix3) -> Self {
        (&m).into()
    }
}

/// A `Rotation3` is orthogonal by construction, so the result is tagged as such.
impl From<nalgebra::Rotation3<Real>> for Matrix3 {
    fn from(rotation: nalgebra::Rotation3<Real>) -> Self {
        let m = Matrix3::from(rotation.into_inner());
        Matrix3::tagged(m.rows(), Orthogonality::Orthogonal)
    }
}

impl From<nalgebra::Quaternion<Real>> for Quaternion {
    fn from(q: nalgebra::Quaternion<Real>) -> Self {
        Quaternion::new(q.i, q.j, q.k, q.w)
    }
}

impl From<nalgebra::UnitQuaternion<Real>> for Quaternion {
    fn from(q: nalgebra::UnitQuaternion<Real>) -> Self {
        q.into_inner().into()
    }
}

impl From<Quaternion> for nalgebra::Quaternion<Real> {
    fn from(q: Quaternion) -> Self {
        nalgebra::Quaternion::new(q.w, q.x, q.y, q.z)
    }
}
