// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::{Mat4, MathError, Vec3, EPSILON};

/// Quaternion stored as `(r, i, j, k)` with `r` the scalar part.
///
/// Used as the intermediate of [`crate::Mat4::rotate`] and as the compact
/// form of a rotation for persistence; no composition or interpolation is
/// provided.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat {
    data: [f64; 4],
}

impl Quat {
    /// Creates a quaternion from components verbatim (no normalisation).
    pub const fn new(r: f64, i: f64, j: f64, k: f64) -> Self {
        Self { data: [r, i, j, k] }
    }

    /// Unit quaternion for a rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalised first, so it need not be unit length. A
    /// degenerate axis fails with [`MathError::ZeroVector`].
    pub fn from_axis_angle(angle: f64, axis: &Vec3) -> Result<Self, MathError> {
        let n = axis.normalize()?;
        let (s, c) = (0.5 * angle).sin_cos();
        Ok(Self::new(c, s * n.x(), s * n.y(), s * n.z()))
    }

    /// Scalar part.
    pub const fn r(&self) -> f64 {
        self.data[0]
    }

    /// First imaginary component.
    pub const fn i(&self) -> f64 {
        self.data[1]
    }

    /// Second imaginary component.
    pub const fn j(&self) -> f64 {
        self.data[2]
    }

    /// Third imaginary component.
    pub const fn k(&self) -> f64 {
        self.data[3]
    }

    /// Returns the components as `[r, i, j, k]`.
    pub fn to_array(self) -> [f64; 4] {
        self.data
    }

    /// Euclidean norm over all four components.
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Unit quaternion of the rotation in the upper-left 3×3 block of `m`.
    ///
    /// `m` must be a pure rotation (as built by [`Mat4::rotate`] and products
    /// of those). The branch on the largest diagonal term keeps the divisor
    /// away from zero.
    pub fn from_rotation(m: &Mat4) -> Self {
        let (m00, m11, m22) = (m.at(0, 0), m.at(1, 1), m.at(2, 2));
        let trace = m00 + m11 + m22;
        if trace > 0.0 {
            let s = 2.0 * (1.0 + trace).sqrt();
            Self::new(
                0.25 * s,
                (m.at(2, 1) - m.at(1, 2)) / s,
                (m.at(0, 2) - m.at(2, 0)) / s,
                (m.at(1, 0) - m.at(0, 1)) / s,
            )
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            Self::new(
                (m.at(2, 1) - m.at(1, 2)) / s,
                0.25 * s,
                (m.at(0, 1) + m.at(1, 0)) / s,
                (m.at(0, 2) + m.at(2, 0)) / s,
            )
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            Self::new(
                (m.at(0, 2) - m.at(2, 0)) / s,
                (m.at(0, 1) + m.at(1, 0)) / s,
                0.25 * s,
                (m.at(1, 2) + m.at(2, 1)) / s,
            )
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            Self::new(
                (m.at(1, 0) - m.at(0, 1)) / s,
                (m.at(0, 2) + m.at(2, 0)) / s,
                (m.at(1, 2) + m.at(2, 1)) / s,
                0.25 * s,
            )
        }
    }

    /// Angle (radians) and unnormalised axis of the rotation this quaternion
    /// represents; `None` when the vector part vanishes (no rotation).
    ///
    /// The quaternion need not be unit length.
    pub fn to_axis_angle(&self) -> Option<(f64, Vec3)> {
        let axis = Vec3::new(self.i(), self.j(), self.k());
        let n = axis.norm();
        if n < EPSILON {
            return None;
        }
        Some((2.0 * n.atan2(self.r()), axis))
    }
}

impl From<[f64; 4]> for Quat {
    fn from(value: [f64; 4]) -> Self {
        Self { data: value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn constructor_keeps_components() {
        let q = Quat::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((q.r(), q.i(), q.j(), q.k()), (1.0, 2.0, 3.0, 4.0));
        assert!((q.norm() - 30f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn axis_angle_is_unit_for_unnormalised_axis() {
        let q = Quat::from_axis_angle(PI / 3.0, &Vec3::new(0.0, 7.0, 0.0)).unwrap();
        assert!((q.norm() - 1.0).abs() < 1e-12);
        assert!((q.r() - (PI / 6.0).cos()).abs() < 1e-12);
        assert!((q.j() - (PI / 6.0).sin()).abs() < 1e-12);
        assert_eq!((q.i(), q.k()), (0.0, 0.0));
    }

    #[test]
    fn axis_angle_rejects_zero_axis() {
        assert_eq!(
            Quat::from_axis_angle(1.0, &Vec3::ZERO),
            Err(MathError::ZeroVector)
        );
    }

    fn assert_same_rotation(a: &Mat4, b: &Mat4) {
        for (x, y) in a.flat().iter().zip(b.flat()) {
            assert!((x - y).abs() < 1e-9, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn rotation_round_trips_through_quaternion() {
        let axes = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::UNIT_X,
            Vec3::new(0.0, -1.0, 0.2),
        ];
        // angles chosen to hit every branch of from_rotation
        for angle in [0.3, 2.0, 3.0, PI, -2.5] {
            for axis in &axes {
                let m = Mat4::rotate(angle, axis).unwrap();
                let (a, v) = Quat::from_rotation(&m).to_axis_angle().unwrap();
                assert_same_rotation(&Mat4::rotate(a, &v).unwrap(), &m);
            }
        }
    }

    #[test]
    fn identity_has_no_axis() {
        let q = Quat::from_rotation(&Mat4::identity());
        assert_eq!(q.to_array(), [1.0, 0.0, 0.0, 0.0]);
        assert!(q.to_axis_angle().is_none());
    }
}
