// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::{MathError, EPSILON};

/// Immutable 3D vector used for points, directions and rotation axes.
///
/// * Components are `f64`; callers must keep them finite.
/// * Every operation returns a new vector.
/// * Use [`crate::Mat4::dot`] to transform a point (homogeneous `w = 1`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec3 {
    data: [f64; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f64 {
        self.data[2]
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f64; 3] {
        self.data
    }

    /// Euclidean length, `sqrt(x² + y² + z²)`.
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// Fails with [`MathError::ZeroVector`] when the norm is below
    /// [`EPSILON`].
    pub fn normalize(&self) -> Result<Self, MathError> {
        let n = self.norm();
        if n < EPSILON {
            return Err(MathError::ZeroVector);
        }
        Ok(Self::new(self.x() / n, self.y() / n, self.z() / n))
    }

    /// Scales every component by `scalar`.
    pub fn multiply(&self, scalar: f64) -> Self {
        Self::new(scalar * self.x(), scalar * self.y(), scalar * self.z())
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x() + other.x(), self.y() + other.y(), self.z() + other.z())
    }

    /// Inner product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vec3::add(&self, &rhs)
    }
}

impl core::ops::Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        self.multiply(rhs)
    }
}

impl core::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.multiply(-1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_constructor() {
        let v = Vec3::new(0.0, 1.0, 2.0);
        assert_eq!((v.x(), v.y(), v.z()), (0.0, 1.0, 2.0));
        assert_eq!(Vec3::from([0.0, 1.0, 2.0]), v);
    }

    #[test]
    fn norm_of_pythagorean_quadruple() {
        assert!((Vec3::new(3.0, 4.0, 12.0).norm() - 13.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_rejects_sub_epsilon_norm() {
        let tiny = Vec3::new(1e-17, 0.0, 0.0);
        assert_eq!(tiny.normalize(), Err(MathError::ZeroVector));
        // just above the threshold still normalises
        let small = Vec3::new(0.0, 0.0, 1e-8).normalize().unwrap();
        assert!((small.z() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn operators_match_methods() {
        let a = Vec3::new(1.0, -2.0, 0.5);
        let b = Vec3::new(4.0, 0.0, -1.0);
        assert_eq!(a + b, a.add(&b));
        assert_eq!(a * 3.0, a.multiply(3.0));
        assert_eq!(-a, Vec3::new(-1.0, 2.0, -0.5));
    }
}
