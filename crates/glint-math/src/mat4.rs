// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::{MathError, Quat, Vec3};

/// Relative pivot threshold used by [`Mat4::try_inv`].
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Construction variants for [`Mat4`].
///
/// Each case carries exactly the fields it needs, so a malformed request is a
/// compile error rather than a runtime one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MatrixSpec {
    /// All sixteen entries zero.
    Zero,
    /// Diagonal `(fx, fy, fz, 1)`.
    Scale {
        /// Per-axis scale factors.
        factor: Vec3,
    },
    /// Identity with the offset in column 3 of rows 0–2.
    Translate {
        /// Translation applied to points.
        offset: Vec3,
    },
    /// Rotation of `angle` radians about `axis` (normalised internally).
    Rotate {
        /// Angle in radians, right-handed about `axis`.
        angle: f64,
        /// Rotation axis; any non-zero length.
        axis: Vec3,
    },
    /// OpenGL-style frustum; see [`Mat4::perspective`] for the layout.
    Perspective {
        /// Full vertical field of view in radians.
        field_of_view: f64,
        /// Viewport width divided by height.
        aspect_ratio: f64,
        /// Distance to the near clipping plane.
        near: f64,
        /// Distance to the far clipping plane.
        far: f64,
    },
}

/// Immutable row-major 4×4 matrix.
///
/// - Entry `(row, col)` lives at `data[row * 4 + col]`.
/// - [`Mat4::matmul`] is `self · other`; when composing a model-view-projection
///   matrix write `projection.matmul(&view).matmul(&model)`.
/// - Hand matrices to a GPU through [`crate::UniformMat4`], which performs the
///   row-major to column-major transpose exactly once.
///
/// # Examples
/// ```
/// use glint_math::{Mat4, MatrixSpec, Vec3};
/// let s = Mat4::new(MatrixSpec::Scale { factor: Vec3::new(2.0, 2.0, 2.0) }).unwrap();
/// assert_eq!(s.dot(&Vec3::new(1.0, 1.0, 1.0)).to_array(), [2.0, 2.0, 2.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    data: [f64; 16],
}

impl Mat4 {
    /// Builds a matrix from one of the [`MatrixSpec`] variants.
    ///
    /// Only [`MatrixSpec::Rotate`] can fail, with [`MathError::ZeroVector`]
    /// for a degenerate axis.
    pub fn new(spec: MatrixSpec) -> Result<Self, MathError> {
        match spec {
            MatrixSpec::Zero => Ok(Self::zero()),
            MatrixSpec::Scale { factor } => Ok(Self::scale(factor)),
            MatrixSpec::Translate { offset } => Ok(Self::translate(offset)),
            MatrixSpec::Rotate { angle, axis } => Self::rotate(angle, &axis),
            MatrixSpec::Perspective {
                field_of_view,
                aspect_ratio,
                near,
                far,
            } => Ok(Self::perspective(field_of_view, aspect_ratio, near, far)),
        }
    }

    const fn from_rows(data: [f64; 16]) -> Self {
        Self { data }
    }

    /// The all-zero matrix.
    pub const fn zero() -> Self {
        Self::from_rows([0.0; 16])
    }

    /// The identity matrix.
    pub const fn identity() -> Self {
        Self::from_rows([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Non-uniform scale with diagonal `(fx, fy, fz, 1)`.
    pub const fn scale(factor: Vec3) -> Self {
        Self::from_rows([
            factor.x(), 0.0, 0.0, 0.0, //
            0.0, factor.y(), 0.0, 0.0, //
            0.0, 0.0, factor.z(), 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Translation; the offset occupies column 3 of rows 0–2.
    pub const fn translate(offset: Vec3) -> Self {
        Self::from_rows([
            1.0, 0.0, 0.0, offset.x(), //
            0.0, 1.0, 0.0, offset.y(), //
            0.0, 0.0, 1.0, offset.z(), //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation of `angle` radians about `axis` via the quaternion-derived
    /// rotation matrix.
    ///
    /// The 3×3 block is scaled by `s = 1 / |q|²`; `q` is unit up to rounding.
    pub fn rotate(angle: f64, axis: &Vec3) -> Result<Self, MathError> {
        let q = Quat::from_axis_angle(angle, axis)?;
        let s = 1.0 / q.norm().powi(2);
        let (r, i, j, k) = (q.r(), q.i(), q.j(), q.k());
        let (ii, jj, kk) = (i * i, j * j, k * k);
        let (ij, jk, ki) = (i * j, j * k, k * i);
        let (ri, rj, rk) = (r * i, r * j, r * k);
        Ok(Self::from_rows([
            1.0 - 2.0 * s * (jj + kk),
            2.0 * s * (ij - rk),
            2.0 * s * (ki + rj),
            0.0,
            2.0 * s * (ij + rk),
            1.0 - 2.0 * s * (kk + ii),
            2.0 * s * (jk - ri),
            0.0,
            2.0 * s * (ki - rj),
            2.0 * s * (jk + ri),
            1.0 - 2.0 * s * (ii + jj),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ]))
    }

    /// Perspective projection with `f = 1 / tan(fov / 2)`.
    ///
    /// The `-1` sits in row 2, column 3 and the depth offset in row 3,
    /// column 2; the scenes upload this layout unchanged through
    /// [`crate::UniformMat4`]. Inputs are not validated: `near == far` or a
    /// zero aspect ratio produce non-finite entries.
    pub fn perspective(field_of_view: f64, aspect_ratio: f64, near: f64, far: f64) -> Self {
        let f = 1.0 / (0.5 * field_of_view).tan();
        let depth = far - near;
        Self::from_rows([
            f / aspect_ratio, 0.0, 0.0, 0.0, //
            0.0, f, 0.0, 0.0, //
            0.0, 0.0, -(far + near) / depth, -1.0, //
            0.0, 0.0, -(2.0 * far * near) / depth, 0.0,
        ])
    }

    /// Entry at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.data[row * 4 + col]
    }

    /// Row-major flattening, `data[row * 4 + col]`.
    pub fn flat(&self) -> [f64; 16] {
        self.data
    }

    /// Whether every entry is finite (no NaN or infinity).
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for i in 0..4 {
            for j in 0..4 {
                out[j * 4 + i] = self.data[i * 4 + j];
            }
        }
        Self::from_rows(out)
    }

    /// Matrix product `self · other`.
    ///
    /// Not commutative: `a.matmul(&b)` applies `b` first when acting on a
    /// point.
    ///
    /// # Examples
    /// ```
    /// use glint_math::{Mat4, Vec3};
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(Vec3::new(2.0, 3.0, 4.0));
    /// assert_eq!(a.matmul(&b), b);
    /// ```
    pub fn matmul(&self, other: &Self) -> Self {
        let mut out = [0.0; 16];
        for i in 0..4 {
            for k in 0..4 {
                let lhs = self.data[i * 4 + k];
                for j in 0..4 {
                    out[i * 4 + j] += lhs * other.data[k * 4 + j];
                }
            }
        }
        Self::from_rows(out)
    }

    /// Inverse by Gauss-Jordan elimination without pivoting.
    ///
    /// The forward sweep normalises each pivot row and clears the entries
    /// below it. The accumulating inverse stays lower-triangular during that
    /// sweep, so only its columns `0..=i` are touched for row `i`. The
    /// backward sweep then clears above each pivot across all columns.
    ///
    /// No singularity check is made: a singular matrix, or an exact zero
    /// reaching the diagonal during elimination, yields non-finite entries.
    /// Use [`Mat4::try_inv`] when the input is not known to be well
    /// conditioned.
    pub fn inv(&self) -> Self {
        let mut arr = self.data;
        let mut inv = Self::identity().data;
        for i in 0..4 {
            let f = 1.0 / arr[i * 4 + i];
            arr[i * 4 + i] = 1.0;
            for j in i + 1..4 {
                arr[i * 4 + j] *= f;
            }
            for j in 0..=i {
                inv[i * 4 + j] *= f;
            }
            for ii in i + 1..4 {
                let f = arr[ii * 4 + i];
                for j in i..4 {
                    arr[ii * 4 + j] -= f * arr[i * 4 + j];
                }
                for j in 0..=i {
                    inv[ii * 4 + j] -= f * inv[i * 4 + j];
                }
            }
        }
        for i in (0..4).rev() {
            for ii in 0..i {
                let f = arr[ii * 4 + i];
                arr[ii * 4 + i] = 0.0;
                for j in 0..4 {
                    inv[ii * 4 + j] -= f * inv[i * 4 + j];
                }
            }
        }
        Self::from_rows(inv)
    }

    /// Inverse by Gauss-Jordan elimination with partial pivoting.
    ///
    /// Fails with [`MathError::SingularMatrix`] when the largest remaining
    /// pivot candidate in a column is not above `1e-12` times the largest
    /// absolute entry of the input (zero scale factors, the zero matrix,
    /// non-finite input).
    ///
    /// # Examples
    /// ```
    /// use glint_math::{Mat4, MathError, Vec3};
    /// let flat = Mat4::scale(Vec3::new(1.0, 0.0, 1.0));
    /// assert!(matches!(flat.try_inv(), Err(MathError::SingularMatrix { .. })));
    /// ```
    pub fn try_inv(&self) -> Result<Self, MathError> {
        let mut arr = self.data;
        let mut inv = Self::identity().data;
        let largest = arr.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let tolerance = largest * SINGULAR_TOLERANCE;
        for col in 0..4 {
            let mut pivot_row = col;
            for row in col + 1..4 {
                if arr[row * 4 + col].abs() > arr[pivot_row * 4 + col].abs() {
                    pivot_row = row;
                }
            }
            let pivot = arr[pivot_row * 4 + col];
            if !pivot.is_finite() || pivot.abs() <= tolerance {
                return Err(MathError::SingularMatrix { column: col });
            }
            if pivot_row != col {
                for j in 0..4 {
                    arr.swap(col * 4 + j, pivot_row * 4 + j);
                    inv.swap(col * 4 + j, pivot_row * 4 + j);
                }
            }
            let f = 1.0 / pivot;
            for j in 0..4 {
                arr[col * 4 + j] *= f;
                inv[col * 4 + j] *= f;
            }
            for row in (0..4).filter(|&r| r != col) {
                let g = arr[row * 4 + col];
                for j in 0..4 {
                    arr[row * 4 + j] -= g * arr[col * 4 + j];
                    inv[row * 4 + j] -= g * inv[col * 4 + j];
                }
            }
        }
        Ok(Self::from_rows(inv))
    }

    /// Transforms a point: the matrix times `(x, y, z, 1)`, first three
    /// components returned. No perspective divide is applied.
    pub fn dot(&self, v: &Vec3) -> Vec3 {
        let input = [v.x(), v.y(), v.z(), 1.0];
        let row = |r: usize| -> f64 { (0..4).map(|c| self.at(r, c) * input[c]).sum() };
        Vec3::new(row(0), row(1), row(2))
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.matmul(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_variants_match_named_constructors() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Mat4::new(MatrixSpec::Zero), Ok(Mat4::zero()));
        assert_eq!(Mat4::new(MatrixSpec::Scale { factor: v }), Ok(Mat4::scale(v)));
        assert_eq!(
            Mat4::new(MatrixSpec::Translate { offset: v }),
            Ok(Mat4::translate(v))
        );
        assert_eq!(
            Mat4::new(MatrixSpec::Rotate { angle: 0.3, axis: v }),
            Mat4::rotate(0.3, &v)
        );
        assert_eq!(
            Mat4::new(MatrixSpec::Rotate {
                angle: 0.3,
                axis: Vec3::ZERO
            }),
            Err(MathError::ZeroVector)
        );
    }

    #[test]
    fn translate_layout_is_row_major() {
        let t = Mat4::translate(Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(t.at(0, 3), 4.0);
        assert_eq!(t.at(1, 3), 5.0);
        assert_eq!(t.at(2, 3), 6.0);
        assert_eq!(t.at(3, 0), 0.0);
    }

    #[test]
    fn perspective_layout() {
        let p = Mat4::perspective(std::f64::consts::FRAC_PI_2, 2.0, 1.0, 3.0);
        // tan(pi/4) == 1 so f == 1
        assert!((p.at(0, 0) - 0.5).abs() < 1e-12);
        assert!((p.at(1, 1) - 1.0).abs() < 1e-12);
        assert_eq!(p.at(2, 2), -2.0);
        assert_eq!(p.at(2, 3), -1.0);
        assert_eq!(p.at(3, 2), -3.0);
        assert_eq!(p.at(3, 3), 0.0);
    }

    #[test]
    fn finiteness_checks_every_entry() {
        assert!(Mat4::identity().is_finite());
        assert!(!Mat4::perspective(1.0, 0.0, 1.0, 2.0).is_finite());
        assert!(!Mat4::translate(Vec3::new(f64::NAN, 0.0, 0.0)).is_finite());
    }

    #[test]
    fn transpose_is_involution() {
        let m = Mat4::translate(Vec3::new(1.0, 2.0, 3.0))
            * Mat4::rotate(0.7, &Vec3::UNIT_Y).unwrap();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().at(3, 0), m.at(0, 3));
    }

    #[test]
    fn inv_of_diagonal_scale() {
        let m = Mat4::scale(Vec3::new(2.0, 4.0, 8.0)).inv();
        assert_eq!(m.flat(), Mat4::scale(Vec3::new(0.5, 0.25, 0.125)).flat());
    }

    #[test]
    fn inv_of_singular_matrix_is_not_finite() {
        let flat = Mat4::scale(Vec3::new(1.0, 0.0, 1.0));
        assert!(flat.inv().flat().iter().any(|v| !v.is_finite()));
        assert_eq!(flat.try_inv(), Err(MathError::SingularMatrix { column: 1 }));
    }

    #[test]
    fn try_inv_pivots_past_zero_diagonal() {
        // half turn about x+y swaps the x and y axes, leaving ~0 at (0, 0)
        let swap = Mat4::rotate(std::f64::consts::PI, &Vec3::new(1.0, 1.0, 0.0)).unwrap();
        let back = swap.matmul(&swap.try_inv().unwrap());
        for r in 0..4 {
            for c in 0..4 {
                let want = if r == c { 1.0 } else { 0.0 };
                assert!((back.at(r, c) - want).abs() < 1e-9, "({r}, {c})");
            }
        }
    }

    #[test]
    fn try_inv_rejects_zero_matrix() {
        assert_eq!(
            Mat4::zero().try_inv(),
            Err(MathError::SingularMatrix { column: 0 })
        );
    }
}
