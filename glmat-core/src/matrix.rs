/// Column-major 4x4 matrix ready for uniform upload
use std::ops::{Index, Mul};

use crate::error::{check_len, Result};

/// Number of elements in a 4x4 matrix
pub const MATRIX_LEN: usize = 16;

/// A 4x4 matrix stored as 16 floats in column-major order.
///
/// The element at row `r`, column `c` lives at flat index `c * 4 + r`, which
/// is the layout `uniformMatrix4fv` expects with `transpose = false`.
/// All operations return new values; see [`crate::mat4`] for the buffer
/// writing variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4(pub [f32; MATRIX_LEN]);

impl Matrix4 {
    pub fn identity() -> Self {
        let mut m = [0.0; MATRIX_LEN];
        m[0] = 1.0;
        m[5] = 1.0;
        m[10] = 1.0;
        m[15] = 1.0;
        Self(m)
    }

    /// Copy a matrix out of a raw buffer
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        check_len(values.len())?;
        let mut m = [0.0; MATRIX_LEN];
        m.copy_from_slice(values);
        Ok(Self(m))
    }

    /// Create a translation matrix
    pub fn from_translation(v: [f32; 3]) -> Self {
        let mut m = Self::identity();
        m.0[12] = v[0];
        m.0[13] = v[1];
        m.0[14] = v[2];
        m
    }

    /// Element at `row`, `col`
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[col * 4 + row]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn to_cols_array(self) -> [f32; MATRIX_LEN] {
        self.0
    }

    /// Compute `self * T(v)`: translate in the local frame of `self`.
    ///
    /// Columns 0..2 are unchanged. Column 3 becomes the combination of the
    /// source columns weighted by `v`, plus the source's own column 3.
    pub fn translate(&self, v: [f32; 3]) -> Self {
        let [x, y, z] = v;
        let a = &self.0;
        let mut out = *a;
        for r in 0..4 {
            out[12 + r] = a[r] * x + a[4 + r] * y + a[8 + r] * z + a[12 + r];
        }
        Self(out)
    }

    /// Matrix product `self * rhs`
    pub fn multiply(&self, rhs: &Matrix4) -> Self {
        let lhs: nalgebra::Matrix4<f32> = (*self).into();
        let rhs: nalgebra::Matrix4<f32> = (*rhs).into();
        (lhs * rhs).into()
    }

    /// Transform a point and apply the perspective divide.
    ///
    /// Returns `None` when the homogeneous `w` is too close to zero to divide by.
    pub fn transform_point(&self, p: [f32; 3]) -> Option<[f32; 3]> {
        let m: nalgebra::Matrix4<f32> = (*self).into();
        let clip = m * nalgebra::Vector4::new(p[0], p[1], p[2], 1.0);

        // Prevent division by near-zero w
        if clip.w.abs() < 1e-6 {
            return None;
        }

        Some([clip.x / clip.w, clip.y / clip.w, clip.z / clip.w])
    }

    /// True when every element is finite
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        self.multiply(&rhs)
    }
}

impl Index<usize> for Matrix4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

impl AsRef<[f32]> for Matrix4 {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

impl TryFrom<&[f32]> for Matrix4 {
    type Error = crate::error::MatrixError;

    fn try_from(values: &[f32]) -> Result<Self> {
        Self::from_slice(values)
    }
}

// nalgebra stores matrices column-major as well, so conversions are copies.
impl From<Matrix4> for nalgebra::Matrix4<f32> {
    fn from(m: Matrix4) -> Self {
        nalgebra::Matrix4::from_column_slice(&m.0)
    }
}

impl From<nalgebra::Matrix4<f32>> for Matrix4 {
    fn from(m: nalgebra::Matrix4<f32>) -> Self {
        let mut out = [0.0; MATRIX_LEN];
        out.copy_from_slice(m.as_slice());
        Self(out)
    }
}

/// Create a new identity matrix
pub fn create() -> Matrix4 {
    Matrix4::identity()
}

/// Translate `source` by `v` in its local frame, returning a new matrix
pub fn translate(source: &Matrix4, v: [f32; 3]) -> Matrix4 {
    source.translate(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    fn approx_eq(a: &Matrix4, b: &Matrix4) -> bool {
        a.0.iter().zip(b.0.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_create_is_identity() {
        let m = create();
        for i in 0..MATRIX_LEN {
            let expected = if i % 5 == 0 { 1.0 } else { 0.0 };
            assert_eq!(m[i], expected, "index {}", i);
        }
    }

    #[test]
    fn test_from_slice_rejects_short_buffer() {
        let short = [0.0f32; 12];
        assert_eq!(
            Matrix4::from_slice(&short),
            Err(MatrixError::InvalidDimensions { expected: 16, actual: 12 })
        );
        assert!(Matrix4::try_from(&[1.0f32; 16][..]).is_ok());
    }

    #[test]
    fn test_translate_identity() {
        let m = create().translate([1.0, 2.0, 3.0]);
        let mut expected = Matrix4::identity();
        expected.0[12] = 1.0;
        expected.0[13] = 2.0;
        expected.0[14] = 3.0;
        assert_eq!(m, expected);
    }

    #[test]
    fn test_translate_zero_is_noop() {
        let mut values = [0.0f32; 16];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as f32 * 0.5 - 3.0;
        }
        let m = Matrix4(values);
        assert_eq!(m.translate([0.0, 0.0, 0.0]), m);
    }

    #[test]
    fn test_translate_matches_product() {
        let scale = Matrix4([
            2.0, 0.0, 0.0, 0.0, //
            0.0, 3.0, 0.0, 0.0, //
            0.0, 0.0, 4.0, 0.0, //
            1.0, 1.0, 1.0, 1.0,
        ]);
        let v = [1.0, -2.0, 0.5];
        let translated = scale.translate(v);
        assert!(approx_eq(&translated, &(scale * Matrix4::from_translation(v))));
        assert_eq!(translated[12], 3.0);
        assert_eq!(translated[13], -5.0);
        assert_eq!(translated[14], 3.0);
        assert_eq!(translated[15], 1.0);
    }

    #[test]
    fn test_multiply_identity() {
        let t = Matrix4::from_translation([4.0, 5.0, 6.0]);
        assert_eq!(t * Matrix4::identity(), t);
        assert_eq!(Matrix4::identity() * t, t);
    }

    #[test]
    fn test_transform_point() {
        let t = Matrix4::from_translation([1.0, 2.0, 3.0]);
        assert_eq!(t.transform_point([1.0, 1.0, 1.0]), Some([2.0, 3.0, 4.0]));

        let projection = Matrix4([
            1.5, 0.0, 0.0, 0.0, //
            0.0, 2.0, 0.0, 0.0, //
            0.0, 0.0, -1.2, -1.0, //
            0.0, 0.0, -2.2, 0.0,
        ]);
        let [x, y, z] = projection.transform_point([1.0, 1.0, -2.0]).unwrap();
        assert!((x - 0.75).abs() < 1e-6);
        assert!((y - 1.0).abs() < 1e-6);
        assert!((z - 0.1).abs() < 1e-6);

        let mut flat = Matrix4::identity();
        flat.0[15] = 0.0;
        assert_eq!(flat.transform_point([0.0, 0.0, 0.0]), None);
    }

    #[test]
    fn test_nalgebra_round_trip() {
        let m = Matrix4::from_translation([7.0, 8.0, 9.0]);
        let na: nalgebra::Matrix4<f32> = m.into();
        assert_eq!(na[(0, 3)], 7.0);
        assert_eq!(na[(2, 3)], 9.0);
        assert_eq!(Matrix4::from(na), m);
        assert_eq!(m.get(1, 3), 8.0);
    }
}
