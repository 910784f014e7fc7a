/// Perspective projection parameters and matrix construction
use std::f32::consts::PI;

use crate::error::{MatrixError, Result};
use crate::matrix::{Matrix4, MATRIX_LEN};

/// Drawing surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height. Both sides must be positive; the error carries
    /// the first offending dimension.
    pub fn aspect(&self) -> Result<f32> {
        for side in [self.width, self.height] {
            if !(side.is_finite() && side > 0.0) {
                return Err(MatrixError::InvalidAspect(side));
            }
        }
        let aspect = self.width / self.height;
        check_aspect(aspect)?;
        Ok(aspect)
    }
}

/// Parameters of a right-handed OpenGL-style perspective frustum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Perspective {
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y,
            aspect,
            near,
            far,
        }
    }

    pub fn for_viewport(fov_y: f32, viewport: Viewport, near: f32, far: f32) -> Result<Self> {
        Ok(Self::new(fov_y, viewport.aspect()?, near, far))
    }

    /// Check every parameter without building the matrix
    pub fn validate(&self) -> Result<()> {
        check_aspect(self.aspect)?;

        if !self.fov_y.is_finite() || self.fov_y <= 0.0 || self.fov_y >= PI {
            return Err(MatrixError::DegenerateProjection(
                "field of view must lie strictly between 0 and pi",
            ));
        }
        if !self.near.is_finite() || !self.far.is_finite() {
            return Err(MatrixError::DegenerateProjection("clip planes must be finite"));
        }
        if self.near <= 0.0 {
            return Err(MatrixError::DegenerateProjection("near plane must be positive"));
        }
        if self.near == self.far {
            return Err(MatrixError::DegenerateProjection("near and far planes coincide"));
        }
        if self.near > self.far {
            return Err(MatrixError::DegenerateProjection(
                "near plane must be closer than far plane",
            ));
        }
        Ok(())
    }

    /// Build the projection matrix.
    ///
    /// Maps view-space depth `-near` to clip-space z = -1 and `-far` to z = 1.
    pub fn matrix(&self) -> Result<Matrix4> {
        if let Err(err) = self.validate() {
            log::debug!("rejected perspective {:?}: {}", self, err);
            return Err(err);
        }

        let f = 1.0 / (self.fov_y / 2.0).tan();
        let nf = 1.0 / (self.near - self.far);

        let mut out = [0.0; MATRIX_LEN];
        out[0] = f / self.aspect;
        out[5] = f;
        out[10] = (self.far + self.near) * nf;
        out[11] = -1.0;
        out[14] = 2.0 * self.far * self.near * nf;

        let m = Matrix4(out);
        // Parameters can pass validation and still overflow, e.g. a far plane near f32::MAX.
        if !m.is_finite() {
            return Err(MatrixError::DegenerateProjection(
                "projection overflows floating point range",
            ));
        }
        Ok(m)
    }
}

fn check_aspect(aspect: f32) -> Result<()> {
    if aspect.is_finite() && aspect > 0.0 {
        Ok(())
    } else {
        Err(MatrixError::InvalidAspect(aspect))
    }
}

/// Build a perspective projection matrix
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Result<Matrix4> {
    Perspective::new(fov_y, aspect, near, far).matrix()
}
