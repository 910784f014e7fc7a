/// Per-frame projection and model-view setup
use std::f32::consts::FRAC_PI_4;

use crate::error::Result;
use crate::matrix::{create, Matrix4};
use crate::projection::{Perspective, Viewport};

/// Uniform name for the projection matrix in the vertex shader
pub const PROJECTION_UNIFORM: &str = "uProjectionMatrix";
/// Uniform name for the model-view matrix in the vertex shader
pub const MODEL_VIEW_UNIFORM: &str = "uModelViewMatrix";

/// Destination for matrix uniforms, implemented by the host graphics context.
///
/// Shader programs, uniform locations and draw calls all stay behind this
/// trait; this crate only hands over finished column-major buffers.
pub trait UniformSink {
    fn set_uniform_matrix4(&mut self, name: &str, values: &[f32; 16]);
}

/// Camera settings for a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameConfig {
    /// Vertical field of view in radians
    pub field_of_view: f32,
    pub near: f32,
    pub far: f32,
    /// Where the drawn object sits relative to the camera
    pub model_offset: [f32; 3],
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            field_of_view: FRAC_PI_4, // 45 degrees
            near: 0.1,
            far: 100.0,
            model_offset: [0.0, 0.0, -6.0],
        }
    }
}

impl FrameConfig {
    pub fn perspective(&self, viewport: Viewport) -> Result<Perspective> {
        Perspective::for_viewport(self.field_of_view, viewport, self.near, self.far)
    }

    /// Build both matrices for a surface of the given size
    pub fn matrices(&self, viewport: Viewport) -> Result<FrameMatrices> {
        let projection = self.perspective(viewport)?.matrix()?;
        let model_view = create().translate(self.model_offset);
        Ok(FrameMatrices {
            projection,
            model_view,
        })
    }
}

/// The two matrices a frame uploads before drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub projection: Matrix4,
    pub model_view: Matrix4,
}

impl FrameMatrices {
    /// Combined model-view-projection matrix
    pub fn mvp(&self) -> Matrix4 {
        self.projection * self.model_view
    }

    pub fn upload<S: UniformSink + ?Sized>(&self, sink: &mut S) {
        log::trace!("uploading frame matrices");
        sink.set_uniform_matrix4(PROJECTION_UNIFORM, &self.projection.0);
        sink.set_uniform_matrix4(MODEL_VIEW_UNIFORM, &self.model_view.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    #[derive(Default)]
    struct RecordingSink {
        uploads: Vec<(String, [f32; 16])>,
    }

    impl UniformSink for RecordingSink {
        fn set_uniform_matrix4(&mut self, name: &str, values: &[f32; 16]) {
            self.uploads.push((name.to_string(), *values));
        }
    }

    #[test]
    fn test_default_config() {
        let config = FrameConfig::default();
        assert!((config.field_of_view - 45f32.to_radians()).abs() < 1e-6);
        assert_eq!(config.model_offset, [0.0, 0.0, -6.0]);
    }

    #[test]
    fn test_frame_matrices() {
        let frame = FrameConfig::default()
            .matrices(Viewport::new(640.0, 480.0))
            .unwrap();
        assert_eq!(frame.model_view[14], -6.0);
        assert_eq!(frame.projection[11], -1.0);

        let f = 1.0 / (FRAC_PI_4 / 2.0).tan();
        assert!((frame.projection[0] - f / (640.0 / 480.0)).abs() < 1e-5);
    }

    #[test]
    fn test_origin_lands_inside_clip_volume() {
        let frame = FrameConfig::default()
            .matrices(Viewport::new(640.0, 480.0))
            .unwrap();
        let [x, y, z] = frame.mvp().transform_point([0.0, 0.0, 0.0]).unwrap();
        assert_eq!((x, y), (0.0, 0.0));
        assert!(z > -1.0 && z < 1.0);
    }

    #[test]
    fn test_upload_order_and_names() {
        let frame = FrameConfig::default()
            .matrices(Viewport::new(100.0, 100.0))
            .unwrap();
        let mut sink = RecordingSink::default();
        frame.upload(&mut sink);

        assert_eq!(sink.uploads.len(), 2);
        assert_eq!(sink.uploads[0].0, PROJECTION_UNIFORM);
        assert_eq!(sink.uploads[0].1, frame.projection.0);
        assert_eq!(sink.uploads[1].0, MODEL_VIEW_UNIFORM);
        assert_eq!(sink.uploads[1].1, frame.model_view.0);
    }

    #[test]
    fn test_collapsed_viewport() {
        let result = FrameConfig::default().matrices(Viewport::new(300.0, 0.0));
        assert!(matches!(result, Err(MatrixError::InvalidAspect(_))));

        let flipped = FrameConfig::default().matrices(Viewport::new(-800.0, -600.0));
        assert!(matches!(flipped, Err(MatrixError::InvalidAspect(_))));
    }
}
