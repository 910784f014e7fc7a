/// glmat Core Library - 4x4 matrix math for WebGL scene setup
///
/// Provides column-major matrices, perspective projection and translation,
/// plus the per-frame matrix setup a renderer uploads before drawing.

pub mod error;
pub mod mat4;
pub mod matrix;
pub mod projection;
pub mod scene;

// Re-export commonly used types
pub use error::{MatrixError, Result};
pub use matrix::{create, translate, Matrix4, MATRIX_LEN};
pub use projection::{perspective, Perspective, Viewport};
pub use scene::{FrameConfig, FrameMatrices, UniformSink};

