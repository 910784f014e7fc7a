/// Buffer-writing matrix operations over raw `f32` slices.
///
/// These mirror the destination-first calling style of common WebGL matrix
/// libraries, for callers that reuse uniform buffers across frames. Every
/// function validates all of its inputs before touching `out`, so a failed
/// call leaves the destination untouched.
use crate::error::{check_len, Result};
use crate::matrix::Matrix4;
use crate::projection::Perspective;

/// Write the identity matrix into `out`
pub fn identity(out: &mut [f32]) -> Result<()> {
    check_len(out.len())?;
    out.copy_from_slice(Matrix4::identity().as_slice());
    Ok(())
}

/// Overwrite `out` with a perspective projection. `out` is never read.
pub fn perspective(out: &mut [f32], fov_y: f32, aspect: f32, near: f32, far: f32) -> Result<()> {
    check_len(out.len())?;
    let m = Perspective::new(fov_y, aspect, near, far).matrix()?;
    out.copy_from_slice(m.as_slice());
    Ok(())
}

/// Write `source * T(v)` into `out`
pub fn translate(out: &mut [f32], source: &[f32], v: [f32; 3]) -> Result<()> {
    check_len(out.len())?;
    let m = Matrix4::from_slice(source)?.translate(v);
    out.copy_from_slice(m.as_slice());
    Ok(())
}

/// Translate `m` by `v` in place; the aliased form of [`translate`]
pub fn translate_in_place(m: &mut [f32], v: [f32; 3]) -> Result<()> {
    let translated = Matrix4::from_slice(m)?.translate(v);
    m.copy_from_slice(translated.as_slice());
    Ok(())
}
