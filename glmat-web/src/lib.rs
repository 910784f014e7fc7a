/// glmat Web - WASM bindings for WebGL uniform matrices
///
/// Every matrix crosses the boundary as a 16-element `Float32Array` in
/// column-major order, ready for `uniformMatrix4fv(location, false, data)`.
/// Shader programs, buffers and draw calls stay on the JavaScript side.

use glmat_core::{FrameConfig, FrameMatrices, Matrix4, MatrixError, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

fn to_js(err: MatrixError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Identity matrix
#[wasm_bindgen]
pub fn create() -> Vec<f32> {
    glmat_core::create().as_slice().to_vec()
}

/// Perspective projection; rejects degenerate frustums and bad aspect ratios
#[wasm_bindgen]
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Result<Vec<f32>, JsValue> {
    let m = glmat_core::perspective(fov_y, aspect, near, far).map_err(to_js)?;
    Ok(m.as_slice().to_vec())
}

/// Translate a 16-element matrix by `(x, y, z)` in its local frame
#[wasm_bindgen]
pub fn translate(source: &[f32], x: f32, y: f32, z: f32) -> Result<Vec<f32>, JsValue> {
    let source = Matrix4::from_slice(source).map_err(to_js)?;
    Ok(source.translate([x, y, z]).as_slice().to_vec())
}

/// Projection and model-view matrices for one frame
#[wasm_bindgen]
pub struct WebFrame {
    frame: FrameMatrices,
}

#[wasm_bindgen]
impl WebFrame {
    /// Build a frame with the default camera for a surface of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<WebFrame, JsValue> {
        frame_for(FrameConfig::default(), width, height).map_err(to_js)
    }

    /// Build a frame with explicit camera settings; `offset` must hold three values
    pub fn with_config(
        width: f32,
        height: f32,
        fov_y: f32,
        near: f32,
        far: f32,
        offset: &[f32],
    ) -> Result<WebFrame, JsValue> {
        let model_offset: [f32; 3] = offset
            .try_into()
            .map_err(|_| JsValue::from_str("offset must hold exactly three values"))?;
        let config = FrameConfig {
            field_of_view: fov_y,
            near,
            far,
            model_offset,
        };
        frame_for(config, width, height).map_err(to_js)
    }

    /// Size the frame from a canvas' displayed client size
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<WebFrame, JsValue> {
        let width = canvas.client_width() as f32;
        let height = canvas.client_height() as f32;
        frame_for(FrameConfig::default(), width, height).map_err(to_js)
    }

    /// Look up a canvas by element id and size the frame from it
    pub fn from_canvas_id(canvas_id: &str) -> Result<WebFrame, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("Unable to retrieve document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("No element with id {}", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("Element {} is not a canvas", canvas_id)))?;
        Self::from_canvas(&canvas)
    }

    pub fn projection(&self) -> Vec<f32> {
        self.frame.projection.as_slice().to_vec()
    }

    pub fn model_view(&self) -> Vec<f32> {
        self.frame.model_view.as_slice().to_vec()
    }

    pub fn mvp(&self) -> Vec<f32> {
        self.frame.mvp().as_slice().to_vec()
    }
}

fn frame_for(config: FrameConfig, width: f32, height: f32) -> glmat_core::Result<WebFrame> {
    let frame = config.matrices(Viewport::new(width, height))?;
    log::debug!("built frame for {}x{} surface", width, height);
    Ok(WebFrame { frame })
}
