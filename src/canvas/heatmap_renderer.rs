use cnnviz_core::heatmap::HeatmapImage;
use wasm_bindgen::{Clamped, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use super::context_2d;

/// Blit a heatmap at one canvas pixel per grid cell; CSS does the scaling.
pub fn draw_heatmap(canvas: &HtmlCanvasElement, img: &HeatmapImage) -> Result<(), JsValue> {
    if canvas.width() != img.width || canvas.height() != img.height {
        canvas.set_width(img.width);
        canvas.set_height(img.height);
    }
    let ctx: CanvasRenderingContext2d =
        context_2d(canvas).ok_or_else(|| JsValue::from_str("no 2d context"))?;
    let data = ImageData::new_with_u8_clamped_array_and_sh(Clamped(img.pixels.as_slice()), img.width, img.height)?;
    ctx.put_image_data(&data, 0.0, 0.0)
}
