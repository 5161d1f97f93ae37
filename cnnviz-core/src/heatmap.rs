use crate::types::LayerData;

/// Map an activation to RGB on a diverging scale.
/// Negative → blue, zero → near-white, positive → orange.
/// `max_abs` normalises the value; non-finite values render grey.
pub fn activation_rgb(value: f32, max_abs: f32) -> [u8; 3] {
    if !value.is_finite() {
        return [128, 128, 128];
    }
    let t = if max_abs > 0.0 {
        (value / max_abs).clamp(-1.0, 1.0)
    } else {
        0.0
    };
    const NEUTRAL: [f32; 3] = [245.0, 245.0, 244.0];
    const POS: [f32; 3] = [234.0, 88.0, 12.0]; // orange
    const NEG: [f32; 3] = [37.0, 99.0, 235.0]; // blue
    let (target, a) = if t >= 0.0 { (POS, t) } else { (NEG, -t) };
    let mix = |i: usize| (NEUTRAL[i] + (target[i] - NEUTRAL[i]) * a).round() as u8;
    [mix(0), mix(1), mix(2)]
}

/// RGBA pixels for a layer grid, one pixel per cell.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>, // RGBA, row-major, row 0 = last grid row
}

/// Render a layer as a heatmap.
///
/// Rows are flipped so the first grid row (lowest frequency bin for
/// spectrogram-like layers) ends up at the bottom. Ragged rows are padded
/// with neutral cells. Returns `None` for an empty grid.
pub fn render_heatmap(layer: &LayerData) -> Option<HeatmapImage> {
    if layer.is_empty() {
        return None;
    }
    let width = layer.cols();
    let height = layer.rows();
    let max_abs = layer.max_abs();
    let mut pixels = Vec::with_capacity(width * height * 4);
    for row in layer.values.iter().rev() {
        for x in 0..width {
            let v = row.get(x).copied().unwrap_or(0.0);
            let [r, g, b] = activation_rgb(v, max_abs);
            pixels.extend_from_slice(&[r, g, b, 255]);
        }
    }
    Some(HeatmapImage {
        width: width as u32,
        height: height as u32,
        pixels,
    })
}
