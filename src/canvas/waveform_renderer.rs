use cnnviz_core::waveform::{peak_amplitude, peak_columns};
use web_sys::CanvasRenderingContext2d;

const BACKGROUND: &str = "#fafaf9";
const TRACE: &str = "#57534e";
const AXIS: &str = "#d6d3d1";

/// Draw a min/max trace of `samples` across the whole canvas.
pub fn draw_waveform(ctx: &CanvasRenderingContext2d, samples: &[f32], canvas_width: f64, canvas_height: f64) {
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, canvas_width, canvas_height);

    let mid_y = canvas_height / 2.0;
    ctx.set_stroke_style_str(AXIS);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(0.0, mid_y);
    ctx.line_to(canvas_width, mid_y);
    ctx.stroke();

    let columns = peak_columns(samples, canvas_width as usize);
    if columns.is_empty() {
        return;
    }
    let scale = mid_y * 0.9 / peak_amplitude(samples) as f64;
    let px_per_col = canvas_width / columns.len() as f64;

    ctx.set_stroke_style_str(TRACE);
    ctx.begin_path();
    for (i, col) in columns.iter().enumerate() {
        let x = (i as f64 + 0.5) * px_per_col;
        let y_top = mid_y - col.max as f64 * scale;
        let y_bottom = mid_y - col.min as f64 * scale;
        // keep single-sample columns visible
        let y_bottom = if (y_bottom - y_top).abs() < 1.0 { y_top + 1.0 } else { y_bottom };
        ctx.move_to(x, y_top);
        ctx.line_to(x, y_bottom);
    }
    ctx.stroke();
}
