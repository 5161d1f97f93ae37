use cnnviz_core::waveform::describe;
use cnnviz_core::WaveformData;
use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::canvas::{context_2d, waveform_renderer};

#[component]
pub fn WaveformPanel(waveform: WaveformData) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let caption = describe(&waveform);
    let samples = waveform.values;

    Effect::new(move || {
        let Some(canvas_el) = canvas_ref.get() else { return };
        let canvas: &HtmlCanvasElement = canvas_el.as_ref();

        let rect = canvas.get_bounding_client_rect();
        let display_w = rect.width() as u32;
        let display_h = rect.height() as u32;
        if display_w == 0 || display_h == 0 {
            return;
        }
        if canvas.width() != display_w || canvas.height() != display_h {
            canvas.set_width(display_w);
            canvas.set_height(display_h);
        }

        let Some(ctx) = context_2d(canvas) else { return };
        waveform_renderer::draw_waveform(&ctx, &samples, display_w as f64, display_h as f64);
    });

    view! {
        <section class="card">
            <h2>"Audio Waveform"</h2>
            <div class="waveform-container">
                <canvas node_ref=canvas_ref />
            </div>
            <p class="caption">{caption}</p>
        </section>
    }
}
