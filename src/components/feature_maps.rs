use cnnviz_core::heatmap::render_heatmap;
use cnnviz_core::partition::partition_layers;
use cnnviz_core::{LayerData, VisualizationData};
use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::canvas::heatmap_renderer;

/// One layer as a heatmap canvas.
#[component]
pub fn LayerCanvas(layer: LayerData, #[prop(optional)] large: bool) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let image = render_heatmap(&layer);
    let is_empty = image.is_none();

    Effect::new(move || {
        let Some(canvas_el) = canvas_ref.get() else { return };
        let Some(img) = image.as_ref() else { return };
        let canvas: &HtmlCanvasElement = canvas_el.as_ref();
        if let Err(e) = heatmap_renderer::draw_heatmap(canvas, img) {
            log::warn!("Heatmap draw failed: {e:?}");
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class="heatmap"
            class:heatmap-large=large
            class:heatmap-empty=is_empty
        />
    }
}

#[component]
fn LayerTile(name: String, layer: LayerData) -> impl IntoView {
    let shape = layer.shape_label();
    let short_name = name
        .split_once('.')
        .map(|(_, rest)| rest.to_string())
        .unwrap_or_else(|| name.clone());

    view! {
        <figure class="layer-tile" title=name>
            <LayerCanvas layer=layer />
            <figcaption>
                <span class="layer-name">{short_name}</span>
                <span class="layer-shape">{shape}</span>
            </figcaption>
        </figure>
    }
}

#[component]
pub fn SpectrogramPanel(spectrogram: LayerData) -> impl IntoView {
    let shape = spectrogram.shape_label();

    view! {
        <section class="card">
            <h2>"Input Spectrogram"</h2>
            <LayerCanvas layer=spectrogram large=true />
            <p class="caption">{shape}</p>
        </section>
    }
}

/// Feature maps split into top-level layers and per-block groups.
#[component]
pub fn FeatureMaps(visualization: VisualizationData) -> impl IntoView {
    let partition = partition_layers(&visualization);
    let layer = |name: &str| visualization.get(name).cloned().unwrap_or_default();

    let top_level: Vec<(String, LayerData)> = partition
        .top_level
        .iter()
        .map(|n| (n.to_string(), layer(n)))
        .collect();
    let groups: Vec<(String, Vec<(String, LayerData)>)> = partition
        .grouped
        .iter()
        .map(|g| {
            let layers = g.layers.iter().map(|n| (n.to_string(), layer(n))).collect();
            (g.prefix.to_string(), layers)
        })
        .collect();

    view! {
        <section class="card feature-maps">
            <h2>"Convolutional Layer Outputs"</h2>
            <div class="layer-row">
                {top_level
                    .into_iter()
                    .map(|(name, layer)| view! { <LayerTile name=name layer=layer /> })
                    .collect_view()}
            </div>
            {groups
                .into_iter()
                .map(|(prefix, layers)| view! {
                    <div class="layer-group">
                        <h3>{prefix}</h3>
                        <div class="layer-row">
                            {layers
                                .into_iter()
                                .map(|(name, layer)| view! { <LayerTile name=name layer=layer /> })
                                .collect_view()}
                        </div>
                    </div>
                })
                .collect_view()}
        </section>
    }
}
