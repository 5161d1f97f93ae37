use cnnviz_core::glyph::PredictionRow;
use cnnviz_core::ApiResponse;
use leptos::prelude::*;
use std::sync::Arc;

use crate::components::feature_maps::{FeatureMaps, SpectrogramPanel};
use crate::components::predictions::{ErrorPanel, PredictionList};
use crate::components::upload::{FileBadge, UploadButton};
use crate::components::waveform::WaveformPanel;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(state);

    view! {
        <main class="page">
            <div class="container">
                <header class="hero">
                    <h1>"CNN Audio Visualizer"</h1>
                    <p class="subtitle">
                        "Upload a WAV file to see the model's predictions and feature maps."
                    </p>
                    <UploadButton />
                    <FileBadge />
                </header>
                <ErrorPanel />
                <ResultArea />
            </div>
        </main>
    }
}

#[component]
fn ResultArea() -> impl IntoView {
    let state = expect_context::<AppState>();
    let result = move || {
        state
            .view
            .with(|v| v.result.clone().map(|response| (response, v.prediction_rows())))
    };

    view! {
        {move || result().map(|(response, rows)| view! { <Results response=response rows=rows /> })}
    }
}

#[component]
fn Results(response: Arc<ApiResponse>, rows: Vec<PredictionRow>) -> impl IntoView {
    let spectrogram = (!response.input_spectrogram.is_empty())
        .then(|| response.input_spectrogram.clone());
    let waveform = (!response.waveform.values.is_empty()).then(|| response.waveform.clone());
    let visualization = (!response.visualization.is_empty())
        .then(|| response.visualization.clone());

    view! {
        <div class="results">
            <PredictionList rows=rows />
            <div class="results-row">
                {spectrogram.map(|spectrogram| view! { <SpectrogramPanel spectrogram=spectrogram /> })}
                {waveform.map(|waveform| view! { <WaveformPanel waveform=waveform /> })}
            </div>
            {visualization.map(|visualization| view! { <FeatureMaps visualization=visualization /> })}
        </div>
    }
}
