use cnnviz_core::glyph::PredictionRow;
use leptos::prelude::*;

#[component]
pub fn PredictionList(rows: Vec<PredictionRow>) -> impl IntoView {
    view! {
        <section class="card predictions">
            <h2>"Top Predictions"</h2>
            <ol class="prediction-list">
                {rows
                    .into_iter()
                    .map(|row| {
                        let width = format!("width: {:.1}%", row.confidence.clamp(0.0, 1.0) * 100.0);
                        let percent = row.percent();
                        view! {
                            <li class="prediction" class:top={row.rank == 1}>
                                <span class="prediction-glyph">{row.glyph}</span>
                                <span class="prediction-label">{row.label}</span>
                                <span class="prediction-percent">{percent}</span>
                                <div class="confidence-track">
                                    <div class="confidence-bar" style=width></div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
pub fn ErrorPanel() -> impl IntoView {
    let state = expect_context::<crate::state::AppState>();
    let error = move || state.view.with(|v| v.error.clone());

    view! {
        {move || error().map(|msg| view! {
            <div class="card error-card">
                <p>"Error: " {msg}</p>
            </div>
        })}
    }
}
