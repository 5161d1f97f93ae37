use cnnviz_core::analyze_source;
use cnnviz_core::pipeline::compiled_endpoint;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::bridge::{BrowserFile, FetchTransport};
use crate::state::AppState;

/// Reset the page for `file`, then read, send and store the outcome.
fn start_analysis(file: File, state: AppState) {
    let id = state.begin(file.name());
    log::info!("Selected {} ({:.0} bytes), request #{}", file.name(), file.size(), id.get());

    spawn_local(async move {
        let source = BrowserFile::new(file);
        let outcome = analyze_source(&source, &FetchTransport, compiled_endpoint()).await;
        if let Err(e) = &outcome {
            log::error!("Analysis of request #{} failed: {e}", id.get());
        }
        state.finish(id, outcome);
    });
}

#[component]
pub fn UploadButton() -> impl IntoView {
    let state = expect_context::<AppState>();
    let loading = move || state.is_loading();
    let label = move || state.view.with(|v| v.picker_label());

    let on_change = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let input: HtmlInputElement = target.unchecked_into();
        let Some(file) = input.files().and_then(|list| list.get(0)) else { return };

        // Reset the input so the same file can be re-selected
        input.set_value("");
        start_analysis(file, state);
    };

    view! {
        <div class="upload">
            <input
                type="file"
                accept=".wav"
                id="file-upload"
                class="upload-input"
                prop:disabled=loading
                on:change=on_change
            />
            <button class="upload-btn" tabindex="-1" prop:disabled=loading>
                {label}
            </button>
        </div>
    }
}

#[component]
pub fn FileBadge() -> impl IntoView {
    let state = expect_context::<AppState>();
    let file_name = move || state.view.with(|v| v.file_name.clone());

    view! {
        <Show when=move || !file_name().is_empty()>
            <span class="file-badge">{file_name}</span>
        </Show>
    }
}
