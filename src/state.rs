use cnnviz_core::{AnalyzeError, ApiResponse, RequestId, ViewState};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Whole-page snapshot, swapped out as a unit on every transition.
    pub view: RwSignal<ViewState>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(ViewState::default()),
        }
    }

    /// Start a new selection: loading on, error and result cleared.
    pub fn begin(&self, file_name: String) -> RequestId {
        let mut id = RequestId::default();
        self.view.update(|v| {
            let (next, next_id) = v.select(file_name);
            *v = next;
            id = next_id;
        });
        id
    }

    /// Apply the outcome of request `id`; ignored if a newer selection exists.
    pub fn finish(&self, id: RequestId, outcome: Result<ApiResponse, AnalyzeError>) {
        self.view.update(|v| *v = v.resolve(id, outcome));
    }

    pub fn is_loading(&self) -> bool {
        self.view.with(|v| v.loading)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
