//! View-state snapshots for the upload page.
//!
//! The page never mutates its state in place. Each step of an analysis
//! produces a fresh [`ViewState`] that replaces the previous one whole, so a
//! render can never observe a half-applied update.
//!
//! Every file selection is tagged with a [`RequestId`]. Outcomes arriving for
//! anything but the latest id are dropped, so a slow response from an earlier
//! selection cannot overwrite the state of a newer one.

use std::sync::Arc;

use crate::error::AnalyzeError;
use crate::glyph::{top_predictions, PredictionRow};
use crate::types::ApiResponse;

/// Number of predictions the page lists.
pub const TOP_PREDICTIONS: usize = 3;

/// Tag for one file selection. Ids only ever increase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub file_name: String,
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<Arc<ApiResponse>>,
    latest: RequestId,
}

impl ViewState {
    /// State after the user picks `file_name`: loading, no error, no result.
    pub fn select(&self, file_name: impl Into<String>) -> (Self, RequestId) {
        let id = RequestId(self.latest.0 + 1);
        let next = Self {
            file_name: file_name.into(),
            loading: true,
            error: None,
            result: None,
            latest: id,
        };
        (next, id)
    }

    /// State after request `id` finished. Stale ids leave the state as is.
    pub fn resolve(&self, id: RequestId, outcome: Result<ApiResponse, AnalyzeError>) -> Self {
        if !self.is_current(id) {
            log::debug!(
                "Dropping outcome of superseded request #{} (latest #{})",
                id.0,
                self.latest.0
            );
            return self.clone();
        }
        match outcome {
            Ok(response) => Self {
                loading: false,
                error: None,
                result: Some(Arc::new(response)),
                ..self.clone()
            },
            Err(e) => Self {
                loading: false,
                error: Some(e.to_string()),
                result: None,
                ..self.clone()
            },
        }
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        id == self.latest
    }

    /// Label of the file-picker button.
    pub fn picker_label(&self) -> &'static str {
        if self.loading {
            "Analysing..."
        } else {
            "Choose WAV File"
        }
    }

    /// Ranked rows for the prediction list, empty without a result.
    pub fn prediction_rows(&self) -> Vec<PredictionRow> {
        self.result
            .as_deref()
            .map(|r| top_predictions(&r.predictions, TOP_PREDICTIONS))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Prediction;

    fn response(classes: &[&str]) -> ApiResponse {
        ApiResponse {
            predictions: classes
                .iter()
                .map(|c| Prediction { class: c.to_string(), confidence: 0.5 })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_select_clears_previous_outcome() {
        let (s, id) = ViewState::default().select("a.wav");
        let s = s.resolve(id, Err(AnalyzeError::Status(500)));
        assert!(s.error.is_some());

        let (s, _) = s.select("b.wav");
        assert_eq!(s.file_name, "b.wav");
        assert!(s.loading);
        assert!(s.error.is_none());
        assert!(s.result.is_none());
        assert_eq!(s.picker_label(), "Analysing...");
    }

    #[test]
    fn test_success_stores_result() {
        let (s, id) = ViewState::default().select("dog.wav");
        let s = s.resolve(id, Ok(response(&["dog", "cat"])));
        assert!(!s.loading);
        assert!(s.error.is_none());
        assert_eq!(s.prediction_rows().len(), 2);
        assert_eq!(s.picker_label(), "Choose WAV File");
    }

    #[test]
    fn test_read_failure_sets_fixed_message() {
        let (s, id) = ViewState::default().select("broken.wav");
        assert!(s.loading);
        let s = s.resolve(id, Err(AnalyzeError::ReadFailed));
        assert!(!s.loading);
        assert_eq!(s.error.as_deref(), Some("FAILED TO READ FILE"));
        assert!(s.result.is_none());
    }

    #[test]
    fn test_stale_outcome_is_dropped() {
        let (s, first) = ViewState::default().select("slow.wav");
        let (s, second) = s.select("fast.wav");
        assert!(second > first);

        let s = s.resolve(second, Ok(response(&["rain"])));
        let after_stale = s.resolve(first, Ok(response(&["dog"])));
        assert_eq!(after_stale, s);
        assert_eq!(after_stale.prediction_rows()[0].label, "rain");

        let after_stale_err = s.resolve(first, Err(AnalyzeError::Status(502)));
        assert!(after_stale_err.error.is_none());
    }

    #[test]
    fn test_stale_outcome_does_not_end_loading() {
        let (s, first) = ViewState::default().select("a.wav");
        let (s, _second) = s.select("b.wav");
        let s = s.resolve(first, Ok(response(&["dog"])));
        assert!(s.loading);
        assert!(s.result.is_none());
    }

    #[test]
    fn test_error_replaces_result() {
        let (s, id) = ViewState::default().select("a.wav");
        let s = s.resolve(id, Ok(response(&["dog"])));
        let (s, id) = s.select("b.wav");
        let s = s.resolve(id, Err(AnalyzeError::transport(None)));
        assert_eq!(s.error.as_deref(), Some("Unknown Error"));
        assert!(s.result.is_none());
        assert!(s.prediction_rows().is_empty());
    }
}
