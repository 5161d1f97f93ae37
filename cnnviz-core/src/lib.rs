//! Platform-free core of the CNN audio visualizer: the inference response
//! model, request encoding, the analyze pipeline, and page view state.

pub mod encode;
pub mod error;
pub mod glyph;
pub mod heatmap;
pub mod partition;
pub mod pipeline;
pub mod types;
pub mod view;
pub mod waveform;

pub use error::{AnalyzeError, AnalyzeResult};
pub use pipeline::{analyze_bytes, analyze_source, AudioSource, HttpReply, InferenceTransport};
pub use types::{ApiResponse, LayerData, Prediction, VisualizationData, WaveformData};
pub use view::{RequestId, ViewState};
