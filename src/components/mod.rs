pub mod app;
pub mod feature_maps;
pub mod predictions;
pub mod upload;
pub mod waveform;
