use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One ranked class from the classifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub class: String,
    /// Score in [0, 1].
    pub confidence: f64,
}

/// Activations of a single network layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerData {
    pub shape: Vec<usize>,
    pub values: Vec<Vec<f32>>,
}

impl LayerData {
    pub fn rows(&self) -> usize {
        self.values.len()
    }

    /// Width of the widest row (rows from the server are normally uniform).
    pub fn cols(&self) -> usize {
        self.values.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Largest absolute value in the grid, ignoring NaNs.
    pub fn max_abs(&self) -> f32 {
        self.values
            .iter()
            .flatten()
            .filter(|v| v.is_finite())
            .fold(0.0f32, |m, v| m.max(v.abs()))
    }

    /// "1×64×32" style label for the shape.
    pub fn shape_label(&self) -> String {
        self.shape
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("\u{00d7}")
    }
}

/// Layer name → activations, kept in the order the server sent them.
///
/// Names may encode hierarchy with `.` (e.g. `layer1.block0`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualizationData {
    layers: Vec<(String, LayerData)>,
}

impl VisualizationData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a layer. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, layer: LayerData) {
        let name = name.into();
        match self.layers.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = layer,
            None => self.layers.push((name, layer)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&LayerData> {
        self.layers.iter().find(|(n, _)| n == name).map(|(_, l)| l)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, LayerData)> for VisualizationData {
    fn from_iter<I: IntoIterator<Item = (S, LayerData)>>(iter: I) -> Self {
        let mut viz = Self::new();
        for (name, layer) in iter {
            viz.insert(name, layer);
        }
        viz
    }
}

impl Serialize for VisualizationData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.layers.len()))?;
        for (name, layer) in &self.layers {
            map.serialize_entry(name, layer)?;
        }
        map.end()
    }
}

struct LayersVisitor;

impl<'de> Visitor<'de> for LayersVisitor {
    type Value = VisualizationData;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of layer name to layer data")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut viz = VisualizationData {
            layers: Vec::with_capacity(access.size_hint().unwrap_or(0).min(256)),
        };
        while let Some((name, layer)) = access.next_entry::<String, LayerData>()? {
            viz.insert(name, layer);
        }
        Ok(viz)
    }
}

impl<'de> Deserialize<'de> for VisualizationData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LayersVisitor)
    }
}

/// Raw audio samples echoed back by the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveformData {
    pub values: Vec<f32>,
    pub sample_rate: f64,
    /// Seconds.
    pub duration: f64,
}

/// Explicit `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a successful inference call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub predictions: Vec<Prediction>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub visualization: VisualizationData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub input_spectrogram: LayerData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub waveform: WaveformData,
}

/// Request body for the inference endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub audio_data: String,
}
