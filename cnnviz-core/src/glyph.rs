use crate::types::Prediction;

/// Shown for labels missing from [`CLASS_GLYPHS`].
pub const FALLBACK_GLYPH: &str = "\u{1f508}"; // 🔈

/// Emoji for the ESC-50 class labels the classifier emits.
const CLASS_GLYPHS: &[(&str, &str)] = &[
    ("dog", "\u{1f415}"),
    ("rooster", "\u{1f413}"),
    ("pig", "\u{1f416}"),
    ("cow", "\u{1f404}"),
    ("frog", "\u{1f438}"),
    ("cat", "\u{1f431}"),
    ("hen", "\u{1f414}"),
    ("insects", "\u{1f99f}"),
    ("sheep", "\u{1f411}"),
    ("crow", "\u{1f426}\u{200d}\u{2b1b}"),
    ("rain", "\u{1f327}\u{fe0f}"),
    ("sea_waves", "\u{1f30a}"),
    ("crackling_fire", "\u{1f525}"),
    ("crickets", "\u{1f997}"),
    ("chirping_birds", "\u{1f426}"),
    ("water_drops", "\u{1f4a7}"),
    ("wind", "\u{1f4a8}"),
    ("pouring_water", "\u{1f6b0}"),
    ("toilet_flush", "\u{1f6bd}"),
    ("thunderstorm", "\u{26c8}\u{fe0f}"),
    ("crying_baby", "\u{1f476}"),
    ("sneezing", "\u{1f927}"),
    ("clapping", "\u{1f44f}"),
    ("breathing", "\u{1f62e}\u{200d}\u{1f4a8}"),
    ("coughing", "\u{1f637}"),
    ("footsteps", "\u{1f463}"),
    ("laughing", "\u{1f602}"),
    ("brushing_teeth", "\u{1faa5}"),
    ("snoring", "\u{1f634}"),
    ("drinking_sipping", "\u{1f964}"),
    ("door_wood_knock", "\u{1f6aa}"),
    ("mouse_click", "\u{1f5b1}\u{fe0f}"),
    ("keyboard_typing", "\u{2328}\u{fe0f}"),
    ("door_wood_creaks", "\u{1f6aa}"),
    ("can_opening", "\u{1f96b}"),
    ("washing_machine", "\u{1f9fa}"),
    ("vacuum_cleaner", "\u{1f9f9}"),
    ("clock_alarm", "\u{23f0}"),
    ("clock_tick", "\u{23f1}\u{fe0f}"),
    ("glass_breaking", "\u{1f95b}"),
    ("helicopter", "\u{1f681}"),
    ("chainsaw", "\u{1fa9a}"),
    ("siren", "\u{1f6a8}"),
    ("car_horn", "\u{1f4ef}"),
    ("engine", "\u{1f697}"),
    ("train", "\u{1f682}"),
    ("church_bells", "\u{1f514}"),
    ("airplane", "\u{2708}\u{fe0f}"),
    ("fireworks", "\u{1f386}"),
    ("hand_saw", "\u{1fa9a}"),
];

/// Emoji for a class label, or [`FALLBACK_GLYPH`].
pub fn glyph_for(class: &str) -> &'static str {
    CLASS_GLYPHS
        .iter()
        .find(|(label, _)| *label == class)
        .map(|(_, glyph)| *glyph)
        .unwrap_or(FALLBACK_GLYPH)
}

/// Class label as shown to the user: `chirping_birds` → `chirping birds`.
pub fn display_label(class: &str) -> String {
    class.replace('_', " ")
}

/// One line of the ranked prediction list.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionRow {
    /// 1-based.
    pub rank: usize,
    pub label: String,
    pub glyph: &'static str,
    pub confidence: f64,
}

impl PredictionRow {
    /// Confidence as a percentage with one decimal, e.g. `87.3%`.
    pub fn percent(&self) -> String {
        format!("{:.1}%", self.confidence.clamp(0.0, 1.0) * 100.0)
    }
}

/// At most `n` rows, in the order the server ranked them.
pub fn top_predictions(predictions: &[Prediction], n: usize) -> Vec<PredictionRow> {
    predictions
        .iter()
        .take(n)
        .enumerate()
        .map(|(i, p)| PredictionRow {
            rank: i + 1,
            label: display_label(&p.class),
            glyph: glyph_for(&p.class),
            confidence: p.confidence,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pred(class: &str, confidence: f64) -> Prediction {
        Prediction { class: class.to_string(), confidence }
    }

    #[test]
    fn test_known_label_glyph() {
        assert_eq!(glyph_for("dog"), "\u{1f415}");
        assert_eq!(glyph_for("chirping_birds"), "\u{1f426}");
    }

    #[test]
    fn test_unknown_label_falls_back() {
        assert_eq!(glyph_for("xyz_unknown"), FALLBACK_GLYPH);
        assert_eq!(glyph_for(""), FALLBACK_GLYPH);
        // lookup is on the raw label, not the display form
        assert_eq!(glyph_for("chirping birds"), FALLBACK_GLYPH);
    }

    #[test]
    fn test_table_has_no_duplicate_labels() {
        for (i, (a, _)) in CLASS_GLYPHS.iter().enumerate() {
            assert!(
                CLASS_GLYPHS[i + 1..].iter().all(|(b, _)| a != b),
                "duplicate label {a}"
            );
        }
    }

    #[test]
    fn test_top_three_in_given_order() {
        let preds = vec![
            pred("chirping_birds", 0.7),
            pred("dog", 0.2),
            pred("xyz_unknown", 0.05),
            pred("rain", 0.05),
        ];
        let rows = top_predictions(&preds, 3);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["chirping birds", "dog", "xyz unknown"]);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[2].glyph, FALLBACK_GLYPH);
    }

    #[test]
    fn test_top_predictions_fewer_than_requested() {
        let rows = top_predictions(&[pred("cat", 1.0)], 3);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].percent(), "100.0%");
        assert!(top_predictions(&[], 3).is_empty());
    }

    #[test]
    fn test_display_label_replaces_every_underscore() {
        assert_eq!(display_label("door_wood_knock"), "door wood knock");
        assert_eq!(display_label("siren"), "siren");
    }
}
