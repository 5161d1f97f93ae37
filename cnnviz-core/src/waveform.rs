use crate::types::WaveformData;

/// Min/max of the samples that fall under one horizontal pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeakColumn {
    pub min: f32,
    pub max: f32,
}

/// Reduce `samples` to `width` min/max columns.
///
/// With fewer samples than pixels, each sample becomes its own column.
/// Non-finite samples are skipped; a column with none left is flat at zero.
pub fn peak_columns(samples: &[f32], width: usize) -> Vec<PeakColumn> {
    if samples.is_empty() || width == 0 {
        return Vec::new();
    }
    let cols = width.min(samples.len());
    let per_col = samples.len() as f64 / cols as f64;
    (0..cols)
        .map(|c| {
            let i0 = (c as f64 * per_col) as usize;
            let i1 = if c + 1 == cols {
                samples.len()
            } else {
                (((c + 1) as f64 * per_col) as usize).clamp(i0 + 1, samples.len())
            };
            let mut finite = samples[i0..i1].iter().copied().filter(|s| s.is_finite());
            match finite.next() {
                None => PeakColumn { min: 0.0, max: 0.0 },
                Some(first) => {
                    let (min, max) = finite.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s)));
                    PeakColumn { min, max }
                }
            }
        })
        .collect()
}

/// Largest |sample|, used to scale the trace. At least a small epsilon.
pub fn peak_amplitude(samples: &[f32]) -> f32 {
    samples
        .iter()
        .filter(|s| s.is_finite())
        .fold(1e-6f32, |m, s| m.max(s.abs()))
}

/// "44.1 kHz · 5.00 s" caption.
pub fn describe(waveform: &WaveformData) -> String {
    let rate = if waveform.sample_rate >= 1000.0 {
        format!("{:.1} kHz", waveform.sample_rate / 1000.0)
    } else {
        format!("{:.0} Hz", waveform.sample_rate)
    };
    format!("{rate} \u{00b7} {:.2} s", waveform.duration)
}
