use crate::features::round_half_up;

/// Taps of the 5-wide smoothing kernel, centre last.
const BLUR_FAR: f32 = 0.05;
const BLUR_NEAR: f32 = 0.25;
const BLUR_CENTER: f32 = 0.4;

/// Lookup table mapping a `[0, 1]` feature value to a learned cost.
#[derive(Clone, Debug, PartialEq)]
pub struct LookupTable {
    values: Vec<f32>,
}

impl LookupTable {
    /// Untrained table of `granularity` zeros.
    pub fn new(granularity: usize) -> Self {
        assert!(granularity > 0, "lookup table requires at least one bin");
        Self {
            values: vec![0.0; granularity],
        }
    }

    #[inline]
    pub fn granularity(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Bin for a feature value: `round((granularity - 1) · value)`.
    #[inline]
    pub fn index(&self, value: f32) -> usize {
        let last = self.values.len() - 1;
        let scaled = round_half_up(last as f32 * value.clamp(0.0, 1.0));
        (scaled.max(0) as usize).min(last)
    }

    #[inline]
    pub fn lookup(&self, value: f32) -> f32 {
        self.values[self.index(value)]
    }

    /// Rebuild from samples: frequent values become cheap, then smooth.
    pub fn fit(&mut self, samples: impl IntoIterator<Item = f32>) {
        let mut counts = vec![0.0f32; self.values.len()];
        let mut max_count = 1.0f32;
        for value in samples {
            let idx = self.index(value);
            counts[idx] += 1.0;
            max_count = max_count.max(counts[idx]);
        }
        for c in &mut counts {
            *c = 1.0 - *c / max_count;
        }
        smooth_5tap(&counts, &mut self.values);
        // Rounding in the blur can overshoot by an ulp.
        for v in &mut self.values {
            *v = v.clamp(0.0, 1.0);
        }
    }

    /// Cap every entry by a line falling from 1 with the given slope per bin.
    pub fn cap_linear(&mut self, slope: f32) {
        for (i, v) in self.values.iter_mut().enumerate() {
            *v = v.min(1.0 - i as f32 * slope);
        }
    }
}

/// 5-tap blur with renormalized end cases; `out.len() == buffer.len()`.
fn smooth_5tap(buffer: &[f32], out: &mut [f32]) {
    let n = buffer.len();
    debug_assert_eq!(n, out.len());
    if n < 4 {
        out.copy_from_slice(buffer);
        return;
    }
    let b = buffer;
    out[0] = BLUR_CENTER * b[0] + 0.5 * b[1] + 0.1 * b[2];
    out[1] = BLUR_NEAR * b[0] + BLUR_CENTER * b[1] + BLUR_NEAR * b[2] + 0.1 * b[3];
    for i in 2..n.saturating_sub(2) {
        out[i] = BLUR_FAR * b[i - 2]
            + BLUR_NEAR * b[i - 1]
            + BLUR_CENTER * b[i]
            + BLUR_NEAR * b[i + 1]
            + BLUR_FAR * b[i + 2];
    }
    out[n - 2] =
        BLUR_NEAR * b[n - 1] + BLUR_CENTER * b[n - 2] + BLUR_NEAR * b[n - 3] + 0.1 * b[n - 4];
    out[n - 1] = BLUR_CENTER * b[n - 1] + 0.5 * b[n - 2] + 0.1 * b[n - 3];
}
