//! Astrometric spread and centroid of pointing samples.
//!
//! An empty sample set has no spread at all, so it yields `None` rather than a
//! zero-valued result. Callers must branch on that explicitly.

use crate::algorithms::ExactSum;
use crate::api::{AxisDeviation, DeviationResult};
use crate::models::FrameRecord;

/// 2^64. Dividing by it is exact for all but subnormal-range values.
const UPSCALE: f64 = 18_446_744_073_709_551_616.0;

/// Single-pass fold state for one axis.
///
/// `scaled` holds the same sum divided by [`UPSCALE`]; it only decides the
/// centroid when the unscaled sum overflows.
#[derive(Debug, Clone)]
struct AxisAccumulator {
    min: f64,
    max: f64,
    sum: ExactSum,
    scaled: ExactSum,
}

impl AxisAccumulator {
    fn start(value: f64) -> Self {
        let mut acc = Self {
            min: value,
            max: value,
            sum: ExactSum::new(),
            scaled: ExactSum::new(),
        };
        acc.sum.add(value);
        acc.scaled.add(value / UPSCALE);
        acc
    }

    fn push(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum.add(value);
        self.scaled.add(value / UPSCALE);
    }

    fn centroid(&self, count: usize) -> f64 {
        let n = count as f64;
        let centroid = self.sum.value() / n;
        if centroid.is_finite() {
            centroid
        } else {
            self.scaled.value() / n * UPSCALE
        }
    }

    fn finish(&self, count: usize) -> AxisDeviation {
        AxisDeviation {
            min: self.min,
            max: self.max,
            range: self.max - self.min,
            centroid: self.centroid(count),
        }
    }
}

/// Compute per-axis min, max, range and centroid of `(ra, dec)` samples.
///
/// Samples with a non-finite coordinate are skipped. Returns `None` when no
/// usable sample remains. Values are full precision.
pub fn compute_deviation(samples: &[(f64, f64)]) -> Option<DeviationResult> {
    fold_samples(samples.iter().copied())
}

/// [`compute_deviation`] over the coordinates of valid frames.
pub fn compute_frame_deviation<'a, I>(records: I) -> Option<DeviationResult>
where
    I: IntoIterator<Item = &'a FrameRecord>,
{
    fold_samples(
        records
            .into_iter()
            .filter(|r| r.is_valid())
            .map(FrameRecord::coordinates),
    )
}

fn fold_samples<I>(samples: I) -> Option<DeviationResult>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut axes: Option<(AxisAccumulator, AxisAccumulator)> = None;
    let mut count = 0usize;

    for (ra, dec) in samples {
        if !ra.is_finite() || !dec.is_finite() {
            continue;
        }
        count += 1;
        match axes.as_mut() {
            Some((ra_acc, dec_acc)) => {
                ra_acc.push(ra);
                dec_acc.push(dec);
            }
            None => axes = Some((AxisAccumulator::start(ra), AxisAccumulator::start(dec))),
        }
    }

    axes.map(|(ra_acc, dec_acc)| DeviationResult {
        ra: ra_acc.finish(count),
        dec: dec_acc.finish(count),
        sample_count: count,
    })
}
