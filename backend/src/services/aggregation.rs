//! Per-object and per-filter exposure statistics.
//!
//! The fold only counts and sums, so the result does not depend on the order
//! of the input records. Exposure sums go through [`ExactSum`], which makes
//! that hold bit-for-bit rather than up to rounding error.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::algorithms::ExactSum;
use crate::api::{FilterBreakdown, FilterStatistic, ObjectStatistic};
use crate::config::DEFAULT_FRAME_SIZE_BYTES;
use crate::error::{StatsError, StatsResult};
use crate::models::{FilterId, FrameRecord, ObjectId};
use crate::services::filter_catalog::FilterCatalog;

/// Estimated storage for `frame_count` frames.
///
/// Rounds half away from zero; on this non-negative domain that is
/// round-half-up.
pub fn estimate_data_size(frame_count: u64, frame_size_bytes: f64) -> u64 {
    (frame_count as f64 * frame_size_bytes).round() as u64
}

/// Result of one aggregation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub statistic: ObjectStatistic,
    pub filters: FilterBreakdown,
    /// Records excluded as malformed. Records skipped by the object filter are
    /// not counted here.
    pub rejected_count: usize,
}

impl Aggregation {
    /// True when no record contributed.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
struct FilterAccumulator {
    frame_count: u64,
    exposure: ExactSum,
}

/// Running state of the fold.
///
/// Accumulators built over disjoint partitions of a record set can be
/// combined with [`StatisticAccumulator::merge`]; the finished result equals a
/// single pass over the whole set.
#[derive(Debug, Clone, Default)]
pub struct StatisticAccumulator {
    frame_count: u64,
    exposure: ExactSum,
    filters: BTreeMap<FilterId, FilterAccumulator>,
    rejected_count: usize,
}

impl StatisticAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record in. Malformed records are counted and skipped.
    pub fn push(&mut self, record: &FrameRecord, catalog: &FilterCatalog) {
        if let Err(reason) = record.validate() {
            warn!(
                "Skipping frame of '{}' captured at {}: {}",
                record.object_id, record.captured_at, reason
            );
            self.rejected_count += 1;
            return;
        }

        let filter = catalog.canonicalize(&record.filter_label);
        if filter.is_unknown() {
            debug!(
                "Unknown filter label '{}' on frame of '{}'",
                record.filter_label, record.object_id
            );
        }

        self.frame_count += 1;
        self.exposure.add(record.exposure_seconds);

        let entry = self.filters.entry(filter).or_default();
        entry.frame_count += 1;
        entry.exposure.add(record.exposure_seconds);
    }

    pub fn merge(&mut self, other: &StatisticAccumulator) {
        self.frame_count += other.frame_count;
        self.exposure.merge(&other.exposure);
        self.rejected_count += other.rejected_count;
        for (filter, acc) in &other.filters {
            let entry = self.filters.entry(filter.clone()).or_default();
            entry.frame_count += acc.frame_count;
            entry.exposure.merge(&acc.exposure);
        }
    }

    /// Round the exact sums and derive the data size estimate.
    pub fn finish(&self, frame_size_bytes: f64) -> Aggregation {
        let filters = self
            .filters
            .iter()
            .map(|(filter, acc)| {
                (
                    filter.clone(),
                    FilterStatistic {
                        frame_count: acc.frame_count,
                        total_exposure_seconds: acc.exposure.value(),
                    },
                )
            })
            .collect();

        Aggregation {
            statistic: ObjectStatistic {
                frame_count: self.frame_count,
                total_exposure_seconds: self.exposure.value(),
                estimated_data_size_bytes: estimate_data_size(self.frame_count, frame_size_bytes),
            },
            filters,
            rejected_count: self.rejected_count,
        }
    }
}

/// Folds frame records into [`ObjectStatistic`] and per-filter breakdowns.
#[derive(Debug, Clone)]
pub struct StatisticAggregator {
    catalog: FilterCatalog,
    frame_size_bytes: f64,
}

impl Default for StatisticAggregator {
    fn default() -> Self {
        Self {
            catalog: FilterCatalog::default(),
            frame_size_bytes: DEFAULT_FRAME_SIZE_BYTES,
        }
    }
}

/// Reject frame sizes that would make the data size estimate meaningless.
pub fn validate_frame_size(frame_size_bytes: f64) -> StatsResult<()> {
    if !frame_size_bytes.is_finite() || frame_size_bytes < 0.0 {
        return Err(StatsError::configuration(format!(
            "frame_size_bytes must be a finite non-negative number, got {}",
            frame_size_bytes
        )));
    }
    Ok(())
}

impl StatisticAggregator {
    /// # Errors
    /// Returns [`StatsError::Configuration`] if `frame_size_bytes` is NaN,
    /// infinite or negative.
    pub fn new(catalog: FilterCatalog, frame_size_bytes: f64) -> StatsResult<Self> {
        validate_frame_size(frame_size_bytes)?;
        Ok(Self {
            catalog,
            frame_size_bytes,
        })
    }

    pub fn catalog(&self) -> &FilterCatalog {
        &self.catalog
    }

    pub fn frame_size_bytes(&self) -> f64 {
        self.frame_size_bytes
    }

    /// Aggregate `records`, optionally restricted to one object.
    ///
    /// Records of other objects are skipped silently. Empty (filtered) input
    /// yields all-zero statistics and an empty breakdown.
    pub fn aggregate<'a, I>(&self, records: I, object_filter: Option<&str>) -> Aggregation
    where
        I: IntoIterator<Item = &'a FrameRecord>,
    {
        let mut acc = StatisticAccumulator::new();
        for record in records {
            if let Some(object) = object_filter {
                if record.object_id.as_str() != object {
                    continue;
                }
            }
            acc.push(record, &self.catalog);
        }

        let aggregation = acc.finish(self.frame_size_bytes);
        debug!(
            "Aggregated {} frames ({} rejected) into {} filters for {}",
            aggregation.statistic.frame_count,
            aggregation.rejected_count,
            aggregation.filters.len(),
            object_filter.unwrap_or("all objects")
        );
        aggregation
    }

    /// Aggregate every object in one pass over `records`.
    pub fn aggregate_by_object<'a, I>(&self, records: I) -> BTreeMap<ObjectId, Aggregation>
    where
        I: IntoIterator<Item = &'a FrameRecord>,
    {
        let mut per_object: BTreeMap<ObjectId, StatisticAccumulator> = BTreeMap::new();
        for record in records {
            per_object
                .entry(record.object_id.clone())
                .or_default()
                .push(record, &self.catalog);
        }

        per_object
            .into_iter()
            .map(|(object, acc)| (object, acc.finish(self.frame_size_bytes)))
            .collect()
    }
}

#[cfg(test)]
#[path = "aggregation_tests.rs"]
mod aggregation_tests;
