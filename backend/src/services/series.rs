//! Plotting series for the object page.

use crate::api::ChartSeries;
use crate::models::FrameRecord;

/// Derive chart series from valid frames, in input order.
///
/// Focus and sky-background series drop frames whose metric is the `0`
/// "not measured" sentinel, so the two series can differ in length.
pub fn build_chart_series<'a, I>(records: I) -> ChartSeries
where
    I: IntoIterator<Item = &'a FrameRecord>,
{
    let mut series = ChartSeries::default();

    for record in records.into_iter().filter(|r| r.is_valid()) {
        series.coordinates.push([record.ra, record.dec]);
        series.ra.push(record.ra);
        series.dec.push(record.dec);

        if let Some(focus) = record.measured_focus() {
            series.focus.push(focus);
        }
        if let Some(sky) = record.measured_sky_background() {
            series.sky_background.push(sky);
        }
    }

    series
}

impl ChartSeries {
    /// The quality chart needs both metric series to be non-empty.
    pub fn has_quality_metrics(&self) -> bool {
        !self.focus.is_empty() && !self.sky_background.is_empty()
    }
}
