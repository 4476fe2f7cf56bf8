//! Shared chart styling: point geometry, axis ranges, and the common
//! scatter frame (caption, axes, tick labels) used by every view.

use std::ops::Range;

use plotters::chart::{ChartBuilder, ChartContext};
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::drawing::DrawingArea;
use plotters::prelude::DrawingBackend;
use plotters::style::RGBColor;

use crate::error::PlotError;
use crate::font;

/// Muted blue used for the unfiltered overview points.
pub(crate) const POINT_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Scatter point radius in pixels.
pub(crate) const POINT_SIZE: i32 = 3;

/// Point opacity for the dense overview panels.
pub(crate) const OVERVIEW_ALPHA: f64 = 0.5;

/// Point opacity for the filtered diagnostic views.
pub(crate) const FILTERED_ALPHA: f64 = 0.7;

/// Fraction of the data span added on each side of an axis.
const AXIS_MARGIN: f64 = 0.05;

/// Caption and axis descriptions for one chart.
pub(crate) struct ChartLabels<'a> {
    pub title: &'a str,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
}

/// Raw min..max of the values, or `0.0..1.0` when there are none.
pub(crate) fn value_range<I: IntoIterator<Item = f64>>(values: I) -> Range<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max { 0.0..1.0 } else { min..max }
}

/// Axis range: data min..max padded on both sides.
///
/// A degenerate span (single value) is widened by a fixed unit so chart
/// construction never sees an empty range.
pub(crate) fn padded_range<I: IntoIterator<Item = f64>>(values: I) -> Range<f64> {
    let range = value_range(values);
    let span = range.end - range.start;
    let pad = if span > 0.0 { span * AXIS_MARGIN } else { 1.0 };
    (range.start - pad)..(range.end + pad)
}

/// Maps `value` into `[0, 1]` over `range`, clamped.
///
/// A degenerate range maps everything to the middle of the scale.
pub(crate) fn unit_scale(value: f64, range: &Range<f64>) -> f32 {
    let span = range.end - range.start;
    if span <= 0.0 {
        return 0.5;
    }
    ((value - range.start) / span).clamp(0.0, 1.0) as f32
}

/// Tick label formatter shared by every axis.
pub(crate) fn fmt_tick(value: &f64) -> String {
    format!("{value:.0}")
}

/// Builds the common scatter frame on `area`: white margins, caption,
/// axis lines, and formatted tick labels.
///
/// When no font is registered the caption and all text labels are
/// skipped so the mesh never attempts glyph layout.
pub(crate) fn draw_scatter_frame<'a, DB: DrawingBackend + 'a>(
    area: &'a DrawingArea<DB, Shift>,
    x_range: Range<f64>,
    y_range: Range<f64>,
    labels: &ChartLabels<'_>,
) -> Result<ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>, PlotError>
{
    let mut builder = ChartBuilder::on(area);
    builder
        .margin(10)
        .x_label_area_size(42)
        .y_label_area_size(58);
    if font::ready() {
        builder.caption(labels.title, ("sans-serif", 16));
    }
    let mut chart = builder
        .build_cartesian_2d(x_range, y_range)
        .map_err(PlotError::render)?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh();
        if font::ready() {
            mesh.x_desc(labels.x_desc)
                .y_desc(labels.y_desc)
                .label_style(("sans-serif", 12))
                .x_label_formatter(&fmt_tick)
                .y_label_formatter(&fmt_tick);
        } else {
            mesh.x_labels(0).y_labels(0);
        }
        mesh.draw().map_err(PlotError::render)?;
    }

    Ok(chart)
}
