//! Fractional-suffix diagnostic: payout for records whose rendered
//! receipt amount ends in `.49` or `.99`.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::full_palette::ORANGE;
use reimviz_schemas::Dataset;

use crate::error::PlotError;
use crate::style::{self, ChartLabels};

/// File name of the suffix diagnostic chart.
pub const SUFFIX_FILE: &str = "rounding_bug.png";

/// Decimal suffixes the diagnostic selects on, matched against the
/// `Display` rendering of each receipt amount.
pub const RECEIPT_SUFFIXES: [&str; 2] = [".49", ".99"];

const SIZE: (u32, u32) = (600, 400);

/// Renders the receipts-vs-payout scatter restricted to the suffix mask.
pub fn render(dataset: &Dataset, path: &Path) -> Result<(), PlotError> {
    let mask = dataset.receipt_suffix_mask(&RECEIPT_SUFFIXES);
    let points: Vec<(f64, f64)> = mask
        .iter()
        .enumerate()
        .filter(|(_, keep)| **keep)
        .map(|(i, _)| (dataset.receipts[i], dataset.outputs[i]))
        .collect();

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(PlotError::render)?;

    let labels = ChartLabels {
        title: "Rounding Bug Analysis",
        x_desc: "Receipts ending in .49 or .99",
        y_desc: "Reimbursement",
    };
    let mut chart = style::draw_scatter_frame(
        &root,
        style::padded_range(points.iter().map(|p| p.0)),
        style::padded_range(points.iter().map(|p| p.1)),
        &labels,
    )?;
    chart
        .draw_series(points.iter().map(|(x, y)| {
            Circle::new(
                (*x, *y),
                style::POINT_SIZE,
                ORANGE.mix(style::FILTERED_ALPHA).filled(),
            )
        }))
        .map_err(PlotError::render)?;

    root.present().map_err(PlotError::render)?;
    Ok(())
}
