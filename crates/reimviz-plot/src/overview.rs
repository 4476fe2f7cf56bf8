//! Three-panel overview: payout scattered against each input dimension.

use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::prelude::*;
use reimviz_schemas::Dataset;

use crate::error::PlotError;
use crate::style::{self, ChartLabels};

/// File name of the 3-panel overview chart.
pub const OVERVIEW_FILE: &str = "reimbursement_vs_inputs.png";

const SIZE: (u32, u32) = (1500, 400);

/// Renders payout-vs-input scatter panels side by side into one image.
pub fn render(dataset: &Dataset, path: &Path) -> Result<(), PlotError> {
    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(PlotError::render)?;

    let days: Vec<f64> =
        dataset.trip_days.iter().map(|d| f64::from(*d)).collect();
    let views: [(&[f64], ChartLabels); 3] = [
        (
            &days,
            ChartLabels {
                title: "Reimbursement vs Trip Duration",
                x_desc: "Trip Duration (days)",
                y_desc: "Reimbursement",
            },
        ),
        (
            &dataset.miles,
            ChartLabels {
                title: "Reimbursement vs Miles",
                x_desc: "Miles Traveled",
                y_desc: "Reimbursement",
            },
        ),
        (
            &dataset.receipts,
            ChartLabels {
                title: "Reimbursement vs Receipts",
                x_desc: "Total Receipts Amount",
                y_desc: "Reimbursement",
            },
        ),
    ];

    let panels = root.split_evenly((1, 3));
    for (panel, (xs, labels)) in panels.iter().zip(&views) {
        scatter_panel(panel, xs, &dataset.outputs, labels)?;
    }

    root.present().map_err(PlotError::render)?;
    Ok(())
}

fn scatter_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    xs: &[f64],
    ys: &[f64],
    labels: &ChartLabels<'_>,
) -> Result<(), PlotError> {
    let mut chart = style::draw_scatter_frame(
        area,
        style::padded_range(xs.iter().copied()),
        style::padded_range(ys.iter().copied()),
        labels,
    )?;
    chart
        .draw_series(xs.iter().zip(ys).map(|(x, y)| {
            Circle::new(
                (*x, *y),
                style::POINT_SIZE,
                style::POINT_COLOR.mix(style::OVERVIEW_ALPHA).filled(),
            )
        }))
        .map_err(PlotError::render)?;
    Ok(())
}
