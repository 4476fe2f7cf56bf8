//! Duration-filtered views: miles vs payout for trips of one fixed
//! length, with point color keyed to the receipt amount.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};
use reimviz_schemas::Dataset;

use crate::colorbar;
use crate::error::PlotError;
use crate::style::{self, ChartLabels};

/// The fixed trip durations given their own diagnostic view.
pub const DURATION_VIEWS: [u32; 2] = [5, 8];

const SIZE: (u32, u32) = (600, 400);
const LEGEND_WIDTH: u32 = 90;

/// File name of the view for trips of the given duration.
pub fn file_name(days: u32) -> String {
    format!("reimbursement_{days}day.png")
}

/// Renders the miles-vs-payout scatter restricted to trips of exactly
/// `days` days. A mask selecting zero records still produces the chart,
/// empty, over default axis ranges.
pub fn render(
    dataset: &Dataset,
    days: u32,
    path: &Path,
) -> Result<(), PlotError> {
    let mask = dataset.duration_mask(days);
    let points: Vec<(f64, f64, f64)> = mask
        .iter()
        .enumerate()
        .filter(|(_, keep)| **keep)
        .map(|(i, _)| (dataset.miles[i], dataset.outputs[i], dataset.receipts[i]))
        .collect();

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(PlotError::render)?;
    let (chart_area, legend_area) =
        root.split_horizontally(SIZE.0 - LEGEND_WIDTH);

    let color_range = style::value_range(points.iter().map(|p| p.2));
    let title = format!("Reimbursement for {days}-Day Trips");
    let labels = ChartLabels {
        title: &title,
        x_desc: "Miles Traveled",
        y_desc: "Reimbursement",
    };

    let mut chart = style::draw_scatter_frame(
        &chart_area,
        style::padded_range(points.iter().map(|p| p.0)),
        style::padded_range(points.iter().map(|p| p.1)),
        &labels,
    )?;
    chart
        .draw_series(points.iter().map(|(x, y, c)| {
            let color = ViridisRGB.get_color(style::unit_scale(*c, &color_range));
            Circle::new(
                (*x, *y),
                style::POINT_SIZE,
                color.mix(style::FILTERED_ALPHA).filled(),
            )
        }))
        .map_err(PlotError::render)?;

    colorbar::draw(&legend_area, &color_range, "Receipts")?;
    root.present().map_err(PlotError::render)?;
    Ok(())
}
