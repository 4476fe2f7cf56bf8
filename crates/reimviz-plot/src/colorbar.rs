//! Vertical gradient legend for colormap-keyed scatter views.

use std::ops::Range;

use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::{Rectangle, Text};
use plotters::prelude::DrawingBackend;
use plotters::style::Color;
use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};

use crate::error::PlotError;
use crate::font;
use crate::style;

const BAR_WIDTH: i32 = 16;
const BAR_MARGIN: i32 = 8;
const V_INSET: i32 = 36;

/// Draws a vertical viridis gradient with the range extremes as tick
/// labels and `label` as its heading.
///
/// The range maximum sits at the top of the bar, matching the scale the
/// scatter points are colored with.
pub(crate) fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    range: &Range<f64>,
    label: &str,
) -> Result<(), PlotError> {
    let (_, height) = area.dim_in_pixel();
    let top = V_INSET;
    let bottom = height as i32 - V_INSET;
    if bottom <= top {
        return Ok(());
    }

    let x0 = BAR_MARGIN;
    let x1 = BAR_MARGIN + BAR_WIDTH;
    let span = (bottom - 1 - top).max(1);
    for y in top..bottom {
        // Row y carries the fraction of the scale above the bottom edge.
        let t = (bottom - 1 - y) as f32 / span as f32;
        let color = ViridisRGB.get_color(t);
        area.draw(&Rectangle::new([(x0, y), (x1, y + 1)], color.filled()))
            .map_err(PlotError::render)?;
    }

    if font::ready() {
        let text_x = x1 + 6;
        area.draw(&Text::new(
            label.to_owned(),
            (x0, top - 22),
            ("sans-serif", 14),
        ))
        .map_err(PlotError::render)?;
        area.draw(&Text::new(
            style::fmt_tick(&range.end),
            (text_x, top - 6),
            ("sans-serif", 12),
        ))
        .map_err(PlotError::render)?;
        area.draw(&Text::new(
            style::fmt_tick(&range.start),
            (text_x, bottom - 6),
            ("sans-serif", 12),
        ))
        .map_err(PlotError::render)?;
    }
    Ok(())
}
