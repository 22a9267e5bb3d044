//! Line-chart rendering for the cash-flow projection.
//!
//! Draws both weekly gap series with point markers, a dashed zero
//! baseline and a legend, and writes the result as a fixed-resolution
//! PNG. Rendering failures abort the run like any other I/O failure.

use crate::error::{ReportError, ReportResult};
use crate::simulator::CashFlowProjection;
use plotters::prelude::*;
use std::path::Path;

/// Output raster size, 12x6 inches at 150 dpi.
pub const CHART_WIDTH: u32 = 1800;
pub const CHART_HEIGHT: u32 = 900;

fn chart_err<E: std::fmt::Display>(e: E) -> ReportError {
    ReportError::Chart(e.to_string())
}

/// Render the before/after gap chart to `path`.
pub fn render_gap_chart(path: &Path, projection: &CashFlowProjection) -> ReportResult<()> {
    let before: Vec<(f64, f64)> = projection
        .weeks
        .iter()
        .map(|w| (w.week as f64, w.gap_before))
        .collect();
    let after: Vec<(f64, f64)> = projection
        .weeks
        .iter()
        .map(|w| (w.week as f64, w.gap_after))
        .collect();

    // Pad the vertical range and keep the zero baseline in frame.
    let mut y_min = 0.0f64;
    let mut y_max = 0.0f64;
    for &(_, gap) in before.iter().chain(after.iter()) {
        y_min = y_min.min(gap);
        y_max = y_max.max(gap);
    }
    let pad = 0.1 * (y_max - y_min).max(1.0);

    let x_min = 0.5;
    let x_max = projection.weeks.len() as f64 + 0.5;

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Cash-flow gap before and after the prepayment policy",
            ("sans-serif", 32),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(110)
        .build_cartesian_2d(x_min..x_max, (y_min - pad)..(y_max + pad))
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Week")
        .y_desc("Cash gap")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(before.iter().copied(), &BLUE))
        .map_err(chart_err)?
        .label("Before policy")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], &BLUE));
    chart
        .draw_series(
            before
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())),
        )
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(after.iter().copied(), &RED))
        .map_err(chart_err)?
        .label("After policy")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], &RED));
    chart
        .draw_series(
            after
                .iter()
                .map(|&(x, y)| TriangleMarker::new((x, y), 6, RED.filled())),
        )
        .map_err(chart_err)?;

    chart
        .draw_series(DashedLineSeries::new(
            vec![(x_min, 0.0), (x_max, 0.0)],
            8,
            6,
            ShapeStyle {
                color: BLACK.mix(0.5),
                filled: false,
                stroke_width: 1,
            },
        ))
        .map_err(chart_err)?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    log::info!("chart: wrote {}", path.display());
    Ok(())
}
