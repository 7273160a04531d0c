//! Training curve figure using plotters (SVG output)
//!
//! Lays out a 2x2 grid, row-major:
//!
//! | Training Loss   | Training Accuracy   |
//! | Validation Loss | Validation Accuracy |
//!
//! Loss panels plot value against index with point markers.
//! Accuracy panels plot the (x, y) pairs as a line, y fixed to [0, 1].

use std::ops::Range;

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::domain::curves::MetricCurves;

/// 10 x 8 figure at 100 px per unit
pub const FIGURE_SIZE: (u32, u32) = (1000, 800);

pub const PANEL_TITLES: [&str; 4] = [
    "Training Loss",
    "Training Accuracy",
    "Validation Loss",
    "Validation Accuracy",
];

type Panel<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Render all four curves into one SVG document.
pub fn render_curves_svg(curves: &MetricCurves) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let panels = root.split_evenly((2, 2));
        draw_loss(&panels[0], PANEL_TITLES[0], &curves.training_loss)?;
        draw_accuracy(&panels[1], PANEL_TITLES[1], &curves.training_accuracy)?;
        draw_loss(&panels[2], PANEL_TITLES[2], &curves.validation_loss)?;
        draw_accuracy(&panels[3], PANEL_TITLES[3], &curves.validation_accuracy)?;

        root.present()?;
    }

    tracing::debug!("Rendered curve figure ({} bytes of SVG)", svg.len());
    Ok(svg)
}

fn draw_loss(area: &Panel<'_>, title: &str, losses: &[f64]) -> Result<()> {
    let points: Vec<(f64, f64)> = losses
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, v)| (i as f64, *v))
        .collect();

    if points.is_empty() {
        return draw_empty(area, title);
    }

    let x_range = padded(points.iter().map(|p| p.0));
    let y_range = padded(points.iter().map(|p| p.1));

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)?;

    chart.configure_mesh().draw()?;
    chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))?;
    chart.draw_series(points.iter().map(|&p| Circle::new(p, 3, BLUE.filled())))?;
    Ok(())
}

fn draw_accuracy(area: &Panel<'_>, title: &str, pairs: &[(f64, f64)]) -> Result<()> {
    let points: Vec<(f64, f64)> = pairs
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    if points.is_empty() {
        return draw_empty(area, title);
    }

    let x_range = padded(points.iter().map(|p| p.0));

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, 0f64..1f64)?;

    chart.configure_mesh().draw()?;
    chart.draw_series(LineSeries::new(points, &BLUE))?;
    Ok(())
}

fn draw_empty(area: &Panel<'_>, title: &str) -> Result<()> {
    let (w, h) = area.dim_in_pixel();
    area.draw(&Text::new(
        format!("{title}: no data"),
        (w as i32 / 2 - 60, h as i32 / 2),
        ("sans-serif", 16).into_font().color(&BLACK),
    ))?;
    Ok(())
}

/// min..max of the values, widened so single points and flat
/// curves still get a non-degenerate axis.
fn padded(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    if (max - min).abs() < f64::EPSILON {
        return (min - 0.5)..(max + 0.5);
    }

    let pad = (max - min) * 0.05;
    (min - pad)..(max + pad)
}
