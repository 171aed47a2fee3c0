use std::{fmt::Display, iter};

use base64::{Engine, engine::general_purpose::STANDARD};
use bisect_core::Polynomial;
use plotters::prelude::*;
use thiserror::Error;

use crate::PlotWindow;

/// Chart title shared by every rendering.
pub const TITLE: &str = "Bisection Method - Function Plot";

const SIZE: (u32, u32) = (1000, 600);

/// Errors that can occur while rendering a plot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlotError {
    #[error("failed to draw plot: {0}")]
    Draw(String),
}

impl PlotError {
    fn draw(err: impl Display) -> Self {
        Self::Draw(err.to_string())
    }
}

/// Renders `polynomial` over a [`PlotWindow`] around the bracket and root.
///
/// The chart shows the function, the coordinate axes when they fall inside
/// the window, the initial lower (green) and upper (red) bounds, and a marker
/// at the root.
///
/// # Errors
///
/// Returns [`PlotError::Draw`] if plotters fails to lay out or draw the chart.
pub fn render_svg(
    polynomial: &Polynomial,
    x_lower: f64,
    x_upper: f64,
    root: f64,
) -> Result<String, PlotError> {
    let window = PlotWindow::around(x_lower, x_upper, root);
    let samples = window.sample(polynomial);
    let f_root = polynomial.evaluate(root);
    let (y_min, y_max) = y_range(&samples, f_root);

    let mut svg = String::new();
    {
        let area = SVGBackend::with_string(&mut svg, SIZE).into_drawing_area();
        area.fill(&WHITE).map_err(PlotError::draw)?;

        let mut chart = ChartBuilder::on(&area)
            .caption(TITLE, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(window.x_min..window.x_max, y_min..y_max)
            .map_err(PlotError::draw)?;

        chart
            .configure_mesh()
            .x_desc("x")
            .y_desc("f(x)")
            .light_line_style(BLACK.mix(0.05))
            .draw()
            .map_err(PlotError::draw)?;

        let axis = BLACK.mix(0.3);
        if window.contains(0.0) {
            chart
                .draw_series(LineSeries::new([(0.0, y_min), (0.0, y_max)], axis))
                .map_err(PlotError::draw)?;
        }
        if (y_min..=y_max).contains(&0.0) {
            chart
                .draw_series(LineSeries::new(
                    [(window.x_min, 0.0), (window.x_max, 0.0)],
                    axis,
                ))
                .map_err(PlotError::draw)?;
        }

        chart
            .draw_series(LineSeries::new(samples, BLUE.stroke_width(2)))
            .map_err(PlotError::draw)?
            .label(polynomial.to_string())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

        for (x, color, name) in [
            (x_lower, GREEN, "Initial lower"),
            (x_upper, RED, "Initial upper"),
        ] {
            let style = color.mix(0.7);
            chart
                .draw_series(LineSeries::new([(x, y_min), (x, y_max)], style))
                .map_err(PlotError::draw)?
                .label(format!("{name}: {x}"))
                .legend(move |(lx, ly)| PathElement::new(vec![(lx, ly), (lx + 20, ly)], style));
        }

        chart
            .draw_series(iter::once(Circle::new((root, f_root), 6, RED.filled())))
            .map_err(PlotError::draw)?
            .label(format!("Root: {root:.6}"))
            .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(PlotError::draw)?;

        area.present().map_err(PlotError::draw)?;
    }

    Ok(svg)
}

/// Encodes an SVG document as a base64 `data:` URI.
#[must_use]
pub fn to_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

/// Returns a padded y range covering the finite samples and the root value.
fn y_range(samples: &[(f64, f64)], f_root: f64) -> (f64, f64) {
    let (lo, hi) = samples
        .iter()
        .map(|&(_, y)| y)
        .chain(iter::once(f_root))
        .filter(|y| y.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        });

    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 1.0);
    }

    let pad = f64::max((hi - lo) * 0.05, 1.0);
    (lo - pad, hi + pad)
}
