//! Plots of a polynomial around a bisection bracket and its root.
//!
//! - [`render_svg`] draws the function, the initial bounds, and the root as
//!   an SVG document; [`to_data_uri`] wraps it for embedding in JSON or HTML
//! - [`PlotWindow`] picks the x range and sample points shared by all plots
//!
//! # Features
//!
//! - `gui`: enables [`PlotApp`], a native egui window showing the same plot.
//!   This feature adds dependencies on `eframe` and `egui_plot`.

mod svg;
mod window;

#[cfg(feature = "gui")]
mod app;

#[cfg(feature = "gui")]
pub use app::PlotApp;
pub use svg::{PlotError, TITLE, render_svg, to_data_uri};
pub use window::PlotWindow;
