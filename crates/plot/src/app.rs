use bisect_core::Polynomial;
use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points, VLine};

use crate::{PlotWindow, TITLE};

/// A runnable egui application plotting a polynomial, its bracket, and root.
pub struct PlotApp {
    label: String,
    curve: Vec<[f64; 2]>,
    x_lower: f64,
    x_upper: f64,
    root: [f64; 2],
}

impl PlotApp {
    #[must_use]
    pub fn new(polynomial: &Polynomial, x_lower: f64, x_upper: f64, root: f64) -> Self {
        let curve = PlotWindow::around(x_lower, x_upper, root)
            .sample(polynomial)
            .into_iter()
            .map(|(x, y)| [x, y])
            .collect();

        Self {
            label: polynomial.to_string(),
            curve,
            x_lower,
            x_upper,
            root: [root, polynomial.evaluate(root)],
        }
    }

    /// Opens a blocking native window; returns once the user closes it.
    #[allow(clippy::missing_errors_doc)]
    pub fn run(self) -> Result<(), eframe::Error> {
        eframe::run_native(
            TITLE,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("bisection-plot")
                .legend(Legend::default())
                .x_axis_label("x")
                .y_axis_label("f(x)")
                .show(ui, |plot_ui| {
                    let curve: PlotPoints = self.curve.iter().copied().collect();
                    plot_ui.line(Line::new(curve).name(&self.label).color(Color32::BLUE));

                    plot_ui.vline(
                        VLine::new(self.x_lower)
                            .name(format!("Initial lower bound: {:.4}", self.x_lower))
                            .color(Color32::GREEN),
                    );
                    plot_ui.vline(
                        VLine::new(self.x_upper)
                            .name(format!("Initial upper bound: {:.4}", self.x_upper))
                            .color(Color32::RED),
                    );

                    plot_ui.points(
                        Points::new(vec![self.root])
                            .radius(5.0)
                            .name(format!("Root: {:.6}", self.root[0]))
                            .color(Color32::RED),
                    );
                });
        });
    }
}
