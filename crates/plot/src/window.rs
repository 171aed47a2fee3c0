use bisect_core::Polynomial;

/// The x range plotted around a bracket and its root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotWindow {
    pub x_min: f64,
    pub x_max: f64,
}

impl PlotWindow {
    /// Number of points sampled across the window.
    pub const SAMPLES: usize = 400;

    /// Pads the bracket and root by `max(1, 20%)` of the bracket width on each side.
    #[must_use]
    pub fn around(x_lower: f64, x_upper: f64, root: f64) -> Self {
        let margin = f64::max(1.0, (x_upper - x_lower) * 0.2);
        Self {
            x_min: x_lower.min(root) - margin,
            x_max: x_upper.max(root) + margin,
        }
    }

    /// Returns [`Self::SAMPLES`] evenly spaced `(x, f(x))` pairs, both ends included.
    #[must_use]
    pub fn sample(&self, polynomial: &Polynomial) -> Vec<(f64, f64)> {
        let step = (self.x_max - self.x_min) / (Self::SAMPLES - 1) as f64;
        (0..Self::SAMPLES)
            .map(|i| {
                let x = if i == Self::SAMPLES - 1 {
                    self.x_max
                } else {
                    self.x_min + step * i as f64
                };
                (x, polynomial.evaluate(x))
            })
            .collect()
    }

    /// Returns true if `x` lies inside the window.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        (self.x_min..=self.x_max).contains(&x)
    }
}
