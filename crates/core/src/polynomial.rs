use std::fmt;

use thiserror::Error;

/// Errors that can occur when constructing a [`Polynomial`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PolynomialError {
    #[error("a polynomial of degree {degree} needs {expected} coefficients, got {actual}")]
    CoefficientCount {
        degree: usize,
        expected: usize,
        actual: usize,
    },

    #[error("a polynomial needs at least one coefficient")]
    Empty,
}

/// A single-variable polynomial with real coefficients.
///
/// Coefficients are stored highest power first, so `coefficients[0]`
/// multiplies `x^degree` and `coefficients[degree]` is the constant term.
/// A polynomial is immutable once built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Parts")
)]
pub struct Polynomial {
    degree: usize,
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from its degree and coefficients (highest power first).
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::CoefficientCount`] unless exactly
    /// `degree + 1` coefficients are given.
    pub fn new(degree: usize, coefficients: Vec<f64>) -> Result<Self, PolynomialError> {
        let expected = degree + 1;
        if coefficients.len() != expected {
            return Err(PolynomialError::CoefficientCount {
                degree,
                expected,
                actual: coefficients.len(),
            });
        }

        Ok(Self {
            degree,
            coefficients,
        })
    }

    /// Creates a polynomial whose degree is implied by the coefficient count.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::Empty`] if `coefficients` is empty.
    pub fn from_coefficients(coefficients: Vec<f64>) -> Result<Self, PolynomialError> {
        let degree = coefficients
            .len()
            .checked_sub(1)
            .ok_or(PolynomialError::Empty)?;
        Self::new(degree, coefficients)
    }

    /// The zero polynomial of degree 0.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            degree: 0,
            coefficients: vec![0.0],
        }
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Coefficients, highest power first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Powers are built up by repeated multiplication starting from the
    /// constant term, so negative `x` and `x = 0` need no special casing.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let mut power = 1.0;
        let mut sum = 0.0;
        for &coefficient in self.coefficients.iter().rev() {
            sum += coefficient * power;
            power *= x;
        }
        sum
    }

    /// Returns the symbolic derivative.
    ///
    /// The derivative of a constant is the zero polynomial of degree 0.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree == 0 {
            return Self::zero();
        }

        let coefficients = self.coefficients[..self.degree]
            .iter()
            .zip((1..=self.degree).rev())
            .map(|(&c, power)| c * power as f64)
            .collect();

        Self {
            degree: self.degree - 1,
            coefficients,
        }
    }

    /// Renders the polynomial as `f(x) = ...`, see the [`Display`](fmt::Display) impl.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Iterates over `(coefficient, power)` pairs with nonzero coefficients.
    fn terms(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.coefficients
            .iter()
            .zip((0..=self.degree).rev())
            .filter(|&(&c, _)| c != 0.0)
            .map(|(&c, power)| (c, power))
    }
}

/// Writes `f(x) = 2x^3 -1x +5` style notation.
///
/// Every term carries an explicit sign except the leading one, which drops
/// a leading `+`. Zero terms are skipped; an all-zero polynomial reads
/// `f(x) = 0`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("f(x) = ")?;

        let mut wrote_term = false;
        for (coefficient, power) in self.terms() {
            let term = match power {
                0 => format!("{coefficient:+}"),
                1 => format!("{coefficient:+}x"),
                _ => format!("{coefficient:+}x^{power}"),
            };

            if wrote_term {
                write!(f, " {term}")?;
            } else {
                f.write_str(term.strip_prefix('+').unwrap_or(&term))?;
                wrote_term = true;
            }
        }

        if !wrote_term {
            f.write_str("0")?;
        }
        Ok(())
    }
}

/// Wire shape used to deserialize a validated [`Polynomial`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct Parts {
    degree: usize,
    coefficients: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<Parts> for Polynomial {
    type Error = PolynomialError;

    fn try_from(parts: Parts) -> Result<Self, Self::Error> {
        Self::new(parts.degree, parts.coefficients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn poly(coefficients: &[f64]) -> Polynomial {
        Polynomial::from_coefficients(coefficients.to_vec()).expect("non-empty coefficients")
    }

    #[test]
    fn evaluates_highest_power_first() {
        // 2x^3 - x + 5
        let p = poly(&[2.0, 0.0, -1.0, 5.0]);
        assert_relative_eq!(p.evaluate(0.0), 5.0);
        assert_relative_eq!(p.evaluate(1.0), 6.0);
        assert_relative_eq!(p.evaluate(2.0), 19.0);
    }

    #[test]
    fn evaluates_negative_bases_with_integer_powers() {
        // x^3 - 4
        let p = poly(&[1.0, 0.0, 0.0, -4.0]);
        assert_relative_eq!(p.evaluate(-2.0), -12.0);

        // x^2 - 4
        let p = poly(&[1.0, 0.0, -4.0]);
        assert_relative_eq!(p.evaluate(-3.0), 5.0);
    }

    #[test]
    fn constant_polynomial_ignores_x() {
        let p = poly(&[7.0]);
        assert_eq!(p.degree(), 0);
        assert_relative_eq!(p.evaluate(0.0), 7.0);
        assert_relative_eq!(p.evaluate(-123.0), 7.0);
    }

    #[test]
    fn evaluation_is_repeatable() {
        let p = poly(&[0.3, -1.7, 2.2, 0.1]);
        let x = 1.234_567;
        assert_eq!(p.evaluate(x).to_bits(), p.evaluate(x).to_bits());
    }

    #[test]
    fn rejects_wrong_coefficient_count() {
        let err = Polynomial::new(2, vec![1.0, 2.0]);
        assert_eq!(
            err,
            Err(PolynomialError::CoefficientCount {
                degree: 2,
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn rejects_empty_coefficients() {
        assert_eq!(
            Polynomial::from_coefficients(Vec::new()),
            Err(PolynomialError::Empty)
        );
    }

    #[test]
    fn displays_mixed_signs() {
        let p = poly(&[2.0, 0.0, -1.0, 5.0]);
        assert_eq!(p.to_display_string(), "f(x) = 2x^3 -1x +5");
    }

    #[test]
    fn displays_leading_minus() {
        let p = poly(&[-1.0, 0.0, 3.0]);
        assert_eq!(p.to_display_string(), "f(x) = -1x^2 +3");
    }

    #[test]
    fn displays_all_zero_as_zero() {
        let p = poly(&[0.0, 0.0, 0.0]);
        assert_eq!(p.to_display_string(), "f(x) = 0");
    }

    #[test]
    fn displays_linear_and_constant_terms() {
        assert_eq!(poly(&[1.0, 1.0]).to_string(), "f(x) = 1x +1");
        assert_eq!(poly(&[-5.0]).to_string(), "f(x) = -5");
        assert_eq!(poly(&[0.0, 0.0, 4.0]).to_string(), "f(x) = 4");
        assert_eq!(poly(&[0.5, -2.5]).to_string(), "f(x) = 0.5x -2.5");
    }

    #[test]
    fn derivative_of_cubic() {
        // d/dx (2x^3 - x + 5) = 6x^2 - 1
        let d = poly(&[2.0, 0.0, -1.0, 5.0]).derivative();
        assert_eq!(d.degree(), 2);
        assert_eq!(d.coefficients(), [6.0, 0.0, -1.0]);
    }

    #[test]
    fn derivative_of_constant_is_zero() {
        let d = poly(&[42.0]).derivative();
        assert_eq!(d, Polynomial::zero());
        assert_eq!(d.to_string(), "f(x) = 0");
    }
}
