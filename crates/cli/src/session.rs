use std::{
    io::{BufRead, Write},
    path::PathBuf,
    str::FromStr,
};

use bisect_core::Polynomial;
use bisect_solvers::bisection::{self, Action, Bracket, BracketError, Config, Event, Solution};
use colored::Colorize;
use thiserror::Error;

use crate::{config::CliConfig, table};

/// Highest degree accepted at the prompt.
const MAX_DEGREE: usize = 20;

const BANNER_WIDTH: usize = 60;

/// Raised when input ends mid-session; the session then exits cleanly.
#[derive(Debug, Error)]
#[error("input closed")]
struct InputClosed;

/// An interactive solve loop over any line-based input and output.
pub struct Session<R, W> {
    input: R,
    output: W,
    max_iters: usize,
    #[cfg_attr(feature = "gui", allow(dead_code))]
    plot_output: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: &CliConfig) -> Self {
        Self {
            input,
            output,
            max_iters: config.max_iterations,
            plot_output: config.plot_output.clone(),
        }
    }

    /// Runs problems until the user declines another one or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to the output fails.
    pub fn run(mut self) -> anyhow::Result<()> {
        self.welcome()?;

        loop {
            match self.solve_problem() {
                Ok(()) => {}
                Err(err) if err.is::<InputClosed>() => return self.farewell("\n\nInput closed. Goodbye!"),
                Err(err) if err.is::<bisection::Error>() => {
                    writeln!(self.output, "{}", format!("Error: {err}").red())?;
                    continue;
                }
                Err(err) => {
                    log::error!("problem failed: {err:#}");
                    writeln!(self.output, "\n{}", format!("An error occurred: {err}").red())?;
                }
            }

            match self.yes_no("\nDo you want to solve another problem? (y/n): ") {
                Ok(true) => {}
                Ok(false) => return self.farewell("Thank you for using Bisection Method Calculator!"),
                Err(err) if err.is::<InputClosed>() => return self.farewell("\n\nInput closed. Goodbye!"),
                Err(err) => return Err(err),
            }
        }
    }

    fn welcome(&mut self) -> anyhow::Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "{}", "          BISECTION METHOD CALCULATOR".bold())?;
        writeln!(self.output, "{rule}")?;
        writeln!(
            self.output,
            "This application finds roots of polynomials using the Bisection Method\n"
        )?;
        Ok(())
    }

    fn farewell(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Collects one problem, solves it, and reports the result.
    fn solve_problem(&mut self) -> anyhow::Result<()> {
        let polynomial = self.read_polynomial()?;
        writeln!(self.output, "\nYour polynomial: {polynomial}")?;

        let bracket = self.read_bracket(&polynomial)?;
        let tolerance = self.read_tolerance()?;

        writeln!(self.output, "\nSolving using Bisection Method...")?;
        writeln!(self.output, "Target relative error: {tolerance}%")?;

        let config = Config::new(tolerance).with_max_iters(self.max_iters);
        let solution = self.solve_traced(&polynomial, bracket.as_array(), &config)?;
        self.report(&polynomial, &solution)?;

        if self.yes_no("\nDo you want to see the function plot? (y/n): ")? {
            let [x_lower, x_upper] = bracket.as_array();
            self.show_plot(&polynomial, x_lower, x_upper, solution.root)?;
        }
        Ok(())
    }

    /// Solves while printing each trace row as it is produced.
    fn solve_traced(
        &mut self,
        polynomial: &Polynomial,
        bracket: [f64; 2],
        config: &Config,
    ) -> anyhow::Result<Solution> {
        writeln!(self.output, "\n{}", table::header())?;

        let output = &mut self.output;
        let mut write_error = None;
        let observer = |event: &Event<'_>| match writeln!(output, "{}", table::row(event.record)) {
            Ok(()) => None,
            Err(err) => {
                write_error = Some(err);
                Some(Action::StopEarly)
            }
        };

        let solution = bisection::solve(polynomial, bracket, config, observer)?;
        if let Some(err) = write_error {
            return Err(err.into());
        }
        Ok(solution)
    }

    fn report(&mut self, polynomial: &Polynomial, solution: &Solution) -> anyhow::Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "{}", "                    RESULTS".bold())?;
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "Polynomial: {polynomial}")?;
        writeln!(self.output, "{}", format!("Root found: {:.8}", solution.root).green())?;
        writeln!(self.output, "f(root): {:.8}", solution.f_root)?;
        writeln!(self.output, "Number of iterations: {}", solution.iterations)?;
        writeln!(self.output, "Final relative error: {:.8}%", solution.final_error)?;
        Ok(())
    }

    #[cfg(feature = "gui")]
    fn show_plot(
        &mut self,
        polynomial: &Polynomial,
        x_lower: f64,
        x_upper: f64,
        root: f64,
    ) -> anyhow::Result<()> {
        bisect_plot::PlotApp::new(polynomial, x_lower, x_upper, root)
            .run()
            .map_err(|err| anyhow::anyhow!("failed to open plot window: {err}"))
    }

    #[cfg(not(feature = "gui"))]
    fn show_plot(
        &mut self,
        polynomial: &Polynomial,
        x_lower: f64,
        x_upper: f64,
        root: f64,
    ) -> anyhow::Result<()> {
        use anyhow::Context as _;

        let svg = bisect_plot::render_svg(polynomial, x_lower, x_upper, root)?;
        std::fs::write(&self.plot_output, svg)
            .with_context(|| format!("failed to write {}", self.plot_output.display()))?;
        writeln!(self.output, "Plot written to {}", self.plot_output.display())?;
        Ok(())
    }

    fn read_polynomial(&mut self) -> anyhow::Result<Polynomial> {
        writeln!(self.output, "{}", "=== Polynomial Input ===".cyan())?;

        let degree = loop {
            let Some(degree) = self.ask_parsed::<i64>(
                "Enter the degree of the polynomial (max 20): ",
                "Please enter a valid integer",
            )?
            else {
                continue;
            };
            match usize::try_from(degree) {
                Ok(degree) if degree <= MAX_DEGREE => break degree,
                _ => writeln!(self.output, "Degree must be between 0 and {MAX_DEGREE}")?,
            }
        };

        writeln!(self.output, "Enter coefficients from highest to lowest degree:")?;
        let mut coefficients = Vec::with_capacity(degree + 1);
        for power in (0..=degree).rev() {
            let prompt = match power {
                p if p == degree => format!("Coefficient for x^{p}: "),
                1 => "Coefficient for x: ".to_string(),
                0 => "Constant term: ".to_string(),
                p => format!("Coefficient for x^{p}: "),
            };
            let coefficient = loop {
                if let Some(value) = self.ask_parsed::<i64>(&prompt, "Please enter a valid integer")? {
                    break value;
                }
            };
            // Prompted coefficients are small integers, exact in f64.
            #[allow(clippy::cast_precision_loss)]
            coefficients.push(coefficient as f64);
        }

        Ok(Polynomial::new(degree, coefficients)?)
    }

    fn read_bracket(&mut self, polynomial: &Polynomial) -> anyhow::Result<Bracket> {
        writeln!(self.output, "\n{}", "=== Bounds Input ===".cyan())?;

        loop {
            let Some(x_lower) = self.ask_bound("Enter lower bound (x_lower): ")? else {
                continue;
            };
            let Some(x_upper) = self.ask_bound("Enter upper bound (x_upper): ")? else {
                continue;
            };

            let result = Bracket::new(polynomial, x_lower, x_upper);
            let values = match &result {
                Ok(bracket) => Some(bracket.values()),
                Err(err) => err.values(),
            };
            if let Some([f_lower, f_upper]) = values {
                writeln!(self.output, "f({x_lower}) = {f_lower:.6}")?;
                writeln!(self.output, "f({x_upper}) = {f_upper:.6}")?;
            }

            let advice = match result {
                Ok(bracket) => return Ok(bracket),
                Err(err) if err.is_exact_root() => format!(
                    "Note: {err}!\n\
                     The bisection method requires bounds with opposite signs.\n\
                     Please choose bounds that bracket an unknown root.\n"
                ),
                Err(err @ BracketError::SameSign { .. }) => format!(
                    "Error: {err}.\n\
                     The bisection method requires opposite signs at the bounds.\n\
                     Please choose different bounds.\n"
                ),
                Err(err) => format!("Error: {err}\nPlease try again.\n"),
            };
            writeln!(self.output, "{}", advice.yellow())?;
        }
    }

    /// Reads one bracket bound, rejecting anything that is not a finite number.
    fn ask_bound(&mut self, prompt: &str) -> anyhow::Result<Option<f64>> {
        const INVALID: &str = "Please enter valid numbers";

        match self.ask_parsed::<f64>(prompt, INVALID)? {
            Some(x) if x.is_finite() => Ok(Some(x)),
            Some(_) => {
                writeln!(self.output, "{INVALID}")?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn read_tolerance(&mut self) -> anyhow::Result<f64> {
        writeln!(self.output, "\n{}", "=== Stopping Criterion ===".cyan())?;

        loop {
            let Some(tolerance) = self.ask_parsed::<f64>(
                "Enter tolerance for relative error (%): ",
                "Please enter a valid number",
            )?
            else {
                continue;
            };
            if Config::new(tolerance).validate().is_ok() {
                return Ok(tolerance);
            }
            writeln!(self.output, "Tolerance must be between 0 and 100")?;
        }
    }

    /// Prompts once and parses the answer, printing `invalid` on a parse failure.
    ///
    /// Returns `Ok(None)` when the answer does not parse so the caller can re-prompt.
    fn ask_parsed<T: FromStr>(&mut self, prompt: &str, invalid: &str) -> anyhow::Result<Option<T>> {
        let answer = self.ask(prompt)?;
        match answer.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "{invalid}")?;
                Ok(None)
            }
        }
    }

    fn yes_no(&mut self, prompt: &str) -> anyhow::Result<bool> {
        Ok(self.ask(prompt)?.eq_ignore_ascii_case("y"))
    }

    /// Writes `prompt` and reads one trimmed line.
    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }
        Ok(line.trim().to_string())
    }
}
