use bisect_core::{Polynomial, PolynomialError};
use bisect_plot::{PlotError, render_svg, to_data_uri};
use bisect_solvers::bisection::{self, Config, Solution};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use warp::{
    http::StatusCode,
    reply::{self, Reply, Response},
};

/// JSON body accepted by `POST /solve`.
#[derive(Debug, Clone, Deserialize)]
pub struct SolveRequest {
    pub degree: usize,
    pub coefficients: Vec<f64>,
    pub x_lower: f64,
    pub x_upper: f64,
    pub tolerance: f64,
}

/// Successful `POST /solve` response: the solution fields plus the plot.
#[derive(Debug, Serialize)]
pub struct SolveResponse {
    #[serde(flatten)]
    pub solution: Solution,
    /// SVG plot as a base64 `data:` URI.
    pub plot_image: String,
}

/// Error body returned with any non-2xx status.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors that can occur while handling a solve request.
#[derive(Debug, Error)]
pub enum SolveFailure {
    /// The solver rejected the bracket or tolerance.
    #[error(transparent)]
    Invalid(#[from] bisection::Error),

    #[error("malformed request: {0}")]
    Request(#[from] serde_json::Error),

    #[error(transparent)]
    Polynomial(#[from] PolynomialError),

    #[error(transparent)]
    Plot(#[from] PlotError),
}

impl SolveFailure {
    /// Solver validation failures are the caller's fault; everything else is unexpected.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::Request(_) | Self::Polynomial(_) | Self::Plot(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Parses a request body, solves it, and renders the plot.
///
/// Each call builds its own polynomial and trace; nothing is shared between
/// requests.
///
/// # Errors
///
/// Returns a [`SolveFailure`] describing the first step that failed.
pub fn solve(body: &[u8]) -> Result<SolveResponse, SolveFailure> {
    let request: SolveRequest = serde_json::from_slice(body)?;
    let polynomial = Polynomial::new(request.degree, request.coefficients)?;

    let solution = bisection::solve_unobserved(
        &polynomial,
        [request.x_lower, request.x_upper],
        &Config::new(request.tolerance),
    )?;

    let svg = render_svg(&polynomial, request.x_lower, request.x_upper, solution.root)?;

    Ok(SolveResponse {
        solution,
        plot_image: to_data_uri(&svg),
    })
}

/// Builds the HTTP reply for a request body.
pub(crate) fn solve_reply(body: &[u8]) -> Response {
    match solve(body) {
        Ok(response) => reply::json(&response).into_response(),
        Err(failure) => {
            let status = failure.status();
            if status.is_server_error() {
                log::error!("solve request failed: {failure}");
            } else {
                log::warn!("solve request rejected: {failure}");
            }
            let body = ErrorBody {
                error: failure.to_string(),
            };
            reply::with_status(reply::json(&body), status).into_response()
        }
    }
}
