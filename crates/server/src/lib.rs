//! HTTP front end for the bisect root finder.
//!
//! The server provides:
//! - `POST /solve` taking `{degree, coefficients, x_lower, x_upper, tolerance}`
//!   and returning the solution, its trace, and an SVG plot as JSON
//! - the web GUI from a static directory (`GET /` serves `index.html`)
//!
//! Solver validation failures answer `400 {"error": ...}`; malformed bodies
//! and other failures answer `500 {"error": ...}`; bodies over
//! [`MAX_BODY_BYTES`] are refused with `413`. CORS is open to any origin.

mod config;
mod handler;

pub use config::{ServerConfig, default_static_dir};
pub use handler::{ErrorBody, SolveFailure, SolveRequest, SolveResponse, solve};

use std::{net::SocketAddr, path::PathBuf};

use log::info;
use warp::{Filter, Rejection, Reply, hyper::body::Bytes};

/// Largest `POST /solve` body accepted; larger requests get `413`.
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Builds all routes, serving the GUI from `static_dir`.
pub fn routes(
    static_dir: impl Into<PathBuf>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let solve = warp::path("solve")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .map(|body: Bytes| handler::solve_reply(&body));

    let static_files = warp::get().and(warp::fs::dir(static_dir.into()));

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"]);

    solve
        .or(static_files)
        .with(cors)
        .with(warp::log("bisect_server"))
}

/// Serves [`routes`] until the process is stopped.
pub async fn serve(config: &ServerConfig) {
    let addr = SocketAddr::new(config.host, config.port);
    info!(
        "serving {} on http://{addr}",
        config.static_dir.display()
    );
    warp::serve(routes(config.static_dir.clone())).run(addr).await;
}
