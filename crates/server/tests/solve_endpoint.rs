use approx::assert_relative_eq;
use serde_json::{Value, json};
use warp::http::StatusCode;

use bisect_server::{MAX_BODY_BYTES, default_static_dir, routes};

async fn post_solve(body: &Value) -> (StatusCode, Value) {
    let api = routes(default_static_dir());
    let response = warp::test::request()
        .method("POST")
        .path("/solve")
        .json(body)
        .reply(&api)
        .await;

    let json = serde_json::from_slice(response.body()).expect("response is JSON");
    (response.status(), json)
}

#[tokio::test]
async fn solves_square_minus_four() {
    let (status, body) = post_solve(&json!({
        "degree": 2,
        "coefficients": [1, 0, -4],
        "x_lower": 0,
        "x_upper": 3,
        "tolerance": 1
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_relative_eq!(body["root"].as_f64().unwrap(), 2.0, epsilon = 0.05);
    assert!(body["f_root"].as_f64().unwrap().abs() < 0.2);
    assert!(body["final_error"].as_f64().unwrap() < 1.0);
    assert!(
        body["plot_image"]
            .as_str()
            .unwrap()
            .starts_with("data:image/svg+xml;base64,")
    );
    assert!(body.get("status").is_none());

    let iterations = body["iterations"].as_u64().unwrap();
    let trace = body["iterations_data"].as_array().unwrap();
    assert_eq!(trace.len() as u64 + 1, iterations);

    let first = &trace[0];
    assert_eq!(first["iteration"], 1);
    for field in [
        "x_lower",
        "f_x_lower",
        "x_upper",
        "f_x_upper",
        "midpoint",
        "f_midpoint",
        "relative_error",
    ] {
        assert!(first[field].is_number(), "missing {field}");
    }
}

#[tokio::test]
async fn reversed_bracket_is_bad_request() {
    let (status, body) = post_solve(&json!({
        "degree": 2,
        "coefficients": [1, 0, -4],
        "x_lower": 3,
        "x_upper": 0,
        "tolerance": 1
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Lower bound must be less than upper bound");
}

#[tokio::test]
async fn same_sign_is_bad_request() {
    let (status, body) = post_solve(&json!({
        "degree": 1,
        "coefficients": [1, 1],
        "x_lower": 0,
        "x_upper": 5,
        "tolerance": 1
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Function must have opposite signs at lower and upper bounds"
    );
}

#[tokio::test]
async fn bad_tolerance_is_bad_request() {
    let (status, body) = post_solve(&json!({
        "degree": 1,
        "coefficients": [1, -5],
        "x_lower": 0,
        "x_upper": 10,
        "tolerance": 150
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Tolerance must be between 0 and 100");
}

#[tokio::test]
async fn exact_root_bound_is_accepted() {
    let (status, body) = post_solve(&json!({
        "degree": 2,
        "coefficients": [1, 0, -4],
        "x_lower": 0,
        "x_upper": 2,
        "tolerance": 0.1
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_relative_eq!(body["root"].as_f64().unwrap(), 2.0, epsilon = 0.01);
}

#[tokio::test]
async fn malformed_body_is_server_error() {
    let (status, body) = post_solve(&json!({ "degree": 2 })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn coefficient_mismatch_is_server_error() {
    let (status, body) = post_solve(&json!({
        "degree": 4,
        "coefficients": [1, 0, -4],
        "x_lower": 0,
        "x_upper": 3,
        "tolerance": 1
    }))
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("coefficients"));
}

#[tokio::test]
async fn serves_gui_index() {
    let api = routes(default_static_dir());
    let response = warp::test::request()
        .method("GET")
        .path("/")
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = String::from_utf8_lossy(response.body());
    assert!(html.contains("Bisection Method"));
}

#[tokio::test]
async fn allows_cross_origin_requests() {
    let api = routes(default_static_dir());
    let response = warp::test::request()
        .method("POST")
        .path("/solve")
        .header("origin", "http://example.com")
        .json(&json!({
            "degree": 1,
            "coefficients": [1, -1],
            "x_lower": 0,
            "x_upper": 3,
            "tolerance": 1
        }))
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}

#[tokio::test]
async fn oversized_body_is_refused() {
    let api = routes(default_static_dir());
    let body = vec![b' '; usize::try_from(MAX_BODY_BYTES).unwrap() + 1];
    let response = warp::test::request()
        .method("POST")
        .path("/solve")
        .header("content-type", "application/json")
        .body(body)
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
