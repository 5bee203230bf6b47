//! AWS Lambda handler for portfolio projections
//!
//! Accepts portfolio parameters via JSON and returns the projection result,
//! summary, formatted headline and optionally chart datasets.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use fincalc::display::{currency_symbol, headline, Charts, SeededPalette};
use fincalc::projection::ProjectionSummary;
use fincalc::{project, PortfolioParameters, ProjectionResult};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

/// Input for a projection request
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub parameters: PortfolioParameters,

    /// Display currency code (default: USD)
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Whether to include pie and bar chart datasets
    #[serde(default)]
    pub include_charts: bool,

    /// Seed for yearly bar colors
    #[serde(default)]
    pub color_seed: u64,
}

fn default_currency() -> String { "USD".to_string() }

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub currency: String,
    pub currency_symbol: String,
    pub headline: String,
    pub result: ProjectionResult,
    pub summary: ProjectionSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charts: Option<Charts>,
    pub execution_time_ms: u64,
}

fn with_cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::json!({ "error": message }).to_string();
    Ok(with_cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(body))?)
}

fn json_response(body: &ProjectionResponse) -> Result<Response<Body>, Error> {
    Ok(with_cors(Response::builder())
        .status(200)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

/// Parse a request body and compute the response
fn respond(body_str: &str, start: std::time::Instant) -> Result<ProjectionResponse, serde_json::Error> {
    let request: ProjectionRequest = serde_json::from_str(body_str)?;
    let params = &request.parameters;

    let result = project(params);
    let summary = result.summary(params.total_invested());
    let charts = request
        .include_charts
        .then(|| Charts::build(&result, params.years, &SeededPalette::new(request.color_seed)));

    log::info!(
        "Projected {} investments over {} years",
        result.per_investment.len(),
        params.years
    );

    Ok(ProjectionResponse {
        currency_symbol: currency_symbol(&request.currency).to_string(),
        headline: headline(&request.currency, result.total_projected_return),
        currency: request.currency,
        summary,
        charts,
        result,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(with_cors(Response::builder()).status(200).body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    match respond(&body_str, start) {
        Ok(response) => json_response(&response),
        Err(e) => {
            log::warn!("Rejected request: {}", e);
            error_response(400, &format!("Invalid JSON: {}", e))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respond_defaults() {
        let body = r#"{
            "total_amount": 10000,
            "years": 2,
            "investments": [{"name": "A", "allocation_percent": 50, "annual_return_percent": 10}]
        }"#;
        let response = respond(body, std::time::Instant::now()).unwrap();

        assert_eq!(response.currency, "USD");
        assert_eq!(response.currency_symbol, "$");
        assert_eq!(response.headline, "Projected Returns: $11550.00");
        assert_eq!(response.summary.total_invested, 5000.0);
        assert!(response.charts.is_none());
    }

    #[test]
    fn test_respond_with_charts_and_currency() {
        let body = r#"{
            "totalAmount": 1000,
            "years": 3,
            "currency": "EUR",
            "include_charts": true,
            "investments": [{"name": "A", "percentage": 100, "returns": 0}]
        }"#;
        let response = respond(body, std::time::Instant::now()).unwrap();

        assert_eq!(response.currency_symbol, "€");
        let charts = response.charts.unwrap();
        assert_eq!(charts.yearly.labels, vec!["Year 1", "Year 2", "Year 3"]);
        assert_eq!(charts.allocation.datasets[0].data, vec![3000.0]);
    }

    fn text_body(response: &Response<Body>) -> String {
        match response.body() {
            Body::Text(s) => s.clone(),
            Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
            Body::Empty => String::new(),
        }
    }

    fn post(body: Body) -> Request {
        lambda_http::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(body)
            .unwrap()
    }

    #[tokio::test]
    async fn test_preflight_returns_cors_headers() {
        let request = lambda_http::http::Request::builder()
            .method("OPTIONS")
            .uri("/")
            .body(Body::Empty)
            .unwrap();
        let response = handler(request).await.unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(response.headers()["Access-Control-Allow-Methods"], "POST, OPTIONS");
        assert!(text_body(&response).is_empty());
    }

    #[tokio::test]
    async fn test_invalid_json_gives_400() {
        let response = handler(post(Body::Text(r#"{"total_amount":"lots"}"#.into()))).await.unwrap();

        assert_eq!(response.status(), 400);
        assert_eq!(response.headers()["Content-Type"], "application/json");
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
        let body: serde_json::Value = serde_json::from_str(&text_body(&response)).unwrap();
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn test_empty_body_is_treated_as_empty_object() {
        // "{}" lacks the required fields, so it is rejected rather than projected
        let response = handler(post(Body::Empty)).await.unwrap();
        assert_eq!(response.status(), 400);
        let body: serde_json::Value = serde_json::from_str(&text_body(&response)).unwrap();
        assert!(body["error"].as_str().unwrap().contains("missing field"));
    }

    #[tokio::test]
    async fn test_post_returns_projection() {
        let payload = r#"{"total_amount": 10000, "years": 2,
            "investments": [{"name": "A", "percentage": 50, "returns": 10}]}"#;
        let response = handler(post(Body::Text(payload.into()))).await.unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
        let body: serde_json::Value = serde_json::from_str(&text_body(&response)).unwrap();
        assert_eq!(body["headline"], "Projected Returns: $11550.00");
        assert_eq!(body["result"]["per_investment"][0]["name"], "A");
    }

    #[test]
    fn test_respond_rejects_non_numeric() {
        let body = r#"{"total_amount": "lots", "years": 2}"#;
        assert!(respond(body, std::time::Instant::now()).is_err());
    }
}
