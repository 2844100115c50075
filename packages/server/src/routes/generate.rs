//! The /generate endpoint.
//!
//! The only caller-visible failures on this boundary are input errors:
//! an empty body, a body that stays unparseable after trailing-comma
//! repair, or missing required fields. Everything past validation answers
//! 200 with some valid document — generation itself never fails.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use generation::{GenerationRequest, GenerationSource, WebsiteDocument};

use crate::app::AppState;

lazy_static! {
    /// `,}` / `,]` with optional whitespace — the only JSON repair attempted.
    static ref TRAILING_COMMA: Regex = Regex::new(r",\s*([}\]])").unwrap();
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    success: bool,
    data: WebsiteDocument,
    debug: GenerateDebug,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateDebug {
    ai_used: GenerationSource,
    components_generated: usize,
    images_included: bool,
    #[serde(skip_serializing_if = "is_false")]
    fallback_used: bool,
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    received: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    debug: Option<ParseDebug>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParseDebug {
    original_error: String,
    body_content: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn bad_request(error: &str, received: Option<Value>, debug: Option<ParseDebug>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            success: false,
            error: error.to_string(),
            received,
            debug,
        }),
    )
        .into_response()
}

/// Parse the raw body, repairing trailing commas before giving up.
fn parse_body(body: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(body).or_else(|original| {
        let repaired = TRAILING_COMMA.replace_all(body, "$1");
        serde_json::from_str(&repaired).map_err(|_| original)
    })
}

/// POST /generate
pub async fn generate_handler(Extension(state): Extension<AppState>, body: String) -> Response {
    if body.trim().is_empty() {
        return bad_request("No data provided in request body", None, None);
    }

    let value = match parse_body(&body) {
        Ok(value) => value,
        Err(e) => {
            return bad_request(
                "Request body is not valid JSON",
                None,
                Some(ParseDebug {
                    original_error: e.to_string(),
                    body_content: body,
                }),
            );
        }
    };

    let request: GenerationRequest = match serde_json::from_value(value.clone()) {
        Ok(request) => request,
        Err(e) => {
            return bad_request(&format!("Invalid request: {}", e), Some(value), None);
        }
    };
    if let Err(e) = request.validate() {
        return bad_request(&e.to_string(), Some(value), None);
    }

    let outcome = state.generator.generate(&request).await;

    let debug = GenerateDebug {
        ai_used: outcome.document.metadata.ai_used,
        components_generated: outcome.document.sections.len(),
        images_included: outcome.images_included,
        fallback_used: outcome.fallback_used,
    };

    (
        StatusCode::OK,
        Json(GenerateResponse {
            success: true,
            data: outcome.document,
            debug,
        }),
    )
        .into_response()
}
