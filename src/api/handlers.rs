//! HTTP request handlers for the build price estimator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_price, estimate_price};
use crate::models::{PriceInputs, ProvinceCode, price_per_sqft};

use super::request::EstimateRequest;
use super::response::{
    ApiError, ApiErrorResponse, AuditTrace, EstimateResponse, ProvinceInfo, ProvincesResponse,
    TotalPriceResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/estimate", post(estimate_handler))
        .route("/estimate/total", post(total_price_handler))
        .route("/provinces", get(provinces_handler))
        .with_state(state)
}

/// Handler for POST /estimate endpoint.
///
/// Returns the full breakdown with its audit trace.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let inputs = match parse_inputs(payload, correlation_id) {
        Ok(inputs) => inputs,
        Err(error) => return error_response(error),
    };

    let start_time = Instant::now();
    match estimate_price(&inputs, state.config()) {
        Ok(calculation) => {
            let duration = start_time.elapsed();
            let breakdown = calculation.breakdown;
            info!(
                correlation_id = %correlation_id,
                province = %inputs.province,
                total_price = %breakdown.total_price,
                grand_total_average = %breakdown.grand_total.average,
                duration_us = duration.as_micros(),
                "Estimate completed successfully"
            );

            let response = EstimateResponse {
                estimate_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                inputs,
                breakdown,
                price_per_sqft: price_per_sqft(breakdown.total_price, inputs.total_area_sqft()),
                audit_trace: AuditTrace {
                    steps: calculation.audit_steps,
                    duration_us: u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
                },
            };
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Estimate failed");
            error_response(err.into())
        }
    }
}

/// Handler for POST /estimate/total endpoint.
///
/// Returns only the rounded base build price.
async fn total_price_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing total price request");

    let inputs = match parse_inputs(payload, correlation_id) {
        Ok(inputs) => inputs,
        Err(error) => return error_response(error),
    };

    match calculate_price(&inputs, state.config()) {
        Ok(total_price) => {
            info!(
                correlation_id = %correlation_id,
                province = %inputs.province,
                total_price = %total_price,
                "Total price completed successfully"
            );
            json_response(StatusCode::OK, TotalPriceResponse { total_price })
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Total price failed");
            error_response(err.into())
        }
    }
}

/// Handler for GET /provinces endpoint.
async fn provinces_handler(State(state): State<AppState>) -> Response {
    let provinces = state
        .config()
        .provinces()
        .iter()
        .map(|(code, factors)| ProvinceInfo {
            code: *code,
            name: code.name().to_string(),
            factors: *factors,
        })
        .collect();

    json_response(StatusCode::OK, ProvincesResponse { provinces })
}

/// Turns the request body into validated engine inputs.
fn parse_inputs(
    payload: Result<Json<EstimateRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<PriceInputs, ApiErrorResponse> {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            });
        }
    };

    let province = request.province.clone();
    PriceInputs::try_from(request).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            province = %province,
            error = %err,
            "Invalid estimate inputs"
        );
        ApiErrorResponse::from(err)
    })
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}
