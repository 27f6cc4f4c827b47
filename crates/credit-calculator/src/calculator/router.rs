use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::Local;
use serde_json::json;

use super::domain::{LoanRequest, ScoringInput};
use super::intake::{validate_loan_request, validate_scoring_input, FieldError};
use super::service::LoanCalculator;
use crate::error::AppError;

/// Router exposing offer generation and credit calculation.
pub fn calculator_router(calculator: Arc<LoanCalculator>) -> Router {
    Router::new()
        .route("/calculator/offers", post(offers_handler))
        .route("/calculator/calc", post(credit_handler))
        .with_state(calculator)
}

pub(crate) async fn offers_handler(
    State(calculator): State<Arc<LoanCalculator>>,
    axum::Json(request): axum::Json<LoanRequest>,
) -> Response {
    if let Err(fields) = validate_loan_request(&request, Local::now().date_naive()) {
        return validation_failed(fields);
    }

    match calculator.generate_offers(&request) {
        Ok(offers) => (StatusCode::OK, axum::Json(offers)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn credit_handler(
    State(calculator): State<Arc<LoanCalculator>>,
    axum::Json(input): axum::Json<ScoringInput>,
) -> Response {
    let today = Local::now().date_naive();
    if let Err(fields) = validate_scoring_input(&input, today) {
        return validation_failed(fields);
    }

    match calculator.calculate_credit_on(&input, today) {
        Ok(credit) => (StatusCode::OK, axum::Json(credit)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

fn validation_failed(fields: Vec<FieldError>) -> Response {
    let payload = json!({
        "error": "validation failed",
        "fields": fields,
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}
