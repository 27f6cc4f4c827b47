use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::Local;
use tower::ServiceExt;

use super::common::*;
use crate::calculator::domain::{EmploymentStatus, LoanRequest, ScoringInput};
use crate::calculator::{calculator_router, LoanCalculator};

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request builds")
}

fn live_request() -> LoanRequest {
    let mut request = loan_request();
    request.birthdate = born_years_before(Local::now().date_naive(), 35);
    request
}

fn live_scoring_input() -> ScoringInput {
    aged_relative_to(scoring_input(), Local::now().date_naive())
}

fn router() -> axum::Router {
    calculator_router(Arc::new(LoanCalculator::default()))
}

#[tokio::test]
async fn offers_endpoint_returns_four_offers() {
    let body = serde_json::to_string(&live_request()).expect("serializes");

    let response = router()
        .oneshot(post_json("/calculator/offers", body))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    let offers = payload.as_array().expect("array payload");
    assert_eq!(offers.len(), 4);
    assert_eq!(offers[0]["rate"], "15");
    assert_eq!(offers[3]["isInsuranceEnabled"], true);
    assert_eq!(offers[3]["isSalaryClient"], true);
}

#[tokio::test]
async fn offers_endpoint_reports_invalid_fields() {
    let mut request = live_request();
    request.first_name = "111".to_string();
    let body = serde_json::to_string(&request).expect("serializes");

    let response = router()
        .oneshot(post_json("/calculator/offers", body))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = json_body(response).await;
    assert_eq!(payload["fields"][0]["field"], "firstName");
}

#[tokio::test]
async fn credit_endpoint_returns_schedule() {
    let body = serde_json::to_string(&live_scoring_input()).expect("serializes");

    let response = router()
        .oneshot(post_json("/calculator/calc", body))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["monthlyPayment"], "9414.69");
    assert_eq!(payload["psk"], "225952.67");
    assert_eq!(
        payload["paymentSchedule"]
            .as_array()
            .expect("schedule array")
            .len(),
        24
    );
}

#[tokio::test]
async fn credit_endpoint_rejects_denied_applicant() {
    let mut input = live_scoring_input();
    input.employment.employment_status = EmploymentStatus::Unemployed;
    let body = serde_json::to_string(&input).expect("serializes");

    let response = router()
        .oneshot(post_json("/calculator/calc", body))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = json_body(response).await;
    let message = payload["error"].as_str().expect("error message");
    assert!(message.contains("denied loan for account"));
}

#[tokio::test]
async fn credit_endpoint_accepts_marital_status_alias() {
    let input = live_scoring_input();
    let mut value = serde_json::to_value(&input).expect("serializes");
    let object = value.as_object_mut().expect("object payload");
    let status = object.remove("familyStatus").expect("family status present");
    object.insert("maritalStatus".to_string(), status);

    let response = router()
        .oneshot(post_json("/calculator/calc", value.to_string()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
}
