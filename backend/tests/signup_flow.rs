//! End-to-end behaviour of the signup form through the full middleware stack.

use actix_http::Request;
use actix_web::{
    App,
    body::BoxBody,
    dev::{Service, ServiceResponse},
    http::{StatusCode, header::ContentType},
    test::{self, TestRequest},
    web,
};
use rstest::rstest;
use serde_json::{Value, json};
use signup::Trace;
use signup::domain::{
    SignupForm, SignupValidationError, TRACE_ID_HEADER, TraceId, validate_signup,
};
use signup::inbound::http::configure;
use signup::inbound::http::views::SignupViews;

async fn init_app() -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>
{
    let views = SignupViews::new().expect("templates compile");
    test::init_service(
        App::new()
            .app_data(web::Data::new(views))
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

fn form_request(body: &'static str) -> Request {
    TestRequest::post()
        .uri("/signup")
        .insert_header(ContentType::form_url_encoded())
        .set_payload(body)
        .to_request()
}

#[rstest]
#[actix_web::test]
async fn user_corrects_errors_and_resubmits() {
    let app = init_app().await;

    let idle = test::call_service(&app, TestRequest::get().uri("/signup").to_request()).await;
    assert_eq!(idle.status(), StatusCode::OK);

    let failed = test::call_service(
        &app,
        form_request("email=ann&password=abc&confirm-password=abc&first-name=Ann&last-name=Lee"),
    )
    .await;
    assert_eq!(failed.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = String::from_utf8(test::read_body(failed).await.to_vec()).expect("utf8 body");
    for message in [
        "Please enter a valid email.",
        "Password must be at least 6 characters long.",
        "Please select a role.",
        "Please select at least one option.",
        "You must agree to the terms and conditions.",
    ] {
        assert!(html.contains(message), "missing {message}");
    }
    assert!(!html.contains("Passwords must match."));
    assert!(html.contains(r#"value="Ann""#));

    let fixed = test::call_service(
        &app,
        form_request(
            "email=ann%40example.com&password=abcdef&confirm-password=abcdef\
             &first-name=Ann&last-name=Lee&role=other&acquisition=other&terms=on",
        ),
    )
    .await;
    assert_eq!(fixed.status(), StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn every_response_carries_a_trace_id() {
    let app = init_app().await;
    let response = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/v1/signup")
            .set_json(json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .expect("trace id header");
    assert!(header.parse::<TraceId>().is_ok());

    let body: Value = serde_json::from_slice(&test::read_body(response).await).expect("JSON");
    assert_eq!(
        body.get("errors").and_then(Value::as_array).map(Vec::len),
        Some(6)
    );
}

#[rstest]
#[actix_web::test]
async fn malformed_json_error_reports_the_request_trace_id() {
    let app = init_app().await;
    let response = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/v1/signup")
            .insert_header(ContentType::json())
            .set_payload("[")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned)
        .expect("trace id header");
    let body: Value = serde_json::from_slice(&test::read_body(response).await).expect("JSON");
    assert_eq!(
        body.get("traceId").and_then(Value::as_str),
        Some(header.as_str())
    );
}

const CHECKS: [SignupValidationError; 7] = [
    SignupValidationError::InvalidEmail,
    SignupValidationError::PasswordTooShort,
    SignupValidationError::PasswordMismatch,
    SignupValidationError::MissingName,
    SignupValidationError::MissingRole,
    SignupValidationError::MissingAcquisition,
    SignupValidationError::TermsNotAccepted,
];

/// Build a form that fails exactly the checks whose bit is set in `mask`.
fn form_failing(mask: u8) -> SignupForm {
    let fails = |bit: u8| mask & (1 << bit) != 0;
    let password = if fails(1) { "short" } else { "long enough" };
    SignupForm {
        email: if fails(0) { "nope" } else { "a@b.com" }.to_owned(),
        password: password.to_owned(),
        confirm_password: if fails(2) {
            format!("{password}!")
        } else {
            password.to_owned()
        },
        first_name: if fails(3) { "" } else { "Ann" }.to_owned(),
        last_name: "Lee".to_owned(),
        role: if fails(4) { "" } else { "student" }.to_owned(),
        acquisition: if fails(5) {
            Vec::new()
        } else {
            vec!["google".to_owned()]
        },
        terms: !fails(6),
    }
}

#[rstest]
fn error_count_equals_failing_checks_for_every_combination() {
    for mask in 0_u8..128 {
        let result = validate_signup(form_failing(mask));
        let expected: Vec<SignupValidationError> = CHECKS
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, check)| *check)
            .collect();
        assert_eq!(result.errors(), expected.as_slice(), "mask {mask:#09b}");
        assert_eq!(result.entered_values().is_some(), mask != 0);
    }
}
