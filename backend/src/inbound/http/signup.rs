//! Signup handlers.
//!
//! ```text
//! GET  /signup          empty HTML form
//! POST /signup          urlencoded submission, HTML success page or re-rendered form
//! POST /api/v1/signup   {"email":"a@b.com","password":"secret",...}
//! ```
//!
//! Failed validation answers `422 Unprocessable Entity`; the body carries the
//! messages and the echoed input rather than an [`Error`] payload. A form
//! post with any other content type is rejected with `400 Bad Request`.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Error, FormState, FormStatus, SignupForm, ValidationResult, validate_signup};
use crate::inbound::http::ApiResult;
use crate::inbound::http::form_data::parse_signup_form;
use crate::inbound::http::views::{SignupViews, ViewError};

/// JSON body for `POST /api/v1/signup`.
///
/// Every field is optional; absent strings are empty and `terms` is false.
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupRequest {
    /// Email address.
    #[schema(example = "a@b.com")]
    pub email: String,
    /// Password, at least six characters.
    #[schema(example = "secret")]
    pub password: String,
    /// Must equal `password`.
    #[schema(example = "secret")]
    pub confirm_password: String,
    /// Given name.
    #[schema(example = "Ann")]
    pub first_name: String,
    /// Family name.
    #[schema(example = "Lee")]
    pub last_name: String,
    /// One of `student`, `teacher`, `employee`, `founder`, `other`.
    #[schema(example = "student")]
    pub role: String,
    /// Any of `google`, `friend`, `other`.
    pub acquisition: Vec<String>,
    /// Terms and conditions accepted.
    pub terms: bool,
}

impl From<SignupRequest> for SignupForm {
    fn from(value: SignupRequest) -> Self {
        let SignupRequest {
            email,
            password,
            confirm_password,
            first_name,
            last_name,
            role,
            acquisition,
            terms,
        } = value;
        Self {
            email,
            password,
            confirm_password,
            first_name,
            last_name,
            role,
            acquisition,
            terms,
        }
    }
}

impl From<SignupForm> for SignupRequest {
    fn from(value: SignupForm) -> Self {
        let SignupForm {
            email,
            password,
            confirm_password,
            first_name,
            last_name,
            role,
            acquisition,
            terms,
        } = value;
        Self {
            email,
            password,
            confirm_password,
            first_name,
            last_name,
            role,
            acquisition,
            terms,
        }
    }
}

/// Validation outcome returned by `POST /api/v1/signup`.
///
/// ## Invariants
/// - `errors` is `null` on success and a non-empty list otherwise.
/// - `enteredValues` is present iff `errors` is non-null.
#[derive(Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    /// Messages in check order, or `null` when every check passed.
    pub errors: Option<Vec<String>>,
    /// The submission exactly as received, present only on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entered_values: Option<SignupRequest>,
}

impl From<ValidationResult> for SignupResponse {
    fn from(value: ValidationResult) -> Self {
        match value {
            ValidationResult::Valid => Self {
                errors: None,
                entered_values: None,
            },
            ValidationResult::Invalid(failure) => {
                let errors = failure.messages();
                let (_, entered) = failure.into_parts();
                Self {
                    errors: Some(errors),
                    entered_values: Some(entered.into()),
                }
            }
        }
    }
}

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

fn require_form_content_type(req: &HttpRequest) -> Result<(), Error> {
    let content_type = req.content_type();
    if content_type.eq_ignore_ascii_case(FORM_CONTENT_TYPE) {
        Ok(())
    } else {
        Err(
            Error::invalid_request("Form submissions must be URL-encoded").with_details(json!({
                "expected": FORM_CONTENT_TYPE,
                "received": content_type,
            })),
        )
    }
}

fn render_failure(err: ViewError) -> Error {
    Error::internal(err.to_string())
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

/// Render the empty signup form.
#[get("/signup")]
pub async fn signup_page(views: web::Data<SignupViews>) -> ApiResult<HttpResponse> {
    let page = views
        .render_form(&FormState::idle())
        .map_err(render_failure)?;
    Ok(html(StatusCode::OK, page))
}

/// Validate a browser form submission and render the next view.
///
/// # Errors
/// Returns [`Error::invalid_request`] when the body is not
/// `application/x-www-form-urlencoded`.
#[post("/signup")]
pub async fn submit_signup_form(
    req: HttpRequest,
    views: web::Data<SignupViews>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    require_form_content_type(&req)?;
    let state = FormState::submit(parse_signup_form(&body));
    let codes: Vec<&str> = state.errors().iter().map(|error| error.code()).collect();
    info!(
        status = ?state.status(),
        failed_checks = codes.len(),
        codes = ?codes,
        "signup form submitted"
    );

    if state.status() == FormStatus::Success {
        let page = views.render_success().map_err(render_failure)?;
        Ok(html(StatusCode::OK, page))
    } else {
        let page = views.render_form(&state).map_err(render_failure)?;
        Ok(html(StatusCode::UNPROCESSABLE_ENTITY, page))
    }
}

/// Validate a JSON signup submission.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use signup::inbound::http::signup::submit_signup;
///
/// let _app = App::new().service(web::scope("/api/v1").service(submit_signup));
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Every check passed", body = SignupResponse),
        (status = 422, description = "At least one check failed", body = SignupResponse),
        (status = 400, description = "Body is not valid JSON", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["signup"],
    operation_id = "submitSignup"
)]
#[post("/signup")]
pub async fn submit_signup(payload: web::Json<SignupRequest>) -> HttpResponse {
    let result = validate_signup(payload.into_inner().into());
    info!(
        valid = result.is_valid(),
        failed_checks = result.errors().len(),
        codes = ?result.failed_codes(),
        "signup request validated"
    );
    let status = if result.is_valid() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    HttpResponse::build(status).json(SignupResponse::from(result))
}
