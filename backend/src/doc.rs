//! OpenAPI documentation for the JSON signup endpoint.
//!
//! The HTML form routes are not part of the document. Swagger UI serves it in
//! debug builds and `cargo run --bin openapi-dump` exports it for tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::signup::{SignupRequest, SignupResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Signup API",
        description = "Validates signup submissions and reports every failed check."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(crate::inbound::http::signup::submit_signup),
    components(schemas(SignupRequest, SignupResponse, Error, ErrorCode)),
    tags(
        (name = "signup", description = "Signup form validation")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn documents_signup_path() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/signup"));
    }

    #[rstest]
    #[case("SignupRequest", "confirmPassword")]
    #[case("SignupRequest", "acquisition")]
    #[case("SignupResponse", "errors")]
    #[case("SignupResponse", "enteredValues")]
    #[case("Error", "code")]
    #[case("Error", "message")]
    fn schemas_use_wire_field_names(#[case] schema: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let found = schemas.get(schema).expect("schema registered");
        assert_object_schema_has_field(found, field);
    }
}
