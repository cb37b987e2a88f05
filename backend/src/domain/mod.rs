//! Domain primitives for the signup form.
//!
//! Purpose: hold the form input record, the field validators, the
//! validation-and-submission handler and the presentation state, free of
//! any transport concern.
//!
//! Public surface:
//! - `SignupForm` — typed form input populated by inbound adapters.
//! - `validate_signup` — runs every check and returns a `ValidationResult`.
//! - `FormState` — explicit Idle/Error/Success state for renderers.
//! - `Error` — payload for failures unrelated to validation.

pub mod error;
pub mod form_state;
pub mod signup;
pub mod trace_id;
pub mod validation;

pub use self::error::{Error, ErrorCode};
pub use self::form_state::{FormState, FormStatus};
pub use self::signup::{
    AcquisitionChannel, PASSWORD_MIN_LENGTH, Role, SignupForm, SignupValidationError,
    ValidationFailure, ValidationResult, validate_signup,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
