//! Presentation state for the signup form.
//!
//! A form starts [`FormStatus::Idle`]. Submitting runs the validation
//! handler synchronously and lands in either [`FormStatus::Success`] or
//! [`FormStatus::Error`]; from `Error` the user may submit again.

use crate::domain::signup::{SignupForm, SignupValidationError, ValidationResult, validate_signup};

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    /// Nothing submitted yet.
    Idle,
    /// The last submission failed at least one check.
    Error,
    /// The last submission passed every check.
    Success,
}

/// State handed to the renderer after each interaction.
///
/// ## Invariants
/// - `errors` is non-empty iff `status` is [`FormStatus::Error`].
/// - `entered_values` is present iff `status` is [`FormStatus::Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    status: FormStatus,
    errors: Vec<SignupValidationError>,
    entered_values: Option<SignupForm>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::idle()
    }
}

impl FormState {
    /// A freshly rendered, empty form.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            status: FormStatus::Idle,
            errors: Vec::new(),
            entered_values: None,
        }
    }

    /// Validate `form` and return the state to render next.
    #[must_use]
    pub fn submit(form: SignupForm) -> Self {
        validate_signup(form).into()
    }

    /// Current lifecycle position.
    #[must_use]
    pub const fn status(&self) -> FormStatus {
        self.status
    }

    /// Failed checks from the last submission.
    #[must_use]
    pub fn errors(&self) -> &[SignupValidationError] {
        &self.errors
    }

    /// Values to pre-populate the form with after a failed submission.
    #[must_use]
    pub fn entered_values(&self) -> Option<&SignupForm> {
        self.entered_values.as_ref()
    }
}

impl From<ValidationResult> for FormState {
    fn from(value: ValidationResult) -> Self {
        match value {
            ValidationResult::Valid => Self {
                status: FormStatus::Success,
                errors: Vec::new(),
                entered_values: None,
            },
            ValidationResult::Invalid(failure) => {
                let (errors, entered_values) = failure.into_parts();
                Self {
                    status: FormStatus::Error,
                    errors,
                    entered_values: Some(entered_values),
                }
            }
        }
    }
}
