//! Signup form input and the validation-and-submission handler.
//!
//! The handler runs every check on every submission so the user sees all
//! problems at once. Failures are data: they are collected into a
//! [`ValidationResult`] rather than returned as `Err`.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::validation::{has_min_length, is_email, is_equal_to_other_value, is_not_empty};

/// Minimum number of characters accepted for a password.
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Values submitted by the user in one signup attempt.
///
/// The inbound adapters populate this record before validation runs, so
/// the handler never looks fields up by name. Missing fields are empty.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupForm {
    /// Address the account would be registered under.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Repeated password; must equal [`SignupForm::password`].
    pub confirm_password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Selected role, normally one of [`Role::ALL`].
    pub role: String,
    /// Selected acquisition channels in submission order.
    pub acquisition: Vec<String>,
    /// Whether the terms and conditions box was ticked.
    pub terms: bool,
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("role", &self.role)
            .field("acquisition", &self.acquisition)
            .field("terms", &self.terms)
            .finish()
    }
}

/// Roles offered by the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Enrolled learner.
    Student,
    /// Educator.
    Teacher,
    /// Works for a company.
    Employee,
    /// Runs a company.
    Founder,
    /// Anything else.
    Other,
}

impl Role {
    /// Every role in display order.
    pub const ALL: [Self; 5] = [
        Self::Student,
        Self::Teacher,
        Self::Employee,
        Self::Founder,
        Self::Other,
    ];

    /// Submitted form value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Employee => "employee",
            Self::Founder => "founder",
            Self::Other => "other",
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Teacher => "Teacher",
            Self::Employee => "Employee",
            Self::Founder => "Founder",
            Self::Other => "Other",
        }
    }
}

/// Ways a user may have found the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcquisitionChannel {
    /// Search engine.
    Google,
    /// Personal referral.
    Friend,
    /// Anything else.
    Other,
}

impl AcquisitionChannel {
    /// Every channel in display order.
    pub const ALL: [Self; 3] = [Self::Google, Self::Friend, Self::Other];

    /// Submitted form value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Friend => "friend",
            Self::Other => "other",
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Friend => "Referred by friend",
            Self::Other => "Other",
        }
    }
}

/// A signup check that failed.
///
/// Variants are declared in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignupValidationError {
    /// Email is not shaped like an address.
    InvalidEmail,
    /// Password is shorter than [`PASSWORD_MIN_LENGTH`].
    PasswordTooShort,
    /// Password and confirmation differ.
    PasswordMismatch,
    /// First or last name is blank.
    MissingName,
    /// No role selected.
    MissingRole,
    /// No acquisition channel selected.
    MissingAcquisition,
    /// Terms and conditions not accepted.
    TermsNotAccepted,
}

impl SignupValidationError {
    /// Stable machine-readable identifier, used in log events.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidEmail => "invalid_email",
            Self::PasswordTooShort => "password_too_short",
            Self::PasswordMismatch => "password_mismatch",
            Self::MissingName => "missing_name",
            Self::MissingRole => "missing_role",
            Self::MissingAcquisition => "missing_acquisition",
            Self::TermsNotAccepted => "terms_not_accepted",
        }
    }
}

impl fmt::Display for SignupValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail => write!(f, "Please enter a valid email."),
            Self::PasswordTooShort => write!(
                f,
                "Password must be at least {PASSWORD_MIN_LENGTH} characters long."
            ),
            Self::PasswordMismatch => write!(f, "Passwords must match."),
            Self::MissingName => write!(f, "Please enter first and last name."),
            Self::MissingRole => write!(f, "Please select a role."),
            Self::MissingAcquisition => write!(f, "Please select at least one option."),
            Self::TermsNotAccepted => write!(f, "You must agree to the terms and conditions."),
        }
    }
}

/// Rejected submission: the failed checks plus the input to echo back.
///
/// ## Invariants
/// - `errors` is non-empty and ordered by check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    errors: Vec<SignupValidationError>,
    entered_values: SignupForm,
}

impl ValidationFailure {
    /// Failed checks in the order they ran.
    #[must_use]
    pub fn errors(&self) -> &[SignupValidationError] {
        &self.errors
    }

    /// Human readable messages in the order the checks ran.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// The submission exactly as received.
    #[must_use]
    pub fn entered_values(&self) -> &SignupForm {
        &self.entered_values
    }

    /// Split into errors and entered values.
    #[must_use]
    pub fn into_parts(self) -> (Vec<SignupValidationError>, SignupForm) {
        (self.errors, self.entered_values)
    }
}

/// Outcome of validating one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every check passed.
    Valid,
    /// At least one check failed.
    Invalid(ValidationFailure),
}

impl ValidationResult {
    /// Return `true` when every check passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Failed checks; empty when valid.
    #[must_use]
    pub fn errors(&self) -> &[SignupValidationError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(failure) => failure.errors(),
        }
    }

    /// Codes of the failed checks in check order; empty when valid.
    #[must_use]
    pub fn failed_codes(&self) -> Vec<&'static str> {
        self.errors()
            .iter()
            .map(|error| error.code())
            .collect()
    }

    /// Entered values, present only when a check failed.
    #[must_use]
    pub fn entered_values(&self) -> Option<&SignupForm> {
        match self {
            Self::Valid => None,
            Self::Invalid(failure) => Some(failure.entered_values()),
        }
    }
}

/// Run every signup check against `form`.
///
/// # Examples
/// ```
/// use signup::domain::{SignupForm, SignupValidationError, validate_signup};
///
/// let form = SignupForm {
///     email: "a@b.com".to_owned(),
///     ..SignupForm::default()
/// };
/// let result = validate_signup(form);
/// assert_eq!(result.errors().first(), Some(&SignupValidationError::PasswordTooShort));
/// ```
#[must_use]
pub fn validate_signup(form: SignupForm) -> ValidationResult {
    let names_present = is_not_empty(&form.first_name) && is_not_empty(&form.last_name);
    let checks = [
        (SignupValidationError::InvalidEmail, is_email(&form.email)),
        (
            SignupValidationError::PasswordTooShort,
            has_min_length(&form.password, PASSWORD_MIN_LENGTH),
        ),
        (
            SignupValidationError::PasswordMismatch,
            is_equal_to_other_value(&form.password, &form.confirm_password),
        ),
        (SignupValidationError::MissingName, names_present),
        (SignupValidationError::MissingRole, is_not_empty(&form.role)),
        (
            SignupValidationError::MissingAcquisition,
            !form.acquisition.is_empty(),
        ),
        (SignupValidationError::TermsNotAccepted, form.terms),
    ];

    let errors: Vec<SignupValidationError> = checks
        .into_iter()
        .filter_map(|(error, passed)| (!passed).then_some(error))
        .collect();

    let result = if errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(ValidationFailure {
            errors,
            entered_values: form,
        })
    };
    debug!(
        failed_checks = result.errors().len(),
        codes = ?result.failed_codes(),
        "signup form validated"
    );
    result
}
