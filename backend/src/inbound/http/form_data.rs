//! Decoding of `application/x-www-form-urlencoded` signup submissions.
//!
//! Browsers send repeated keys for checkbox groups, which `serde_urlencoded`
//! cannot collect into a `Vec`, so the body is walked pair by pair.

use url::form_urlencoded;

use crate::domain::SignupForm;

/// Form field names used by the signup markup.
pub mod field {
    /// Email input.
    pub const EMAIL: &str = "email";
    /// Password input.
    pub const PASSWORD: &str = "password";
    /// Password confirmation input.
    pub const CONFIRM_PASSWORD: &str = "confirm-password";
    /// First name input.
    pub const FIRST_NAME: &str = "first-name";
    /// Last name input.
    pub const LAST_NAME: &str = "last-name";
    /// Role select.
    pub const ROLE: &str = "role";
    /// Acquisition checkbox group.
    pub const ACQUISITION: &str = "acquisition";
    /// Terms checkbox.
    pub const TERMS: &str = "terms";
}

#[derive(Default)]
struct RawSignupForm {
    email: Option<String>,
    password: Option<String>,
    confirm_password: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    role: Option<String>,
    acquisition: Vec<String>,
    terms: Option<String>,
}

impl From<RawSignupForm> for SignupForm {
    fn from(value: RawSignupForm) -> Self {
        Self {
            email: value.email.unwrap_or_default(),
            password: value.password.unwrap_or_default(),
            confirm_password: value.confirm_password.unwrap_or_default(),
            first_name: value.first_name.unwrap_or_default(),
            last_name: value.last_name.unwrap_or_default(),
            role: value.role.unwrap_or_default(),
            acquisition: value.acquisition,
            terms: value.terms.is_some_and(|terms| !terms.is_empty()),
        }
    }
}

/// Decode a urlencoded body into a [`SignupForm`].
///
/// Single-valued fields keep their first occurrence; `acquisition` keeps
/// every occurrence in order. Absent fields are empty. `terms` is set when
/// present with a non-empty value. Unknown keys are ignored.
///
/// # Examples
/// ```
/// use signup::inbound::http::form_data::parse_signup_form;
///
/// let form = parse_signup_form(b"email=a%40b.com&acquisition=google&acquisition=friend&terms=on");
/// assert_eq!(form.email, "a@b.com");
/// assert_eq!(form.acquisition, ["google", "friend"]);
/// assert!(form.terms);
/// ```
#[must_use]
pub fn parse_signup_form(body: &[u8]) -> SignupForm {
    let mut raw = RawSignupForm::default();
    for (key, value) in form_urlencoded::parse(body) {
        let slot = match key.as_ref() {
            field::EMAIL => &mut raw.email,
            field::PASSWORD => &mut raw.password,
            field::CONFIRM_PASSWORD => &mut raw.confirm_password,
            field::FIRST_NAME => &mut raw.first_name,
            field::LAST_NAME => &mut raw.last_name,
            field::ROLE => &mut raw.role,
            field::TERMS => &mut raw.terms,
            field::ACQUISITION => {
                raw.acquisition.push(value.into_owned());
                continue;
            }
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }
    raw.into()
}
