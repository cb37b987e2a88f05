//! HTML rendering for the signup form.
//!
//! Templates are compiled once at startup and shared across workers.
//! Template names end in `.html`, so Tera escapes every interpolated value.

use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use crate::domain::{AcquisitionChannel, FormState, Role, SignupForm};

const FORM_TEMPLATE: &str = "signup.html";
const SUCCESS_TEMPLATE: &str = "signup_success.html";

/// Failures raised while compiling or rendering templates.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A template failed to parse.
    #[error("failed to compile templates: {0}")]
    Compile(#[source] tera::Error),
    /// A template failed to render.
    #[error("failed to render {template}: {source}")]
    Render {
        /// Template being rendered.
        template: &'static str,
        /// Underlying Tera error.
        #[source]
        source: tera::Error,
    },
}

#[derive(Serialize)]
struct OptionView {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

// Password fields are never written back into the page.
#[derive(Default, Serialize)]
struct ValuesView<'a> {
    email: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    terms: bool,
}

/// Compiled signup templates.
#[derive(Debug)]
pub struct SignupViews {
    tera: Tera,
}

impl SignupViews {
    /// Compile the bundled templates.
    ///
    /// # Errors
    /// Returns [`ViewError::Compile`] when a template does not parse.
    pub fn new() -> Result<Self, ViewError> {
        let mut tera = Tera::default();
        tera.add_raw_templates([
            (FORM_TEMPLATE, include_str!("../../../templates/signup.html")),
            (
                SUCCESS_TEMPLATE,
                include_str!("../../../templates/signup_success.html"),
            ),
        ])
        .map_err(ViewError::Compile)?;
        Ok(Self { tera })
    }

    /// Render the form, pre-filled from `state` when the last attempt failed.
    ///
    /// # Errors
    /// Returns [`ViewError::Render`] when Tera cannot render the template.
    pub fn render_form(&self, state: &FormState) -> Result<String, ViewError> {
        let entered = state.entered_values();
        let values = entered.map_or_else(ValuesView::default, |form| ValuesView {
            email: &form.email,
            first_name: &form.first_name,
            last_name: &form.last_name,
            terms: form.terms,
        });
        let errors: Vec<String> = state.errors().iter().map(ToString::to_string).collect();

        let mut context = Context::new();
        context.insert("values", &values);
        context.insert("roles", &role_options(entered));
        context.insert("channels", &channel_options(entered));
        context.insert("errors", &errors);
        self.render(FORM_TEMPLATE, &context)
    }

    /// Render the confirmation page shown after a successful submission.
    ///
    /// # Errors
    /// Returns [`ViewError::Render`] when Tera cannot render the template.
    pub fn render_success(&self) -> Result<String, ViewError> {
        self.render(SUCCESS_TEMPLATE, &Context::new())
    }

    fn render(&self, template: &'static str, context: &Context) -> Result<String, ViewError> {
        self.tera
            .render(template, context)
            .map_err(|source| ViewError::Render { template, source })
    }
}

fn role_options(entered: Option<&SignupForm>) -> Vec<OptionView> {
    Role::ALL
        .iter()
        .map(|role| OptionView {
            value: role.as_str(),
            label: role.label(),
            selected: entered.is_some_and(|form| form.role == role.as_str()),
        })
        .collect()
}

fn channel_options(entered: Option<&SignupForm>) -> Vec<OptionView> {
    AcquisitionChannel::ALL
        .iter()
        .map(|channel| OptionView {
            value: channel.as_str(),
            label: channel.label(),
            selected: entered
                .is_some_and(|form| form.acquisition.iter().any(|v| v == channel.as_str())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn views() -> SignupViews {
        SignupViews::new().expect("templates compile")
    }

    #[rstest]
    fn idle_form_has_no_errors_or_values(views: SignupViews) {
        let html = views.render_form(&FormState::idle()).expect("render");
        assert!(html.contains(r#"name="confirm-password""#));
        assert!(html.contains(r#"<option value="founder">Founder</option>"#));
        assert!(!html.contains("form-errors"));
        assert!(!html.contains(" checked"));
    }

    #[rstest]
    fn failed_submission_is_prefilled(views: SignupViews) {
        let state = FormState::submit(SignupForm {
            email: "ann@example.com".to_owned(),
            password: "hunter22".to_owned(),
            confirm_password: "hunter23".to_owned(),
            first_name: "Ann".to_owned(),
            last_name: "Lee".to_owned(),
            role: "teacher".to_owned(),
            acquisition: vec!["friend".to_owned()],
            terms: true,
        });
        let html = views.render_form(&state).expect("render");

        assert!(html.contains("<li>Passwords must match.</li>"));
        assert!(html.contains(r#"value="ann@example.com""#));
        assert!(html.contains(r#"value="Lee""#));
        assert!(html.contains(r#"<option value="teacher" selected>Teacher</option>"#));
        assert!(html.contains(r#"value="friend" checked"#));
        assert!(html.contains(r#"name="terms" checked"#));
        assert!(!html.contains("hunter22"));
    }

    #[rstest]
    fn entered_values_are_escaped(views: SignupViews) {
        let state = FormState::submit(SignupForm {
            first_name: r#""><script>alert(1)</script>"#.to_owned(),
            ..SignupForm::default()
        });
        let html = views.render_form(&state).expect("render");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[rstest]
    fn success_page_renders(views: SignupViews) {
        let html = views.render_success().expect("render");
        assert!(html.contains("You're all set!"));
    }
}
