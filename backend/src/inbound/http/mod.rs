//! HTTP inbound adapter serving the signup form and its JSON counterpart.

pub mod error;
pub mod form_data;
pub mod signup;
pub mod views;

use actix_web::web;

pub use error::ApiResult;

/// Register the signup routes and the JSON extractor configuration.
///
/// The caller supplies [`views::SignupViews`] as app data.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use signup::inbound::http::{configure, views::SignupViews};
///
/// let views = web::Data::new(SignupViews::new().expect("templates compile"));
/// let _app = App::new().app_data(views).configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .service(signup::signup_page)
        .service(signup::submit_signup_form)
        .service(web::scope("/api/v1").service(signup::submit_signup));
}
