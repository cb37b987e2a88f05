//! Signup form validation service.
//!
//! The [`domain`] module owns the form record, the field validators and the
//! validation-and-submission handler. [`inbound::http`] exposes them as an
//! HTML form and a JSON endpoint on actix-web.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

pub use doc::ApiDoc;
pub use middleware::Trace;
