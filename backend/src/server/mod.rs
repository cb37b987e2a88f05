//! Server construction and middleware wiring.

mod config;

pub use config::ServerSettings;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use thiserror::Error;
use tracing::info;

use signup::Trace;
#[cfg(debug_assertions)]
use signup::doc::ApiDoc;
use signup::inbound::http::configure;
use signup::inbound::http::views::{SignupViews, ViewError};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Failures raised while starting the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Bundled templates failed to compile.
    #[error(transparent)]
    Views(#[from] ViewError),
    /// The listener could not bind.
    #[error("failed to bind {host}:{port}: {source}")]
    Bind {
        /// Requested interface.
        host: String,
        /// Requested port.
        port: u16,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

fn build_app(
    views: web::Data<SignupViews>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new().app_data(views).wrap(Trace).configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the HTTP server described by `settings`.
///
/// # Errors
/// Returns [`ServerError`] when templates fail to compile or the socket
/// cannot be bound.
pub fn create_server(settings: &ServerSettings) -> Result<Server, ServerError> {
    let views = web::Data::new(SignupViews::new()?);
    let host = settings.host().to_owned();
    let port = settings.port();

    let server = HttpServer::new(move || build_app(views.clone()))
        .bind((host.as_str(), port))
        .map_err(|source| ServerError::Bind {
            host: host.clone(),
            port,
            source,
        })?
        .run();

    info!(%host, port, "signup server listening");
    Ok(server)
}
