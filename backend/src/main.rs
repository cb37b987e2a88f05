//! Signup server entry-point: loads settings, initialises tracing and serves
//! the signup form.

mod server;

use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerSettings, create_server};

fn init_tracing(pretty: bool) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = if pretty {
        builder.try_init()
    } else {
        builder.json().try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings =
        ServerSettings::load().map_err(|e| std::io::Error::other(format!("invalid settings: {e}")))?;
    init_tracing(settings.pretty_logs);

    let server = create_server(&settings).map_err(|e| {
        error!(error = %e, "server startup failed");
        std::io::Error::other(e)
    })?;
    server.await
}
