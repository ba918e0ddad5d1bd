mod app;
mod config;
mod error;
mod logging;
mod transport;
mod ui;

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;
    let _log_guard = logging::init(&config)?;
    tracing::info!(date_format = %config.date_format, "starting periodo");

    let mut app = app::App::new(config, Box::new(transport::LogTransport));
    app.run()?;

    tracing::info!("bye");
    Ok(())
}
