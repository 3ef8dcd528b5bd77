use avatar_widget::logger::*;
use avatar_widget::settings::parse_settings;

// Manual check of filter reloading:
// $ RUST_LOG=warn cargo run --bin logger_demo
fn main() -> anyhow::Result<()> {
    let logger = Logger::new_bootstrap();
    debug!("bootstrap: hidden unless RUST_LOG allows debug");
    info!("bootstrap: avatar widget starting");

    let settings = parse_settings(None)?;
    logger.reload_from_config(&LogConfig::from(&settings.log))?;
    trace!(container = %settings.view.container, "settings filter applied");
    debug!(backend = %settings.source.backend, "avatar source selected");
    info!("application info log");

    Ok(())
}
