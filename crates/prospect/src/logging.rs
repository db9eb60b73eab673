use tracing_subscriber::EnvFilter;

/// Initialize tracing to stderr so stdout stays reserved for JSON results.
///
/// `RUST_LOG` takes precedence over the `--log-level` flag when set.
pub fn init_logging(log_level: &str) -> color_eyre::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| color_eyre::eyre::eyre!("failed to initialize logging: {err}"))?;

    Ok(())
}
