//! Logging setup.
use miette::{IntoDiagnostic, WrapErr};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{self, Format};

/// Installs the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the configured filter. Fails if a subscriber is already
/// installed, which happens when the client reloads the plugin.
pub fn try_init(tracing: &config::TracingConfig) -> miette::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&tracing.filter));
    let base = tracing_subscriber::registry().with(filter);
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    match tracing.format {
        Format::Json => base.with(layer.json()).try_init(),
        Format::Pretty => base.with(layer.pretty()).try_init(),
        Format::Compact => base.with(layer.compact()).try_init(),
    }
    .into_diagnostic()
    .wrap_err("could not init registry")?;

    info!(format = ?tracing.format, "tracing initialized");

    Ok(())
}
