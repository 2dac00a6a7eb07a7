//! Tracing subscriber setup. Logs go to stderr; stdout is reserved for
//! response output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Global, LogFormat};
use crate::error::{ClientError, Result};

/// Install the global subscriber. `RUST_LOG` overrides `--stdout-level`.
pub fn init(global: &Global) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&global.stdout_level))
        .map_err(|e| ClientError::Config(format!("invalid log level: {}", e)))?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match global.stdout_format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(global.stdout_text_colors),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    installed.map_err(|e| ClientError::Config(e.to_string()))
}
