use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing for the CLI.
///
/// Log level resolution: `RUST_LOG` when set, otherwise `default_level`.
/// Output goes to stderr so shopping-list output on stdout stays clean for
/// piping.
pub fn init_observability(default_level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(env_filter),
        )
        .try_init()?;

    Ok(())
}
