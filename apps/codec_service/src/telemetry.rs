use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

use crate::app_config::AppEnvironment;

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing(environment: AppEnvironment) -> Result<(), SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber_builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE);

    match environment {
        AppEnvironment::Dev => tracing::subscriber::set_global_default(
            subscriber_builder.compact().pretty().with_ansi(true).finish(),
        ),
        AppEnvironment::Prod => tracing::subscriber::set_global_default(
            subscriber_builder.json().with_ansi(false).finish(),
        ),
    }
}
