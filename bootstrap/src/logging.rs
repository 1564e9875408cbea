use crate::args::CommonArgs;
use sentry::ClientInitGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs the tracing subscriber, reporting to Sentry when a DSN is set.
/// The returned guard flushes pending events when dropped.
pub fn init(common_args: &CommonArgs) -> Option<ClientInitGuard> {
    let CommonArgs {
        sentry_dsn,
        sentry_environment,
        sentry_sample_rate,
        sentry_traces_sample_rate,
    } = common_args;

    let guard = sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                environment: sentry_environment.clone().map(Into::into),
                sample_rate: sentry_sample_rate.unwrap_or(1.0),
                traces_sample_rate: sentry_traces_sample_rate.unwrap_or(0.0),
                ..Default::default()
            },
        ))
    });

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,serenity=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(guard.as_ref().map(|_| sentry_tracing::layer()))
        .init();

    guard
}
