//!
//! Setup logging subsystem.
//!

use error_stack::ResultExt;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::config;

/// Keeps the non-blocking log writers alive; logs are flushed when it is dropped.
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

/// Failure to install the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Filtering directive in the config could not be parsed.
    #[error("Invalid log filtering directive")]
    InvalidDirective,
    /// A global subscriber was already installed.
    #[error("Failed to install the global log subscriber")]
    SubscriberInit,
}

///
/// Setup logging sub-system specifying.
/// Expects config and list of names of crates to watch.
///
pub fn setup<Str: AsRef<str>>(
    conf: &config::Log,
    service_name: &str,
    crates_to_watch: Vec<Str>,
) -> error_stack::Result<TelemetryGuard, LoggerError> {
    let mut guards = Vec::new();

    // `RUST_LOG` takes precedence over the configured directive
    let directive = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|directive| !directive.trim().is_empty())
        .or_else(|| conf.console.filtering_directive.clone());
    let env_filter = EnvFilter::builder()
        .with_default_directive(conf.console.level.into_level().into())
        .parse(directive.as_deref().unwrap_or_default())
        .change_context(LoggerError::InvalidDirective)
        .attach_printable_lazy(|| format!("directive: {directive:?}"))?;

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if conf.console.enabled {
        let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);

        let level = conf.console.level.into_level();
        let mut console_filter = filter::Targets::new().with_default(tracing::Level::WARN);
        for acrate in crates_to_watch {
            console_filter = console_filter.with_target(acrate.as_ref(), level);
        }

        match conf.console.log_format {
            config::LogFormat::Default => {
                let logging_layer = fmt::layer()
                    .with_timer(fmt::time::uptime())
                    .with_span_events(fmt::format::FmtSpan::CLOSE)
                    .pretty()
                    .with_writer(console_writer);

                subscriber
                    .with(logging_layer.with_filter(console_filter))
                    .try_init()
                    .change_context(LoggerError::SubscriberInit)?;
            }
            config::LogFormat::Json => {
                let logging_layer = fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(console_writer);

                subscriber
                    .with(logging_layer.with_filter(console_filter))
                    .try_init()
                    .change_context(LoggerError::SubscriberInit)?;
            }
        }
    } else {
        subscriber
            .try_init()
            .change_context(LoggerError::SubscriberInit)?;
    };

    tracing::debug!(service = service_name, "logger initialized");

    // Returning the WorkerGuard for logs to be printed until it is dropped
    Ok(TelemetryGuard {
        _log_guards: guards,
    })
}
