use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directives when `RUST_LOG` is unset. goose records arrive through
/// the `log` bridge under the `goose` target, so its verbosity is set here.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "weather_loadtest=debug,goose=info"
    } else {
        "weather_loadtest=info,goose=warn"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Installs the global subscriber together with the `log` bridge.
///
/// goose's own terminal logger (simplelog) is never installed once the bridge
/// owns the `log` facade: goose reports the failed install at info level and
/// its records are printed by this subscriber instead.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// JSON lines variant for runs collected by a log shipper.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
