use mnema_config::LogFormat;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str =
    "mnema_server=info,mnema_core=info,mnema_generator=info,tower_http=info";

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
///
/// Logs go to stderr so `hint` output on stdout stays machine readable.
pub fn init(format: &LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    if let Err(e) = installed {
        eprintln!("failed to install tracing subscriber: {e}");
    }
}
