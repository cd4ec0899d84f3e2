use tracing_subscriber::{filter::ParseError, EnvFilter, Layer};

static INTERNAL_CRATES: &[&str] = &[
    "ntex_server",
    "ntex_rt",
    "ntex_service",
    "ntex_net",
    "ntex_io",
    "ntex_h2",
    "ntex",
    "hyper_util",
    "hyper",
    "reqwest",
    "rustls",
    "opentelemetry_sdk",
    "opentelemetry_zipkin",
];

/// Creates the filter for service logs. Unless `internals` is set, records from
/// the HTTP and telemetry framework crates are dropped regardless of `directives`.
pub fn create_env_filter(directives: &str, internals: bool) -> Result<EnvFilter, ParseError> {
    let mut filter = EnvFilter::try_new(directives)?;

    if !internals {
        for crate_name in INTERNAL_CRATES {
            filter = filter.add_directive(format!("{}=off", crate_name).parse()?);
        }
    }

    Ok(filter)
}

pub type DynLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;
