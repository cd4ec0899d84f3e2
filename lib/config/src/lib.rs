pub mod debug_server;
mod env_overrides;
pub mod http_server;
pub mod log;
pub mod telemetry;
pub mod upstream;

use config::{Config, File, FileFormat, FileSourceFile};
use envconfig::Envconfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

use crate::{
    debug_server::DebugServerConfig,
    env_overrides::{EnvVarOverrides, EnvVarOverridesError},
    http_server::HttpServerConfig,
    log::LoggingConfig,
    telemetry::TelemetryConfig,
    upstream::UpstreamConfig,
};

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// The service logger configuration.
    ///
    /// Logs are written to stderr, one record per line.
    #[serde(default)]
    pub log: LoggingConfig,

    /// Configuration for the main HTTP listener serving the GraphQL endpoint.
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Configuration for the debug HTTP listener (metrics and health).
    #[serde(default)]
    pub debug: DebugServerConfig,

    /// Tracing and exporter configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Upstream endpoints called by the field resolvers.
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceConfigError {
    #[error("Failed to load configuration: {0}")]
    ConfigLoadError(#[from] config::ConfigError),
    #[error("Failed to apply configuration overrides: {0}")]
    EnvVarOverridesError(#[from] EnvVarOverridesError),
    #[error("Failed to load the environment variables: {0}")]
    EnvVarLoadError(#[from] envconfig::Error),
    #[error("Failed to parse the configuration file path: {0}")]
    ConfigPathParseError(Infallible),
}

static DEFAULT_FILE_NAMES: &[&str] = &[
    "service.config.yaml",
    "service.config.yml",
    "service.config.json",
];

/// Loads the configuration from the given file (or the default file names in the
/// working directory, all optional) and applies environment variable overrides on top.
pub fn load_config(override_config_path: Option<String>) -> Result<ServiceConfig, ServiceConfigError> {
    let env_overrides = EnvVarOverrides::init_from_env()?;
    let mut config = Config::builder();

    if let Some(path_str) = override_config_path {
        let path_buf = path_str
            .parse::<std::path::PathBuf>()
            .map_err(ServiceConfigError::ConfigPathParseError)?;
        let as_file: File<FileSourceFile, _> = path_buf.into();

        config = config.add_source(as_file.required(true));
    } else {
        for name in DEFAULT_FILE_NAMES {
            config = config.add_source(File::with_name(name).required(false));
        }
    }

    config = env_overrides.apply_overrides(config)?;

    Ok(config.build()?.try_deserialize::<ServiceConfig>()?)
}

pub fn parse_yaml_config(config_raw: &str) -> Result<ServiceConfig, ServiceConfigError> {
    Config::builder()
        .add_source(File::from_str(config_raw, FileFormat::Yaml))
        .build()?
        .try_deserialize::<ServiceConfig>()
        .map_err(ServiceConfigError::ConfigLoadError)
}
