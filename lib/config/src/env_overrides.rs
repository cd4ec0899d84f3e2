use config::{builder::BuilderState, ConfigBuilder, ConfigError};
use envconfig::Envconfig;
use tracing::debug;

use crate::log::{LogFormat, LogLevel};

#[derive(Envconfig)]
pub struct EnvVarOverrides {
    // Logger overrides
    #[envconfig(from = "LOG_LEVEL")]
    pub log_level: Option<LogLevel>,
    #[envconfig(from = "LOG_FORMAT")]
    pub log_format: Option<LogFormat>,
    #[envconfig(from = "LOG_FILTER")]
    pub log_filter: Option<String>,

    // Listener overrides
    #[envconfig(from = "PORT")]
    pub http_port: Option<u64>,
    #[envconfig(from = "HOST")]
    pub http_host: Option<String>,
    #[envconfig(from = "DEBUG_PORT")]
    pub debug_port: Option<u64>,

    // Telemetry overrides
    #[envconfig(from = "TRACING_ENABLED")]
    pub tracing_enabled: Option<bool>,
    #[envconfig(from = "ZIPKIN_ENDPOINT")]
    pub zipkin_endpoint: Option<String>,

    // Upstream overrides
    #[envconfig(from = "UPSTREAM_URL")]
    pub upstream_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum EnvVarOverridesError {
    #[error("Failed to override configuration: {0}")]
    FailedToOverrideConfig(#[from] ConfigError),
}

impl EnvVarOverrides {
    pub fn apply_overrides<T: BuilderState>(
        mut self,
        mut config: ConfigBuilder<T>,
    ) -> Result<ConfigBuilder<T>, EnvVarOverridesError> {
        if let Some(log_level) = self.log_level.take() {
            debug!("[config-override] 'log.level' = {:?}", log_level);
            config = config.set_override("log.level", log_level.as_str())?;
        }
        if let Some(log_format) = self.log_format.take() {
            debug!("[config-override] 'log.format' = {:?}", log_format);
            config = config.set_override("log.format", log_format.as_str())?;
        }
        if let Some(log_filter) = self.log_filter.take() {
            debug!("[config-override] 'log.filter' = {:?}", log_filter);
            config = config.set_override("log.filter", log_filter)?;
        }

        if let Some(http_port) = self.http_port.take() {
            debug!("[config-override] 'http.port' = {}", http_port);
            config = config.set_override("http.port", http_port)?;
        }
        if let Some(http_host) = self.http_host.take() {
            debug!("[config-override] 'http.host' = {}", http_host);
            config = config.set_override("http.host", http_host)?;
        }
        if let Some(debug_port) = self.debug_port.take() {
            debug!("[config-override] 'debug.port' = {}", debug_port);
            config = config.set_override("debug.port", debug_port)?;
        }

        if let Some(enabled) = self.tracing_enabled.take() {
            debug!("[config-override] 'telemetry.tracing.enabled' = {}", enabled);
            config = config.set_override("telemetry.tracing.enabled", enabled)?;
        }
        if let Some(zipkin_endpoint) = self.zipkin_endpoint.take() {
            debug!(
                "[config-override] 'telemetry.tracing.zipkin.endpoint' = {}",
                zipkin_endpoint
            );
            config = config.set_override("telemetry.tracing.zipkin.endpoint", zipkin_endpoint)?;
        }

        if let Some(upstream_url) = self.upstream_url.take() {
            debug!("[config-override] 'upstream.*.url' = {}", upstream_url);
            config = config.set_override("upstream.user.url", upstream_url.as_str())?;
            config = config.set_override("upstream.user_name.url", upstream_url)?;
        }

        Ok(config)
    }
}
