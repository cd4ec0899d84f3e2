use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DebugServerConfig {
    /// The host address to bind the debug listener to.
    #[serde(default = "debug_server_host_default")]
    host: String,

    /// The port to bind the debug listener to. Must differ from `http.port`.
    ///
    /// Can also be set via the `DEBUG_PORT` environment variable.
    #[serde(default = "debug_server_port_default")]
    port: u16,
}

impl Default for DebugServerConfig {
    fn default() -> Self {
        Self {
            host: debug_server_host_default(),
            port: debug_server_port_default(),
        }
    }
}

fn debug_server_host_default() -> String {
    "0.0.0.0".to_string()
}

fn debug_server_port_default() -> u16 {
    6060
}

impl DebugServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
