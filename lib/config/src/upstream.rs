use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

/// Endpoints called by the field resolvers before producing their values.
/// Only the success of the call matters, its response is discarded.
#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields)]
pub struct UpstreamConfig {
    /// Called by the `Query.user` resolver.
    ///
    /// Can also be set via the `UPSTREAM_URL` environment variable, which sets both endpoints.
    #[serde(default)]
    pub user: UpstreamEndpointConfig,
    /// Called by the `User.name` resolver.
    #[serde(default)]
    pub user_name: UpstreamEndpointConfig,
    /// Total timeout of a single upstream call. No timeout is applied when unset.
    #[serde(
        default,
        deserialize_with = "humantime_serde::deserialize",
        serialize_with = "humantime_serde::serialize"
    )]
    #[schemars(with = "Option<String>")]
    pub timeout: Option<Duration>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            user: UpstreamEndpointConfig::default(),
            user_name: UpstreamEndpointConfig::default(),
            timeout: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields)]
pub struct UpstreamEndpointConfig {
    #[serde(default = "default_upstream_url")]
    pub url: Url,
}

impl Default for UpstreamEndpointConfig {
    fn default() -> Self {
        Self {
            url: default_upstream_url(),
        }
    }
}

fn default_upstream_url() -> Url {
    Url::parse("http://yandex.ru").expect("default upstream url is valid")
}
