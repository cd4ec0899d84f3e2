use std::sync::Arc;

use reqwest::Client;
use tracing::{debug, Instrument};
use traced_graphql_config::upstream::UpstreamConfig;
use traced_graphql_internal::telemetry::{spans::resolver::ResolverSpan, TelemetryContext};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ResolverInitError {
    #[error("upstream url '{0}' must use http or https")]
    UnsupportedUpstreamScheme(Url),
    #[error("failed to build the upstream HTTP client: {0}")]
    ClientBuildError(reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

struct UpstreamEndpoints {
    user: Url,
    user_name: Url,
}

/// Resolution logic of the `user` and `userName` fields.
///
/// Each call performs one GET against its upstream inside a resolver span; only
/// transport failures are errors, the response itself is discarded.
#[derive(Clone)]
pub struct FieldResolvers {
    client: Client,
    endpoints: Arc<UpstreamEndpoints>,
    telemetry_context: TelemetryContext,
}

impl FieldResolvers {
    pub fn try_new(
        config: &UpstreamConfig,
        telemetry_context: TelemetryContext,
    ) -> Result<Self, ResolverInitError> {
        let user = validate_upstream_url(&config.user.url)?;
        let user_name = validate_upstream_url(&config.user_name.url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ResolverInitError::ClientBuildError)?;

        Ok(Self {
            client,
            endpoints: Arc::new(UpstreamEndpoints { user, user_name }),
            telemetry_context,
        })
    }

    pub async fn user(&self, id: &str) -> Result<String, ResolverError> {
        self.get("user", &self.endpoints.user).await?;

        Ok(format!("id:{}", id))
    }

    pub async fn user_name(&self, source: &str) -> Result<String, ResolverError> {
        self.get("userName", &self.endpoints.user_name).await?;

        Ok(format!("name:{}", source))
    }

    async fn get(&self, field: &str, url: &Url) -> Result<(), ResolverError> {
        // Must be created before awaiting anything, so the current request span becomes its parent.
        let span = ResolverSpan::new(field, url);

        async {
            let mut headers = http::HeaderMap::new();
            self.telemetry_context.inject_context(&span.span, &mut headers);

            match self.client.get(url.clone()).headers(headers).send().await {
                Ok(response) => {
                    debug!(field, status = response.status().as_u16(), "upstream responded");
                    span.record_response(response.status().as_u16());
                    Ok(())
                }
                Err(err) => {
                    span.record_error(&err);
                    Err(ResolverError::Transport(err))
                }
            }
        }
        .instrument(span.span.clone())
        .await
    }
}

fn validate_upstream_url(url: &Url) -> Result<Url, ResolverInitError> {
    match url.scheme() {
        "http" | "https" => Ok(url.clone()),
        _ => Err(ResolverInitError::UnsupportedUpstreamScheme(url.clone())),
    }
}
