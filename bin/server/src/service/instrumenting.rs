use std::{sync::Arc, time::Instant};

use async_trait::async_trait;
use prometheus::{Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder};

use crate::{
    pipeline::context::RequestContext,
    service::{GraphQLService, QueryResult},
};

/// Request metrics rendered by the debug listener.
pub struct ServiceMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration: Histogram,
}

impl ServiceMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new("graphql_requests_total", "Number of executed GraphQL queries"),
            &["outcome"],
        )?;
        let request_duration = Histogram::with_opts(HistogramOpts::new(
            "graphql_request_duration_seconds",
            "Time spent executing GraphQL queries",
        ))?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration,
        })
    }

    pub fn observe(&self, result: &QueryResult, seconds: f64) {
        let outcome = if result.has_errors() { "error" } else { "ok" };
        self.requests_total.with_label_values(&[outcome]).inc();
        self.request_duration.observe(seconds);
    }

    /// Prometheus text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}

pub struct InstrumentingService {
    inner: Arc<dyn GraphQLService>,
    metrics: Arc<ServiceMetrics>,
}

impl InstrumentingService {
    pub fn new(inner: Arc<dyn GraphQLService>, metrics: Arc<ServiceMetrics>) -> Self {
        Self { inner, metrics }
    }
}

#[async_trait]
impl GraphQLService for InstrumentingService {
    async fn execute(&self, ctx: &RequestContext, query: &str) -> QueryResult {
        let started = Instant::now();
        let result = self.inner.execute(ctx, query).await;
        self.metrics
            .observe(&result, started.elapsed().as_secs_f64());

        result
    }
}
