pub mod error;
mod http_utils;
pub mod pipeline;
pub mod schema;
pub mod service;
mod shared_state;
mod telemetry;

use std::sync::Arc;

use ntex::web::{self, HttpRequest};
use tokio::sync::mpsc;
use tracing::{error, info};
use traced_graphql_config::{http_server::HttpServerConfig, load_config, ServiceConfig};
use traced_graphql_internal::telemetry::TelemetryContext;

pub use crate::{error::ServiceInitError, shared_state::SharedState};

use crate::{
    http_utils::{metrics::metrics_handler, probes::health_check_handler},
    pipeline::{
        endpoint::{compose, GraphqlEndpoint, ServiceEndpoint},
        graphql_request_handler,
        middleware::{logging::LoggingMiddleware, trace_server::TraceServer},
    },
    schema::{build_schema, resolver::FieldResolvers},
    service::{
        executor::SchemaService,
        instrumenting::{InstrumentingService, ServiceMetrics},
        logging::LoggingService,
        GraphQLService,
    },
};

static SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Terminal outcome of one of the long-lived tasks.
#[derive(Debug, thiserror::Error)]
enum Termination {
    #[error("interrupt")]
    Interrupted,
    #[error("signal listener failed: {0}")]
    SignalListenerFailed(std::io::Error),
    #[error("{0} listener stopped")]
    ListenerStopped(&'static str),
    #[error("{0} listener failed: {1}")]
    ListenerFailed(&'static str, std::io::Error),
}

async fn graphql_endpoint_handler(
    request: HttpRequest,
    shared_state: web::types::State<Arc<SharedState>>,
) -> impl web::Responder {
    graphql_request_handler(&request, shared_state.get_ref()).await
}

pub async fn server_entrypoint() -> Result<(), ServiceInitError> {
    let config_path = std::env::var("SERVICE_CONFIG_FILE_PATH").ok();
    let service_config = load_config(config_path)?;
    let telemetry = telemetry::init(&service_config)?;
    info!("traced-graphql@{} starting...", SERVICE_VERSION);

    let result = run_listeners(service_config).await;
    if let Err(err) = &result {
        error!(error = %err, "failed to start");
    }

    telemetry.graceful_shutdown().await;

    result
}

/// Starts the signal, debug and main listeners and returns once the first of them terminates.
async fn run_listeners(service_config: ServiceConfig) -> Result<(), ServiceInitError> {
    let shared_state = configure_app_from_config(service_config)?;
    let http_config = &shared_state.config.http;
    let debug_config = &shared_state.config.debug;

    let main_state = shared_state.clone();
    let main_server = web::HttpServer::new(move || {
        let state = main_state.clone();
        async move {
            web::App::new()
                .state(state.clone())
                .configure(move |service_config| configure_ntex_app(service_config, &state.config.http))
        }
    })
    .disable_signals()
    .bind(http_config.address())
    .map_err(|err| ServiceInitError::HttpServerBindError("main", http_config.address(), err))?;

    let metrics = shared_state.metrics.clone();
    let debug_server = web::HttpServer::new(move || {
        let metrics = metrics.clone();
        async move {
            web::App::new()
                .state(metrics.clone())
                .configure(configure_debug_app)
        }
    })
    .workers(1)
    .disable_signals()
    .bind(debug_config.address())
    .map_err(|err| ServiceInitError::HttpServerBindError("debug", debug_config.address(), err))?;

    // Both addresses are bound before either listener starts accepting.
    let main_server = main_server.run();
    let debug_server = debug_server.run();

    let (completion_tx, mut completion_rx) = mpsc::channel::<Termination>(3);

    let signal_tx = completion_tx.clone();
    ntex::rt::spawn(async move {
        let termination = match tokio::signal::ctrl_c().await {
            Ok(()) => Termination::Interrupted,
            Err(err) => Termination::SignalListenerFailed(err),
        };
        let _ = signal_tx.send(termination).await;
    });

    info!(transport = "debug", address = %debug_config.address(), "listening");
    let debug_tx = completion_tx.clone();
    let debug_handle = debug_server.clone();
    ntex::rt::spawn(async move {
        let termination = match debug_handle.await {
            Ok(()) => Termination::ListenerStopped("debug"),
            Err(err) => Termination::ListenerFailed("debug", err),
        };
        let _ = debug_tx.send(termination).await;
    });

    info!(transport = "http", address = %http_config.address(), "listening");
    let main_tx = completion_tx;
    let main_handle = main_server.clone();
    ntex::rt::spawn(async move {
        let termination = match main_handle.await {
            Ok(()) => Termination::ListenerStopped("http"),
            Err(err) => Termination::ListenerFailed("http", err),
        };
        let _ = main_tx.send(termination).await;
    });

    match completion_rx.recv().await {
        Some(termination) => info!(terminated = %termination),
        None => info!(terminated = "all listeners closed"),
    }

    // In-flight requests are not drained.
    main_server.stop(false).await;
    debug_server.stop(false).await;

    Ok(())
}

/// Builds the schema, the service chain and the endpoint chain.
pub fn configure_app_from_config(
    service_config: ServiceConfig,
) -> Result<Arc<SharedState>, ServiceInitError> {
    let telemetry_context =
        TelemetryContext::from_propagation_config(&service_config.telemetry.tracing.propagation);

    let resolvers = FieldResolvers::try_new(&service_config.upstream, telemetry_context.clone())?;
    let schema = build_schema(resolvers);
    let metrics = Arc::new(ServiceMetrics::new()?);

    let service: Arc<dyn GraphQLService> = Arc::new(SchemaService::new(schema));
    let service: Arc<dyn GraphQLService> = Arc::new(LoggingService::new(service));
    let service: Arc<dyn GraphQLService> =
        Arc::new(InstrumentingService::new(service, metrics.clone()));

    let core: GraphqlEndpoint = Arc::new(ServiceEndpoint::new(service));
    let endpoint = compose(
        core,
        &[&TraceServer::new("Graphql"), &LoggingMiddleware::new("Graphql")],
    );

    Ok(Arc::new(SharedState {
        config: Arc::new(service_config),
        endpoint,
        telemetry_context,
        metrics,
    }))
}

pub fn configure_ntex_app(service_config: &mut web::ServiceConfig, http_config: &HttpServerConfig) {
    service_config.route(
        &http_config.graphql_endpoint,
        web::to(graphql_endpoint_handler),
    );
}

pub fn configure_debug_app(service_config: &mut web::ServiceConfig) {
    service_config
        .route("/debug/metrics", web::get().to(metrics_handler))
        .route("/debug/health", web::to(health_check_handler));
}
