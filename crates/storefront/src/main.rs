//! Driftwood Storefront - Public e-commerce site.
//!
//! This binary serves the public-facing storefront on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with Askama templates for server-side rendering
//! - Klarna Checkout for payment: carts are synchronized to gateway
//!   checkout orders and the confirmation page embeds the
//!   gateway-rendered confirmation snippet
//! - Commerce platform collaborators (persistence, totals, shipping
//!   catalog, payment methods) behind trait ports; this binary wires the
//!   in-memory implementations

#![cfg_attr(not(test), forbid(unsafe_code))]
// The binary compiles the module tree alongside the library; API surface
// only reachable through the library shows up as dead code here.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::Arc;

use axum::{Router, routing::get};

mod checkout;
mod commerce;
mod config;
mod error;
mod klarna;
mod routes;
mod state;

use commerce::memory::{
    InMemoryOrderRepository, InMemoryPaymentMethods, InMemoryShippingMethods,
    StandardTotalsCalculator,
};
use config::StorefrontConfig;
use sentry::integrations::tracing as sentry_tracing;
use state::{AppState, CommercePorts};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "driftwood_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    // Wire the in-memory commerce collaborators. A production deployment
    // replaces these with storage-backed implementations.
    let repository = Arc::new(InMemoryOrderRepository::new());
    let commerce = CommercePorts {
        totals: Arc::new(StandardTotalsCalculator),
        orders: repository.clone(),
        cart_search: repository,
        shipping: Arc::new(InMemoryShippingMethods::new()),
        payment_methods: Arc::new(InMemoryPaymentMethods::new()),
    };

    // Build application state
    let state = AppState::new(
        config.clone(),
        commerce,
        Arc::new(checkout::RestConnectionFactory),
    );

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
