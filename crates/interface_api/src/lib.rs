//! HTTP API Layer
//!
//! This crate provides the REST API for the rebalancing system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for holdings, portfolio, plans and prices
//! - **Middleware**: Request ids, tracing, request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::in_memory(config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
    middleware as axum_middleware,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_portfolio::{InMemoryHoldingStore, InMemoryPriceFeed, InvestmentService};

use crate::config::ApiConfig;
use crate::middleware::request_log_middleware;
use crate::handlers::{health, holdings, plans, portfolio, prices};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<InvestmentService>,
    pub prices: Arc<InMemoryPriceFeed>,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires the service to empty in-memory adapters
    pub fn in_memory(config: ApiConfig) -> Self {
        let store = Arc::new(InMemoryHoldingStore::new());
        let prices = Arc::new(InMemoryPriceFeed::new());
        let service = InvestmentService::new(store, prices.clone())
            .with_strategy(config.default_strategy.build());

        Self {
            service: Arc::new(service),
            prices,
            config,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Service, price feed and configuration shared by handlers
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Holding routes
    let holding_routes = Router::new()
        .route("/", get(holdings::list_holdings).post(holdings::create_holding))
        .route(
            "/:id",
            get(holdings::get_holding)
                .put(holdings::update_holding)
                .delete(holdings::delete_holding),
        );

    // Portfolio routes
    let portfolio_routes = Router::new()
        .route("/summary", get(portfolio::get_summary))
        .route("/current-amounts", put(portfolio::revise_current_amounts));

    // Plan routes
    let plan_routes = Router::new()
        .route("/quote", post(plans::quote))
        .route("/commit", post(plans::commit));

    // Price routes
    let price_routes = Router::new().route("/:ticker", put(prices::record_price));

    let api_routes = Router::new()
        .nest("/holdings", holding_routes)
        .nest("/portfolio", portfolio_routes)
        .nest("/plans", plan_routes)
        .nest("/prices", price_routes)
        .layer(axum_middleware::from_fn(request_log_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
