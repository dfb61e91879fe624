//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::{AppConfig, DataSource};
use crate::indicators::IndicatorError;
use crate::metrics::Metrics;
use crate::models::indicators::IndicatorSet;
use crate::models::signal::{TradeSignal, Verdict};
use crate::services::{
    HttpSymbolSource, MarketDataError, MarketDataProvider, SimulatedProvider, StaticSymbolSource,
    SymbolDirectory, SymbolSource, YahooProvider,
};
use crate::signals::{ScoringPolicy, SignalEngine};

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub provider: Arc<dyn MarketDataProvider>,
    pub symbols: Arc<SymbolDirectory>,
    pub history_limit: usize,
    pub default_policy: ScoringPolicy,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    #[error("Unknown scoring policy: {0}")]
    UnknownPolicy(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Indicator(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MarketData(MarketDataError::UnknownSymbol(_)) => StatusCode::NOT_FOUND,
            ApiError::MarketData(_) => StatusCode::BAD_GATEWAY,
            ApiError::UnknownPolicy(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Indicator(e) => e.kind(),
            ApiError::MarketData(e) => e.kind(),
            ApiError::UnknownPolicy(_) => "unknown_policy",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.to_string(),
            "kind": self.kind(),
        }));
        (status, body).into_response()
    }
}

pub async fn home() -> Json<Value> {
    Json(json!({ "status": "API working" }))
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": "trendcast",
        "data_source": state.provider.name(),
    }))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

async fn list_symbols(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let symbols = state.symbols.symbols().await.map_err(|e| {
        error!(error = %e, "Failed to load symbol list");
        ApiError::from(e)
    })?;
    Ok(Json(json!({
        "count": symbols.len(),
        "symbols": symbols,
    })))
}

#[derive(Debug, Deserialize)]
pub struct PredictQuery {
    policy: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub symbol: String,
    pub trend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<TradeSignal>,
    pub confidence_percent: f64,
    pub policy: String,
    #[serde(rename = "RSI")]
    pub rsi: f64,
    pub price: f64,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicators: Option<IndicatorSet>,
}

impl From<Verdict> for PredictResponse {
    fn from(verdict: Verdict) -> Self {
        let rsi = verdict
            .indicators
            .as_ref()
            .map(|i| round2(i.rsi.value))
            .unwrap_or_default();
        Self {
            symbol: verdict.symbol,
            trend: verdict.trend.as_str().to_string(),
            signal: verdict.signal,
            confidence_percent: round2(verdict.confidence),
            policy: verdict.policy,
            rsi,
            price: round2(verdict.price),
            time: verdict.timestamp.format("%d-%m-%Y %H:%M").to_string(),
            indicators: verdict.indicators,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fetch history for a symbol and score it
async fn predict(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(params): Query<PredictQuery>,
) -> Result<Json<PredictResponse>, ApiError> {
    let symbol = symbol.trim().to_uppercase();
    let policy = match params.policy.as_deref() {
        Some(raw) => ScoringPolicy::parse(raw).ok_or_else(|| ApiError::UnknownPolicy(raw.to_string()))?,
        None => state.default_policy,
    };

    let candles = state
        .provider
        .get_candles(&symbol, state.history_limit)
        .await
        .map_err(|e| {
            warn!(symbol = %symbol, provider = state.provider.name(), error = %e, "Failed to fetch candles");
            ApiError::from(e)
        })?;

    let verdict = SignalEngine::evaluate(&symbol, &candles, policy).map_err(|e| {
        warn!(symbol = %symbol, candles = candles.len(), error = %e, "Failed to evaluate {}", symbol);
        ApiError::from(e)
    })?;

    state
        .metrics
        .predictions_total
        .with_label_values(&[verdict.trend.as_str()])
        .inc();

    info!(
        symbol = %symbol,
        policy = policy.name(),
        trend = verdict.trend.as_str(),
        confidence = verdict.confidence,
        "Prediction served"
    );

    Ok(Json(verdict.into()))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/symbols", get(list_symbols))
        .route("/predict/{symbol}", get(predict))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Build shared state for the configured data source and symbol list
pub fn build_state(config: &AppConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);

    let provider: Arc<dyn MarketDataProvider> = match config.data_source {
        DataSource::Yahoo => Arc::new(YahooProvider::new(config.yahoo_base_url.clone())),
        DataSource::Simulated => Arc::new(SimulatedProvider::new()),
    };

    let source: Arc<dyn SymbolSource> = match &config.symbol_list_url {
        Some(url) => Arc::new(HttpSymbolSource::new(url.clone())),
        None => Arc::new(StaticSymbolSource::new(config.symbols.clone())),
    };

    Ok(AppState {
        metrics,
        start_time: Arc::new(Instant::now()),
        provider,
        symbols: Arc::new(SymbolDirectory::new(source, config.symbol_cache_ttl)),
        history_limit: config.history_limit,
        default_policy: config.default_policy,
    })
}

pub async fn start_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let port = config.port;
    let state = build_state(&config)?;
    info!(
        data_source = state.provider.name(),
        policy = config.default_policy.name(),
        history_limit = config.history_limit,
        "Prediction service configured"
    );

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
