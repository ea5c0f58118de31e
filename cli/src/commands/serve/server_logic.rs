//! # WaterWise HTTP Server Implementation
//!
//! File: cli/src/commands/serve/server_logic.rs
//!
//! ## Overview
//!
//! This module implements the HTTP API behind `waterwise serve`:
//!
//! | Method | Path    | Response                                              |
//! |--------|---------|-------------------------------------------------------|
//! | POST   | `/chat` | `{"reply": "<bot reply>"}` for `{"message": "<text>"}` |
//! | GET    | `/chat` | `{"message": "...only accepts POST requests..."}`     |
//! | GET    | `/`     | `{"status": "healthy", "message": "..."}`              |
//!
//! Every request is independent: `POST /chat` builds a fresh one-turn
//! conversation and shares nothing with other requests. Bodies that are not
//! valid `{"message": string}` JSON are rejected by axum's `Json` extractor
//! before the bot is consulted.
//!
//! ## Architecture
//!
//! The server implementation uses Axum and follows these steps:
//! 1. Build the router with CORS and request tracing middleware
//! 2. Bind the configured address
//! 3. Serve until Ctrl+C / SIGTERM, then shut down gracefully
//!
//! ## Examples
//!
//! ```rust,ignore
//! let config = config::load_and_merge_config(args)?;
//! server_logic::run_server(config).await?;
//! ```
//!
use super::config::ServerConfig;
use crate::bot::Conversation;
use crate::core::error::{Result, WaterwiseError};
use anyhow::Context;
use axum::{http::HeaderValue, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, error, info, Level};

pub const HEALTH_MESSAGE: &str = "WaterWise Bot API is running";
pub const POST_ONLY_MESSAGE: &str =
    "This endpoint only accepts POST requests. Please use POST method.";

/// Body of `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response of `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Response of `GET /chat`.
#[derive(Debug, Serialize)]
pub struct Notice {
    pub message: &'static str,
}

/// Response of `GET /`.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub message: &'static str,
}

/// # Run HTTP Server (`run_server`)
///
/// Binds the configured address, prints connection information and serves the
/// API until a shutdown signal arrives.
///
/// ## Errors
///
/// This function can return errors if:
/// - A configured CORS origin is not a valid header value.
/// - Binding the `TcpListener` fails (port in use, permissions).
/// - The Axum server encounters a fatal error.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let app = create_app(&config)?;
    let addr = SocketAddr::new(config.host, config.port);

    println!("Starting WaterWise Bot Backend...");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;
    let bound = listener
        .local_addr()
        .context("Failed to read bound address")?;

    println!("\n=================================================================");
    println!("💧 Local URL:         http://localhost:{}", bound.port());
    println!("⚙️  Binding to address: {}", bound);
    if config.enable_cors {
        println!("🔒 CORS origins:      {}", config.cors_origins.join(", "));
    } else {
        println!("🔒 CORS enabled:      false");
    }
    println!("=================================================================\n");
    println!("Press Ctrl+C to stop the server");

    info!("Starting server on {}", bound);
    serve_until(listener, app, shutdown_signal()).await?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Serves `app` on an already bound `listener` until `shutdown` resolves.
async fn serve_until<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;
    Ok(())
}

/// # Handle Shutdown Signal (`shutdown_signal`)
///
/// Resolves when Ctrl+C or (on Unix) SIGTERM is received. If a handler cannot
/// be installed, that branch stays pending so the other can still fire.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Create Axum Application (`create_app`)
///
/// Builds the router with the chat routes, request tracing and the CORS layer.
///
/// ## Errors
///
/// Returns `WaterwiseError::InvalidOrigin` if a configured origin cannot be
/// used as a header value.
pub fn create_app(config: &ServerConfig) -> Result<Router> {
    let cors_layer = cors_layer(config)?;

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Ok(Router::new()
        .route("/", get(health_check))
        .route("/chat", get(chat_get).post(chat_post))
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer) // Apply tracing first.
                .option_layer(cors_layer), // Then apply CORS, if enabled.
        ))
}

/// Builds the CORS layer from the configuration.
///
/// - disabled → no layer; preflight requests fall through to the router
/// - `*` among the origins → any origin, no credentials
/// - otherwise → the listed origins, with credentials, mirroring the
///   requested methods and headers
fn cors_layer(config: &ServerConfig) -> Result<Option<CorsLayer>> {
    if !config.enable_cors {
        info!("CORS middleware disabled.");
        return Ok(None);
    }

    if config.cors_origins.iter().any(|o| o == "*") {
        info!("CORS middleware enabled for any origin.");
        return Ok(Some(CorsLayer::permissive()));
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| WaterwiseError::InvalidOrigin {
                origin: origin.clone(),
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    info!("CORS middleware enabled for {:?}", config.cors_origins);
    Ok(Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request()),
    ))
}

async fn health_check() -> Json<Health> {
    Json(Health {
        status: "healthy",
        message: HEALTH_MESSAGE,
    })
}

async fn chat_get() -> Json<Notice> {
    Json(Notice {
        message: POST_ONLY_MESSAGE,
    })
}

async fn chat_post(Json(request): Json<ChatRequest>) -> Json<ChatReply> {
    debug!("Received chat message ({} bytes)", request.message.len());
    let reply = Conversation::new().exchange(&request.message);
    Json(ChatReply { reply })
}

// --- Unit Tests ---
