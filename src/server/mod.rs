mod handlers;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{prelude::*, state::AppState};

/// API routes without rate limiting, which needs peer addresses
pub fn router(app: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(handlers::health))
    .route("/api/health", get(handlers::health))
    .route("/api/builds", get(handlers::list).post(handlers::create))
    .route(
      "/api/builds/{id}",
      get(handlers::get).put(handlers::update).delete(handlers::delete),
    )
    .layer(
      ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
        CorsLayer::new()
          .allow_origin(Any)
          .allow_methods(Any)
          .allow_headers(Any),
      ),
    )
    .with_state(app)
}

pub async fn serve(app: Arc<AppState>) -> anyhow::Result<()> {
  let config = &app.config;

  let governor_conf = Arc::new(
    GovernorConfigBuilder::default()
      .per_second(config.rate_period_secs)
      .burst_size(config.rate_burst)
      .finish()
      .context("Failed to build rate limiter config")?,
  );

  let limiter = governor_conf.limiter().clone();
  let addr = SocketAddr::new(config.host, config.port);

  let router = router(app.clone())
    .layer(GovernorLayer::new(governor_conf))
    .into_make_service_with_connect_info::<SocketAddr>();

  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .with_context(|| format!("Failed to bind {addr}"))?;
  info!("HTTP server listening on {addr}");

  let limiter = async {
    loop {
      tokio::time::sleep(Duration::from_secs(60)).await;
      limiter.retain_recent();
    }
  };

  let server = async {
    axum::serve(listener, router)
      .with_graceful_shutdown(shutdown_signal())
      .await
      .context("Axum server error")
  };

  tokio::select! {
    result = server => {
      match &result {
        Ok(_) => info!("Server stopped gracefully"),
        Err(err) => error!("Server stopped with error: {err}"),
      }
      result
    }
    _ = limiter => {
      error!("Rate limiter cleaner stopped unexpectedly!");
      Ok(())
    }
  }
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(err) = tokio::signal::ctrl_c().await {
      error!("Failed to listen for Ctrl-C: {err}");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(err) => {
        error!("Failed to install SIGTERM handler: {err}");
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

  warn!("Shutdown signal received");
}
