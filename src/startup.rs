//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use crate::application::services::Services;
use crate::config::{CorsSettings, Settings};
use crate::infrastructure::database;
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    /// Present when the services run over PostgreSQL; used by readiness.
    pub db: Option<PgPool>,
}

impl AppState {
    pub fn new(services: Services, db: Option<PgPool>) -> Self {
        Self { services, db }
    }
}

/// Build the full router: API routes with tracing, metrics and CORS.
pub fn build_router(state: AppState, cors: &CorsSettings) -> Router {
    routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(create_trace_layer())
            .layer(create_cors_layer(cors)),
    )
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings, backed by PostgreSQL.
    pub async fn build(settings: Settings) -> Result<Self> {
        let db = database::connect_with_retry(&settings.database).await?;

        if settings.database.run_migrations {
            database::run_migrations(&db).await?;
            tracing::info!("Database migrations applied");
        }

        let services = Services::postgres(db.clone());
        Self::serve(settings, AppState::new(services, Some(db))).await
    }

    /// Build the application over already composed services.
    pub async fn build_with_services(settings: Settings, services: Services) -> Result<Self> {
        Self::serve(settings, AppState::new(services, None)).await
    }

    async fn serve(settings: Settings, state: AppState) -> Result<Self> {
        health::init_server_start();
        let router = build_router(state, &settings.cors);

        let addr = settings.server.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until SIGINT or SIGTERM.
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Server stopped");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutdown signal received, draining connections");
}
