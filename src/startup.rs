//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{LoanApplicationService, LoanApplicationServiceImpl};
use crate::config::{CorsSettings, Settings, StorageBackend};
use crate::domain::LoanApplicationRepository;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    InMemoryLoanApplicationRepository, PgLoanApplicationRepository,
};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};
use crate::shared::clock::{Clock, SystemClock};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub loans: Arc<dyn LoanApplicationService>,
    pub repository: Arc<dyn LoanApplicationRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn LoanApplicationRepository>) -> Self {
        Self::with_clock(repository, Arc::new(SystemClock))
    }

    pub fn with_clock(repository: Arc<dyn LoanApplicationRepository>, clock: Arc<dyn Clock>) -> Self {
        let loans = Arc::new(LoanApplicationServiceImpl::with_clock(
            repository.clone(),
            clock,
        ));
        Self { loans, repository }
    }
}

/// Build the router with its middleware stack
pub fn build_router(state: AppState, cors: &CorsSettings) -> Router {
    routes::create_router(state)
        .layer(create_trace_layer())
        .layer(create_cors_layer(cors))
}

/// Open the configured storage backend
async fn connect_storage(settings: &Settings) -> Result<Arc<dyn LoanApplicationRepository>> {
    match settings.storage.backend {
        StorageBackend::Postgres => {
            let pool = database::create_pool(&settings.database).await?;
            tracing::info!("Database connection pool created");

            database::ensure_schema(&pool).await?;
            tracing::info!("Loan application table ready");

            Ok(Arc::new(PgLoanApplicationRepository::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, records will not survive a restart");
            Ok(Arc::new(InMemoryLoanApplicationRepository::new()))
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let repository = connect_storage(&settings).await?;
        let state = AppState::new(repository);

        let router = build_router(state, &settings.cors);

        // Bind to address
        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until a shutdown signal arrives
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
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
