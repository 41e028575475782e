mod cors;
mod health;

use std::net::SocketAddr;

use axum::Router;
use persona_answers::Dispatcher;
use persona_config::Config;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the completion client cannot be built or the
    /// personality instruction cannot be read
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let dispatcher = Dispatcher::from_config(config)?;
        Ok(Self::with_dispatcher(config, dispatcher))
    }

    /// Build the server around an already constructed dispatcher
    ///
    /// Lets callers swap in another completion client.
    pub fn with_dispatcher(config: &Config, dispatcher: Dispatcher) -> Self {
        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Question answering
        app = app.merge(persona_answers::ask_router(dispatcher));

        // Apply middleware layers (innermost first)
        app = app.layer(TraceLayer::new_for_http());

        if config.server.cors.enabled {
            app = app.layer(cors::cors_layer(&config.server.cors));
        }

        Self {
            router: app,
            listen_address: config.server.listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
