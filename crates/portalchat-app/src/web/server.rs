use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::{ClientBuilder, Profile};
use crate::web::{routes, session_manager::SessionManager};

/// Web server configuration
pub struct WebServerConfig {
    pub bind_addr: SocketAddr,
    pub profile: Profile,
    pub client_builder: ClientBuilder,
    /// Recorded in each session's settings; the client applies it
    pub temperature: Option<f32>,
    pub log_dir: Option<PathBuf>,
}

/// Web server instance
pub struct WebServer {
    bind_addr: SocketAddr,
    session_manager: Arc<SessionManager>,
}

impl WebServer {
    pub fn new(config: WebServerConfig) -> Self {
        let session_manager = Arc::new(
            SessionManager::new(config.profile, config.client_builder, config.log_dir)
                .with_temperature(config.temperature),
        );

        Self {
            bind_addr: config.bind_addr,
            session_manager,
        }
    }

    /// Router with CORS applied, ready to serve
    pub fn router(&self) -> axum::Router {
        let app_state = routes::AppState {
            session_manager: self.session_manager.clone(),
        };

        // Any origin: the API is meant for a separately hosted frontend
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(app_state).layer(cors)
    }

    /// Start the web server
    pub async fn start(self) -> Result<()> {
        let app = self.router();

        println!("🌐 Web server starting on http://{}", self.bind_addr);
        println!("   API endpoints: http://{}/api/sessions", self.bind_addr);
        log::info!("listening on {}", self.bind_addr);

        let listener = tokio::net::TcpListener::bind(&self.bind_addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
