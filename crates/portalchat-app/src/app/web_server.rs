use anyhow::Result;

use crate::config::AppConfig;
use crate::web::server::{WebServer, WebServerConfig};

/// Run the web server
pub async fn run_web_server(config: &AppConfig) -> Result<()> {
    println!("🌐 Starting portalchat web server...");
    println!("   Address: {}", config.web_addr);
    println!("   Profile: {} ({})", config.profile.title, config.profile.name);

    let server = WebServer::new(WebServerConfig {
        bind_addr: config.web_addr,
        profile: config.profile.clone(),
        client_builder: config.client_builder(),
        temperature: config.client_config.temperature,
        log_dir: config.log_dir.clone(),
    });
    server.start().await
}
