// src/config.rs
use clap::Parser;
use tokio::net::TcpListener;

pub const DEFAULT_PORT: u16 = 6872;

/// Echo bot HTTP server
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "ECHO_BOT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "ECHO_BOT_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "ECHO_BOT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Bind the listener. `host` may be an IP address or a name such as `localhost`.
    pub async fn bind(&self) -> anyhow::Result<TcpListener> {
        TcpListener::bind((self.host.as_str(), self.port))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind {}:{}: {}", self.host, self.port, e))
    }
}

/// Terminal chat client for the echo bot
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct ClientConfig {
    /// Base URL of the echo bot
    #[arg(short, long, env = "ECHO_BOT_URL", default_value = "http://localhost:6872")]
    pub url: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "ECHO_CHAT_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}
