use clap::Parser;
use persistence::StoreConfig;
use std::net::SocketAddr;

/// Runtime settings, taken from flags or the environment
#[derive(Debug, Clone, Parser)]
#[command(name = "gateway", version, about = "Bank branch directory API")]
pub struct GatewayConfig {
    /// Listen address
    #[arg(long, env = "GATEWAY_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    #[arg(long, env = "DATABASE_URL", default_value = StoreConfig::DEFAULT_URL)]
    pub database_url: String,

    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,
}

impl GatewayConfig {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            database_url: self.database_url.clone(),
            max_connections: self.max_connections,
        }
    }
}
