//! Query gateway for the bank branch directory
//!
//! Serves the same read operations over REST and GraphQL. Both transports
//! validate their parameters, then delegate to [`service::BranchQueryService`].

pub mod config;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod models;
pub mod router;
pub mod service;
pub mod state;

pub use config::GatewayConfig;
pub use router::create_router;
pub use state::AppState;
