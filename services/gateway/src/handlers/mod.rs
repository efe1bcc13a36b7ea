pub mod bank;
pub mod branch;
pub mod graphql;
pub mod health;
