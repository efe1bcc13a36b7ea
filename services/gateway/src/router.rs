use crate::handlers::{bank, branch, graphql, health};
use crate::state::AppState;
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Path the GraphQL endpoint and playground are mounted at
pub const GRAPHQL_PATH: &str = "/gql";

pub fn create_router(state: AppState) -> Router {
    let rest_routes = Router::new()
        .route("/banks", get(bank::list_banks))
        .route("/banks/{bank_id}/branches", get(bank::list_bank_branches))
        .route("/branches/{ifsc}", get(branch::get_branch))
        .route("/health", get(health::health));

    Router::new()
        .merge(rest_routes)
        .route(GRAPHQL_PATH, get(graphql::graphql_get).post(graphql::graphql_post))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
