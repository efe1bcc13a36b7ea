use crate::router::GRAPHQL_PATH;
use crate::state::AppState;
use async_graphql::http::{GraphiQLSource, parse_query_string};
use async_graphql::ServerError;
use axum::{
    Json,
    body::Bytes,
    extract::{RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// `GET /gql`: runs `?query=...` requests, otherwise serves the playground
pub async fn graphql_get(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Response {
    let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
        return graphiql().into_response();
    };

    match parse_query_string(&raw) {
        Ok(request) if request.query.is_empty() => graphiql().into_response(),
        Ok(request) => Json(state.schema.execute(request).await).into_response(),
        Err(err) => bad_request(format!("Invalid request: {err}")),
    }
}

/// `POST /gql`: JSON body, with or without a content type
pub async fn graphql_post(State(state): State<AppState>, body: Bytes) -> Response {
    match serde_json::from_slice::<async_graphql::Request>(&body) {
        Ok(request) => Json(state.schema.execute(request).await).into_response(),
        Err(err) => bad_request(format!("Invalid request: {err}")),
    }
}

fn bad_request(message: String) -> Response {
    tracing::debug!(%message, "Rejected GraphQL request");
    let response = async_graphql::Response::from_errors(vec![ServerError::new(message, None)]);
    (StatusCode::BAD_REQUEST, Json(response)).into_response()
}

/// Interactive playground
pub fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
