use crate::{dto::ResolverDto, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_resolvers")]
pub async fn get_resolvers(State(state): State<AppState>) -> Json<Vec<ResolverDto>> {
    let resolvers: Vec<ResolverDto> = state
        .check_propagation
        .resolvers()
        .iter()
        .map(ResolverDto::from)
        .collect();

    debug!(count = resolvers.len(), "Resolvers listed");

    Json(resolvers)
}
