use crate::{
    dto::{CheckQuery, CheckResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use ferrous_probe_domain::QueryRequest;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_check")]
pub async fn check_propagation(
    State(state): State<AppState>,
    Query(params): Query<CheckQuery>,
) -> Result<Json<CheckResponse>, ApiError> {
    let request = QueryRequest::from_params(params.domain.as_deref(), params.record_type.as_deref())
        .inspect_err(|e| debug!(error = %e, "Rejected check request"))?;

    debug!(
        domain = %request.domain,
        record_type = %request.record_type,
        "Checking propagation"
    );

    let response = state.check_propagation.execute(&request).await;

    Ok(Json(CheckResponse::from(response)))
}
