use axum::{
    extract::{Path, State},
    Json,
};

use profilehub_core::profile::CustomerRecord;

use crate::{handlers::AppError, state::AppState};

/// Get the consolidated profile of a customer (GET /api/customers/{id}).
#[axum::debug_handler]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<CustomerRecord>, AppError> {
    let record = state.profiles.get_aggregated_data(&identifier).await?;

    tracing::info!(identifier = %record.identifier, "Served customer profile");

    Ok(Json(record))
}
