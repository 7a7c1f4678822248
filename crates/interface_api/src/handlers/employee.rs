//! Employee handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use crate::dto::employee::{RegisterEmployeeRequest, RegistrationResponse};
use crate::dto::ApiResponse;
use crate::{error::ApiError, AppState};

/// Registers a person and their employment record
#[instrument(skip_all)]
pub async fn register_employee(
    State(state): State<AppState>,
    payload: Result<Json<RegisterEmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<RegistrationResponse>>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        info!(error = %rejection.body_text(), "Malformed registration request");
        ApiError::BadRequest(rejection.body_text())
    })?;

    let result = state.registrar.register(request.into()).await?;
    info!(
        person_id = %result.person_id,
        employee_id = %result.employee_id,
        "Employee registered"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "employee registered successfully",
            RegistrationResponse::from(result),
        )),
    ))
}
