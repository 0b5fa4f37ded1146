use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;

pub async fn root() -> Result<ApiSuccess<RootResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        RootResponseData {
            message: "Employee API with JWT Authentication".to_string(),
            status: "Active".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootResponseData {
    pub message: String,
    pub status: String,
}
