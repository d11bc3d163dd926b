use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::credentials::errors::AuthError;
use crate::credentials::errors::FailureCategory;

pub mod authenticate;
pub mod healthcheck;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Failure returned across the HTTP boundary.
///
/// Messages are fixed per status; internal error detail stays in the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<FailureCategory> for ApiError {
    fn from(category: FailureCategory) -> Self {
        match category {
            FailureCategory::RejectedInput => ApiError::BadRequest("Bad request".to_string()),
            FailureCategory::NotFound => ApiError::NotFound("Not found".to_string()),
            FailureCategory::Unauthorized => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            FailureCategory::InternalFailure => {
                ApiError::InternalServerError("Server encountered a problem".to_string())
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        err.category().into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_detail_is_not_exposed() {
        let err = AuthError::DatabaseError(
            "password authentication failed for user \"postgres\"".to_string(),
        );

        assert_eq!(
            ApiError::from(err),
            ApiError::InternalServerError("Server encountered a problem".to_string())
        );
    }

    #[test]
    fn test_status_per_category() {
        let cases = [
            (FailureCategory::RejectedInput, StatusCode::BAD_REQUEST),
            (FailureCategory::NotFound, StatusCode::NOT_FOUND),
            (FailureCategory::Unauthorized, StatusCode::UNAUTHORIZED),
            (FailureCategory::InternalFailure, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (category, status) in cases {
            let response = ApiError::from(category).into_response();
            assert_eq!(response.status(), status);
        }
    }
}
