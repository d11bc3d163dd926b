use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use secrecy::SecretString;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::credentials::models::CredentialSubmission;
use crate::credentials::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<AuthenticateRequestBody>,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    let submission = CredentialSubmission {
        email: body.email,
        password: body.password,
    };

    state
        .auth_service
        .authenticate(submission)
        .await
        .map_err(ApiError::from)
        .map(|token| {
            ApiSuccess::new(
                StatusCode::OK,
                AuthenticateResponseData { token: token.token },
            )
        })
}

#[derive(Debug, Deserialize)]
pub struct AuthenticateRequestBody {
    email: String,
    password: SecretString,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateResponseData {
    pub token: String,
}
