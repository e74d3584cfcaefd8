use std::fmt::{self, Debug, Formatter};

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};

use crate::domain::{ApiUrl, GenerateRequest, GenerateResponse};
use crate::utils;

#[derive(thiserror::Error)]
pub enum GenerateError {
    #[error("{0}")]
    ValidationError(String),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for GenerateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

impl ResponseError for GenerateError {
    fn error_response(&self) -> HttpResponse {
        let status_code = match self {
            GenerateError::ValidationError(_) => StatusCode::BAD_REQUEST,
            GenerateError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        utils::build_error_response(status_code, self.to_string())
    }
}

#[tracing::instrument(
    name = "Generate API URL",
    skip_all,
    fields(photo_url = %payload.photo_url)
)]
pub async fn generate_api_url(
    payload: web::Json<GenerateRequest>,
) -> Result<HttpResponse, GenerateError> {
    let api_url: ApiUrl = payload.0.try_into().map_err(|message: String| {
        tracing::info!(reason = %message, "Rejected generate request");
        GenerateError::ValidationError(message)
    })?;

    Ok(HttpResponse::Ok().json(GenerateResponse::from(api_url)))
}
