use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json
};
use anyhow;
use log::error;

use crate::backend::BackendError;
use crate::core::CoreError;
use crate::server::Notice;

#[derive(Debug)]
pub(crate) enum ServerError {
    NotFound(String),
    BadRequest(String),
    InternalError(anyhow::Error)
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, mensaje) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::InternalError(err) => {
                error!("request failed: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Error interno del servidor".to_owned())
            }
        };
        (status, Json(Notice { mensaje })).into_response()
    }
}

impl From<CoreError> for ServerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UserNotFound | CoreError::MessageNotFound => Self::NotFound(err.to_string()),
            CoreError::InvalidUser => Self::BadRequest(err.to_string())
        }
    }
}

impl From<BackendError> for ServerError {
    fn from(err: BackendError) -> Self {
        Self::InternalError(err.into())
    }
}
