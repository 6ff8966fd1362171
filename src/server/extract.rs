use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request}
};
use serde::de::DeserializeOwned;

use crate::server::error::ServerError;

/// JSON request body. An empty body reads as `{}` and the content type is
/// not checked, so a bare `POST` creates a record with every default.
pub(crate) struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;

        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) { b"{}" } else { &bytes };
        return serde_json::from_slice(body)
            .map(JsonBody)
            .map_err(|err| ServerError::BadRequest(format!("JSON inválido: {}", err)));
    }
}
