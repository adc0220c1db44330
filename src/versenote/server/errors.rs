use crate::error::VerseError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

#[derive(Debug)]
pub struct ServerError(VerseError);

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            VerseError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        } else {
            debug!(error = %self.0, "rejected request");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

// Lets handlers use `?` on anything that converts into `VerseError`.
impl<E> From<E> for ServerError
where
    E: Into<VerseError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
