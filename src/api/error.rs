use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::inventory::InventoryError;

/// Error returned by handlers, rendered as a JSON body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: "NOT_FOUND",
            message: "The product was not found in the database.".to_string(),
        }
    }

    pub fn out_of_stock() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "OUT_OF_STOCK",
            message: "This product has no inventory!".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "INTERNAL_SERVER_ERROR",
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<InventoryError> for ApiError {
    fn from(error: InventoryError) -> Self {
        match error {
            InventoryError::NotFound(_) => Self::not_found(),
            InventoryError::OutOfStock(_) => Self::out_of_stock(),
            // Store details stay in the logs.
            InventoryError::Store(e) => {
                tracing::error!(error = %e, "Inventory store failure");
                Self::internal("The inventory store could not complete the request.")
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Server errors were already logged with their cause when converted.
        if !self.status.is_server_error() {
            tracing::debug!(status = %self.status, code = self.code, "Request rejected");
        }

        let body = ErrorResponse {
            code: self.code,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
