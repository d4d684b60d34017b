pub mod accounts;
pub mod customers;
pub mod orders;
pub mod products;

use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::AppError;

/// Body returned by deletes.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Fallback for a known path requested with a method it does not serve.
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed(format!(
        "Method {} is not allowed on {}",
        req.method(),
        req.path()
    )))
}

/// Fallback for paths no resource matches.
pub async fn no_such_route(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!("No route for {}", req.path())))
}
