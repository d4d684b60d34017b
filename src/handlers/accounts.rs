use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::MessageResponse;
use crate::application::account_service::{AccountChanges, AccountRegistration};
use crate::domain::account::CustomerAccount;
use crate::domain::errors::DomainError;
use crate::errors::AppError;
use crate::validation::{required, validate};
use crate::Accounts;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateAccountRequest {
    #[validate(
        required(message = "This field is required"),
        length(min = 1, max = 150, message = "Must be between 1 and 150 characters")
    )]
    pub username: Option<String>,
    /// Clear-text password; stored only as an Argon2id hash.
    #[validate(
        required(message = "This field is required"),
        length(max = 128, message = "Must be at most 128 characters")
    )]
    pub password: Option<String>,
    #[validate(required(message = "This field is required"))]
    pub customer_id: Option<i32>,
}

impl CreateAccountRequest {
    pub fn into_registration(self) -> Result<AccountRegistration, DomainError> {
        validate(&self)?;
        Ok(AccountRegistration {
            username: required(self.username, "username")?,
            password: required(self.password, "password")?,
            customer_id: required(self.customer_id, "customer_id")?,
        })
    }
}

/// Any subset of the account fields. Unknown keys, `account_id` included, are
/// ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAccountRequest {
    #[validate(length(min = 1, max = 150, message = "Must be between 1 and 150 characters"))]
    pub username: Option<String>,
    #[validate(length(max = 128, message = "Must be at most 128 characters"))]
    pub password: Option<String>,
    pub customer_id: Option<i32>,
}

impl UpdateAccountRequest {
    pub fn into_changes(self) -> Result<AccountChanges, DomainError> {
        validate(&self)?;
        Ok(AccountChanges {
            username: self.username,
            password: self.password,
            customer_id: self.customer_id,
        })
    }
}

/// Account as exposed over HTTP; password material never leaves the service.
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    pub account_id: i32,
    pub username: String,
    pub customer_id: i32,
}

impl From<CustomerAccount> for AccountResponse {
    fn from(account: CustomerAccount) -> Self {
        AccountResponse {
            account_id: account.account_id,
            username: account.username,
            customer_id: account.customer_id,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /customer_account
#[utoipa::path(
    post,
    path = "/customer_account",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created", body = AccountResponse),
        (status = 400, description = "Invalid payload or unknown customer"),
        (status = 409, description = "Username taken or customer already has an account"),
    ),
    tag = "customer accounts"
)]
pub async fn create_account(
    accounts: web::Data<Accounts>,
    body: web::Json<CreateAccountRequest>,
) -> Result<HttpResponse, AppError> {
    let registration = body.into_inner().into_registration()?;

    let account = web::block(move || accounts.create_account(registration))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!(
        "Created account {} for customer {}",
        account.account_id,
        account.customer_id
    );
    Ok(HttpResponse::Created().json(AccountResponse::from(account)))
}

/// GET /customer_account
#[utoipa::path(
    get,
    path = "/customer_account",
    responses((status = 200, description = "All accounts", body = [AccountResponse])),
    tag = "customer accounts"
)]
pub async fn list_accounts(accounts: web::Data<Accounts>) -> Result<HttpResponse, AppError> {
    let all = web::block(move || accounts.list_accounts())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<AccountResponse> = all.into_iter().map(AccountResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /customer_account/{id}
#[utoipa::path(
    get,
    path = "/customer_account/{id}",
    params(("id" = i32, Path, description = "Account id")),
    responses(
        (status = 200, description = "Account found", body = AccountResponse),
        (status = 404, description = "Account not found"),
    ),
    tag = "customer accounts"
)]
pub async fn get_account(
    accounts: web::Data<Accounts>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let account = web::block(move || accounts.get_account(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(AccountResponse::from(account)))
}

/// PUT /customer_account/{id}
#[utoipa::path(
    put,
    path = "/customer_account/{id}",
    params(("id" = i32, Path, description = "Account id")),
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Account updated", body = AccountResponse),
        (status = 400, description = "Invalid payload or unknown customer"),
        (status = 404, description = "Account not found"),
        (status = 409, description = "Username taken or customer already has an account"),
    ),
    tag = "customer accounts"
)]
pub async fn update_account(
    accounts: web::Data<Accounts>,
    path: web::Path<i32>,
    body: web::Json<UpdateAccountRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let changes = body.into_inner().into_changes()?;

    let account = web::block(move || accounts.update_account(id, changes))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("Updated account {}", id);
    Ok(HttpResponse::Ok().json(AccountResponse::from(account)))
}

/// DELETE /customer_account/{id}
#[utoipa::path(
    delete,
    path = "/customer_account/{id}",
    params(("id" = i32, Path, description = "Account id")),
    responses(
        (status = 200, description = "Account deleted", body = MessageResponse),
        (status = 404, description = "Account not found"),
    ),
    tag = "customer accounts"
)]
pub async fn delete_account(
    accounts: web::Data<Accounts>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || accounts.delete_account(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("Deleted account {}", id);
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!("Customer account {id} deleted"))))
}
