use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::MessageResponse;
use crate::domain::customer::{Customer, CustomerPatch, NewCustomer};
use crate::domain::errors::DomainError;
use crate::errors::AppError;
use crate::validation::{required, validate};
use crate::Customers;

// ── Request DTOs ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCustomerRequest {
    #[validate(
        required(message = "This field is required"),
        length(min = 1, max = 150, message = "Must be between 1 and 150 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "This field is required"),
        length(max = 150, message = "Must be at most 150 characters")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "This field is required"),
        length(max = 30, message = "Must be at most 30 characters")
    )]
    pub phone: Option<String>,
}

impl CreateCustomerRequest {
    pub fn into_new_customer(self) -> Result<NewCustomer, DomainError> {
        validate(&self)?;
        Ok(NewCustomer {
            name: required(self.name, "name")?,
            email: required(self.email, "email")?,
            phone: required(self.phone, "phone")?,
        })
    }
}

/// Any subset of the customer fields. Other keys, such as the `customer_id`
/// of a body fetched with GET, are ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, max = 150, message = "Must be between 1 and 150 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 150, message = "Must be at most 150 characters"))]
    pub email: Option<String>,
    #[validate(length(max = 30, message = "Must be at most 30 characters"))]
    pub phone: Option<String>,
}

impl UpdateCustomerRequest {
    pub fn into_patch(self) -> Result<CustomerPatch, DomainError> {
        validate(&self)?;
        Ok(CustomerPatch {
            name: self.name,
            email: self.email,
            phone: self.phone,
        })
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /customers
#[utoipa::path(
    post,
    path = "/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Invalid payload"),
    ),
    tag = "customers"
)]
pub async fn create_customer(
    customers: web::Data<Customers>,
    body: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let new_customer = body.into_inner().into_new_customer()?;

    let customer = web::block(move || customers.create_customer(new_customer))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("Created customer {}", customer.customer_id);
    Ok(HttpResponse::Created().json(customer))
}

/// GET /customers
#[utoipa::path(
    get,
    path = "/customers",
    responses((status = 200, description = "All customers", body = [Customer])),
    tag = "customers"
)]
pub async fn list_customers(customers: web::Data<Customers>) -> Result<HttpResponse, AppError> {
    let all = web::block(move || customers.list_customers())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(all))
}

/// GET /customers/{id}
#[utoipa::path(
    get,
    path = "/customers/{id}",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 404, description = "Customer not found"),
    ),
    tag = "customers"
)]
pub async fn get_customer(
    customers: web::Data<Customers>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let customer = web::block(move || customers.get_customer(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(customer))
}

/// PUT /customers/{id}
///
/// Only the fields present in the body are changed.
#[utoipa::path(
    put,
    path = "/customers/{id}",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Customer not found"),
    ),
    tag = "customers"
)]
pub async fn update_customer(
    customers: web::Data<Customers>,
    path: web::Path<i32>,
    body: web::Json<UpdateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let patch = body.into_inner().into_patch()?;

    let customer = web::block(move || customers.update_customer(id, patch))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("Updated customer {}", id);
    Ok(HttpResponse::Ok().json(customer))
}

/// DELETE /customers/{id}
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer deleted", body = MessageResponse),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Customer still has an account or orders"),
    ),
    tag = "customers"
)]
pub async fn delete_customer(
    customers: web::Data<Customers>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || customers.delete_customer(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("Deleted customer {}", id);
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!("Customer {id} deleted"))))
}
