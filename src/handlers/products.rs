use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::MessageResponse;
use crate::domain::errors::DomainError;
use crate::domain::product::{NewProduct, Product, ProductFilter, ProductPatch};
use crate::errors::AppError;
use crate::validation::{required, validate};
use crate::Products;

// ── Request DTOs ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProductRequest {
    #[validate(
        required(message = "This field is required"),
        length(min = 1, max = 150, message = "Must be between 1 and 150 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "This field is required"),
        range(min = 0.0, message = "Must not be negative")
    )]
    pub price: Option<f64>,
}

impl CreateProductRequest {
    pub fn into_new_product(self) -> Result<NewProduct, DomainError> {
        validate(&self)?;
        Ok(NewProduct {
            name: required(self.name, "name")?,
            price: required(self.price, "price")?,
        })
    }
}

/// Any subset of the product fields. Unknown keys are ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 150, message = "Must be between 1 and 150 characters"))]
    pub name: Option<String>,
    #[validate(range(min = 0.0, message = "Must not be negative"))]
    pub price: Option<f64>,
}

impl UpdateProductRequest {
    pub fn into_patch(self) -> Result<ProductPatch, DomainError> {
        validate(&self)?;
        Ok(ProductPatch {
            name: self.name,
            price: self.price,
        })
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProductsParams {
    /// Only products with exactly this name.
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchProductsParams {
    /// Substring to look for, case-insensitive.
    #[validate(length(min = 1, message = "Must not be empty"))]
    pub name: String,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /products
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid payload"),
    ),
    tag = "products"
)]
pub async fn create_product(
    products: web::Data<Products>,
    body: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let new_product = body.into_inner().into_new_product()?;

    let product = web::block(move || products.create_product(new_product))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("Created product {}", product.product_id);
    Ok(HttpResponse::Created().json(product))
}

/// GET /products
///
/// Every product by id, or only exact name matches (cheapest first) when
/// `name` is given.
#[utoipa::path(
    get,
    path = "/products",
    params(ListProductsParams),
    responses((status = 200, description = "Products", body = [Product])),
    tag = "products"
)]
pub async fn list_products(
    products: web::Data<Products>,
    query: web::Query<ListProductsParams>,
) -> Result<HttpResponse, AppError> {
    let filter = match query.into_inner().name {
        Some(name) => ProductFilter::NameEquals(name),
        None => ProductFilter::All,
    };

    let found = web::block(move || products.list_products(filter))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(found))
}

/// GET /products/by-name?name=
///
/// Products whose name contains `name`, cheapest first.
#[utoipa::path(
    get,
    path = "/products/by-name",
    params(SearchProductsParams),
    responses(
        (status = 200, description = "Matching products", body = [Product]),
        (status = 400, description = "Missing or empty name"),
    ),
    tag = "products"
)]
pub async fn search_products(
    products: web::Data<Products>,
    query: web::Query<SearchProductsParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    validate(&params)?;
    let filter = ProductFilter::NameContains(params.name);

    let found = web::block(move || products.list_products(filter))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(found))
}

/// GET /products/{id}
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found"),
    ),
    tag = "products"
)]
pub async fn get_product(
    products: web::Data<Products>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let product = web::block(move || products.get_product(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(product))
}

/// PUT /products/{id}
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Product not found"),
    ),
    tag = "products"
)]
pub async fn update_product(
    products: web::Data<Products>,
    path: web::Path<i32>,
    body: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let patch = body.into_inner().into_patch()?;

    let product = web::block(move || products.update_product(id, patch))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("Updated product {}", id);
    Ok(HttpResponse::Ok().json(product))
}

/// DELETE /products/{id}
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Product is still part of an order"),
    ),
    tag = "products"
)]
pub async fn delete_product(
    products: web::Data<Products>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || products.delete_product(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("Deleted product {}", id);
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!("Product {id} deleted"))))
}
