use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::MessageResponse;
use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, Order, OrderPatch};
use crate::errors::AppError;
use crate::validation::{required, validate};
use crate::Orders;

// ── Request DTOs ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateOrderRequest {
    #[validate(required(message = "This field is required"))]
    pub customer_id: Option<i32>,
    /// Calendar date, `YYYY-MM-DD`.
    #[validate(required(message = "This field is required"))]
    pub date: Option<NaiveDate>,
    /// Ids of the products to attach. At least one is needed.
    #[serde(default, alias = "product_id")]
    pub products: Vec<i32>,
}

impl CreateOrderRequest {
    pub fn into_new_order(self) -> Result<NewOrder, DomainError> {
        validate(&self)?;
        Ok(NewOrder {
            customer_id: required(self.customer_id, "customer_id")?,
            date: required(self.date, "date")?,
            product_ids: self.products,
        })
    }
}

/// Any subset of the order fields. A `products` list replaces the whole set.
/// Unknown keys, `order_id` included, are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    pub customer_id: Option<i32>,
    pub date: Option<NaiveDate>,
    #[serde(alias = "product_id")]
    pub products: Option<Vec<i32>>,
}

impl From<UpdateOrderRequest> for OrderPatch {
    fn from(req: UpdateOrderRequest) -> Self {
        OrderPatch {
            customer_id: req.customer_id,
            date: req.date,
            product_ids: req.products,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Creates the order and attaches its products in one transaction. An unknown
/// product id fails the whole request with 404 and nothing is stored.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Invalid payload, unknown customer or no products"),
        (status = 404, description = "A product does not exist"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    orders: web::Data<Orders>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let new_order = body.into_inner().into_new_order()?;

    let order = web::block(move || orders.create_order(new_order))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!(
        "Created order {} with {} product(s)",
        order.order_id,
        order.products.len()
    );
    Ok(HttpResponse::Created().json(order))
}

/// GET /orders
///
/// Every order with the ids of its products.
#[utoipa::path(
    get,
    path = "/orders",
    responses((status = 200, description = "All orders", body = [Order])),
    tag = "orders"
)]
pub async fn list_orders(orders: web::Data<Orders>) -> Result<HttpResponse, AppError> {
    let all = web::block(move || orders.list_orders())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(all))
}

/// GET /orders/{id}
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 404, description = "Order not found"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    orders: web::Data<Orders>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let order = web::block(move || orders.get_order(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(order))
}

/// PUT /orders/{id}
#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = Order),
        (status = 400, description = "Invalid payload, unknown customer or empty product list"),
        (status = 404, description = "Order or product not found"),
    ),
    tag = "orders"
)]
pub async fn update_order(
    orders: web::Data<Orders>,
    path: web::Path<i32>,
    body: web::Json<UpdateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let patch = OrderPatch::from(body.into_inner());

    let order = web::block(move || orders.update_order(id, patch))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("Updated order {}", id);
    Ok(HttpResponse::Ok().json(order))
}

/// DELETE /orders/{id}
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order deleted", body = MessageResponse),
        (status = 404, description = "Order not found"),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    orders: web::Data<Orders>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || orders.delete_order(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("Deleted order {}", id);
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!("Order {id} deleted"))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_legacy_product_id_key() {
        let req: CreateOrderRequest = serde_json::from_str(
            r#"{"customer_id": 1, "date": "2024-05-01", "product_id": [4, 5]}"#,
        )
        .unwrap();

        let order = req.into_new_order().expect("valid order");
        assert_eq!(order.product_ids, vec![4, 5]);
        assert_eq!(order.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn create_request_without_products_still_validates() {
        // The empty product set is rejected later as a business rule.
        let req: CreateOrderRequest =
            serde_json::from_str(r#"{"customer_id": 1, "date": "2024-05-01"}"#).unwrap();
        assert!(req.into_new_order().expect("valid").product_ids.is_empty());
    }

    #[test]
    fn create_request_requires_customer_and_date() {
        let req: CreateOrderRequest = serde_json::from_str(r#"{"products": [1]}"#).unwrap();

        let DomainError::InvalidInput(fields) = req.into_new_order().unwrap_err() else {
            panic!("expected InvalidInput");
        };
        assert!(fields.contains_key("customer_id"));
        assert!(fields.contains_key("date"));
    }

    #[test]
    fn malformed_date_fails_to_parse() {
        let parsed = serde_json::from_str::<CreateOrderRequest>(
            r#"{"customer_id": 1, "date": "05/01/2024", "products": [1]}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn update_request_accepts_a_fetched_order_body() {
        let req: UpdateOrderRequest = serde_json::from_str(
            r#"{"order_id": 9, "customer_id": 1, "date": "2024-05-01", "products": [3, 4]}"#,
        )
        .unwrap();

        let patch = OrderPatch::from(req);
        assert_eq!(patch.customer_id, Some(1));
        assert_eq!(patch.product_ids, Some(vec![3, 4]));
    }

    #[test]
    fn update_request_distinguishes_absent_from_empty_products() {
        let absent: UpdateOrderRequest = serde_json::from_str(r#"{"customer_id": 2}"#).unwrap();
        assert_eq!(OrderPatch::from(absent).product_ids, None);

        let empty: UpdateOrderRequest = serde_json::from_str(r#"{"products": []}"#).unwrap();
        assert_eq!(OrderPatch::from(empty).product_ids, Some(vec![]));
    }
}
