use utoipa::OpenApi;

use crate::domain::customer::Customer;
use crate::domain::order::Order;
use crate::domain::product::Product;
use crate::handlers::{self, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::customers::create_customer,
        handlers::customers::list_customers,
        handlers::customers::get_customer,
        handlers::customers::update_customer,
        handlers::customers::delete_customer,
        handlers::accounts::create_account,
        handlers::accounts::list_accounts,
        handlers::accounts::get_account,
        handlers::accounts::update_account,
        handlers::accounts::delete_account,
        handlers::products::create_product,
        handlers::products::list_products,
        handlers::products::search_products,
        handlers::products::get_product,
        handlers::products::update_product,
        handlers::products::delete_product,
        handlers::orders::create_order,
        handlers::orders::list_orders,
        handlers::orders::get_order,
        handlers::orders::update_order,
        handlers::orders::delete_order,
    ),
    components(schemas(
        Customer,
        Product,
        Order,
        MessageResponse,
        handlers::customers::CreateCustomerRequest,
        handlers::customers::UpdateCustomerRequest,
        handlers::accounts::CreateAccountRequest,
        handlers::accounts::UpdateAccountRequest,
        handlers::accounts::AccountResponse,
        handlers::products::CreateProductRequest,
        handlers::products::UpdateProductRequest,
        handlers::orders::CreateOrderRequest,
        handlers::orders::UpdateOrderRequest,
    )),
    tags(
        (name = "customers", description = "Customer records"),
        (name = "customer accounts", description = "Customer login accounts"),
        (name = "products", description = "Product catalogue"),
        (name = "orders", description = "Orders and their products"),
    )
)]
pub struct ApiDoc;
