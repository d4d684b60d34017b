pub mod account_service;
pub mod customer_service;
pub mod order_service;
pub mod password;
pub mod product_service;

pub use account_service::AccountService;
pub use customer_service::CustomerService;
pub use order_service::OrderService;
pub use product_service::ProductService;
