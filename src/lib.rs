pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;
pub mod schema;
pub mod validation;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::{AccountService, CustomerService, OrderService, ProductService};
use errors::AppError;
use infrastructure::{
    DieselAccountRepository, DieselCustomerRepository, DieselOrderRepository,
    DieselProductRepository,
};

pub use config::Config;
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type Customers = CustomerService<DieselCustomerRepository>;
pub type Accounts = AccountService<DieselAccountRepository>;
pub type Products = ProductService<DieselProductRepository>;
pub type Orders = OrderService<DieselOrderRepository>;

/// Run any pending Diesel migrations against the pool's database, returning
/// how many were applied.
pub fn run_migrations(pool: &DbPool) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    Ok(applied.len())
}

/// A resource whose unsupported methods answer with a JSON 405.
fn resource(path: &str) -> actix_web::Resource {
    web::resource(path).default_service(web::to(handlers::method_not_allowed))
}

/// Register every resource. `/products/by-name` must come before
/// `/products/{id}` so it is not parsed as an id.
pub fn routes(cfg: &mut web::ServiceConfig) {
    use handlers::{accounts, customers, orders, products};

    cfg.service(
        web::scope("/customers")
            .service(
                resource("")
                    .route(web::post().to(customers::create_customer))
                    .route(web::get().to(customers::list_customers)),
            )
            .service(
                resource("/{id}")
                    .route(web::get().to(customers::get_customer))
                    .route(web::put().to(customers::update_customer))
                    .route(web::delete().to(customers::delete_customer)),
            ),
    )
    .service(
        web::scope("/customer_account")
            .service(
                resource("")
                    .route(web::post().to(accounts::create_account))
                    .route(web::get().to(accounts::list_accounts)),
            )
            .service(
                resource("/{id}")
                    .route(web::get().to(accounts::get_account))
                    .route(web::put().to(accounts::update_account))
                    .route(web::delete().to(accounts::delete_account)),
            ),
    )
    .service(
        web::scope("/products")
            .service(
                resource("")
                    .route(web::post().to(products::create_product))
                    .route(web::get().to(products::list_products)),
            )
            .service(resource("/by-name").route(web::get().to(products::search_products)))
            .service(
                resource("/{id}")
                    .route(web::get().to(products::get_product))
                    .route(web::put().to(products::update_product))
                    .route(web::delete().to(products::delete_product)),
            ),
    )
    .service(
        web::scope("/orders")
            .service(
                resource("")
                    .route(web::post().to(orders::create_order))
                    .route(web::get().to(orders::list_orders)),
            )
            .service(
                resource("/{id}")
                    .route(web::get().to(orders::get_order))
                    .route(web::put().to(orders::update_order))
                    .route(web::delete().to(orders::delete_order)),
            ),
    );
}

/// Route extractor failures through [`AppError`] so every error body is JSON.
fn extractor_configs(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::NotFound(format!("No such resource: {err}")).into()
    }));
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let customers = web::Data::new(Customers::new(DieselCustomerRepository::new(pool.clone())));
    let accounts = web::Data::new(Accounts::new(DieselAccountRepository::new(pool.clone())));
    let products = web::Data::new(Products::new(DieselProductRepository::new(pool.clone())));
    let orders = web::Data::new(Orders::new(DieselOrderRepository::new(pool)));
    let openapi = openapi::ApiDoc::openapi();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(customers.clone())
            .app_data(accounts.clone())
            .app_data(products.clone())
            .app_data(orders.clone())
            .wrap(Logger::default())
            .configure(extractor_configs)
            .configure(routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .default_service(web::to(handlers::no_such_route))
    })
    .bind((host.to_string(), port))?
    .run())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::Value;

    use super::{extractor_configs, handlers, routes};

    #[actix_web::test]
    async fn unsupported_method_gets_a_json_405() {
        let app = test::init_service(
            App::new()
                .configure(extractor_configs)
                .configure(routes)
                .default_service(web::to(handlers::no_such_route)),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::patch().uri("/products").to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Method PATCH is not allowed on /products");

        let resp =
            test::call_service(&app, test::TestRequest::post().uri("/orders/7").to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[actix_web::test]
    async fn unknown_path_gets_a_json_404() {
        let app = test::init_service(
            App::new()
                .configure(routes)
                .default_service(web::to(handlers::no_such_route)),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/warehouses").to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "No route for /warehouses");
    }
}
