use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{contains_pattern, NewProduct, Product, ProductFilter, ProductPatch};
use crate::schema::products;

use super::models::{ProductRow, ProductValues};

pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for DieselProductRepository {
    fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::insert_into(products::table)
            .values(&ProductValues {
                name: &product.name,
                price: product.price,
            })
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)?;

        Ok(row.into())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = products::table
            .find(id)
            .select(ProductRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Product::from))
    }

    fn list(&self, filter: ProductFilter) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = match filter {
            ProductFilter::All => products::table
                .select(ProductRow::as_select())
                .order(products::product_id.asc())
                .load(&mut conn)?,
            ProductFilter::NameEquals(name) => products::table
                .filter(products::name.eq(name))
                .select(ProductRow::as_select())
                .order((products::price.asc(), products::product_id.asc()))
                .load(&mut conn)?,
            ProductFilter::NameContains(needle) => products::table
                .filter(products::name.ilike(contains_pattern(&needle)))
                .select(ProductRow::as_select())
                .order((products::price.asc(), products::product_id.asc()))
                .load(&mut conn)?,
        };

        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn update(&self, id: i32, patch: ProductPatch) -> Result<Product, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let mut product: Product = products::table
                .find(id)
                .select(ProductRow::as_select())
                .for_update()
                .first(conn)
                .optional()?
                .ok_or_else(|| DomainError::not_found("product", id))?
                .into();

            product.apply_patch(patch);

            diesel::update(products::table.find(id))
                .set(&ProductValues {
                    name: &product.name,
                    price: product.price,
                })
                .execute(conn)?;

            Ok(product)
        })
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let deleted = diesel::delete(products::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(DomainError::not_found("product", id));
        }
        Ok(())
    }
}
