use std::collections::BTreeSet;

use diesel::prelude::*;
use diesel::PgConnection;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, Order, OrderPatch};
use crate::domain::ports::OrderRepository;
use crate::schema::{order_products, orders, products};

use super::ensure_customer_exists;
use super::models::{OrderProductRow, OrderRow, OrderValues};

// ── Association helpers ──────────────────────────────────────────────────────

/// Fail with `NotFound` on the first id that has no product row.
fn ensure_products_exist(conn: &mut PgConnection, ids: &[i32]) -> Result<(), DomainError> {
    let found: BTreeSet<i32> = products::table
        .filter(products::product_id.eq_any(ids))
        .select(products::product_id)
        .load::<i32>(conn)?
        .into_iter()
        .collect();

    match ids.iter().copied().find(|id| !found.contains(id)) {
        Some(missing) => Err(DomainError::not_found("product", missing)),
        None => Ok(()),
    }
}

fn attach_products(conn: &mut PgConnection, order_id: i32, ids: &[i32]) -> Result<(), DomainError> {
    let rows: Vec<OrderProductRow> = ids
        .iter()
        .map(|&product_id| OrderProductRow {
            order_id,
            product_id,
        })
        .collect();

    diesel::insert_into(order_products::table)
        .values(&rows)
        .on_conflict_do_nothing()
        .execute(conn)?;
    Ok(())
}

fn detach_products(conn: &mut PgConnection, order_id: i32) -> Result<(), DomainError> {
    diesel::delete(order_products::table.filter(order_products::order_id.eq(order_id)))
        .execute(conn)?;
    Ok(())
}

fn load_order(conn: &mut PgConnection, row: OrderRow) -> Result<Order, DomainError> {
    let products = OrderProductRow::belonging_to(&row)
        .select(order_products::product_id)
        .order(order_products::product_id.asc())
        .load::<i32>(conn)?;

    Ok(Order {
        order_id: row.order_id,
        customer_id: row.customer_id,
        date: row.date,
        products,
    })
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            ensure_customer_exists(conn, order.customer_id)?;
            ensure_products_exist(conn, &order.product_ids)?;

            let row = diesel::insert_into(orders::table)
                .values(&OrderValues {
                    date: order.date,
                    customer_id: order.customer_id,
                })
                .returning(OrderRow::as_returning())
                .get_result(conn)?;

            attach_products(conn, row.order_id, &order.product_ids)?;

            load_order(conn, row)
        })
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = orders::table
            .find(id)
            .select(OrderRow::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };

        load_order(&mut conn, row).map(Some)
    }

    fn list(&self) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let rows = orders::table
                .select(OrderRow::as_select())
                .order(orders::order_id.asc())
                .load(conn)?;

            let links = OrderProductRow::belonging_to(&rows)
                .select(OrderProductRow::as_select())
                .order(order_products::product_id.asc())
                .load(conn)?;

            Ok(links
                .grouped_by(&rows)
                .into_iter()
                .zip(rows)
                .map(|(links, row)| Order {
                    order_id: row.order_id,
                    customer_id: row.customer_id,
                    date: row.date,
                    products: links.into_iter().map(|l| l.product_id).collect(),
                })
                .collect())
        })
    }

    fn update(&self, id: i32, patch: OrderPatch) -> Result<Order, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let row = orders::table
                .find(id)
                .select(OrderRow::as_select())
                .for_update()
                .first(conn)
                .optional()?
                .ok_or_else(|| DomainError::not_found("order", id))?;

            let mut order = load_order(conn, row)?;
            order.apply_patch(&patch);

            if let Some(customer_id) = patch.customer_id {
                ensure_customer_exists(conn, customer_id)?;
            }

            diesel::update(orders::table.find(id))
                .set(&OrderValues {
                    date: order.date,
                    customer_id: order.customer_id,
                })
                .execute(conn)?;

            if let Some(ids) = patch.product_ids {
                ensure_products_exist(conn, &ids)?;
                detach_products(conn, id)?;
                attach_products(conn, id, &ids)?;

                let mut ids = ids;
                ids.sort_unstable();
                ids.dedup();
                order.products = ids;
            }

            Ok(order)
        })
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            detach_products(conn, id)?;

            let deleted = diesel::delete(orders::table.find(id)).execute(conn)?;
            if deleted == 0 {
                return Err(DomainError::not_found("order", id));
            }
            Ok(())
        })
    }
}
