use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::account::CustomerAccount;
use crate::domain::customer::Customer;
use crate::domain::product::Product;
use crate::schema::{customer_accounts, customers, order_products, orders, products};

// ── Customers ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub customer_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = customers)]
pub struct CustomerValues<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            customer_id: row.customer_id,
            name: row.name,
            email: row.email,
            phone: row.phone,
        }
    }
}

// ── Customer accounts ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = customer_accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccountRow {
    pub account_id: i32,
    pub username: String,
    pub password_hash: String,
    pub customer_id: i32,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = customer_accounts)]
pub struct AccountValues<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub customer_id: i32,
}

impl From<AccountRow> for CustomerAccount {
    fn from(row: AccountRow) -> Self {
        CustomerAccount {
            account_id: row.account_id,
            username: row.username,
            password_hash: row.password_hash,
            customer_id: row.customer_id,
        }
    }
}

// ── Products ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub product_id: i32,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = products)]
pub struct ProductValues<'a> {
    pub name: &'a str,
    pub price: f64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            product_id: row.product_id,
            name: row.name,
            price: row.price,
        }
    }
}

// ── Orders ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(primary_key(order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub order_id: i32,
    pub date: NaiveDate,
    pub customer_id: i32,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = orders)]
pub struct OrderValues {
    pub date: NaiveDate,
    pub customer_id: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations, Insertable)]
#[diesel(table_name = order_products)]
#[diesel(primary_key(order_id, product_id))]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderProductRow {
    pub order_id: i32,
    pub product_id: i32,
}
