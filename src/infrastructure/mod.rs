pub mod account_repo;
pub mod customer_repo;
pub mod models;
pub mod order_repo;
pub mod product_repo;

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::PgConnection;

use crate::domain::errors::DomainError;
use crate::schema::customers;

pub use account_repo::DieselAccountRepository;
pub use customer_repo::DieselCustomerRepository;
pub use order_repo::DieselOrderRepository;
pub use product_repo::DieselProductRepository;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<DieselError> for DomainError {
    fn from(e: DieselError) -> Self {
        match e {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                DomainError::Conflict(info.message().to_string())
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                DomainError::Conflict(format!("record is still referenced: {}", info.message()))
            }
            other => DomainError::Internal(other.to_string()),
        }
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

/// Name of the constraint behind a unique violation, if that is what `e` is.
pub(crate) fn violated_unique_constraint(e: &DieselError) -> Option<&str> {
    match e {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            info.constraint_name()
        }
        _ => None,
    }
}

/// Reject a write whose `customer_id` does not point at a stored customer.
pub(crate) fn ensure_customer_exists(
    conn: &mut PgConnection,
    customer_id: i32,
) -> Result<(), DomainError> {
    let exists: bool = diesel::select(diesel::dsl::exists(
        customers::table.filter(customers::customer_id.eq(customer_id)),
    ))
    .get_result(conn)?;

    if exists {
        Ok(())
    } else {
        Err(DomainError::invalid_field(
            "customer_id",
            format!("customer {customer_id} does not exist"),
        ))
    }
}
