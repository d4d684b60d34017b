use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::customer::{Customer, CustomerPatch, NewCustomer};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;
use crate::schema::customers;

use super::models::{CustomerRow, CustomerValues};

pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for DieselCustomerRepository {
    fn create(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::insert_into(customers::table)
            .values(&CustomerValues {
                name: &customer.name,
                email: &customer.email,
                phone: &customer.phone,
            })
            .returning(CustomerRow::as_returning())
            .get_result(&mut conn)?;

        Ok(row.into())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = customers::table
            .find(id)
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Customer::from))
    }

    fn list(&self) -> Result<Vec<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = customers::table
            .select(CustomerRow::as_select())
            .order(customers::customer_id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    fn update(&self, id: i32, patch: CustomerPatch) -> Result<Customer, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let mut customer: Customer = customers::table
                .find(id)
                .select(CustomerRow::as_select())
                .for_update()
                .first(conn)
                .optional()?
                .ok_or_else(|| DomainError::not_found("customer", id))?
                .into();

            customer.apply_patch(patch);

            diesel::update(customers::table.find(id))
                .set(&CustomerValues {
                    name: &customer.name,
                    email: &customer.email,
                    phone: &customer.phone,
                })
                .execute(conn)?;

            Ok(customer)
        })
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let deleted = diesel::delete(customers::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(DomainError::not_found("customer", id));
        }
        Ok(())
    }
}
