use diesel::prelude::*;
use diesel::result::Error as DieselError;

use crate::db::DbPool;
use crate::domain::account::{CustomerAccount, CustomerAccountPatch, NewCustomerAccount};
use crate::domain::errors::DomainError;
use crate::domain::ports::AccountRepository;
use crate::schema::customer_accounts;

use super::models::{AccountRow, AccountValues};
use super::{ensure_customer_exists, violated_unique_constraint};

pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Turn the two unique constraints on `customer_accounts` into readable
/// conflicts.
fn conflict_for(e: DieselError, username: &str, customer_id: i32) -> DomainError {
    let message = match violated_unique_constraint(&e) {
        Some("customer_accounts_username_key") => {
            format!("username '{username}' is already taken")
        }
        Some("customer_accounts_customer_id_key") => {
            format!("customer {customer_id} already has an account")
        }
        _ => return e.into(),
    };
    DomainError::Conflict(message)
}

impl AccountRepository for DieselAccountRepository {
    fn create(&self, account: NewCustomerAccount) -> Result<CustomerAccount, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            ensure_customer_exists(conn, account.customer_id)?;

            let row = diesel::insert_into(customer_accounts::table)
                .values(&AccountValues {
                    username: &account.username,
                    password_hash: &account.password_hash,
                    customer_id: account.customer_id,
                })
                .returning(AccountRow::as_returning())
                .get_result(conn)
                .map_err(|e| conflict_for(e, &account.username, account.customer_id))?;

            Ok(row.into())
        })
    }

    fn find_by_id(&self, id: i32) -> Result<Option<CustomerAccount>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = customer_accounts::table
            .find(id)
            .select(AccountRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(CustomerAccount::from))
    }

    fn list(&self) -> Result<Vec<CustomerAccount>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = customer_accounts::table
            .select(AccountRow::as_select())
            .order(customer_accounts::account_id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(CustomerAccount::from).collect())
    }

    fn update(
        &self,
        id: i32,
        patch: CustomerAccountPatch,
    ) -> Result<CustomerAccount, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let mut account: CustomerAccount = customer_accounts::table
                .find(id)
                .select(AccountRow::as_select())
                .for_update()
                .first(conn)
                .optional()?
                .ok_or_else(|| DomainError::not_found("customer account", id))?
                .into();

            if let Some(customer_id) = patch.customer_id {
                ensure_customer_exists(conn, customer_id)?;
            }
            account.apply_patch(patch);

            diesel::update(customer_accounts::table.find(id))
                .set(&AccountValues {
                    username: &account.username,
                    password_hash: &account.password_hash,
                    customer_id: account.customer_id,
                })
                .execute(conn)
                .map_err(|e| conflict_for(e, &account.username, account.customer_id))?;

            Ok(account)
        })
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let deleted = diesel::delete(customer_accounts::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(DomainError::not_found("customer account", id));
        }
        Ok(())
    }
}
