use crate::domain::account::{CustomerAccount, CustomerAccountPatch, NewCustomerAccount};
use crate::domain::errors::DomainError;
use crate::domain::ports::AccountRepository;

use super::password::hash_password;

/// Account data as received from a client, password still in clear text.
#[derive(Debug, Clone)]
pub struct AccountRegistration {
    pub username: String,
    pub password: String,
    pub customer_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct AccountChanges {
    pub username: Option<String>,
    pub password: Option<String>,
    pub customer_id: Option<i32>,
}

/// Passwords are hashed here and never handed to the repository in clear.
pub struct AccountService<R> {
    repo: R,
}

impl<R: AccountRepository> AccountService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_account(
        &self,
        registration: AccountRegistration,
    ) -> Result<CustomerAccount, DomainError> {
        let password_hash = hash_password(&registration.password)?;
        self.repo.create(NewCustomerAccount {
            username: registration.username,
            password_hash,
            customer_id: registration.customer_id,
        })
    }

    pub fn get_account(&self, id: i32) -> Result<CustomerAccount, DomainError> {
        self.repo
            .find_by_id(id)?
            .ok_or_else(|| DomainError::not_found("customer account", id))
    }

    pub fn list_accounts(&self) -> Result<Vec<CustomerAccount>, DomainError> {
        self.repo.list()
    }

    pub fn update_account(
        &self,
        id: i32,
        changes: AccountChanges,
    ) -> Result<CustomerAccount, DomainError> {
        let password_hash = changes
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        self.repo.update(
            id,
            CustomerAccountPatch {
                username: changes.username,
                password_hash,
                customer_id: changes.customer_id,
            },
        )
    }

    pub fn delete_account(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::application::password::verify_password;

    #[derive(Default)]
    struct InMemoryAccounts {
        rows: Mutex<Vec<CustomerAccount>>,
    }

    impl AccountRepository for InMemoryAccounts {
        fn create(&self, account: NewCustomerAccount) -> Result<CustomerAccount, DomainError> {
            let mut rows = self.rows.lock().unwrap();
            let created = CustomerAccount {
                account_id: rows.len() as i32 + 1,
                username: account.username,
                password_hash: account.password_hash,
                customer_id: account.customer_id,
            };
            rows.push(created.clone());
            Ok(created)
        }

        fn find_by_id(&self, id: i32) -> Result<Option<CustomerAccount>, DomainError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|a| a.account_id == id).cloned())
        }

        fn list(&self) -> Result<Vec<CustomerAccount>, DomainError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        fn update(
            &self,
            id: i32,
            patch: CustomerAccountPatch,
        ) -> Result<CustomerAccount, DomainError> {
            let mut rows = self.rows.lock().unwrap();
            let account = rows
                .iter_mut()
                .find(|a| a.account_id == id)
                .ok_or_else(|| DomainError::not_found("customer account", id))?;
            account.apply_patch(patch);
            Ok(account.clone())
        }

        fn delete(&self, id: i32) -> Result<(), DomainError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|a| a.account_id != id);
            if rows.len() == before {
                return Err(DomainError::not_found("customer account", id));
            }
            Ok(())
        }
    }

    fn registration() -> AccountRegistration {
        AccountRegistration {
            username: "ada".to_string(),
            password: "analytical-engine".to_string(),
            customer_id: 1,
        }
    }

    #[test]
    fn create_stores_a_hash_not_the_password() {
        let service = AccountService::new(InMemoryAccounts::default());

        let account = service.create_account(registration()).expect("create failed");

        assert_ne!(account.password_hash, "analytical-engine");
        assert!(verify_password("analytical-engine", &account.password_hash));
    }

    #[test]
    fn update_without_password_keeps_hash() {
        let service = AccountService::new(InMemoryAccounts::default());
        let account = service.create_account(registration()).expect("create failed");

        let updated = service
            .update_account(
                account.account_id,
                AccountChanges {
                    username: Some("countess".to_string()),
                    ..Default::default()
                },
            )
            .expect("update failed");

        assert_eq!(updated.username, "countess");
        assert_eq!(updated.password_hash, account.password_hash);
    }

    #[test]
    fn update_with_password_rehashes() {
        let service = AccountService::new(InMemoryAccounts::default());
        let account = service.create_account(registration()).expect("create failed");

        let updated = service
            .update_account(
                account.account_id,
                AccountChanges {
                    password: Some("difference-engine".to_string()),
                    ..Default::default()
                },
            )
            .expect("update failed");

        assert!(verify_password("difference-engine", &updated.password_hash));
        assert!(!verify_password("analytical-engine", &updated.password_hash));
    }

    #[test]
    fn get_missing_account_is_not_found() {
        let service = AccountService::new(InMemoryAccounts::default());
        assert!(matches!(
            service.get_account(9),
            Err(DomainError::NotFound { id: 9, .. })
        ));
    }
}
