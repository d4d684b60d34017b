use crate::domain::customer::{Customer, CustomerPatch, NewCustomer};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;

pub struct CustomerService<R> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_customer(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        self.repo.create(customer)
    }

    pub fn get_customer(&self, id: i32) -> Result<Customer, DomainError> {
        self.repo
            .find_by_id(id)?
            .ok_or_else(|| DomainError::not_found("customer", id))
    }

    pub fn list_customers(&self) -> Result<Vec<Customer>, DomainError> {
        self.repo.list()
    }

    pub fn update_customer(&self, id: i32, patch: CustomerPatch) -> Result<Customer, DomainError> {
        self.repo.update(id, patch)
    }

    pub fn delete_customer(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id)
    }
}
