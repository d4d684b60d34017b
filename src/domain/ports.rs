use super::account::{CustomerAccount, CustomerAccountPatch, NewCustomerAccount};
use super::customer::{Customer, CustomerPatch, NewCustomer};
use super::errors::DomainError;
use super::order::{NewOrder, Order, OrderPatch};
use super::product::{NewProduct, Product, ProductFilter, ProductPatch};

pub trait CustomerRepository: Send + Sync + 'static {
    fn create(&self, customer: NewCustomer) -> Result<Customer, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DomainError>;
    fn list(&self) -> Result<Vec<Customer>, DomainError>;
    fn update(&self, id: i32, patch: CustomerPatch) -> Result<Customer, DomainError>;
    fn delete(&self, id: i32) -> Result<(), DomainError>;
}

pub trait AccountRepository: Send + Sync + 'static {
    /// Fails with `InvalidInput` when the customer does not exist and with
    /// `Conflict` when the username is taken.
    fn create(&self, account: NewCustomerAccount) -> Result<CustomerAccount, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<CustomerAccount>, DomainError>;
    fn list(&self) -> Result<Vec<CustomerAccount>, DomainError>;
    fn update(&self, id: i32, patch: CustomerAccountPatch)
        -> Result<CustomerAccount, DomainError>;
    fn delete(&self, id: i32) -> Result<(), DomainError>;
}

pub trait ProductRepository: Send + Sync + 'static {
    fn create(&self, product: NewProduct) -> Result<Product, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<Product>, DomainError>;
    fn list(&self, filter: ProductFilter) -> Result<Vec<Product>, DomainError>;
    fn update(&self, id: i32, patch: ProductPatch) -> Result<Product, DomainError>;
    fn delete(&self, id: i32) -> Result<(), DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    /// Inserts the order and its product rows atomically. Every product id
    /// must exist; the first missing one aborts the insert with `NotFound`.
    fn create(&self, order: NewOrder) -> Result<Order, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<Order>, DomainError>;
    fn list(&self) -> Result<Vec<Order>, DomainError>;
    /// Applies scalar fields and, when `patch.product_ids` is set, replaces the
    /// product set. All-or-nothing.
    fn update(&self, id: i32, patch: OrderPatch) -> Result<Order, DomainError>;
    /// Detaches the order's products, then removes the order.
    fn delete(&self, id: i32) -> Result<(), DomainError>;
}
