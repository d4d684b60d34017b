use crate::domain::errors::DomainError;
use crate::domain::order::{product_set, NewOrder, Order, OrderPatch};
use crate::domain::ports::OrderRepository;

pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_order(&self, mut order: NewOrder) -> Result<Order, DomainError> {
        order.product_ids = product_set(order.product_ids)?;
        self.repo.create(order)
    }

    pub fn get_order(&self, id: i32) -> Result<Order, DomainError> {
        self.repo
            .find_by_id(id)?
            .ok_or_else(|| DomainError::not_found("order", id))
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.repo.list()
    }

    /// A supplied product list replaces the current set and, like on create,
    /// may not be empty.
    pub fn update_order(&self, id: i32, mut patch: OrderPatch) -> Result<Order, DomainError> {
        patch.product_ids = patch.product_ids.map(product_set).transpose()?;
        self.repo.update(id, patch)
    }

    pub fn delete_order(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id)
    }
}
