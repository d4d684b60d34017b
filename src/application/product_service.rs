use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{NewProduct, Product, ProductFilter, ProductPatch};

pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_product(&self, product: NewProduct) -> Result<Product, DomainError> {
        self.repo.create(product)
    }

    pub fn get_product(&self, id: i32) -> Result<Product, DomainError> {
        self.repo
            .find_by_id(id)?
            .ok_or_else(|| DomainError::not_found("product", id))
    }

    pub fn list_products(&self, filter: ProductFilter) -> Result<Vec<Product>, DomainError> {
        self.repo.list(filter)
    }

    pub fn update_product(&self, id: i32, patch: ProductPatch) -> Result<Product, DomainError> {
        self.repo.update(id, patch)
    }

    pub fn delete_product(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id)
    }
}
