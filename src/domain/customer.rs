use serde::Serialize;
use utoipa::ToSchema;

use super::merge;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Customer {
    pub customer_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Fields supplied by a partial update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Customer {
    pub fn apply_patch(&mut self, patch: CustomerPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.email, patch.email);
        merge(&mut self.phone, patch.phone);
    }
}
