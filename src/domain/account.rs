use super::merge;

/// A customer's login account. Not serializable: responses go through a DTO
/// that leaves the password hash out.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerAccount {
    pub account_id: i32,
    pub username: String,
    pub password_hash: String,
    pub customer_id: i32,
}

#[derive(Debug, Clone)]
pub struct NewCustomerAccount {
    pub username: String,
    pub password_hash: String,
    pub customer_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerAccountPatch {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub customer_id: Option<i32>,
}

impl CustomerAccount {
    pub fn apply_patch(&mut self, patch: CustomerAccountPatch) {
        merge(&mut self.username, patch.username);
        merge(&mut self.password_hash, patch.password_hash);
        merge(&mut self.customer_id, patch.customer_id);
    }
}
