use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::errors::DomainError;
use super::merge;

/// An order together with the ids of the products attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Order {
    pub order_id: i32,
    pub customer_id: i32,
    pub date: NaiveDate,
    /// Attached product ids, ascending.
    pub products: Vec<i32>,
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: i32,
    pub date: NaiveDate,
    pub product_ids: Vec<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub customer_id: Option<i32>,
    pub date: Option<NaiveDate>,
    /// When present, replaces the whole product set.
    pub product_ids: Option<Vec<i32>>,
}

impl Order {
    /// Merge the scalar fields of `patch`. The product set is replaced by the
    /// repository, which has to resolve every id first.
    pub fn apply_patch(&mut self, patch: &OrderPatch) {
        merge(&mut self.customer_id, patch.customer_id);
        merge(&mut self.date, patch.date);
    }
}

/// Collapse a requested product list into the set the order will hold.
///
/// An order must carry at least one product; an empty list is a business-rule
/// violation rather than a malformed request.
pub fn product_set(ids: Vec<i32>) -> Result<Vec<i32>, DomainError> {
    let set: BTreeSet<i32> = ids.into_iter().collect();
    if set.is_empty() {
        return Err(DomainError::BusinessRule(
            "An order must contain at least one product".to_string(),
        ));
    }
    Ok(set.into_iter().collect())
}
