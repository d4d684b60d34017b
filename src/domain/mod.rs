pub mod account;
pub mod customer;
pub mod errors;
pub mod order;
pub mod ports;
pub mod product;

/// Overwrite `slot` only when the patch carries a value for it.
pub(crate) fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
