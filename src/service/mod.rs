//! CustomerService: existence and id rules on top of the persistence gateway.

mod customer;
pub use customer::{CustomerService, ID_IN_CREATE_REQUEST};
