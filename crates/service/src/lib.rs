//! Service layer providing CRUD and listing operations on top of models.
//! - Every operation takes the connection explicitly, so a handler can pass a
//!   pooled connection or an open transaction.
//! - Reuses validation and entity definitions in the `models` crate.

pub mod errors;
pub mod pagination;
pub mod company_service;
pub mod computer_service;
pub mod person_service;
#[cfg(test)]
pub mod test_support;
