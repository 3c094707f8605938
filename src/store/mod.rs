//! Employee store and identity resolution.
//!
//! This module contains the in-memory system of record
//! ([`EmployeeStore`]), its tolerant bulk-load and save operations, and
//! the identity [`resolve`] ladder used to match loosely-formatted IDs
//! and name fragments.

mod employee_store;
mod resolver;

pub use employee_store::{EmployeeStore, LoadReport, SkippedRow};
pub use resolver::resolve;
