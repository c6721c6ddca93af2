//! Salary mutation engine
//!
//! Applies percentage raises and keeps the audit trail in step with every
//! committed change. All writes go through one mutable borrow of the record
//! store, so a salary mutation and its audit entry land together.

pub mod audit;
pub mod raise;

use thiserror::Error;

use crate::directory::{EmployeeId, Money, StoreError};

/// Errors that can occur while mutating salaries
#[derive(Error, Debug, PartialEq)]
pub enum PayrollError {
    /// The requested adjustment would drive the salary below zero
    #[error("Raise would leave employee {employee} with negative salary {computed}")]
    NegativeSalary {
        employee: EmployeeId,
        computed: Money,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type PayrollResult<T> = Result<T, PayrollError>;

// Re-export main types
pub use audit::record_if_changed;
pub use raise::{PayrollPolicy, RaiseProcessor};
