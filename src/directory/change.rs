//! Salary change audit records
//!
//! Every committed salary mutation appends one [`SalaryChange`] to the store's
//! change log. Entries carry the identifier order they were appended in and
//! are never updated or removed afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{ChangeId, EmployeeId, Money};

/// One immutable entry in the salary audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryChange {
    /// Append-order identifier assigned by the store
    pub id: ChangeId,

    /// Employee whose salary changed
    pub employee: EmployeeId,

    pub old_salary: Money,
    pub new_salary: Money,

    /// When the change was committed
    pub changed_at: DateTime<Utc>,

    /// Caller-supplied reason, e.g. "annual merit raise"
    pub reason: String,
}

impl SalaryChange {
    pub(crate) fn new(id: ChangeId, input: SalaryChangeInput) -> Self {
        SalaryChange {
            id,
            employee: input.employee,
            old_salary: input.old_salary,
            new_salary: input.new_salary,
            changed_at: input.changed_at,
            reason: input.reason,
        }
    }
}

/// Input for appending an audit entry; the store assigns the identifier and
/// validates the employee reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryChangeInput {
    pub employee: EmployeeId,
    pub old_salary: Money,
    pub new_salary: Money,
    pub changed_at: DateTime<Utc>,
    pub reason: String,
}
