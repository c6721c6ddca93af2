//! Read-side analytics engines
//!
//! Derives reports from a shared borrow of the record store: the reporting
//! hierarchy, department cost rollups, and review/compensation rankings.
//! Every function recomputes from the store's current data on each call and
//! holds the borrow for the whole computation, so one call always sees one
//! consistent snapshot.

pub mod departments;
pub mod hierarchy;
pub mod performance;
pub mod rank;

use thiserror::Error;

use crate::directory::{EmployeeId, StoreError};

/// Errors that can occur while deriving reports
#[derive(Error, Debug, PartialEq)]
pub enum AnalyticsError {
    /// The manager graph contains a reporting cycle through this employee
    #[error("Manager cycle detected through employee {0}")]
    CycleDetected(EmployeeId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

// Re-export main types
pub use departments::{department_stats, DepartmentStats};
pub use hierarchy::{resolve_hierarchy, OrgNode};
pub use performance::{
    performance_summary, ranked_performance, salary_quantiles, PerformanceSummary, RankedReview,
    SalaryQuantile, COMMENT_DELIMITER,
};
