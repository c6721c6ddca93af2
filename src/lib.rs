//! Orgledger
//!
//! An in-memory employee directory with an audited payroll write path and a
//! set of read-side analytics engines.
//!
//! # Architecture
//!
//! - [`directory`]: the record store. Departments, employees, performance
//!   reviews, and the append-only salary change log, with referential
//!   integrity enforced on every write. Engines reach it through the
//!   [`RecordStore`] trait.
//! - [`payroll`]: the write path. Percentage raises validated, rounded to
//!   the currency's minor units, and committed together with their audit
//!   entry under one mutable borrow.
//! - [`analytics`]: the read path. Hierarchy resolution with cycle
//!   detection, department cost rollups, and review/salary rankings, each
//!   recomputed from a consistent snapshot per call.
//!
//! Writes take `&mut` and reads take `&`, so concurrent raises against one
//! store serialize and a report never observes a half-applied raise. Sharing
//! a store across threads is a deployment concern; wrap it in a
//! `std::sync::RwLock` at that boundary.
//!
//! # Example Usage
//!
//! ```rust
//! use orgledger::{Directory, NewDepartment, NewEmployee, RaiseProcessor, RecordStore};
//! use orgledger::analytics::resolve_hierarchy;
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let mut store = Directory::new();
//! let dept = store.insert_department(NewDepartment {
//!     name: "Engineering".to_string(),
//!     location: "Berlin".to_string(),
//!     budget: Decimal::from(500_000),
//! }).unwrap();
//!
//! let alice = store.insert_employee(NewEmployee {
//!     first_name: "Alice".to_string(),
//!     last_name: "Nguyen".to_string(),
//!     department: dept,
//!     manager: None,
//!     hire_date: NaiveDate::from_ymd_opt(2019, 2, 11).unwrap(),
//!     salary: Decimal::from(85_000),
//!     email: "alice@example.com".to_string(),
//!     phone: None,
//!     status: Default::default(),
//! }).unwrap();
//!
//! // Raise and audit entry commit together
//! let committed = RaiseProcessor::new(&mut store)
//!     .apply_raise(alice, Decimal::TEN, "annual merit raise")
//!     .unwrap();
//! assert_eq!(committed, Decimal::from(93_500));
//! assert_eq!(store.salary_changes().len(), 1);
//!
//! let nodes = resolve_hierarchy(&store).unwrap();
//! assert_eq!(nodes[0].path, "Alice Nguyen");
//! ```

#![warn(clippy::all)]

pub mod analytics;
pub mod directory;
pub mod payroll;

// Re-export main types for convenience
pub use directory::{
    ChangeId, DateRange, Department, DepartmentId, Directory, Employee, EmployeeFilter,
    EmployeeId, EmployeeStatus, Money, NewDepartment, NewEmployee, NewReview, PerformanceReview,
    Rating, RecordStore, ReviewId, SalaryChange, SalaryChangeInput, SeedError, StoreError,
    StoreResult,
};

pub use payroll::{
    record_if_changed, PayrollError, PayrollPolicy, PayrollResult, RaiseProcessor,
};

pub use analytics::{
    department_stats, performance_summary, ranked_performance, resolve_hierarchy,
    salary_quantiles, AnalyticsError, AnalyticsResult, DepartmentStats, OrgNode,
    PerformanceSummary, RankedReview, SalaryQuantile,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
