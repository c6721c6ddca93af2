//! Core employee directory implementation
//!
//! This module implements the record model the engines run on:
//! - Departments with budgets and locations
//! - Employees arranged in a manager forest, each assigned to a department
//! - Performance reviews on the 1..=5 scale
//! - An append-only salary change log
//!
//! References between records are validated on insert, so stored data always
//! resolves. Loading a whole organization from JSON lives in [`seed`].

pub mod change;
pub mod department;
pub mod employee;
pub mod review;
pub mod seed;
pub mod store;
pub mod types;

// Re-export main types
pub use change::{SalaryChange, SalaryChangeInput};
pub use department::{Department, NewDepartment};
pub use employee::{Employee, EmployeeFilter, EmployeeStatus, NewEmployee};
pub use review::{NewReview, PerformanceReview, Rating};
pub use seed::SeedError;
pub use store::{Directory, RecordStore, StoreError, StoreResult};
pub use types::{ChangeId, DateRange, DepartmentId, EmployeeId, Money, ReviewId};
