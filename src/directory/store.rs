//! In-memory record store implementation
//!
//! Holds the canonical tables for departments, employees and performance
//! reviews, plus the append-only salary change log. Referential integrity is
//! enforced at insertion time, so every stored reference resolves.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use super::change::{SalaryChange, SalaryChangeInput};
use super::department::{Department, NewDepartment};
use super::employee::{Employee, EmployeeFilter, EmployeeStatus, NewEmployee};
use super::review::{NewReview, PerformanceReview};
use super::types::{ChangeId, DateRange, DepartmentId, EmployeeId, Money, ReviewId};
use chrono::NaiveDate;

/// Errors that can occur during record store operations
#[derive(Error, Debug, PartialEq)]
pub enum StoreError {
    #[error("Employee {0} not found")]
    EmployeeNotFound(EmployeeId),

    #[error("Department {0} not found")]
    DepartmentNotFound(DepartmentId),

    #[error("Invalid employee: department {0} does not exist")]
    UnknownDepartment(DepartmentId),

    #[error("Invalid employee: manager {0} does not exist")]
    UnknownManager(EmployeeId),

    #[error("Invalid record: employee {0} does not exist")]
    UnknownEmployee(EmployeeId),

    #[error("Invalid review: reviewer {0} does not exist")]
    UnknownReviewer(EmployeeId),

    #[error("Employee {0} cannot be their own manager")]
    SelfManager(EmployeeId),

    #[error("Rating {0} is outside the 1..=5 scale")]
    RatingOutOfRange(u8),

    #[error("Salary {0} must not be negative")]
    NegativeSalary(Money),

    #[error("Budget {0} must not be negative")]
    NegativeBudget(Money),

    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Record access interface consumed by the payroll and analytics engines.
///
/// The engines depend on this trait rather than on [`Directory`] directly, so
/// any backing store that can resolve employees, departments and reviews (and
/// append to the salary change log) can drive them.
pub trait RecordStore {
    /// Look up a single employee by id.
    fn get_employee(&self, id: EmployeeId) -> StoreResult<&Employee>;

    /// All employees matching the filter, in insertion order.
    fn employees(&self, filter: &EmployeeFilter) -> Vec<&Employee>;

    /// All departments, in insertion order.
    fn departments(&self) -> Vec<&Department>;

    /// Reviews, optionally restricted to one employee and/or a date range
    /// (inclusive on both ends).
    fn reviews(
        &self,
        employee: Option<EmployeeId>,
        period: Option<DateRange>,
    ) -> Vec<&PerformanceReview>;

    /// Replace an employee's salary and return the previous value.
    ///
    /// Rejects negative salaries. Equality checking is the caller's concern;
    /// writing the same value back succeeds without complaint.
    fn update_employee_salary(&mut self, id: EmployeeId, new_salary: Money) -> StoreResult<Money>;

    /// Append an entry to the salary change log and return its id.
    ///
    /// Identifiers are assigned in strictly increasing order, so the log's
    /// id order is its append order. Entries are never updated or removed.
    fn append_salary_change(&mut self, input: SalaryChangeInput) -> StoreResult<ChangeId>;

    /// The full salary change log, in append order.
    fn salary_changes(&self) -> &[SalaryChange];
}

/// In-memory employee directory
///
/// Uses insertion-ordered maps for deterministic iteration plus hash indexes
/// for O(1) reference lookups:
/// - departments: DepartmentId -> Department
/// - employees: EmployeeId -> Employee
/// - reviews: ReviewId -> PerformanceReview
/// - changes: append-only salary change log
/// - department_index: DepartmentId -> Vec<EmployeeId>
/// - manager_index: EmployeeId -> Vec<EmployeeId> (direct reports)
/// - review_index: EmployeeId -> Vec<ReviewId>
#[derive(Debug)]
pub struct Directory {
    departments: IndexMap<DepartmentId, Department>,
    employees: IndexMap<EmployeeId, Employee>,
    reviews: IndexMap<ReviewId, PerformanceReview>,

    /// Append-only audit trail of committed salary changes
    changes: Vec<SalaryChange>,

    /// Employees by department
    department_index: FxHashMap<DepartmentId, Vec<EmployeeId>>,

    /// Direct reports by manager
    manager_index: FxHashMap<EmployeeId, Vec<EmployeeId>>,

    /// Reviews by reviewed employee
    review_index: FxHashMap<EmployeeId, Vec<ReviewId>>,

    next_department_id: u64,
    next_employee_id: u64,
    next_review_id: u64,
    next_change_id: u64,
}

impl Directory {
    /// Create a new empty directory
    pub fn new() -> Self {
        Directory {
            departments: IndexMap::new(),
            employees: IndexMap::new(),
            reviews: IndexMap::new(),
            changes: Vec::new(),
            department_index: FxHashMap::default(),
            manager_index: FxHashMap::default(),
            review_index: FxHashMap::default(),
            next_department_id: 1,
            next_employee_id: 1,
            next_review_id: 1,
            next_change_id: 1,
        }
    }

    /// Create a department with an auto-generated id
    pub fn insert_department(&mut self, input: NewDepartment) -> StoreResult<DepartmentId> {
        if input.budget < Money::ZERO {
            return Err(StoreError::NegativeBudget(input.budget));
        }

        let id = DepartmentId::new(self.next_department_id);
        self.next_department_id += 1;

        debug!(department = %id, name = %input.name, "department created");
        self.departments.insert(id, Department::new(id, input));
        Ok(id)
    }

    /// Create an employee with an auto-generated id
    ///
    /// The department must exist, and the manager (when given) must already
    /// be on record. Salaries must be non-negative.
    pub fn insert_employee(&mut self, input: NewEmployee) -> StoreResult<EmployeeId> {
        if !self.departments.contains_key(&input.department) {
            return Err(StoreError::UnknownDepartment(input.department));
        }
        if let Some(manager_id) = input.manager {
            if !self.employees.contains_key(&manager_id) {
                return Err(StoreError::UnknownManager(manager_id));
            }
        }
        if input.salary < Money::ZERO {
            return Err(StoreError::NegativeSalary(input.salary));
        }

        let id = EmployeeId::new(self.next_employee_id);
        self.next_employee_id += 1;

        self.department_index
            .entry(input.department)
            .or_default()
            .push(id);
        if let Some(manager_id) = input.manager {
            self.manager_index.entry(manager_id).or_default().push(id);
        }

        debug!(employee = %id, email = %input.email, "employee created");
        self.employees.insert(id, Employee::new(id, input));
        Ok(id)
    }

    /// Record a performance review with an auto-generated id
    pub fn add_review(&mut self, input: NewReview) -> StoreResult<ReviewId> {
        if !self.employees.contains_key(&input.employee) {
            return Err(StoreError::UnknownEmployee(input.employee));
        }
        if !self.employees.contains_key(&input.reviewer) {
            return Err(StoreError::UnknownReviewer(input.reviewer));
        }

        let id = ReviewId::new(self.next_review_id);
        self.next_review_id += 1;

        self.review_index.entry(input.employee).or_default().push(id);

        debug!(review = %id, employee = %input.employee, "review recorded");
        self.reviews.insert(id, PerformanceReview::new(id, input));
        Ok(id)
    }

    /// Reassign an employee's manager and return the previous assignment.
    ///
    /// `None` detaches the employee (making them a root of the reporting
    /// forest). An employee may not manage themselves; longer reporting
    /// cycles are representable here and surface when the hierarchy is
    /// resolved.
    pub fn update_employee_manager(
        &mut self,
        id: EmployeeId,
        manager: Option<EmployeeId>,
    ) -> StoreResult<Option<EmployeeId>> {
        if !self.employees.contains_key(&id) {
            return Err(StoreError::EmployeeNotFound(id));
        }
        if let Some(manager_id) = manager {
            if manager_id == id {
                return Err(StoreError::SelfManager(id));
            }
            if !self.employees.contains_key(&manager_id) {
                return Err(StoreError::UnknownManager(manager_id));
            }
        }

        let employee = self
            .employees
            .get_mut(&id)
            .ok_or(StoreError::EmployeeNotFound(id))?;
        let previous = employee.manager;
        employee.manager = manager;
        employee.update_timestamp();

        if let Some(old_manager) = previous {
            if let Some(reports) = self.manager_index.get_mut(&old_manager) {
                reports.retain(|&eid| eid != id);
            }
        }
        if let Some(new_manager) = manager {
            self.manager_index.entry(new_manager).or_default().push(id);
        }

        debug!(employee = %id, ?manager, "manager updated");
        Ok(previous)
    }

    /// Change an employee's status and return the previous one.
    ///
    /// Employees are never removed from the directory; termination is a
    /// status transition.
    pub fn update_employee_status(
        &mut self,
        id: EmployeeId,
        status: EmployeeStatus,
    ) -> StoreResult<EmployeeStatus> {
        let employee = self
            .employees
            .get_mut(&id)
            .ok_or(StoreError::EmployeeNotFound(id))?;
        let previous = employee.status;
        employee.status = status;
        employee.update_timestamp();

        debug!(employee = %id, %status, "status updated");
        Ok(previous)
    }

    /// Replace a department's budget and return the previous value
    pub fn update_department_budget(
        &mut self,
        id: DepartmentId,
        budget: Money,
    ) -> StoreResult<Money> {
        if budget < Money::ZERO {
            return Err(StoreError::NegativeBudget(budget));
        }

        let department = self
            .departments
            .get_mut(&id)
            .ok_or(StoreError::DepartmentNotFound(id))?;
        let previous = department.budget;
        department.budget = budget;
        department.update_timestamp();

        debug!(department = %id, %budget, "budget updated");
        Ok(previous)
    }

    /// Look up a department by id
    pub fn get_department(&self, id: DepartmentId) -> StoreResult<&Department> {
        self.departments
            .get(&id)
            .ok_or(StoreError::DepartmentNotFound(id))
    }

    /// All employees assigned to a department
    pub fn employees_in_department(&self, department: DepartmentId) -> Vec<&Employee> {
        self.department_index
            .get(&department)
            .map(|ids| ids.iter().filter_map(|id| self.employees.get(id)).collect())
            .unwrap_or_default()
    }

    /// All direct reports of a manager
    pub fn direct_reports(&self, manager: EmployeeId) -> Vec<&Employee> {
        self.manager_index
            .get(&manager)
            .map(|ids| ids.iter().filter_map(|id| self.employees.get(id)).collect())
            .unwrap_or_default()
    }

    /// Audit trail entries for one employee, in append order
    pub fn salary_history(&self, employee: EmployeeId) -> Vec<&SalaryChange> {
        self.changes
            .iter()
            .filter(|change| change.employee == employee)
            .collect()
    }

    /// Find an employee by email address
    pub fn find_employee_by_email(&self, email: &str) -> Option<&Employee> {
        self.employees.values().find(|e| e.email == email)
    }

    /// Total number of departments
    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    /// Total number of employees
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Total number of recorded reviews
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Total number of audit trail entries
    pub fn change_count(&self) -> usize {
        self.changes.len()
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for Directory {
    fn get_employee(&self, id: EmployeeId) -> StoreResult<&Employee> {
        self.employees
            .get(&id)
            .ok_or(StoreError::EmployeeNotFound(id))
    }

    fn employees(&self, filter: &EmployeeFilter) -> Vec<&Employee> {
        self.employees
            .values()
            .filter(|e| filter.matches(e))
            .collect()
    }

    fn departments(&self) -> Vec<&Department> {
        self.departments.values().collect()
    }

    fn reviews(
        &self,
        employee: Option<EmployeeId>,
        period: Option<DateRange>,
    ) -> Vec<&PerformanceReview> {
        let in_period =
            |review: &&PerformanceReview| period.map_or(true, |p| p.contains(review.review_date));

        match employee {
            Some(id) => self
                .review_index
                .get(&id)
                .map(|review_ids| {
                    review_ids
                        .iter()
                        .filter_map(|rid| self.reviews.get(rid))
                        .filter(in_period)
                        .collect()
                })
                .unwrap_or_default(),
            None => self.reviews.values().filter(in_period).collect(),
        }
    }

    fn update_employee_salary(&mut self, id: EmployeeId, new_salary: Money) -> StoreResult<Money> {
        if new_salary < Money::ZERO {
            return Err(StoreError::NegativeSalary(new_salary));
        }

        let employee = self
            .employees
            .get_mut(&id)
            .ok_or(StoreError::EmployeeNotFound(id))?;
        let previous = employee.salary;
        employee.salary = new_salary;
        employee.update_timestamp();

        debug!(employee = %id, %previous, %new_salary, "salary updated");
        Ok(previous)
    }

    fn append_salary_change(&mut self, input: SalaryChangeInput) -> StoreResult<ChangeId> {
        if !self.employees.contains_key(&input.employee) {
            return Err(StoreError::UnknownEmployee(input.employee));
        }

        let id = ChangeId::new(self.next_change_id);
        self.next_change_id += 1;

        debug!(change = %id, employee = %input.employee, "salary change appended");
        self.changes.push(SalaryChange::new(id, input));
        Ok(id)
    }

    fn salary_changes(&self) -> &[SalaryChange] {
        &self.changes
    }
}
