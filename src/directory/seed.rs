//! JSON seed loading
//!
//! Builds a [`Directory`] from a self-contained JSON document. Seed records
//! reference each other symbolically (departments by name, employees by
//! email) so documents stay writable by hand. Manager links are resolved in
//! a second pass, which lets a report appear before their manager in the
//! file.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use super::department::NewDepartment;
use super::employee::{EmployeeStatus, NewEmployee};
use super::review::{NewReview, Rating};
use super::store::{Directory, StoreError};
use super::types::{DepartmentId, EmployeeId, Money};

/// Errors that can occur while loading a seed document
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Seed parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed references unknown department \"{0}\"")]
    UnknownDepartment(String),

    #[error("Seed references unknown employee \"{0}\"")]
    UnknownEmployee(String),

    #[error("Duplicate department name \"{0}\" in seed")]
    DuplicateDepartment(String),

    #[error("Duplicate employee email \"{0}\" in seed")]
    DuplicateEmail(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Deserialize)]
struct SeedDocument {
    departments: Vec<SeedDepartment>,
    employees: Vec<SeedEmployee>,
    #[serde(default)]
    reviews: Vec<SeedReview>,
}

#[derive(Debug, Deserialize)]
struct SeedDepartment {
    name: String,
    location: String,
    budget: Money,
}

#[derive(Debug, Deserialize)]
struct SeedEmployee {
    first_name: String,
    last_name: String,
    email: String,
    #[serde(default)]
    phone: Option<String>,

    /// Department name, resolved against the seed's departments
    department: String,

    /// Manager email, resolved after all employees are inserted
    #[serde(default)]
    manager: Option<String>,

    hire_date: NaiveDate,
    salary: Money,
    #[serde(default)]
    status: EmployeeStatus,
}

#[derive(Debug, Deserialize)]
struct SeedReview {
    /// Reviewed employee's email
    employee: String,

    /// Reviewer's email
    reviewer: String,

    review_date: NaiveDate,
    rating: Rating,
    comment: String,
}

/// Build a populated [`Directory`] from a JSON seed document.
pub fn from_json(json: &str) -> Result<Directory, SeedError> {
    let document: SeedDocument = serde_json::from_str(json)?;
    let mut store = Directory::new();

    let mut department_ids: FxHashMap<String, DepartmentId> = FxHashMap::default();
    for dept in document.departments {
        if department_ids.contains_key(&dept.name) {
            return Err(SeedError::DuplicateDepartment(dept.name));
        }
        let id = store.insert_department(NewDepartment {
            name: dept.name.clone(),
            location: dept.location,
            budget: dept.budget,
        })?;
        department_ids.insert(dept.name, id);
    }

    // First pass inserts every employee unmanaged so the second pass can
    // link managers regardless of file order.
    let mut employee_ids: FxHashMap<String, EmployeeId> = FxHashMap::default();
    let mut manager_links: Vec<(EmployeeId, String)> = Vec::new();
    for emp in document.employees {
        let department = *department_ids
            .get(&emp.department)
            .ok_or_else(|| SeedError::UnknownDepartment(emp.department.clone()))?;
        if employee_ids.contains_key(&emp.email) {
            return Err(SeedError::DuplicateEmail(emp.email));
        }

        let id = store.insert_employee(NewEmployee {
            first_name: emp.first_name,
            last_name: emp.last_name,
            department,
            manager: None,
            hire_date: emp.hire_date,
            salary: emp.salary,
            email: emp.email.clone(),
            phone: emp.phone,
            status: emp.status,
        })?;
        employee_ids.insert(emp.email, id);
        if let Some(manager_email) = emp.manager {
            manager_links.push((id, manager_email));
        }
    }

    for (id, manager_email) in manager_links {
        let manager = *employee_ids
            .get(&manager_email)
            .ok_or(SeedError::UnknownEmployee(manager_email))?;
        store.update_employee_manager(id, Some(manager))?;
    }

    for review in document.reviews {
        let employee = *employee_ids
            .get(&review.employee)
            .ok_or(SeedError::UnknownEmployee(review.employee))?;
        let reviewer = *employee_ids
            .get(&review.reviewer)
            .ok_or(SeedError::UnknownEmployee(review.reviewer))?;
        store.add_review(NewReview {
            employee,
            review_date: review.review_date,
            rating: review.rating,
            comment: review.comment,
            reviewer,
        })?;
    }

    info!(
        departments = store.department_count(),
        employees = store.employee_count(),
        reviews = store.review_count(),
        "seed loaded"
    );
    Ok(store)
}
