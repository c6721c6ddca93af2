//! Employee records and listing filters

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::{DepartmentId, EmployeeId, Money};

/// Employment status of a directory record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
    OnLeave,
    Terminated,
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EmployeeStatus::Active => "ACTIVE",
            EmployeeStatus::Inactive => "INACTIVE",
            EmployeeStatus::OnLeave => "ON_LEAVE",
            EmployeeStatus::Terminated => "TERMINATED",
        };
        write!(f, "{}", s)
    }
}

/// A person on the payroll.
///
/// `manager` is absent for hierarchy roots. The manager graph is expected to
/// form a forest, but the store only validates that references resolve;
/// acyclicity is verified by the hierarchy resolver at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier assigned by the store
    pub id: EmployeeId,

    pub first_name: String,
    pub last_name: String,

    /// Owning department; must resolve
    pub department: DepartmentId,

    /// Direct manager; `None` marks a root of the reporting hierarchy
    pub manager: Option<EmployeeId>,

    pub hire_date: NaiveDate,

    /// Current salary, non-negative
    pub salary: Money,

    pub email: String,
    pub phone: Option<String>,
    pub status: EmployeeStatus,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub(crate) fn new(id: EmployeeId, input: NewEmployee) -> Self {
        let now = Utc::now();
        Employee {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            department: input.department,
            manager: input.manager,
            hire_date: input.hire_date,
            salary: input.salary,
            email: input.email,
            phone: input.phone,
            status: input.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Name as it appears in hierarchy paths and reports: "First Last".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub(crate) fn update_timestamp(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Input for creating an employee; the store assigns the identifier and
/// validates that the department and manager references resolve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub department: DepartmentId,
    #[serde(default)]
    pub manager: Option<EmployeeId>,
    pub hire_date: NaiveDate,
    pub salary: Money,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: EmployeeStatus,
}

/// Criteria for narrowing employee listings. A default filter matches
/// every employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFilter {
    /// Only employees of this department
    pub department: Option<DepartmentId>,
    /// Only employees with this status
    pub status: Option<EmployeeStatus>,
    /// Only direct reports of this manager
    pub manager: Option<EmployeeId>,
}

impl EmployeeFilter {
    pub fn matches(&self, employee: &Employee) -> bool {
        if let Some(dept) = self.department {
            if employee.department != dept {
                return false;
            }
        }
        if let Some(status) = self.status {
            if employee.status != status {
                return false;
            }
        }
        if let Some(manager) = self.manager {
            if employee.manager != Some(manager) {
                return false;
            }
        }
        true
    }
}
