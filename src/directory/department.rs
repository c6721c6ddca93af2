//! Department records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{DepartmentId, Money};

/// An organizational unit with a budget.
///
/// Departments are created and administered through the store; the analytics
/// core only reads them (aside from the timestamp refresh that every
/// administrative mutation performs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier assigned by the store
    pub id: DepartmentId,

    /// Display name, e.g. "Engineering"
    pub name: String,

    /// Office location
    pub location: String,

    /// Allocated budget, non-negative
    pub budget: Money,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last administrative modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Department {
    pub(crate) fn new(id: DepartmentId, input: NewDepartment) -> Self {
        let now = Utc::now();
        Department {
            id,
            name: input.name,
            location: input.location,
            budget: input.budget,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn update_timestamp(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Input for creating a department; the store assigns the identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDepartment {
    pub name: String,
    pub location: String,
    pub budget: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_new_department_carries_input() {
        let dept = Department::new(
            DepartmentId::new(1),
            NewDepartment {
                name: "Engineering".to_string(),
                location: "Berlin".to_string(),
                budget: Decimal::from(500_000),
            },
        );

        assert_eq!(dept.id, DepartmentId::new(1));
        assert_eq!(dept.name, "Engineering");
        assert_eq!(dept.location, "Berlin");
        assert_eq!(dept.budget, Decimal::from(500_000));
        assert_eq!(dept.created_at, dept.updated_at);
    }

    #[test]
    fn test_update_timestamp_moves_forward() {
        let mut dept = Department::new(
            DepartmentId::new(2),
            NewDepartment {
                name: "Sales".to_string(),
                location: "Lisbon".to_string(),
                budget: Decimal::from(100_000),
            },
        );

        std::thread::sleep(std::time::Duration::from_millis(5));
        dept.update_timestamp();
        assert!(dept.updated_at > dept.created_at);
    }
}
