//! Department cost rollups

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::directory::{DepartmentId, EmployeeFilter, Money, RecordStore};

/// Aggregated headcount and cost figures for one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentStats {
    pub department: DepartmentId,
    pub name: String,
    pub location: String,

    pub employee_count: usize,

    /// Sum of current salaries, zero for an empty department
    pub total_salary_cost: Money,

    /// Mean current salary, zero for an empty department
    pub avg_salary: Money,

    /// Employees of this department with no manager
    pub manager_count: usize,

    pub budget: Money,

    /// Budget minus total salary cost; negative means overspent
    pub budget_remaining: Money,
}

#[derive(Default)]
struct Rollup {
    count: usize,
    total: Money,
    managers: usize,
}

/// Compute per-department rollups over the store's current employees.
///
/// Every department appears, including those with no employees: an empty
/// department reports zero counts, zero totals, an average of zero, and its
/// full budget remaining. Rows come back sorted by department name, then id.
pub fn department_stats<S: RecordStore>(store: &S) -> Vec<DepartmentStats> {
    let mut rollups: FxHashMap<DepartmentId, Rollup> = FxHashMap::default();
    for employee in store.employees(&EmployeeFilter::default()) {
        let rollup = rollups.entry(employee.department).or_default();
        rollup.count += 1;
        rollup.total += employee.salary;
        if employee.manager.is_none() {
            rollup.managers += 1;
        }
    }

    let mut rows: Vec<DepartmentStats> = store
        .departments()
        .into_iter()
        .map(|dept| {
            let rollup = rollups.remove(&dept.id).unwrap_or_default();
            let avg_salary = if rollup.count > 0 {
                rollup.total / Money::from(rollup.count as u64)
            } else {
                Money::ZERO
            };
            DepartmentStats {
                department: dept.id,
                name: dept.name.clone(),
                location: dept.location.clone(),
                employee_count: rollup.count,
                total_salary_cost: rollup.total,
                avg_salary,
                manager_count: rollup.managers,
                budget: dept.budget,
                budget_remaining: dept.budget - rollup.total,
            }
        })
        .collect();

    rows.sort_by(|a, b| (&a.name, a.department).cmp(&(&b.name, b.department)));
    rows
}
