//! Change auditing
//!
//! Couples salary mutations to the audit trail: every committed change
//! appends exactly one log entry, and rewriting the value already on record
//! appends nothing.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::directory::{ChangeId, EmployeeId, Money, RecordStore, SalaryChangeInput, StoreResult};

/// Append an audit entry iff the salary actually changed.
///
/// Returns the new entry's id, or `None` when `new_salary` equals
/// `old_salary` (a no-op write leaves no trace in the log). Comparison is
/// numeric, so `82500` and `82500.00` count as the same salary. The caller
/// holds the mutable store borrow across the mutation and this append, which
/// keeps the pair committed together.
pub fn record_if_changed<S: RecordStore>(
    store: &mut S,
    employee: EmployeeId,
    old_salary: Money,
    new_salary: Money,
    reason: &str,
    changed_at: DateTime<Utc>,
) -> StoreResult<Option<ChangeId>> {
    if new_salary == old_salary {
        debug!(employee = %employee, salary = %old_salary, "salary unchanged, nothing recorded");
        return Ok(None);
    }

    let id = store.append_salary_change(SalaryChangeInput {
        employee,
        old_salary,
        new_salary,
        changed_at,
        reason: reason.to_string(),
    })?;
    Ok(Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{
        Directory, EmployeeStatus, NewDepartment, NewEmployee, StoreError,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn store_with_employee() -> (Directory, EmployeeId) {
        let mut store = Directory::new();
        let dept = store
            .insert_department(NewDepartment {
                name: "Engineering".to_string(),
                location: "Berlin".to_string(),
                budget: Decimal::from(500_000),
            })
            .unwrap();
        let id = store
            .insert_employee(NewEmployee {
                first_name: "Alice".to_string(),
                last_name: "Nguyen".to_string(),
                department: dept,
                manager: None,
                hire_date: NaiveDate::from_ymd_opt(2020, 3, 16).unwrap(),
                salary: Decimal::from(85_000),
                email: "alice@example.com".to_string(),
                phone: None,
                status: EmployeeStatus::Active,
            })
            .unwrap();
        (store, id)
    }

    #[test]
    fn test_records_when_salary_differs() {
        let (mut store, alice) = store_with_employee();

        let id = record_if_changed(
            &mut store,
            alice,
            Decimal::from(85_000),
            Decimal::from(90_000),
            "promotion",
            Utc::now(),
        )
        .unwrap();

        assert!(id.is_some());
        let log = store.salary_changes();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].old_salary, Decimal::from(85_000));
        assert_eq!(log[0].new_salary, Decimal::from(90_000));
        assert_eq!(log[0].reason, "promotion");
    }

    #[test]
    fn test_skips_equal_salary() {
        let (mut store, alice) = store_with_employee();

        let id = record_if_changed(
            &mut store,
            alice,
            Decimal::from(85_000),
            Decimal::from(85_000),
            "noop",
            Utc::now(),
        )
        .unwrap();

        assert_eq!(id, None);
        assert!(store.salary_changes().is_empty());
    }

    #[test]
    fn test_equality_ignores_trailing_zeros() {
        let (mut store, alice) = store_with_employee();

        // 85000 and 85000.00 are the same amount
        let id = record_if_changed(
            &mut store,
            alice,
            Decimal::from(85_000),
            "85000.00".parse().unwrap(),
            "rescale",
            Utc::now(),
        )
        .unwrap();

        assert_eq!(id, None);
        assert!(store.salary_changes().is_empty());
    }

    #[test]
    fn test_unknown_employee_propagates() {
        let (mut store, _) = store_with_employee();
        let ghost = EmployeeId::new(404);

        let result = record_if_changed(
            &mut store,
            ghost,
            Decimal::ZERO,
            Decimal::ONE,
            "ghost raise",
            Utc::now(),
        );
        assert_eq!(result, Err(StoreError::UnknownEmployee(ghost)));
    }
}
