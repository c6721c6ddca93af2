//! Percentage raise processing

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::audit::record_if_changed;
use super::{PayrollError, PayrollResult};
use crate::directory::{EmployeeId, Money, RecordStore};

/// Rounding configuration for committed salaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPolicy {
    /// Decimal places salaries are rounded to before committing
    /// (2 for cent-denominated currencies)
    pub minor_units: u32,
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        PayrollPolicy { minor_units: 2 }
    }
}

/// Raise processor for salary writes
/// Takes a mutable reference to the record store so the salary mutation and
/// its audit entry commit together
pub struct RaiseProcessor<'a, S: RecordStore> {
    store: &'a mut S,
    policy: PayrollPolicy,
}

impl<'a, S: RecordStore> RaiseProcessor<'a, S> {
    /// Create a processor with the default rounding policy
    pub fn new(store: &'a mut S) -> Self {
        Self {
            store,
            policy: PayrollPolicy::default(),
        }
    }

    /// Create a processor with an explicit rounding policy
    pub fn with_policy(store: &'a mut S, policy: PayrollPolicy) -> Self {
        Self { store, policy }
    }

    /// Apply a percentage raise and return the committed salary.
    ///
    /// `percent` may be negative (a pay cut) or zero. The computed salary is
    /// rounded half-away-from-zero to the policy's minor units before any
    /// check or write. A result below zero is rejected with
    /// [`PayrollError::NegativeSalary`] and nothing is written. When the
    /// rounded result equals the current salary, the store and the audit
    /// trail are both left untouched and the current salary is returned.
    pub fn apply_raise(
        &mut self,
        employee: EmployeeId,
        percent: Decimal,
        reason: &str,
    ) -> PayrollResult<Money> {
        let current = self.store.get_employee(employee)?.salary;
        let factor = Decimal::ONE + percent / Decimal::ONE_HUNDRED;
        let proposed = (current * factor).round_dp_with_strategy(
            self.policy.minor_units,
            RoundingStrategy::MidpointAwayFromZero,
        );

        if proposed < Money::ZERO {
            return Err(PayrollError::NegativeSalary {
                employee,
                computed: proposed,
            });
        }
        if proposed == current {
            info!(employee = %employee, %percent, salary = %current, "raise is a no-op");
            return Ok(current);
        }

        // The employee resolved under this same borrow, so the append cannot
        // fail after the salary write.
        let changed_at = Utc::now();
        let previous = self.store.update_employee_salary(employee, proposed)?;
        record_if_changed(self.store, employee, previous, proposed, reason, changed_at)?;

        info!(
            employee = %employee,
            %percent,
            old_salary = %previous,
            new_salary = %proposed,
            %reason,
            "raise applied"
        );
        Ok(proposed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{
        Directory, EmployeeStatus, NewDepartment, NewEmployee, StoreError,
    };
    use chrono::NaiveDate;

    fn store_with_employee(salary: &str) -> (Directory, EmployeeId) {
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
                salary: salary.parse().unwrap(),
                email: "alice@example.com".to_string(),
                phone: None,
                status: EmployeeStatus::Active,
            })
            .unwrap();
        (store, id)
    }

    #[test]
    fn test_raise_rounds_to_minor_units() {
        let (mut store, alice) = store_with_employee("1001");

        // 1001 * 1.00125 = 1002.25125, rounded to cents
        let committed = RaiseProcessor::new(&mut store)
            .apply_raise(alice, "0.125".parse().unwrap(), "adjustment")
            .unwrap();

        assert_eq!(committed, "1002.25".parse().unwrap());
        assert_eq!(store.get_employee(alice).unwrap().salary, committed);
        assert_eq!(store.salary_changes().len(), 1);
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        let (mut store, alice) = store_with_employee("1000");

        // 1000 * 1.0000050 = 1000.005, which must round up to 1000.01
        let committed = RaiseProcessor::new(&mut store)
            .apply_raise(alice, "0.0005".parse().unwrap(), "midpoint")
            .unwrap();

        assert_eq!(committed, "1000.01".parse().unwrap());
    }

    #[test]
    fn test_negative_result_rejected() {
        let (mut store, alice) = store_with_employee("100");

        let result = RaiseProcessor::new(&mut store).apply_raise(
            alice,
            Decimal::from(-150),
            "clawback",
        );

        assert_eq!(
            result,
            Err(PayrollError::NegativeSalary {
                employee: alice,
                computed: Decimal::from(-50),
            })
        );

        // Rejected raise leaves no trace
        assert_eq!(store.get_employee(alice).unwrap().salary, Decimal::from(100));
        assert!(store.salary_changes().is_empty());
    }

    #[test]
    fn test_pay_cut_records_change() {
        let (mut store, alice) = store_with_employee("1000");

        let committed = RaiseProcessor::new(&mut store)
            .apply_raise(alice, Decimal::from(-10), "restructuring")
            .unwrap();

        assert_eq!(committed, Decimal::from(900));
        let log = store.salary_changes();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].old_salary, Decimal::from(1000));
        assert_eq!(log[0].new_salary, Decimal::from(900));
    }

    #[test]
    fn test_no_op_when_rounding_cancels() {
        let (mut store, alice) = store_with_employee("1000.00");

        // 1000 * 1.000001 = 1000.001, which rounds back to the current salary
        let committed = RaiseProcessor::new(&mut store)
            .apply_raise(alice, "0.0001".parse().unwrap(), "dust")
            .unwrap();

        assert_eq!(committed, Decimal::from(1000));
        assert!(store.salary_changes().is_empty());
    }

    #[test]
    fn test_zero_percent_is_a_no_op() {
        let (mut store, alice) = store_with_employee("1000");

        let committed = RaiseProcessor::new(&mut store)
            .apply_raise(alice, Decimal::ZERO, "annual review, no change")
            .unwrap();

        assert_eq!(committed, Decimal::from(1000));
        assert!(store.salary_changes().is_empty());
    }

    #[test]
    fn test_missing_employee() {
        let mut store = Directory::new();
        let ghost = EmployeeId::new(404);

        let result = RaiseProcessor::new(&mut store).apply_raise(ghost, Decimal::TEN, "ghost");
        assert_eq!(
            result,
            Err(PayrollError::Store(StoreError::EmployeeNotFound(ghost)))
        );
    }

    #[test]
    fn test_custom_minor_units() {
        let (mut store, alice) = store_with_employee("1000");

        // Whole-unit currency: 1000 * 1.0006 = 1000.6 rounds to 1001
        let policy = PayrollPolicy { minor_units: 0 };
        let committed = RaiseProcessor::with_policy(&mut store, policy)
            .apply_raise(alice, "0.06".parse().unwrap(), "cost of living")
            .unwrap();

        assert_eq!(committed, Decimal::from(1001));
    }
}
