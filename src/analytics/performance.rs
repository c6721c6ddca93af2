//! Review statistics and comparative rankings
//!
//! Three reports over the review and salary data: a per-employee summary for
//! a date window, department-relative review rankings, and organization-wide
//! salary quantiles. The partition-relative figures follow the same shape
//! throughout: group rows by partition key, compute the aggregate per group,
//! then join it back onto each row.

use std::cmp::Reverse;

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::rank;
use super::AnalyticsResult;
use crate::directory::{
    DateRange, Department, DepartmentId, Employee, EmployeeFilter, EmployeeId, Money,
    PerformanceReview, Rating, RecordStore,
};

/// Delimiter between concatenated review comments in a summary
pub const COMMENT_DELIMITER: &str = "; ";

/// Review statistics for one employee over a date window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub review_count: usize,

    /// Mean rating, `None` when the window holds no reviews
    pub avg_rating: Option<f64>,

    /// Comments joined with [`COMMENT_DELIMITER`] in review-date order;
    /// empty when the window holds no reviews
    pub all_comments: String,
}

/// One review placed relative to its department's review population.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedReview {
    pub department: String,
    pub employee: String,
    pub rating: Rating,

    /// Mean rating across every review in this department
    pub dept_avg_rating: f64,

    /// This review's rating minus the department mean
    pub rating_vs_dept_avg: f64,

    /// Competition rank within the department, best rating first
    pub dept_rank: usize,
}

/// One employee's place in the organization-wide salary distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryQuantile {
    pub employee: String,
    pub department: String,
    pub salary: Money,

    /// Quartile 1 (lowest paid) through 4 (highest paid)
    pub quartile: usize,

    /// Fraction of employees earning strictly less, 0.0 through 1.0
    pub percentile: f64,
}

/// Summarize one employee's reviews over an inclusive date window.
///
/// Fails with `EmployeeNotFound` for an unknown employee. An employee with
/// no reviews in the window gets a zero count, no average, and an empty
/// comment string.
pub fn performance_summary<S: RecordStore>(
    store: &S,
    employee: EmployeeId,
    period: DateRange,
) -> AnalyticsResult<PerformanceSummary> {
    store.get_employee(employee)?;

    let mut reviews = store.reviews(Some(employee), Some(period));
    reviews.sort_by_key(|review| (review.review_date, review.id));

    let review_count = reviews.len();
    let avg_rating = if review_count > 0 {
        let total: u32 = reviews.iter().map(|r| u32::from(r.rating.get())).sum();
        Some(f64::from(total) / review_count as f64)
    } else {
        None
    };
    let all_comments = reviews
        .iter()
        .map(|review| review.comment.as_str())
        .collect::<Vec<_>>()
        .join(COMMENT_DELIMITER);

    Ok(PerformanceSummary {
        review_count,
        avg_rating,
        all_comments,
    })
}

/// Rank every review against its department's review population.
///
/// The department average covers all reviews of that department's employees,
/// and ranks are competition-style by rating within the department (tied
/// ratings share a rank, the next distinct rating skips the tie count).
/// Rows come back sorted by department name, rank, then employee name.
pub fn ranked_performance<S: RecordStore>(store: &S) -> Vec<RankedReview> {
    let employees = employee_lookup(store);
    let departments = department_lookup(store);

    let mut by_dept: FxHashMap<DepartmentId, Vec<(&PerformanceReview, &Employee)>> =
        FxHashMap::default();
    for review in store.reviews(None, None) {
        if let Some(employee) = employees.get(&review.employee) {
            by_dept
                .entry(employee.department)
                .or_default()
                .push((review, employee));
        }
    }

    let mut rows: Vec<RankedReview> = Vec::new();
    for (dept_id, mut group) in by_dept {
        let dept_name = departments
            .get(&dept_id)
            .map(|d| d.name.clone())
            .unwrap_or_default();
        let total: u32 = group.iter().map(|(r, _)| u32::from(r.rating.get())).sum();
        let avg = f64::from(total) / group.len() as f64;

        group.sort_by_key(|(review, employee)| {
            (Reverse(review.rating), employee.display_name(), review.id)
        });
        let ratings: Vec<Rating> = group.iter().map(|(review, _)| review.rating).collect();
        let ranks = rank::competition_ranks(&ratings);

        for ((review, employee), dept_rank) in group.into_iter().zip(ranks) {
            rows.push(RankedReview {
                department: dept_name.clone(),
                employee: employee.display_name(),
                rating: review.rating,
                dept_avg_rating: avg,
                rating_vs_dept_avg: f64::from(review.rating.get()) - avg,
                dept_rank,
            });
        }
    }

    rows.sort_by(|a, b| {
        (&a.department, a.dept_rank, &a.employee).cmp(&(&b.department, b.dept_rank, &b.employee))
    });
    rows
}

/// Place every employee in the organization-wide salary distribution.
///
/// Employees come back in ascending salary order. Quartiles split that order
/// into four groups as evenly as possible (larger groups toward the low
/// end); the percentile is the fraction of employees earning strictly less,
/// so the lowest paid sits at 0.0 and the highest at 1.0, with tied salaries
/// sharing a value. A lone employee sits at percentile 0.0.
pub fn salary_quantiles<S: RecordStore>(store: &S) -> Vec<SalaryQuantile> {
    let departments = department_lookup(store);

    let mut employees = store.employees(&EmployeeFilter::default());
    employees.sort_by_key(|employee| (employee.salary, employee.id));

    let salaries: Vec<Money> = employees.iter().map(|e| e.salary).collect();
    let percentiles = rank::percent_ranks(&salaries);
    let quartiles = rank::ntile(4, employees.len());

    employees
        .into_iter()
        .zip(quartiles)
        .zip(percentiles)
        .map(|((employee, quartile), percentile)| SalaryQuantile {
            employee: employee.display_name(),
            department: departments
                .get(&employee.department)
                .map(|d| d.name.clone())
                .unwrap_or_default(),
            salary: employee.salary,
            quartile,
            percentile,
        })
        .collect()
}

fn employee_lookup<S: RecordStore>(store: &S) -> FxHashMap<EmployeeId, &Employee> {
    store
        .employees(&EmployeeFilter::default())
        .into_iter()
        .map(|employee| (employee.id, employee))
        .collect()
}

fn department_lookup<S: RecordStore>(store: &S) -> FxHashMap<DepartmentId, &Department> {
    store
        .departments()
        .into_iter()
        .map(|department| (department.id, department))
        .collect()
}
