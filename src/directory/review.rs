//! Performance review records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::store::{StoreError, StoreResult};
use super::types::{EmployeeId, ReviewId};

/// Review rating on the 1–5 scale.
///
/// Out-of-range values are rejected at construction, so a held `Rating` is
/// always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> StoreResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(StoreError::RatingOutOfRange(value));
        }
        Ok(Rating(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = StoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single performance review of one employee by another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReview {
    /// Unique identifier assigned by the store
    pub id: ReviewId,

    /// Employee under review; must resolve
    pub employee: EmployeeId,

    pub review_date: NaiveDate,
    pub rating: Rating,
    pub comment: String,

    /// Reviewing employee; must resolve
    pub reviewer: EmployeeId,
}

impl PerformanceReview {
    pub(crate) fn new(id: ReviewId, input: NewReview) -> Self {
        PerformanceReview {
            id,
            employee: input.employee,
            review_date: input.review_date,
            rating: input.rating,
            comment: input.comment,
            reviewer: input.reviewer,
        }
    }
}

/// Input for recording a review; the store assigns the identifier and
/// validates the employee and reviewer references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReview {
    pub employee: EmployeeId,
    pub review_date: NaiveDate,
    pub rating: Rating,
    pub comment: String,
    pub reviewer: EmployeeId,
}
