use serde::{Deserialize, Serialize};

/// Day numbers on the simulated library clock. Day 0 is the first day.
pub type Day = i64;

/// Fines are whole abstract units, never fractional.
pub type Fine = i64;

/// Maximum number of books a member may hold at once.
pub const MAX_ISSUE: usize = 3;

/// Number of days a book may be kept before it becomes late.
pub const DUE_PERIOD: Day = 14;

/// Fine charged for every day past the due day.
pub const FINE_PER_DAY: Fine = 1;

/// Lending rules applied by the library desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanPolicy {
    pub max_issue: usize,
    pub due_period: Day,
    pub fine_per_day: Fine,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            max_issue: MAX_ISSUE,
            due_period: DUE_PERIOD,
            fine_per_day: FINE_PER_DAY,
        }
    }
}

impl LoanPolicy {
    pub fn new(max_issue: usize, due_period: Day, fine_per_day: Fine) -> Result<Self, PolicyError> {
        let policy = Self {
            max_issue,
            due_period,
            fine_per_day,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Loan periods and fine rates must not be negative.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.due_period < 0 {
            return Err(PolicyError::NegativeLoanPeriod(self.due_period));
        }
        if self.fine_per_day < 0 {
            return Err(PolicyError::NegativeFineRate(self.fine_per_day));
        }
        Ok(())
    }

    /// Due day for a book issued on `issued_on`, or `None` past the end of the calendar.
    pub fn due_day(&self, issued_on: Day) -> Option<Day> {
        issued_on.checked_add(self.due_period)
    }

    /// Fine owed when a book due on `due_day` comes back on `return_day`.
    pub fn fine_for(&self, due_day: Day, return_day: Day) -> Fine {
        compute_fine(due_day, return_day, self.fine_per_day)
    }
}

/// Late fine: zero for on-time or early returns, otherwise days late times the daily rate.
/// Saturates instead of wrapping.
pub fn compute_fine(due_day: Day, return_day: Day, fine_per_day: Fine) -> Fine {
    return_day
        .saturating_sub(due_day)
        .max(0)
        .saturating_mul(fine_per_day)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    NegativeLoanPeriod(Day),
    NegativeFineRate(Fine),
}

impl std::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyError::NegativeLoanPeriod(days) => {
                write!(f, "Loan period cannot be negative: {}", days)
            }
            PolicyError::NegativeFineRate(rate) => {
                write!(f, "Fine per day cannot be negative: {}", rate)
            }
        }
    }
}

impl std::error::Error for PolicyError {}
