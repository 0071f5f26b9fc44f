use serde::{Deserialize, Serialize};

use super::{BookId, Day, Fine, LoanPolicy};

pub type MemberId = i64;

/// An active loan: a book held by a member until it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub book_id: BookId,
    pub due_day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    /// Free-form extra details captured at registration.
    pub info: String,
    /// Active loans in the order they were issued.
    pub loans: Vec<Loan>,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            info: String::new(),
            loans: Vec::new(),
        }
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    pub fn loan_count(&self) -> usize {
        self.loans.len()
    }

    pub fn holds(&self, book_id: BookId) -> bool {
        self.loans.iter().any(|loan| loan.book_id == book_id)
    }

    /// Record a new loan due `policy.due_period` days after `current_day`.
    /// Nothing changes when the member is at the loan limit or the due day
    /// cannot be represented.
    pub fn issue(
        &mut self,
        book_id: BookId,
        current_day: Day,
        policy: &LoanPolicy,
    ) -> Result<Loan, LoanError> {
        if self.loans.len() >= policy.max_issue {
            return Err(LoanError::LimitReached {
                limit: policy.max_issue,
            });
        }

        let due_day = policy
            .due_day(current_day)
            .ok_or(LoanError::DueDayOverflow { current_day })?;

        let loan = Loan { book_id, due_day };
        self.loans.push(loan);
        Ok(loan)
    }

    /// Close the first loan for `book_id` and return the late fine owed on `return_day`.
    pub fn return_book(
        &mut self,
        book_id: BookId,
        return_day: Day,
        policy: &LoanPolicy,
    ) -> Result<Fine, LoanError> {
        let position = self
            .loans
            .iter()
            .position(|loan| loan.book_id == book_id)
            .ok_or(LoanError::NotIssued { book_id })?;

        let fine = policy.fine_for(self.loans[position].due_day, return_day);
        self.loans.remove(position);
        Ok(fine)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoanError {
    LimitReached { limit: usize },
    NotIssued { book_id: BookId },
    DueDayOverflow { current_day: Day },
}

impl std::fmt::Display for LoanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoanError::LimitReached { limit } => {
                write!(f, "You can't issue more than {} books", limit)
            }
            LoanError::NotIssued { book_id } => {
                write!(f, "Book {} was not issued to this member", book_id)
            }
            LoanError::DueDayOverflow { current_day } => {
                write!(f, "No due day can follow day {}", current_day)
            }
        }
    }
}

impl std::error::Error for LoanError {}
