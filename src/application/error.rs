use thiserror::Error;

use crate::domain::{BookId, Day, LoanError, MemberId, PolicyError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid member ID: {0}")]
    InvalidMember(MemberId),

    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    #[error("Book not available: {0}")]
    BookNotAvailable(BookId),

    #[error("Member {member_id} already has {limit} books issued")]
    LoanLimitExceeded { member_id: MemberId, limit: usize },

    #[error("Book {book_id} was not issued to member {member_id}")]
    NotIssuedToMember { member_id: MemberId, book_id: BookId },

    #[error("Book already exists: {0}")]
    BookAlreadyExists(BookId),

    #[error("Member already exists: {0}")]
    MemberAlreadyExists(MemberId),

    #[error("Cannot move the clock backwards by {0} days")]
    InvalidDayAdvance(i64),

    #[error("Cannot advance the clock from day {current_day} by {days} days")]
    ClockOverflow { current_day: Day, days: i64 },

    #[error("No due day can follow day {0}")]
    DueDayOverflow(Day),

    #[error("Invalid loan policy: {0}")]
    InvalidPolicy(#[from] PolicyError),
}

impl AppError {
    /// Lift a member-level loan rule failure into a service error.
    pub fn from_loan(member_id: MemberId, err: LoanError) -> Self {
        match err {
            LoanError::LimitReached { limit } => AppError::LoanLimitExceeded { member_id, limit },
            LoanError::NotIssued { book_id } => AppError::NotIssuedToMember { member_id, book_id },
            LoanError::DueDayOverflow { current_day } => AppError::DueDayOverflow(current_day),
        }
    }
}
