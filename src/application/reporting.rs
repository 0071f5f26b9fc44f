use serde::{Deserialize, Serialize};

use crate::domain::{Book, Day, Fine, Loan, LoanPolicy, MemberId, Transaction};

/// Point-in-time view of the whole library, built without touching its state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryReport {
    pub current_day: Day,
    pub policy: LoanPolicy,
    pub books: Vec<Book>,
    pub members: Vec<MemberSummary>,
    /// Most recent transaction first.
    pub history: Vec<Transaction>,
    pub total_fines: Fine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub id: MemberId,
    pub name: String,
    pub info: String,
    pub books_issued: usize,
    pub loans: Vec<Loan>,
}

impl LibraryReport {
    pub fn available_books(&self) -> usize {
        self.books.iter().filter(|b| b.available).count()
    }

    pub fn books_on_loan(&self) -> usize {
        self.books.len() - self.available_books()
    }
}
