use tracing::{debug, info, warn};

use crate::domain::{Book, BookId, Day, Fine, Loan, LoanPolicy, Member, MemberId, Transaction};
use crate::storage::{Catalog, Ledger, Membership};

use super::{AppError, LibraryReport, MemberSummary};

/// Application service providing the library desk operations.
/// This is the only way clients (the console menu, tests) change library state.
///
/// Single-threaded: callers that share it across threads must wrap the whole
/// service in one lock.
#[derive(Debug, Default)]
pub struct LibraryService {
    catalog: Catalog,
    membership: Membership,
    ledger: Ledger,
    current_day: Day,
    policy: LoanPolicy,
}

/// Result of a successful return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnResult {
    pub member_id: MemberId,
    pub fine: Fine,
}

impl LibraryService {
    /// Create an empty library on day 0 with the standard lending rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty library on day 0 with custom lending rules.
    pub fn with_policy(policy: LoanPolicy) -> Result<Self, AppError> {
        policy.validate()?;
        Ok(Self {
            policy,
            ..Self::default()
        })
    }

    pub fn policy(&self) -> &LoanPolicy {
        &self.policy
    }

    pub fn current_day(&self) -> Day {
        self.current_day
    }

    // ========================
    // Catalog and membership
    // ========================

    /// Add a book to the catalog. Ids must be unique.
    pub fn add_book(&mut self, book: Book) -> Result<(), AppError> {
        if self.catalog.contains(book.id) {
            warn!(book_id = book.id, "duplicate book id rejected");
            return Err(AppError::BookAlreadyExists(book.id));
        }

        debug!(book_id = book.id, title = %book.title, "book added");
        self.catalog.add(book);
        Ok(())
    }

    /// Register a member. Ids must be unique.
    pub fn add_member(&mut self, member: Member) -> Result<(), AppError> {
        if self.membership.contains(member.id) {
            warn!(member_id = member.id, "duplicate member id rejected");
            return Err(AppError::MemberAlreadyExists(member.id));
        }

        debug!(member_id = member.id, name = %member.name, "member added");
        self.membership.add(member);
        Ok(())
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.catalog.find(id)
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.membership.find(id)
    }

    pub fn books(&self) -> &[Book] {
        self.catalog.books()
    }

    pub fn members(&self) -> &[Member] {
        self.membership.members()
    }

    /// Transactions, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &Transaction> {
        self.ledger.history()
    }

    // ========================
    // Loans
    // ========================

    /// Lend a book to a member.
    ///
    /// Either every step happens (loan recorded, book marked out, ledger entry
    /// appended) or nothing changes.
    pub fn issue_book(&mut self, member_id: MemberId, book_id: BookId) -> Result<Loan, AppError> {
        let member = self
            .membership
            .find_mut(member_id)
            .ok_or(AppError::InvalidMember(member_id))
            .inspect_err(|err| warn!(member_id, book_id, %err, "issue rejected"))?;

        let book = self
            .catalog
            .find(book_id)
            .ok_or(AppError::BookNotFound(book_id))
            .inspect_err(|err| warn!(member_id, book_id, %err, "issue rejected"))?;

        if !book.is_available() {
            let err = AppError::BookNotAvailable(book_id);
            warn!(member_id, book_id, %err, "issue rejected");
            return Err(err);
        }

        let loan = member
            .issue(book_id, self.current_day, &self.policy)
            .map_err(|e| AppError::from_loan(member_id, e))
            .inspect_err(|err| warn!(member_id, book_id, %err, "issue rejected"))?;

        self.catalog.mark_issued(book_id);
        self.ledger.record(Transaction::issue(member_id, book_id));

        info!(member_id, book_id, due_day = loan.due_day, "book issued");
        Ok(loan)
    }

    /// Take a book back from a member and collect any late fine.
    ///
    /// A book missing from the catalog is still accepted back; only the
    /// availability update is skipped.
    pub fn return_book(
        &mut self,
        member_id: MemberId,
        book_id: BookId,
    ) -> Result<ReturnResult, AppError> {
        let member = self
            .membership
            .find_mut(member_id)
            .ok_or(AppError::InvalidMember(member_id))
            .inspect_err(|err| warn!(member_id, book_id, %err, "return rejected"))?;

        let fine = member
            .return_book(book_id, self.current_day, &self.policy)
            .map_err(|e| AppError::from_loan(member_id, e))
            .inspect_err(|err| warn!(member_id, book_id, %err, "return rejected"))?;

        if !self.catalog.mark_returned(book_id) {
            debug!(book_id, "returned book is no longer in the catalog");
        }
        self.ledger
            .record(Transaction::return_with_fine(member_id, book_id, fine));

        info!(member_id, book_id, fine, "book returned");
        Ok(ReturnResult { member_id, fine })
    }

    // ========================
    // Clock
    // ========================

    /// Move the library clock forward by `days`. Returns the new day.
    /// The clock is left alone when the move is rejected.
    pub fn advance_day(&mut self, days: i64) -> Result<Day, AppError> {
        if days < 0 {
            warn!(days, "negative day advance rejected");
            return Err(AppError::InvalidDayAdvance(days));
        }

        let current_day = self.current_day;
        self.current_day = current_day
            .checked_add(days)
            .ok_or(AppError::ClockOverflow { current_day, days })
            .inspect_err(|err| warn!(%err, "day advance rejected"))?;
        info!(current_day = self.current_day, "clock advanced");
        Ok(self.current_day)
    }

    // ========================
    // Reporting
    // ========================

    /// Snapshot of books, members and the full history, most recent first.
    pub fn generate_report(&self) -> LibraryReport {
        let members = self
            .membership
            .members()
            .iter()
            .map(|member| MemberSummary {
                id: member.id,
                name: member.name.clone(),
                info: member.info.clone(),
                books_issued: member.loan_count(),
                loans: member.loans.clone(),
            })
            .collect();

        LibraryReport {
            current_day: self.current_day,
            policy: self.policy,
            books: self.catalog.books().to_vec(),
            members,
            history: self.ledger.history().cloned().collect(),
            total_fines: self.ledger.total_fines(),
        }
    }
}
