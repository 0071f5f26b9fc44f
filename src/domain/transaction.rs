use serde::{Deserialize, Serialize};

use super::{BookId, Fine, MemberId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Issue,
    Return,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Issue => "Issue",
            Action::Return => "Return",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single issue or return, recorded once and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub member_id: MemberId,
    pub book_id: BookId,
    pub action: Action,
    /// Fine collected on a return; always 0 for issues.
    pub fine: Fine,
}

impl Transaction {
    pub fn issue(member_id: MemberId, book_id: BookId) -> Self {
        Self {
            member_id,
            book_id,
            action: Action::Issue,
            fine: 0,
        }
    }

    pub fn return_with_fine(member_id: MemberId, book_id: BookId, fine: Fine) -> Self {
        assert!(fine >= 0, "Fine cannot be negative");
        Self {
            member_id,
            book_id,
            action: Action::Return,
            fine,
        }
    }

    /// Returns true for returns that collected a fine.
    pub fn collected_fine(&self) -> bool {
        self.action == Action::Return && self.fine > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_has_no_fine() {
        let tx = Transaction::issue(100, 1);
        assert_eq!(tx.action, Action::Issue);
        assert_eq!(tx.fine, 0);
        assert!(!tx.collected_fine());
    }

    #[test]
    fn test_return_with_fine() {
        let tx = Transaction::return_with_fine(100, 1, 6);
        assert_eq!(tx.action, Action::Return);
        assert!(tx.collected_fine());

        let on_time = Transaction::return_with_fine(100, 1, 0);
        assert!(!on_time.collected_fine());
    }

    #[test]
    #[should_panic(expected = "Fine cannot be negative")]
    fn test_return_rejects_negative_fine() {
        Transaction::return_with_fine(100, 1, -1);
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Issue.to_string(), "Issue");
        assert_eq!(Action::Return.to_string(), "Return");
    }
}
