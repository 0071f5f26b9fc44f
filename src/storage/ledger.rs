use crate::domain::{Fine, Transaction};

/// Append-only history of issues and returns.
///
/// Entries are stored oldest first; [`Ledger::history`] walks them newest first
/// without consuming anything.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, transaction: Transaction) {
        self.entries.push(transaction);
    }

    /// Most recent entry first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &Transaction> + ExactSizeIterator {
        self.entries.iter().rev()
    }

    /// Sum of all fines collected on returns, saturating.
    pub fn total_fines(&self) -> Fine {
        self.entries
            .iter()
            .fold(0, |total: Fine, t| total.saturating_add(t.fine))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
