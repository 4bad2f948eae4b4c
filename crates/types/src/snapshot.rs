use crate::records::{Book, Loan, User};
use serde::{Deserialize, Serialize};

/// The three collections a report is generated from, captured once.
///
/// A snapshot is read-only for the duration of a generation call; it does not
/// follow later changes of the store it was taken from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSnapshot {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub loans: Vec<Loan>,
}

impl ReportSnapshot {
    pub fn new(users: Vec<User>, books: Vec<Book>, loans: Vec<Loan>) -> Self {
        Self { users, books, loans }
    }

    /// Total number of records across all three collections.
    pub fn record_count(&self) -> usize {
        self.users.len() + self.books.len() + self.loans.len()
    }
}
