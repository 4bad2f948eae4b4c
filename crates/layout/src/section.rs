use crate::record::{RecordKind, RenderableRecord};
use libro_types::{Book, Loan, User};

/// A titled table of records of one kind.
#[derive(Debug, Clone)]
pub struct ReportSection<'a> {
    pub title: String,
    pub kind: RecordKind,
    pub records: Vec<RenderableRecord<'a>>,
}

impl<'a> ReportSection<'a> {
    pub fn users(users: &'a [User]) -> Self {
        Self::of(RecordKind::User, users.iter().map(RenderableRecord::User).collect())
    }

    pub fn books(books: &'a [Book]) -> Self {
        Self::of(RecordKind::Book, books.iter().map(RenderableRecord::Book).collect())
    }

    pub fn loans(loans: &'a [Loan]) -> Self {
        Self::of(RecordKind::Loan, loans.iter().map(RenderableRecord::Loan).collect())
    }

    fn of(kind: RecordKind, records: Vec<RenderableRecord<'a>>) -> Self {
        Self {
            title: kind.section_title().to_string(),
            kind,
            records,
        }
    }
}
