//! Turning report records into text lines.

use libro_types::{Book, Loan, User};

/// The closed set of record kinds a report section can list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    User,
    Book,
    Loan,
}

impl RecordKind {
    /// The column header row repeated at the top of every page of the table.
    pub fn column_header(self) -> &'static str {
        match self {
            RecordKind::User => "ID | Username | Email | Role",
            RecordKind::Book => "ID | Title | Author | Genre",
            RecordKind::Loan => "Loan | Book | Lender | Borrower | Status | Dates",
        }
    }

    pub fn section_title(self) -> &'static str {
        match self {
            RecordKind::User => "Users List",
            RecordKind::Book => "Books List",
            RecordKind::Loan => "Loans List",
        }
    }

    /// Whether records of this kind span several lines and are followed by a gap.
    pub fn is_multiline(self) -> bool {
        matches!(self, RecordKind::Loan)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Strong,
}

/// A line of a record before placement and truncation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLine {
    pub text: String,
    pub emphasis: Emphasis,
    /// Indented lines start at the detail indent instead of the left margin.
    pub indented: bool,
}

impl RecordLine {
    fn normal(text: String) -> Self {
        Self {
            text,
            emphasis: Emphasis::Normal,
            indented: false,
        }
    }

    fn heading(text: String) -> Self {
        Self {
            text,
            emphasis: Emphasis::Strong,
            indented: false,
        }
    }

    fn detail(text: String) -> Self {
        Self {
            text,
            emphasis: Emphasis::Normal,
            indented: true,
        }
    }
}

/// A record borrowed from the report snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderableRecord<'a> {
    User(&'a User),
    Book(&'a Book),
    Loan(&'a Loan),
}

impl<'a> RenderableRecord<'a> {
    pub fn kind(&self) -> RecordKind {
        match self {
            RenderableRecord::User(_) => RecordKind::User,
            RenderableRecord::Book(_) => RecordKind::Book,
            RenderableRecord::Loan(_) => RecordKind::Loan,
        }
    }

    /// The text lines of this record, top to bottom.
    ///
    /// Users and books are a single row; a loan is a six-line block.
    pub fn lines(&self) -> Vec<RecordLine> {
        match self {
            RenderableRecord::User(user) => vec![RecordLine::normal(format!(
                "{} | {} | {} | {}",
                user.id, user.username, user.email, user.role
            ))],
            RenderableRecord::Book(book) => vec![RecordLine::normal(format!(
                "{} | {} | {} | {}",
                book.id, book.title, book.author, book.genre
            ))],
            RenderableRecord::Loan(loan) => {
                let dates = match loan.end_date {
                    Some(end) => format!("Start: {} | End: {}", loan.start_date, end),
                    None => format!("Start: {}", loan.start_date),
                };
                vec![
                    RecordLine::heading(format!("Loan ID: {}", loan.id)),
                    RecordLine::detail(format!("Book: {}", loan.book.title)),
                    RecordLine::detail(format!("Lender: {}", loan.lender.username)),
                    RecordLine::detail(format!("Borrower: {}", loan.borrower.username)),
                    RecordLine::detail(format!("Status: {}", loan.status)),
                    RecordLine::detail(dates),
                ]
            }
        }
    }
}

impl<'a> From<&'a User> for RenderableRecord<'a> {
    fn from(user: &'a User) -> Self {
        RenderableRecord::User(user)
    }
}

impl<'a> From<&'a Book> for RenderableRecord<'a> {
    fn from(book: &'a Book) -> Self {
        RenderableRecord::Book(book)
    }
}

impl<'a> From<&'a Loan> for RenderableRecord<'a> {
    fn from(loan: &'a Loan) -> Self {
        RenderableRecord::Loan(loan)
    }
}
