use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::elements::Page;
use crate::paginator::Paginator;
use crate::section::ReportSection;
use crate::sink::PageCollector;
use chrono::NaiveDate;
use libro_types::{Book, Genre, Loan, LoanStatus, Role, User};

pub fn users(count: usize) -> Vec<User> {
    (1..=count as u64)
        .map(|id| User::new(id, format!("user{id}"), format!("user{id}@example.com"), Role::User))
        .collect()
}

pub fn books(count: usize) -> Vec<Book> {
    (1..=count as u64)
        .map(|id| Book::new(id, format!("Book {id}"), format!("Author {id}"), Genre::Fiction))
        .collect()
}

pub fn loans(count: usize) -> Vec<Loan> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (1..=count as u64)
        .map(|id| Loan {
            id,
            book: Book::new(id, format!("Book {id}"), "Someone", Genre::Horror),
            lender: User::new(1, "lender", "lender@example.com", Role::User),
            borrower: User::new(2, "borrower", "borrower@example.com", Role::User),
            start_date: start,
            end_date: (id % 2 == 0).then(|| start + chrono::Days::new(id)),
            status: LoanStatus::Completed,
        })
        .collect()
}

/// Lays out a title and the given sections into in-memory pages.
pub fn paginate_sections(
    config: LayoutConfig,
    title: &str,
    sections: &[ReportSection<'_>],
) -> Result<Vec<Page>, LayoutError> {
    let mut paginator = Paginator::new(config, PageCollector::new())?;
    paginator.write_title(title)?;
    for section in sections {
        paginator.render_section(section)?;
    }
    Ok(paginator.finish()?.into_pages())
}
