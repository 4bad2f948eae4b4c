use chrono::{Days, NaiveDate};
use libro_report::{
    Book, Genre, Loan, LoanStatus, ReportError, ReportSnapshot, ReportSource, Role, User,
};

pub fn users(count: usize) -> Vec<User> {
    (1..=count as u64)
        .map(|id| {
            let role = if id == 1 { Role::Admin } else { Role::User };
            User::new(id, format!("user{id}"), format!("user{id}@librored.com"), role)
        })
        .collect()
}

pub fn books(count: usize) -> Vec<Book> {
    const GENRES: [Genre; 3] = [Genre::Fiction, Genre::MysteryThriller, Genre::Romance];
    (1..=count as u64)
        .map(|id| {
            Book::new(
                id,
                format!("Book {id}"),
                format!("Author {id}"),
                GENRES[id as usize % GENRES.len()],
            )
        })
        .collect()
}

/// Odd ids are open-ended and active, even ids are completed with an end date.
pub fn loans(count: usize) -> Vec<Loan> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (1..=count as u64)
        .map(|id| {
            let completed = id % 2 == 0;
            Loan {
                id,
                book: Book::new(id, format!("Book {id}"), format!("Author {id}"), Genre::Fiction),
                lender: User::new(1, "user1", "user1@librored.com", Role::Admin),
                borrower: User::new(2, "user2", "user2@librored.com", Role::User),
                start_date: start,
                end_date: completed.then(|| start + Days::new(14)),
                status: if completed { LoanStatus::Completed } else { LoanStatus::Active },
            }
        })
        .collect()
}

pub fn snapshot(users_n: usize, books_n: usize, loans_n: usize) -> ReportSnapshot {
    ReportSnapshot::new(users(users_n), books(books_n), loans(loans_n))
}

/// The export format read by the CLI.
pub fn snapshot_json() -> &'static str {
    r#"{
        "users": [
            {"id": 1, "username": "admin", "email": "admin@librored.com", "role": "ROLE_ADMIN"},
            {"id": 2, "username": "maria", "email": "maria@librored.com", "role": "ROLE_USER"}
        ],
        "books": [
            {"id": 10, "title": "Dune", "author": "Frank Herbert", "genre": "SciFi_Fantasy"}
        ],
        "loans": [
            {
                "id": 100,
                "book": {"id": 10, "title": "Dune", "author": "Frank Herbert", "genre": "SciFi_Fantasy"},
                "lender": {"id": 1, "username": "admin", "email": "admin@librored.com", "role": "ROLE_ADMIN"},
                "borrower": {"id": 2, "username": "maria", "email": "maria@librored.com", "role": "ROLE_USER"},
                "startDate": "2024-05-01",
                "endDate": null,
                "status": "Active"
            }
        ]
    }"#
}

/// A source whose store is unreachable.
pub struct UnavailableSource;

impl ReportSource for UnavailableSource {
    fn users(&self) -> Result<Vec<User>, ReportError> {
        Err(ReportError::Source("user store unavailable".to_string()))
    }

    fn books(&self) -> Result<Vec<Book>, ReportError> {
        Ok(Vec::new())
    }

    fn loans(&self) -> Result<Vec<Loan>, ReportError> {
        Ok(Vec::new())
    }
}
