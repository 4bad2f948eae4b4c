pub mod records;
pub mod snapshot;

pub use records::{Book, Genre, Loan, LoanStatus, Role, User};
pub use snapshot::ReportSnapshot;
