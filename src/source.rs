//! Where report data comes from.

use crate::error::ReportError;
use libro_types::{Book, Loan, ReportSnapshot, User};
use std::fs;
use std::path::{Path, PathBuf};

/// Read access to the three collections a report lists.
///
/// The generator calls [`ReportSource::snapshot`] exactly once per report,
/// so a source backed by a live store only has to be consistent within that
/// one call.
pub trait ReportSource {
    fn users(&self) -> Result<Vec<User>, ReportError>;
    fn books(&self) -> Result<Vec<Book>, ReportError>;
    fn loans(&self) -> Result<Vec<Loan>, ReportError>;

    fn snapshot(&self) -> Result<ReportSnapshot, ReportError> {
        Ok(ReportSnapshot::new(self.users()?, self.books()?, self.loans()?))
    }
}

impl ReportSource for ReportSnapshot {
    fn users(&self) -> Result<Vec<User>, ReportError> {
        Ok(self.users.clone())
    }

    fn books(&self) -> Result<Vec<Book>, ReportError> {
        Ok(self.books.clone())
    }

    fn loans(&self) -> Result<Vec<Loan>, ReportError> {
        Ok(self.loans.clone())
    }

    fn snapshot(&self) -> Result<ReportSnapshot, ReportError> {
        Ok(self.clone())
    }
}

pub fn load_snapshot(path: impl AsRef<Path>) -> Result<ReportSnapshot, ReportError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .map_err(|e| ReportError::Source(format!("{}: {}", path.display(), e)))?;
    let snapshot: ReportSnapshot = serde_json::from_str(&json)?;
    log::debug!(
        "Loaded {} users, {} books and {} loans from {}",
        snapshot.users.len(),
        snapshot.books.len(),
        snapshot.loans.len(),
        path.display()
    );
    Ok(snapshot)
}

/// A JSON export of the store, read from disk when the report asks for it.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSource for JsonFileSource {
    fn users(&self) -> Result<Vec<User>, ReportError> {
        Ok(self.snapshot()?.users)
    }

    fn books(&self) -> Result<Vec<Book>, ReportError> {
        Ok(self.snapshot()?.books)
    }

    fn loans(&self) -> Result<Vec<Loan>, ReportError> {
        Ok(self.snapshot()?.loans)
    }

    fn snapshot(&self) -> Result<ReportSnapshot, ReportError> {
        load_snapshot(&self.path)
    }
}
