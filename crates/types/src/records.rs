//! Records listed in the admin report.
//!
//! These mirror the persisted entities of the lending application, reduced to
//! the fields the report prints. They are plain data: the report never mutates
//! them and never talks to the store they came from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The authority a user account carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "ROLE_USER", alias = "USER")]
    User,
    #[serde(rename = "ROLE_ADMIN", alias = "ADMIN")]
    Admin,
}

impl Role {
    /// The stored authority name, e.g. `ROLE_ADMIN`.
    pub fn authority(self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
        }
    }
}

/// Prints the role without its `ROLE_` prefix.
impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let authority = self.authority();
        f.write_str(authority.strip_prefix("ROLE_").unwrap_or(authority))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    #[serde(rename = "Non_Fiction")]
    NonFiction,
    #[serde(rename = "Mystery_Thriller")]
    MysteryThriller,
    #[serde(rename = "SciFi_Fantasy")]
    SciFiFantasy,
    Romance,
    #[serde(rename = "Historical_Fiction")]
    HistoricalFiction,
    Horror,
}

impl Genre {
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non_Fiction",
            Genre::MysteryThriller => "Mystery_Thriller",
            Genre::SciFiFantasy => "SciFi_Fantasy",
            Genre::Romance => "Romance",
            Genre::HistoricalFiction => "Historical_Fiction",
            Genre::Horror => "Horror",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanStatus {
    #[default]
    Active,
    Completed,
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoanStatus::Active => "Active",
            LoanStatus::Completed => "Completed",
        })
    }
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn new(id: u64, username: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            role,
        }
    }
}

/// A book some user owns and may lend out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Book {
    pub fn new(id: u64, title: impl Into<String>, author: impl Into<String>, genre: Genre) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            genre,
            description: None,
        }
    }
}

/// A lending of `book` from `lender` to `borrower`.
///
/// `end_date` stays empty while the loan is open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: u64,
    pub book: Book,
    pub lender: User,
    pub borrower: User,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: LoanStatus,
}
