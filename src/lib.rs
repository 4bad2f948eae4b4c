//! Paginated PDF admin report for the LibroRed book-lending application.
//!
//! The report lists every user, book and loan under a single title. Layout
//! lives in `libro-layout`, PDF encoding in `libro-render-lopdf`; this crate
//! wires them to a data source and a configuration.
//!
//! ```no_run
//! use libro_report::{ReportConfig, ReportGenerator, load_snapshot};
//!
//! # fn main() -> Result<(), libro_report::ReportError> {
//! let snapshot = load_snapshot("library.json")?;
//! let generator = ReportGenerator::new(ReportConfig::default())?;
//! let pdf = generator.generate(&snapshot)?;
//! std::fs::write("Admin_Report.pdf", pdf)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod download;
pub mod error;
pub mod generator;
pub mod source;

pub use config::ReportConfig;
pub use download::ReportDownload;
pub use error::ReportError;
pub use generator::{ReportGenerator, ReportLayout};
pub use source::{JsonFileSource, ReportSource, load_snapshot};

pub use libro_layout::{FontSizes, LayoutError, PageGeometry};
pub use libro_render_lopdf::RenderError;
pub use libro_types::{Book, Genre, Loan, LoanStatus, ReportSnapshot, Role, User};
