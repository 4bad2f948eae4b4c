use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
    #[error("Cannot {action} while the report is in phase {phase:?}.")]
    InvalidTransition {
        action: &'static str,
        phase: ReportPhase,
    },
    #[error("Failed to close page: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub mod config;
pub mod cursor;
pub mod elements;
pub mod fonts;
pub mod paginator;
pub mod record;
pub mod section;
pub mod sink;
pub mod text;

pub use self::config::{FontSizes, LayoutConfig, PageGeometry};
pub use self::cursor::PageCursor;
pub use self::elements::{LineRole, Page, TextLine};
pub use self::fonts::{BuiltinFont, win_ansi_byte};
pub use self::paginator::{Paginator, ReportPhase, SectionSummary};
pub use self::record::{Emphasis, RecordKind, RecordLine, RenderableRecord};
pub use self::section::ReportSection;
pub use self::sink::{PageCollector, PageSink};
pub use self::text::truncate_to_width;

#[cfg(test)]
mod test_utils;
