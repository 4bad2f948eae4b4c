//! Lays a title and a sequence of record tables out onto fixed-size pages.
//!
//! Every placement decision goes through [`PageGeometry::needs_new_page`]:
//! before the title, before a section header (together with its column header
//! row), and before every record block. A record is placed as a whole, so its
//! lines never straddle a page break, and a page break inside a table re-emits
//! the column header row at the top of the new page.

use crate::LayoutError;
use crate::config::{LayoutConfig, PageGeometry};
use crate::cursor::PageCursor;
use crate::elements::{LineRole, TextLine};
use crate::fonts::BuiltinFont;
use crate::record::Emphasis;
use crate::section::ReportSection;
use crate::sink::PageSink;
use crate::text::truncate_to_width;

/// Where a paginator is in the life of one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPhase {
    Start,
    TitleWritten,
    SectionInProgress(usize),
    SectionDone(usize),
    Finalized,
}

/// Where a section ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSummary {
    pub index: usize,
    pub first_page: usize,
    pub last_page: usize,
    pub records: usize,
}

impl SectionSummary {
    pub fn page_span(&self) -> usize {
        self.last_page - self.first_page + 1
    }
}

pub struct Paginator<S: PageSink> {
    config: LayoutConfig,
    cursor: PageCursor,
    sink: S,
    phase: ReportPhase,
    pages_closed: usize,
}

impl<S: PageSink> Paginator<S> {
    /// Opens the first page. Fails if the configured geometry cannot hold text.
    pub fn new(config: LayoutConfig, sink: S) -> Result<Self, LayoutError> {
        config.geometry.validate()?;
        Ok(Self {
            cursor: PageCursor::new(config.geometry),
            config,
            sink,
            phase: ReportPhase::Start,
            pages_closed: 0,
        })
    }

    pub fn phase(&self) -> ReportPhase {
        self.phase
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    fn geometry(&self) -> PageGeometry {
        self.config.geometry
    }

    pub fn write_title(&mut self, title: &str) -> Result<(), LayoutError> {
        if self.phase != ReportPhase::Start {
            return Err(LayoutError::InvalidTransition {
                action: "write the title",
                phase: self.phase,
            });
        }
        let geometry = self.geometry();
        self.ensure_room(geometry.title_height)?;
        self.emit(
            title,
            BuiltinFont::HelveticaBold,
            self.config.fonts.title,
            0.0,
            LineRole::Title,
        );
        self.cursor.advance(geometry.title_height);
        self.phase = ReportPhase::TitleWritten;
        Ok(())
    }

    /// Lays out one section: header, column header row, then every record.
    pub fn render_section(
        &mut self,
        section: &ReportSection<'_>,
    ) -> Result<SectionSummary, LayoutError> {
        let index = match self.phase {
            ReportPhase::TitleWritten => 0,
            ReportPhase::SectionDone(previous) => previous + 1,
            phase => {
                return Err(LayoutError::InvalidTransition {
                    action: "start a section",
                    phase,
                });
            }
        };
        self.phase = ReportPhase::SectionInProgress(index);
        let geometry = self.geometry();

        self.ensure_room(geometry.section_header_height + geometry.header_row_height())?;
        let first_page = self.cursor.page_number();
        self.emit(
            &section.title,
            BuiltinFont::HelveticaBold,
            self.config.fonts.section_header,
            0.0,
            LineRole::SectionHeader { section: index },
        );
        self.cursor.advance(geometry.section_header_height);
        self.emit_column_header(section, index);

        for (record_idx, record) in section.records.iter().enumerate() {
            let lines = record.lines();
            let block_height = lines.len() as f32 * geometry.line_height;
            if self.cursor.needs_new_page(block_height) {
                self.break_page()?;
                self.emit_column_header(section, index);
                if self.cursor.needs_new_page(block_height) {
                    log::warn!(
                        "Record {} of '{}' is taller than an empty page; placing it anyway.",
                        record_idx,
                        section.title
                    );
                }
            }

            for (line_idx, line) in lines.iter().enumerate() {
                let font = match line.emphasis {
                    Emphasis::Strong => BuiltinFont::HelveticaBold,
                    Emphasis::Normal => BuiltinFont::Helvetica,
                };
                let indent = if line.indented {
                    geometry.detail_indent
                } else {
                    0.0
                };
                self.emit(
                    &line.text,
                    font,
                    self.config.fonts.body,
                    indent,
                    LineRole::Record {
                        section: index,
                        record: record_idx,
                        line: line_idx,
                    },
                );
                self.cursor.advance(geometry.line_height);
            }
            if record.kind().is_multiline() {
                self.cursor.advance(geometry.record_gap);
            }
        }

        self.cursor.advance(geometry.section_gap);
        self.phase = ReportPhase::SectionDone(index);

        let summary = SectionSummary {
            index,
            first_page,
            last_page: self.cursor.page_number(),
            records: section.records.len(),
        };
        log::debug!(
            "Section '{}' placed {} records on pages {}..={}",
            section.title,
            summary.records,
            summary.first_page,
            summary.last_page
        );
        Ok(summary)
    }

    /// Closes the last open page and hands back the sink.
    pub fn finish(mut self) -> Result<S, LayoutError> {
        match self.phase {
            ReportPhase::TitleWritten | ReportPhase::SectionDone(_) => {}
            phase => {
                return Err(LayoutError::InvalidTransition {
                    action: "finish the report",
                    phase,
                });
            }
        }
        let last = self.cursor.into_page();
        self.sink.close_page(last)?;
        self.pages_closed += 1;
        self.phase = ReportPhase::Finalized;
        log::debug!("Report finalized with {} pages", self.pages_closed);
        Ok(self.sink)
    }

    /// Breaks to a new page unless `required_height` still fits. A blank page
    /// is never broken away from.
    fn ensure_room(&mut self, required_height: f32) -> Result<(), LayoutError> {
        if !self.cursor.needs_new_page(required_height) {
            return Ok(());
        }
        if self.cursor.page().is_blank() {
            log::warn!(
                "{:.1}pt requested on an empty page with {:.1}pt available",
                required_height,
                self.cursor.y() - self.geometry().bottom_margin
            );
            return Ok(());
        }
        self.break_page()
    }

    fn break_page(&mut self) -> Result<(), LayoutError> {
        let finished = self.cursor.turn_page();
        log::debug!(
            "Page {} full, continuing on page {}",
            finished.number(),
            self.cursor.page_number()
        );
        self.sink.close_page(finished)?;
        self.pages_closed += 1;
        Ok(())
    }

    fn emit_column_header(&mut self, section: &ReportSection<'_>, index: usize) {
        self.emit(
            section.kind.column_header(),
            BuiltinFont::HelveticaBold,
            self.config.fonts.column_header,
            0.0,
            LineRole::ColumnHeader { section: index },
        );
        self.cursor.advance(self.geometry().header_row_height());
    }

    fn emit(&mut self, text: &str, font: BuiltinFont, font_size: f32, indent: f32, role: LineRole) {
        let geometry = self.geometry();
        let fitted = truncate_to_width(text, font, font_size, geometry.content_width() - indent);
        if fitted.is_empty() && !text.is_empty() {
            log::warn!("Line {:?} does not fit the page width at all", role);
        } else if fitted.len() < text.len() {
            log::trace!("Truncated {:?} from {} to {} bytes", role, text.len(), fitted.len());
        }
        self.cursor.place(TextLine {
            text: fitted.to_string(),
            x: geometry.left_margin + indent,
            y: self.cursor.y(),
            font,
            font_size,
            role,
        });
    }

    #[cfg(test)]
    pub(crate) fn cursor_mut(&mut self) -> &mut PageCursor {
        &mut self.cursor
    }
}
