use crate::config::ReportConfig;
use crate::download::ReportDownload;
use crate::error::ReportError;
use crate::source::ReportSource;
use libro_layout::{Page, PageCollector, PageSink, Paginator, ReportSection, SectionSummary};
use libro_render_lopdf::LopdfRenderer;
use libro_types::ReportSnapshot;
use std::io::{Cursor, Seek, Write};
use std::time::Instant;

/// The pages of a report without their PDF encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub pages: Vec<Page>,
    pub sections: Vec<SectionSummary>,
}

impl ReportLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// For every page, the number of records of each section that start or
    /// continue on it, in section order.
    pub fn record_distribution(&self) -> Vec<Vec<usize>> {
        self.pages
            .iter()
            .map(|page| {
                self.sections
                    .iter()
                    .map(|section| page.records_of(section.index).len())
                    .collect()
            })
            .collect()
    }
}

/// Produces the admin report: a title followed by the users, books and
/// loans tables, paginated onto as many pages as they need.
pub struct ReportGenerator {
    config: ReportConfig,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self {
            config: ReportConfig::default(),
        }
    }
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Result<Self, ReportError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Renders the report to an in-memory PDF.
    pub fn generate<R: ReportSource + ?Sized>(&self, source: &R) -> Result<Vec<u8>, ReportError> {
        Ok(self.generate_into(source, Cursor::new(Vec::new()))?.into_inner())
    }

    /// Renders the report into `writer` and hands it back once the document
    /// is complete. On error the writer may hold a partial document.
    pub fn generate_into<R, W>(&self, source: &R, writer: W) -> Result<W, ReportError>
    where
        R: ReportSource + ?Sized,
        W: Write + Seek,
    {
        let started = Instant::now();
        let snapshot = source.snapshot()?;
        log::info!(
            "Generating '{}' for {} users, {} books and {} loans",
            self.config.title,
            snapshot.users.len(),
            snapshot.books.len(),
            snapshot.loans.len()
        );

        let renderer = LopdfRenderer::new(writer, &self.config.geometry, &self.config.title)?;
        let (renderer, sections) = self.lay_out(&snapshot, renderer)?;
        let pages = renderer.page_count();
        let writer = renderer.finish()?;

        log::info!(
            "Report finished: {} pages, {} sections in {:.2?}",
            pages,
            sections.len(),
            started.elapsed()
        );
        Ok(writer)
    }

    /// Renders the report and wraps it with the metadata of an HTTP download.
    pub fn download<R: ReportSource + ?Sized>(
        &self,
        source: &R,
    ) -> Result<ReportDownload, ReportError> {
        let body = self.generate(source)?;
        Ok(ReportDownload::new(self.config.filename.clone(), body))
    }

    /// Lays the report out without encoding it.
    pub fn plan(&self, snapshot: &ReportSnapshot) -> Result<ReportLayout, ReportError> {
        let (collector, sections) = self.lay_out(snapshot, PageCollector::new())?;
        Ok(ReportLayout {
            pages: collector.into_pages(),
            sections,
        })
    }

    fn lay_out<S: PageSink>(
        &self,
        snapshot: &ReportSnapshot,
        sink: S,
    ) -> Result<(S, Vec<SectionSummary>), ReportError> {
        let sections = [
            ReportSection::users(&snapshot.users),
            ReportSection::books(&snapshot.books),
            ReportSection::loans(&snapshot.loans),
        ];

        let mut paginator = Paginator::new(self.config.layout(), sink)?;
        paginator.write_title(&self.config.title)?;

        let summaries = sections
            .iter()
            .map(|section| paginator.render_section(section))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((paginator.finish()?, summaries))
    }
}
