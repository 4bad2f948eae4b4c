pub mod fixtures;
pub mod pdf_assertions;

use libro_report::{ReportConfig, ReportError, ReportGenerator, ReportSource};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of a single 1-based page.
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Generate a report with the default configuration.
pub fn generate_report<R: ReportSource + ?Sized>(source: &R) -> Result<GeneratedPdf, ReportError> {
    generate_report_with(ReportConfig::default(), source)
}

pub fn generate_report_with<R: ReportSource + ?Sized>(
    config: ReportConfig,
    source: &R,
) -> Result<GeneratedPdf, ReportError> {
    let bytes = ReportGenerator::new(config)?.generate(source)?;
    GeneratedPdf::from_bytes(bytes).map_err(|e| ReportError::Source(e.to_string()))
}
