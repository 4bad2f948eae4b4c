use crate::error::ReportError;
use libro_layout::{FontSizes, LayoutConfig, PageGeometry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_TITLE: &str = "ADMIN REPORT";
pub const DEFAULT_FILENAME: &str = "Admin_Report.pdf";

/// Settings for one kind of report.
///
/// Every field has a default, so a configuration file only needs to name
/// what it changes:
///
/// ```json
/// { "title": "LIBRARY AUDIT", "geometry": { "lineHeight": 14.0 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportConfig {
    pub geometry: PageGeometry,
    pub fonts: FontSizes,
    pub title: String,
    /// Suggested file name for downloads and the CLI's default output path.
    pub filename: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::default(),
            fonts: FontSizes::default(),
            title: DEFAULT_TITLE.to_string(),
            filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

impl ReportConfig {
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        log::debug!("Loading report configuration from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig {
            geometry: self.geometry,
            fonts: self.fonts,
        }
    }

    /// Checks the geometry and that the filename can go into a
    /// `Content-Disposition` header unquoted.
    pub fn validate(&self) -> Result<(), ReportError> {
        self.geometry
            .validate()
            .map_err(|e| ReportError::Config(e.to_string()))?;
        let font_sizes = [
            self.fonts.title,
            self.fonts.section_header,
            self.fonts.column_header,
            self.fonts.body,
        ];
        if font_sizes.iter().any(|size| size.is_nan() || *size <= 0.0) {
            return Err(ReportError::Config(
                "font sizes must be positive".to_string(),
            ));
        }
        if self.filename.is_empty() {
            return Err(ReportError::Config("filename must not be empty".to_string()));
        }
        if let Some(c) = self
            .filename
            .chars()
            .find(|c| c.is_control() || c.is_whitespace() || matches!(c, '"' | ';' | '/' | '\\'))
        {
            return Err(ReportError::Config(format!(
                "filename '{}' contains the forbidden character {:?}",
                self.filename, c
            )));
        }
        Ok(())
    }
}
