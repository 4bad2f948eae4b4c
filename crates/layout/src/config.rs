use crate::LayoutError;
use serde::{Deserialize, Serialize};

/// Fixed page geometry for the report, in PDF points.
///
/// The vertical axis follows PDF user space: `y` grows upwards, so writing
/// moves the cursor from `top_margin` down towards `bottom_margin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    pub line_height: f32,
    /// Extra space below a column header row.
    pub column_header_gap: f32,
    /// Vertical space consumed by a section header.
    pub section_header_height: f32,
    /// Vertical space consumed by the document title.
    pub title_height: f32,
    /// Space left after the last row of a section.
    pub section_gap: f32,
    /// Space left after each multi-line record.
    pub record_gap: f32,
    /// Horizontal offset of indented record lines.
    pub detail_indent: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            top_margin: 700.0,
            bottom_margin: 50.0,
            left_margin: 50.0,
            right_margin: 50.0,
            line_height: 15.0,
            column_header_gap: 5.0,
            section_header_height: 20.0,
            title_height: 30.0,
            section_gap: 10.0,
            record_gap: 5.0,
            detail_indent: 15.0,
        }
    }
}

impl PageGeometry {
    /// Returns true iff writing `required_height` below `y` would cross the
    /// bottom margin. Landing exactly on the margin still fits.
    pub fn needs_new_page(&self, y: f32, required_height: f32) -> bool {
        y - required_height < self.bottom_margin
    }

    /// The horizontal width available to text starting at the left margin.
    pub fn content_width(&self) -> f32 {
        self.page_width - self.left_margin - self.right_margin
    }

    /// Height consumed by a column header row.
    pub fn header_row_height(&self) -> f32 {
        self.line_height + self.column_header_gap
    }

    /// Every measurement must be finite, spacing must never move the cursor
    /// upwards, and the margins must leave room for text.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let measurements = [
            ("page width", self.page_width),
            ("page height", self.page_height),
            ("top margin", self.top_margin),
            ("bottom margin", self.bottom_margin),
            ("left margin", self.left_margin),
            ("right margin", self.right_margin),
            ("line height", self.line_height),
            ("column header gap", self.column_header_gap),
            ("section header height", self.section_header_height),
            ("title height", self.title_height),
            ("section gap", self.section_gap),
            ("record gap", self.record_gap),
            ("detail indent", self.detail_indent),
        ];
        for (name, value) in measurements {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidGeometry(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.line_height <= 0.0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "line height must be positive, got {}",
                self.line_height
            )));
        }
        if self.top_margin <= self.bottom_margin {
            return Err(LayoutError::InvalidGeometry(format!(
                "top margin {} must lie above bottom margin {}",
                self.top_margin, self.bottom_margin
            )));
        }
        if self.top_margin > self.page_height {
            return Err(LayoutError::InvalidGeometry(format!(
                "top margin {} lies outside a page of height {}",
                self.top_margin, self.page_height
            )));
        }
        if self.content_width() <= 0.0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "margins leave no content width on a page of width {}",
                self.page_width
            )));
        }
        Ok(())
    }
}

/// Font sizes for the different kinds of lines in the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontSizes {
    pub title: f32,
    pub section_header: f32,
    pub column_header: f32,
    pub body: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: 18.0,
            section_header: 14.0,
            column_header: 12.0,
            body: 12.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub geometry: PageGeometry,
    pub fonts: FontSizes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_new_page_boundary_fits_exactly() {
        let geometry = PageGeometry::default();
        // 65 - 15 == 50: lands on the margin, still fits.
        assert!(!geometry.needs_new_page(65.0, geometry.line_height));
        assert!(geometry.needs_new_page(64.0, geometry.line_height));
        assert!(!geometry.needs_new_page(700.0, geometry.line_height));
    }

    #[test]
    fn needs_new_page_accounts_for_block_height() {
        let geometry = PageGeometry::default();
        assert!(!geometry.needs_new_page(140.0, 6.0 * geometry.line_height));
        assert!(geometry.needs_new_page(139.0, 6.0 * geometry.line_height));
    }

    #[test]
    fn default_content_width() {
        assert_eq!(PageGeometry::default().content_width(), 512.0);
    }

    #[test]
    fn rejects_inverted_margins() {
        let geometry = PageGeometry {
            top_margin: 40.0,
            ..Default::default()
        };
        assert!(matches!(geometry.validate(), Err(LayoutError::InvalidGeometry(_))));
    }

    #[test]
    fn rejects_negative_gaps() {
        let negative = [
            PageGeometry { section_gap: -800.0, ..Default::default() },
            PageGeometry { record_gap: -5.0, ..Default::default() },
            PageGeometry { title_height: -30.0, ..Default::default() },
            PageGeometry { column_header_gap: -1.0, ..Default::default() },
            PageGeometry { section_header_height: -20.0, ..Default::default() },
            PageGeometry { bottom_margin: -10.0, ..Default::default() },
        ];
        for geometry in negative {
            assert!(
                matches!(geometry.validate(), Err(LayoutError::InvalidGeometry(_))),
                "accepted {geometry:?}"
            );
        }
    }

    #[test]
    fn rejects_non_finite_values() {
        let nan_line = PageGeometry { line_height: f32::NAN, ..Default::default() };
        assert!(nan_line.validate().is_err());
        let infinite_page = PageGeometry { page_width: f32::INFINITY, ..Default::default() };
        assert!(infinite_page.validate().is_err());
    }

    #[test]
    fn zero_gaps_are_allowed() {
        let tight = PageGeometry {
            column_header_gap: 0.0,
            section_gap: 0.0,
            record_gap: 0.0,
            detail_indent: 0.0,
            ..Default::default()
        };
        assert!(tight.validate().is_ok());
    }

    #[test]
    fn rejects_zero_content_width() {
        let geometry = PageGeometry {
            left_margin: 306.0,
            right_margin: 306.0,
            ..Default::default()
        };
        assert!(geometry.validate().is_err());
        assert!(PageGeometry::default().validate().is_ok());
    }
}
