use crate::config::PageGeometry;
use crate::elements::{Page, TextLine};

/// The vertical write position on the page currently open.
///
/// The cursor owns that page. Moving to the next page hands the finished one
/// back to the caller, so a page can only be closed once.
#[derive(Debug)]
pub struct PageCursor {
    geometry: PageGeometry,
    y: f32,
    page: Page,
}

impl PageCursor {
    /// Opens page 1 with the cursor at the top margin.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            y: geometry.top_margin,
            page: Page::new(1),
            geometry,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_number(&self) -> usize {
        self.page.number()
    }

    pub fn needs_new_page(&self, required_height: f32) -> bool {
        self.geometry.needs_new_page(self.y, required_height)
    }

    /// Moves the cursor down by `height`.
    pub fn advance(&mut self, height: f32) {
        self.y -= height;
    }

    /// Places a line on the open page.
    pub fn place(&mut self, line: TextLine) {
        self.page.push(line);
    }

    /// Closes the open page, returning it, and opens the next one with the
    /// cursor reset to the top margin.
    pub(crate) fn turn_page(&mut self) -> Page {
        let next = Page::new(self.page.number() + 1);
        self.y = self.geometry.top_margin;
        std::mem::replace(&mut self.page, next)
    }

    /// Closes the open page for good.
    pub(crate) fn into_page(self) -> Page {
        self.page
    }

    #[cfg(test)]
    pub(crate) fn set_y(&mut self, y: f32) {
        self.y = y;
    }
}
