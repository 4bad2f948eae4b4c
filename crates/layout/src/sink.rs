use crate::LayoutError;
use crate::elements::Page;

/// Receives pages as the paginator closes them.
///
/// Pages arrive exactly once each, in page order, and are immutable from then
/// on. A sink that writes a document emits one content stream per call.
pub trait PageSink {
    fn close_page(&mut self, page: Page) -> Result<(), LayoutError>;
}

impl<S: PageSink + ?Sized> PageSink for &mut S {
    fn close_page(&mut self, page: Page) -> Result<(), LayoutError> {
        (**self).close_page(page)
    }
}

/// A sink that keeps every closed page in memory.
#[derive(Debug, Default)]
pub struct PageCollector {
    pages: Vec<Page>,
}

impl PageCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }
}

impl PageSink for PageCollector {
    fn close_page(&mut self, page: Page) -> Result<(), LayoutError> {
        self.pages.push(page);
        Ok(())
    }
}
