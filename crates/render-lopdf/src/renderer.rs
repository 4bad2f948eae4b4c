use crate::error::RenderError;
use crate::helpers;
use crate::writer::StreamingPdfWriter;
use libro_layout::{LayoutError, Page, PageGeometry, PageSink};
use lopdf::{Object, ObjectId, StringFormat, dictionary};
use std::io::{Cursor, Seek, Write};

/// A page sink that streams each closed page into a PDF document.
///
/// Every page becomes exactly one content stream plus one page object,
/// written the moment the paginator closes it.
pub struct LopdfRenderer<W: Write + Seek> {
    writer: StreamingPdfWriter<W>,
    page_width: f32,
    page_height: f32,
}

impl<W: Write + Seek> LopdfRenderer<W> {
    pub fn new(writer: W, geometry: &PageGeometry, title: &str) -> Result<Self, RenderError> {
        let mut writer = StreamingPdfWriter::new(writer, "1.7", helpers::builtin_font_resources())?;
        writer.set_info(dictionary! {
            "Title" => Object::String(helpers::to_win_ansi(title), StringFormat::Literal),
            "Producer" => Object::String(b"libro-report".to_vec(), StringFormat::Literal),
        });
        Ok(Self {
            writer,
            page_width: geometry.page_width,
            page_height: geometry.page_height,
        })
    }

    pub fn page_count(&self) -> usize {
        self.writer.page_count()
    }

    fn write_page(&mut self, page: &Page) -> Result<ObjectId, RenderError> {
        let content = helpers::render_lines_to_content(page.lines());
        let content_id = self.writer.write_content_stream(content)?;

        let media_box: Vec<Object> = vec![
            0.0f32.into(),
            0.0f32.into(),
            self.page_width.into(),
            self.page_height.into(),
        ];
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.writer.pages_id,
            "MediaBox" => media_box,
            "Contents" => content_id,
            "Resources" => self.writer.resources_id,
        };
        let page_id = self.writer.write_object(page_dict.into())?;
        self.writer.push_page_id(page_id);
        log::trace!(
            "Wrote page {} ({} lines) as object {:?}",
            page.number(),
            page.lines().len(),
            page_id
        );
        Ok(page_id)
    }

    /// Completes the document and returns the underlying writer.
    pub fn finish(self) -> Result<W, RenderError> {
        let pages = self.writer.page_count();
        let writer = self.writer.finish()?;
        log::debug!("PDF document finished with {} pages", pages);
        Ok(writer)
    }
}

impl LopdfRenderer<Cursor<Vec<u8>>> {
    pub fn in_memory(geometry: &PageGeometry, title: &str) -> Result<Self, RenderError> {
        Self::new(Cursor::new(Vec::new()), geometry, title)
    }

    pub fn finish_into_buffer(self) -> Result<Vec<u8>, RenderError> {
        Ok(self.finish()?.into_inner())
    }
}

impl<W: Write + Seek> PageSink for LopdfRenderer<W> {
    fn close_page(&mut self, page: Page) -> Result<(), LayoutError> {
        self.write_page(&page)?;
        Ok(())
    }
}
