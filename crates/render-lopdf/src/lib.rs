//! Streaming PDF output for the admin report, built on lopdf.
//!
//! [`LopdfRenderer`] is a [`libro_layout::PageSink`]: the paginator hands it
//! each page as it is closed and the renderer writes that page's content
//! stream immediately.

mod error;
mod helpers;
mod renderer;
mod writer;

pub use error::RenderError;
pub use helpers::{builtin_font_resources, render_lines_to_content, to_win_ansi};
pub use renderer::LopdfRenderer;
pub use writer::StreamingPdfWriter;
