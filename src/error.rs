use libro_layout::LayoutError;
use libro_render_lopdf::RenderError;
use thiserror::Error;

/// Everything that can abort report generation.
///
/// Generation is all-or-nothing: when any of these is returned, no document
/// bytes are handed out.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Could not read report data: {0}")]
    Source(String),

    #[error("Report configuration is invalid: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
