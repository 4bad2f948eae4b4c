use libro_layout::LayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}

/// Render failures surface to the paginator as a failed page close.
impl From<RenderError> for LayoutError {
    fn from(err: RenderError) -> Self {
        LayoutError::Sink(Box::new(err))
    }
}
