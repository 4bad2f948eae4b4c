pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A finished report as an HTTP handler would send it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDownload {
    filename: String,
    body: Vec<u8>,
}

impl ReportDownload {
    pub fn new(filename: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            body,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> &'static str {
        PDF_CONTENT_TYPE
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={}", self.filename)
    }

    /// `Content-Type` and `Content-Disposition`, in that order.
    pub fn headers(&self) -> [(&'static str, String); 2] {
        [
            ("Content-Type", self.content_type().to_string()),
            ("Content-Disposition", self.content_disposition()),
        ]
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}
