use crate::fonts::BuiltinFont;

/// What a placed line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineRole {
    Title,
    SectionHeader { section: usize },
    ColumnHeader { section: usize },
    /// Line `line` of record `record` within section `section`.
    Record {
        section: usize,
        record: usize,
        line: usize,
    },
}

/// A single line of text placed on a page.
///
/// `x` and `y` are the baseline origin in PDF user space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font: BuiltinFont,
    pub font_size: f32,
    pub role: LineRole,
}

/// One page of laid-out lines, in write order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    number: usize,
    lines: Vec<TextLine>,
}

impl Page {
    pub(crate) fn new(number: usize) -> Self {
        Self {
            number,
            lines: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, line: TextLine) {
        self.lines.push(line);
    }

    /// 1-based page number.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    pub fn is_blank(&self) -> bool {
        self.lines.is_empty()
    }

    /// Indices of the records of `section` that have lines on this page,
    /// in order and without repetition.
    pub fn records_of(&self, section: usize) -> Vec<usize> {
        let mut records: Vec<usize> = Vec::new();
        for line in &self.lines {
            if let LineRole::Record { section: s, record, .. } = line.role {
                if s == section && records.last() != Some(&record) {
                    records.push(record);
                }
            }
        }
        records
    }

    /// Number of column header rows of `section` on this page.
    pub fn column_headers_of(&self, section: usize) -> usize {
        self.lines
            .iter()
            .filter(|line| line.role == LineRole::ColumnHeader { section })
            .count()
    }
}
