//! Turning laid-out pages into PDF content and resource dictionaries.

use libro_layout::{BuiltinFont, TextLine, win_ansi_byte};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, StringFormat, dictionary};

/// The font resources shared by every page.
pub fn builtin_font_resources() -> Dictionary {
    let mut font_dict = Dictionary::new();
    for font in BuiltinFont::ALL {
        font_dict.set(
            font.resource_name(),
            Object::Dictionary(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            }),
        );
    }
    font_dict
}

/// Builds the content stream of one page from its lines.
pub fn render_lines_to_content(lines: &[TextLine]) -> Content {
    let mut page_ctx = PageContext::new();
    for line in lines {
        page_ctx.draw_text(line);
    }
    page_ctx.finish()
}

struct PageContext {
    content: Content,
    font: Option<(BuiltinFont, f32)>,
}

impl PageContext {
    fn new() -> Self {
        Self {
            content: Content { operations: vec![] },
            font: None,
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn set_font(&mut self, font: BuiltinFont, size: f32) {
        if self.font != Some((font, size)) {
            self.content.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(font.resource_name().as_bytes().to_vec()), size.into()],
            ));
            self.font = Some((font, size));
        }
    }

    fn draw_text(&mut self, line: &TextLine) {
        if line.text.trim().is_empty() {
            return;
        }
        self.content.operations.push(Operation::new("BT", vec![]));
        self.set_font(line.font, line.font_size);
        self.content
            .operations
            .push(Operation::new("Td", vec![line.x.into(), line.y.into()]));
        self.content.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(&line.text), StringFormat::Literal)],
        ));
        self.content.operations.push(Operation::new("ET", vec![]));
    }
}

/// Encodes `s` for a WinAnsiEncoding font. Characters the encoding cannot
/// draw become `?`, which is also how the layout measured them.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(|c| win_ansi_byte(c).unwrap_or(b'?')).collect()
}
