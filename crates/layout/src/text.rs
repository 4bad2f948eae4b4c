use crate::fonts::BuiltinFont;

/// Cuts `text` to the widest prefix whose rendered width fits in `max_width`.
///
/// There is no wrapping and no ellipsis. If not even the first character
/// fits, the result is empty. The result is always a prefix of the input, so
/// truncating it again with the same budget returns it unchanged.
pub fn truncate_to_width(text: &str, font: BuiltinFont, font_size: f32, max_width: f32) -> &str {
    let mut width = 0.0;
    for (idx, ch) in text.char_indices() {
        width += font.char_width(ch, font_size);
        if width > max_width {
            return &text[..idx];
        }
    }
    text
}
