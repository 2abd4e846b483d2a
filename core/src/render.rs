use alloc::string::String;

use crate::Coord;

/// Draws row-major glyphs as a bordered grid, one line per row and each glyph padded with a space.
pub fn render_grid(width: Coord, glyphs: impl IntoIterator<Item = char>) -> String {
    let rule = "─".repeat(usize::from(width) * 2);
    let mut out = String::new();

    out.push('┌');
    out.push_str(&rule);
    out.push_str("┐\n");

    let mut column = 0;
    for glyph in glyphs {
        if column == 0 {
            out.push('│');
        }
        out.push(glyph);
        out.push(' ');
        column += 1;
        if column == width {
            out.push_str("│\n");
            column = 0;
        }
    }

    out.push('└');
    out.push_str(&rule);
    out.push_str("┘\n");
    out
}
