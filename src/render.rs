use std::fmt::Display;

use crate::domain::Grid;

/// Format the current generation as one printable text frame, each row of
/// glyphs followed by a newline. Terminal clearing between frames is the
/// caller's business.
pub fn frame<T: Clone + PartialEq + Display>(grid: &Grid<T>) -> String {
    let mut out = String::new();
    for row in grid.render() {
        for glyph in row {
            out.push_str(&glyph.to_string());
        }
        out.push('\n');
    }
    out
}
