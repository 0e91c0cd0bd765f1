//! Built-in 3x5 block font
//!
//! Each glyph is five rows of three bits (MSB = left column). Lowercase
//! letters render as uppercase; characters without a glyph advance blank.

/// Glyph grid width in cells
pub const GLYPH_COLS: usize = 3;
/// Glyph grid height in cells
pub const GLYPH_ROWS: usize = 5;
/// Horizontal advance per character, in cells (glyph + one cell gap)
const ADVANCE_COLS: f32 = (GLYPH_COLS + 1) as f32;

/// Row bitmaps for a character
pub fn glyph(c: char) -> Option<[u8; GLYPH_ROWS]> {
    let rows = match c.to_ascii_uppercase() {
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b011, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '?' => [0b110, 0b001, 0b010, 0b000, 0b010],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '\'' => [0b010, 0b010, 0b000, 0b000, 0b000],
        _ => return None,
    };
    Some(rows)
}

/// Rendered width of `text` at the given cap height
pub fn text_width(text: &str, size: f32) -> f32 {
    let count = text.chars().count();
    if count == 0 {
        return 0.0;
    }
    let cell = size / GLYPH_ROWS as f32;
    count as f32 * ADVANCE_COLS * cell - cell
}

/// Filled cells `[x, y, w, h]` for `text` starting at `x` with its baseline at `baseline`
pub fn layout(text: &str, x: f32, baseline: f32, size: f32) -> Vec<[f32; 4]> {
    let cell = size / GLYPH_ROWS as f32;
    let top = baseline - size;
    let mut cells = Vec::new();

    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        let left = x + i as f32 * ADVANCE_COLS * cell;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_COLS {
                if bits & (1 << (GLYPH_COLS - 1 - col)) != 0 {
                    cells.push([
                        left + col as f32 * cell,
                        top + row as f32 * cell,
                        cell,
                        cell,
                    ]);
                }
            }
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_maps_to_uppercase() {
        assert_eq!(glyph('a'), glyph('A'));
        assert!(glyph(' ').is_none());
        assert!(glyph('~').is_none());
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 50.0), 0.0);
        // One glyph is exactly three cells wide
        assert!((text_width("1", 50.0) - 30.0).abs() < 0.001);
        // Each extra glyph adds four cells
        assert!((text_width("10", 50.0) - 70.0).abs() < 0.001);
    }

    #[test]
    fn test_layout_one() {
        // '1' has 1 + 2 + 1 + 1 + 3 lit cells
        let cells = layout("1", 0.0, 50.0, 50.0);
        assert_eq!(cells.len(), 8);
        // First row sits at baseline - size, middle column
        assert_eq!(cells[0], [10.0, 0.0, 10.0, 10.0]);
        // Everything stays above the baseline
        assert!(cells.iter().all(|c| c[1] + c[3] <= 50.0 + 0.001));
    }

    #[test]
    fn test_layout_skips_unknown_but_advances() {
        let a = layout("1", 0.0, 10.0, 10.0);
        let b = layout(" 1", 0.0, 10.0, 10.0);
        assert_eq!(a.len(), b.len());
        // Second character starts four cells to the right
        assert!((b[0][0] - a[0][0] - 8.0).abs() < 0.001);
    }
}
