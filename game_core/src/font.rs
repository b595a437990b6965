//! 3x5 bitmap digits for the score display

pub const GLYPH_COLS: usize = 3;
pub const GLYPH_ROWS: usize = 5;

// Row-major, first cell in the highest bit
const DIGITS: [u16; 10] = [
    0b111_101_101_101_111,
    0b010_010_010_010_010,
    0b111_001_111_100_111,
    0b111_001_111_001_111,
    0b101_101_111_001_001,
    0b111_100_111_001_111,
    0b111_100_111_101_111,
    0b111_100_001_001_001,
    0b111_101_111_101_111,
    0b111_101_111_001_111,
];

/// A single digit bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph(u16);

impl Glyph {
    pub fn digit(d: u32) -> Option<Self> {
        DIGITS.get(d as usize).copied().map(Glyph)
    }

    pub fn is_lit(&self, col: usize, row: usize) -> bool {
        let cell = row * GLYPH_COLS + col;
        let last = GLYPH_COLS * GLYPH_ROWS - 1;
        col < GLYPH_COLS && row < GLYPH_ROWS && (self.0 >> (last - cell)) & 1 == 1
    }

    /// Lit cells as (col, row)
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        (0..GLYPH_ROWS)
            .flat_map(|row| (0..GLYPH_COLS).map(move |col| (col, row)))
            .filter(move |&(col, row)| self.is_lit(col, row))
    }
}

/// Glyphs of a score and the x of each, centered on the player's third of
/// the field. Digit cells are `char_pixel` wide with one blank column between
/// digits.
pub fn layout_score(
    score: u32,
    index: usize,
    field_width: f32,
    char_pixel: f32,
) -> Vec<(Glyph, f32)> {
    let digits: Vec<Glyph> = score
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .filter_map(Glyph::digit)
        .collect();

    let align = field_width / 3.0;
    let char_w = char_pixel * (GLYPH_COLS as f32 + 1.0);
    let offset =
        align * (index as f32 + 1.0) - char_w * digits.len() as f32 / 2.0 + char_pixel / 2.0;

    digits
        .into_iter()
        .enumerate()
        .map(|(pos, glyph)| (glyph, offset + pos as f32 * char_w))
        .collect()
}
