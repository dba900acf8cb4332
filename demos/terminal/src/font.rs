//! Tiny 3x5 bitmap font covering what the clock draws.

pub const GLYPH_WIDTH: i32 = 3;
pub const GLYPH_HEIGHT: i32 = 5;

/// Horizontal advance per character, including one column of spacing.
pub const ADVANCE: i32 = GLYPH_WIDTH + 1;

/// Rows of a glyph, top first. Bit 2 is the leftmost column.
pub fn glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b011, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        _ => [0; 5],
    }
}

/// Pixels set by `c` as offsets from its top-left corner.
pub fn lit_pixels(c: char) -> impl Iterator<Item = (i32, i32)> {
    let rows = glyph(c);
    (0..GLYPH_HEIGHT).flat_map(move |dy| {
        let row = rows[dy as usize];
        (0..GLYPH_WIDTH)
            .filter(move |dx| row & (0b100 >> *dx) != 0)
            .map(move |dx| (dx, dy))
    })
}
