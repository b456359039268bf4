//! Tiny 3x5 bitmap font for the score overlay

pub const GLYPH_WIDTH: usize = 3;
pub const GLYPH_HEIGHT: usize = 5;

/// Rows top to bottom, bit 2 is the leftmost column
const DIGITS: [[u8; GLYPH_HEIGHT]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b111, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b010, 0b010, 0b010], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
];

const MINUS: [u8; GLYPH_HEIGHT] = [0b000, 0b000, 0b111, 0b000, 0b000];

pub fn glyph(c: char) -> Option<&'static [u8; GLYPH_HEIGHT]> {
    match c {
        '0'..='9' => DIGITS.get(c as usize - '0' as usize),
        '-' => Some(&MINUS),
        _ => None,
    }
}

/// Lit cells of a glyph as (column, row)
pub fn cells(rows: &[u8; GLYPH_HEIGHT]) -> impl Iterator<Item = (usize, usize)> + '_ {
    rows.iter().enumerate().flat_map(|(row, bits)| {
        (0..GLYPH_WIDTH)
            .filter(move |col| bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0)
            .map(move |col| (col, row))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_digits_have_glyphs() {
        for c in '0'..='9' {
            assert!(glyph(c).is_some(), "missing glyph for {}", c);
        }
        assert!(glyph('x').is_none());
    }

    #[test]
    fn test_one_cells() {
        let cells: Vec<_> = cells(glyph('1').unwrap()).collect();
        assert_eq!(
            cells,
            vec![(1, 0), (0, 1), (1, 1), (1, 2), (1, 3), (0, 4), (1, 4), (2, 4)]
        );
    }

    #[test]
    fn test_eight_is_fullest_digit() {
        let count = |c| cells(glyph(c).unwrap()).count();
        assert!(('0'..='9').all(|c| count(c) <= count('8')));
        assert_eq!(count('8'), 13);
    }
}
