//! Matrix rain simulation.
//!
//! One drop per text column. Each step emits the glyph to draw at every
//! drop's current row and moves the drop down; drops that fall past the
//! bottom restart at the top with a small random chance, which staggers
//! the columns.

/// Glyphs the rain draws from.
pub const MATRIX_CHARSET: &str =
    "アイウエオカキクケコサシスセソタチツテトナニヌネノ0123456789ABCDEF<>/{}=+*";

/// Per-step chance that a drop past the bottom edge restarts at the top.
const RESET_CHANCE: f64 = 0.025;

/// A glyph to paint at a grid position (column, row).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub column: usize,
    pub row: u32,
    pub ch: char,
}

#[derive(Clone, Debug)]
pub struct MatrixRain {
    font_size: f64,
    rows: u32,
    drops: Vec<u32>,
    charset: Vec<char>,
}

impl MatrixRain {
    /// Builds a rain grid for a `width` x `height` pixel canvas.
    pub fn new(width: f64, height: f64, font_size: f64) -> Self {
        let mut rain = Self {
            font_size: font_size.max(1.0),
            rows: 0,
            drops: Vec::new(),
            charset: MATRIX_CHARSET.chars().collect(),
        };
        rain.resize(width, height);
        rain
    }

    /// Adjusts to a new canvas size, keeping existing drops where possible.
    pub fn resize(&mut self, width: f64, height: f64) {
        let columns = (width.max(0.0) / self.font_size).floor() as usize;
        self.rows = (height.max(0.0) / self.font_size).ceil() as u32;
        self.drops.resize(columns, 1);
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Advances every drop one row. `random` must return values in [0, 1).
    pub fn step(&mut self, mut random: impl FnMut() -> f64) -> Vec<Glyph> {
        let mut glyphs = Vec::with_capacity(self.drops.len());
        for (column, drop) in self.drops.iter_mut().enumerate() {
            let pick = (random() * self.charset.len() as f64) as usize;
            let ch = self.charset[pick.min(self.charset.len() - 1)];
            glyphs.push(Glyph {
                column,
                row: *drop,
                ch,
            });

            if *drop > self.rows && random() < RESET_CHANCE {
                *drop = 0;
            }
            *drop += 1;
        }
        glyphs
    }

    /// Pixel position of a glyph's baseline.
    pub fn position(&self, glyph: &Glyph) -> (f64, f64) {
        (
            glyph.column as f64 * self.font_size,
            f64::from(glyph.row) * self.font_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size() {
        let rain = MatrixRain::new(160.0, 100.0, 16.0);
        assert_eq!(rain.columns(), 10);
    }

    #[test]
    fn test_drops_fall() {
        let mut rain = MatrixRain::new(32.0, 160.0, 16.0);
        let first = rain.step(|| 0.5);
        let second = rain.step(|| 0.5);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].row + 1, second[0].row);
        assert!(MATRIX_CHARSET.contains(first[0].ch));
    }

    #[test]
    fn test_drop_resets_past_bottom() {
        let mut rain = MatrixRain::new(16.0, 32.0, 16.0);
        for _ in 0..5 {
            rain.step(|| 0.99);
        }
        // Past the bottom, a low roll sends the drop back to the top.
        rain.step(|| 0.0);
        assert_eq!(rain.step(|| 0.99)[0].row, 1);
    }

    #[test]
    fn test_random_upper_edge_is_clamped() {
        let mut rain = MatrixRain::new(16.0, 16.0, 16.0);
        let glyphs = rain.step(|| 1.0);
        assert_eq!(glyphs[0].ch, *rain.charset.last().unwrap());
    }

    #[test]
    fn test_resize_keeps_drops() {
        let mut rain = MatrixRain::new(32.0, 160.0, 16.0);
        rain.step(|| 0.5);
        rain.resize(64.0, 160.0);
        let glyphs = rain.step(|| 0.5);
        assert_eq!(glyphs[0].row, 2);
        assert_eq!(glyphs[3].row, 1);
    }
}
