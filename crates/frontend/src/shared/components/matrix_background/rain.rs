//! Состояние эффекта "цифрового дождя" без зависимости от браузера.
//!
//! Каждая колонка шириной в один глиф хранит строку, на которой сейчас
//! находится её падающий символ. Отрисовкой занимается компонент
//! [`super::MatrixBackground`].

/// Размер глифа и ширина колонки, px
pub const GLYPH_SIZE: f64 = 16.0;

/// Набор символов дождя
pub const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%^&*()";

/// Вероятность вернуть колонку наверх за один тик, когда она ушла за низ экрана
pub const RESET_PROBABILITY: f64 = 0.025;

const LCG_MULTIPLIER: u64 = 6364136223846793005;

/// Один символ, который нужно нарисовать в текущем тике
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphDraw {
    pub glyph: char,
    pub x: f64,
    pub y: f64,
}

/// Результат одного тика: размер полотна и символы для отрисовки
#[derive(Debug, Clone, PartialEq)]
pub struct RainFrame {
    pub width: f64,
    pub height: f64,
    pub glyphs: Vec<GlyphDraw>,
}

#[derive(Debug, Clone)]
pub struct RainState {
    /// Текущая строка каждой колонки (дробная после инициализации)
    drops: Vec<f64>,
    width: f64,
    height: f64,
    rng_state: u64,
}

impl RainState {
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        let mut state = Self {
            drops: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng_state: seed,
        };
        state.resize(width, height);
        state
    }

    /// Пересчитывает число колонок и раскидывает их по случайным строкам
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = sanitize(width);
        self.height = sanitize(height);

        let columns = (self.width / GLYPH_SIZE).floor() as usize;
        let visible_rows = self.height / GLYPH_SIZE;

        self.drops.clear();
        for _ in 0..columns {
            let row = self.next_unit() * visible_rows;
            self.drops.push(row);
        }
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn drops(&self) -> &[f64] {
        &self.drops
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Один шаг анимации.
    ///
    /// Каждая колонка рисует случайный символ на своей строке и сдвигается на
    /// строку вниз. Ушедшая за низ колонка возвращается наверх только с
    /// вероятностью [`RESET_PROBABILITY`], поэтому колонки перезапускаются
    /// вразнобой.
    pub fn tick(&mut self) -> RainFrame {
        let mut glyphs = Vec::with_capacity(self.drops.len());

        for i in 0..self.drops.len() {
            let glyph = self.next_glyph();
            let row = self.drops[i];
            glyphs.push(GlyphDraw {
                glyph,
                x: i as f64 * GLYPH_SIZE,
                y: row * GLYPH_SIZE,
            });

            let next = if row * GLYPH_SIZE > self.height && self.next_unit() < RESET_PROBABILITY {
                0.0
            } else {
                row
            };
            self.drops[i] = next + 1.0;
        }

        RainFrame {
            width: self.width,
            height: self.height,
            glyphs,
        }
    }

    fn next_glyph(&mut self) -> char {
        let index = (self.next_unit() * GLYPHS.len() as f64) as usize;
        GLYPHS[index.min(GLYPHS.len() - 1)] as char
    }

    /// Псевдослучайное число в [0, 1)
    fn next_unit(&mut self) -> f64 {
        self.rng_state = self
            .rng_state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(1);
        // старшие 53 бита LCG
        (self.rng_state >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count_from_width() {
        assert_eq!(RainState::new(800.0, 600.0, 1).columns(), 50);
        assert_eq!(RainState::new(815.0, 600.0, 1).columns(), 50);
        assert_eq!(RainState::new(15.0, 600.0, 1).columns(), 0);
        assert_eq!(RainState::new(-100.0, 600.0, 1).columns(), 0);
    }

    #[test]
    fn test_initial_rows_are_visible() {
        let state = RainState::new(800.0, 600.0, 7);
        let visible_rows = 600.0 / GLYPH_SIZE;
        assert!(state
            .drops()
            .iter()
            .all(|row| *row >= 0.0 && *row < visible_rows));
    }

    #[test]
    fn test_tick_draws_one_glyph_per_column_and_advances() {
        let mut state = RainState::new(160.0, 600.0, 3);
        let before = state.drops().to_vec();

        let frame = state.tick();

        assert_eq!(frame.width, 160.0);
        assert_eq!(frame.height, 600.0);
        assert_eq!(frame.glyphs.len(), 10);
        for (i, draw) in frame.glyphs.iter().enumerate() {
            assert_eq!(draw.x, i as f64 * GLYPH_SIZE);
            assert_eq!(draw.y, before[i] * GLYPH_SIZE);
            assert!(GLYPHS.contains(&(draw.glyph as u8)));
        }
        // на видимой части экрана сброса нет, только сдвиг на строку
        for (row, prev) in state.drops().iter().zip(before.iter()) {
            assert_eq!(*row, prev + 1.0);
        }
    }

    #[test]
    fn test_columns_reset_staggered_after_leaving_screen() {
        let mut state = RainState::new(160.0, 32.0, 42);
        let mut reset_tick: Vec<Option<usize>> = vec![None; state.columns()];

        for tick in 0..2000 {
            let before = state.drops().to_vec();
            state.tick();
            for (i, row) in state.drops().iter().enumerate() {
                if *row < before[i] {
                    // сброс возможен только за нижней границей
                    assert!(before[i] * GLYPH_SIZE > 32.0);
                    assert_eq!(*row, 1.0);
                    reset_tick[i].get_or_insert(tick);
                }
            }
        }

        assert!(reset_tick.iter().all(|t| t.is_some()));
        let first = reset_tick[0];
        assert!(reset_tick.iter().any(|t| *t != first));
    }

    #[test]
    fn test_resize_reinitializes_columns() {
        let mut state = RainState::new(800.0, 600.0, 11);
        for _ in 0..50 {
            state.tick();
        }

        state.resize(320.0, 160.0);

        assert_eq!(state.columns(), 20);
        assert_eq!(state.width(), 320.0);
        assert_eq!(state.height(), 160.0);
        assert!(state.drops().iter().all(|row| *row >= 0.0 && *row < 10.0));
    }

    #[test]
    fn test_same_seed_same_frames() {
        let mut a = RainState::new(480.0, 320.0, 99);
        let mut b = RainState::new(480.0, 320.0, 99);
        for _ in 0..20 {
            assert_eq!(a.tick(), b.tick());
        }
    }
}
