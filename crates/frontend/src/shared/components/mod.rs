pub mod card_animated;
pub mod matrix_background;
pub mod ui;

pub use card_animated::CardAnimated;
