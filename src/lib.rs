pub mod chess_board;
pub mod game;
pub mod ui;

#[cfg(feature = "ui")]
slint::include_modules!();
