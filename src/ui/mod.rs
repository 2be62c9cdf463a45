pub mod geometry;
pub mod status;
pub mod terminal;
#[cfg(feature = "ui")]
pub mod window;

pub use geometry::BoardGeometry;
pub use status::SquareShade;
pub use terminal::TerminalSession;
#[cfg(feature = "ui")]
pub use window::setup_ui;
