pub mod color;
pub mod document;
pub mod font;
pub mod geometry;
pub mod paper;

pub use color::{Color, ColorParseError};
pub use document::{Info, Version, ViewerPreferences};
pub use font::Font;
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use paper::PaperSize;
