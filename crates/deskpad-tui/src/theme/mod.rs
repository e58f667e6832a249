mod colors;
mod styles;

pub use colors::*;
pub use styles::*;
