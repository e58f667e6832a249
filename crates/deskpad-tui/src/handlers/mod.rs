pub mod board;
pub mod mouse;
pub mod notes;
pub mod player;
pub mod sketch;
pub mod timer;
pub mod workpad;
