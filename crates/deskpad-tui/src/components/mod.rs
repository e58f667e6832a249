mod popup;

pub use popup::{centered_rect, render_input_popup};
