use deskpad_domain::{NoteColor, SketchColor};
use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;

pub const DRAGGED_BORDER: Color = Color::LightBlue;
pub const MOVING_TEXT: Color = Color::DarkGray;
pub const CELEBRATION: Color = Color::LightYellow;

pub const POPUP_BG: Color = Color::Black;

/// Terminal rendition of the sticky note palette.
pub fn note_color(color: NoteColor) -> Color {
    match color {
        NoteColor::Yellow => Color::Yellow,
        NoteColor::Green => Color::Green,
        NoteColor::Blue => Color::Blue,
        NoteColor::Red => Color::Red,
        NoteColor::Purple => Color::Magenta,
        NoteColor::Orange => Color::LightRed,
        NoteColor::Pink => Color::LightMagenta,
    }
}

/// Terminal rendition of the diagram node palette.
pub fn sketch_color(color: SketchColor) -> Color {
    match color {
        SketchColor::Gray => Color::Gray,
        SketchColor::Yellow => Color::Yellow,
        SketchColor::Green => Color::Green,
        SketchColor::Blue => Color::Blue,
        SketchColor::Red => Color::Red,
        SketchColor::Purple => Color::Magenta,
        SketchColor::Amber => Color::LightYellow,
        SketchColor::Orange => Color::LightRed,
        SketchColor::Mint => Color::LightGreen,
        SketchColor::Pink => Color::LightMagenta,
    }
}
