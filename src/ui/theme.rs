use ratatui::style::Color;

pub const ACCENT_VIOLET: Color = Color::Rgb(0x6d, 0x28, 0xd9);
pub const ACCENT_CYAN: Color = Color::Rgb(0x06, 0xb6, 0xd4);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x1e, 0x29, 0x3b);
pub const HEADER_TEXT: Color = Color::Rgb(0xea, 0xf2, 0xff);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const QUOTE_TEXT: Color = Color::Rgb(0xea, 0xf2, 0xff);
pub const AUTHOR_TEXT: Color = Color::Rgb(0x9f, 0xb0, 0xcc);
pub const MUTED_TEXT: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const BUTTON_TEXT: Color = Color::Rgb(0xdb, 0xea, 0xfe);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xff, 0xb4, 0xb4);
