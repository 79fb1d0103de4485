use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub highlight: Color,
    pub axis: Color,
    pub disabled: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            highlight: Color::Yellow,
            axis: Color::Gray,
            disabled: Color::DarkGray,
            error: Color::Red,
            success: Color::LightGreen,
        }
    }
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            highlight: Color::Blue,
            axis: Color::DarkGray,
            disabled: Color::Gray,
            error: Color::Red,
            success: Color::Green,
        }
    }
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}

/// "#RRGGBB" → terminal color; the bar-color policy hands the renderer hex
/// strings.
pub fn color_from_hex(hex: &str) -> Color {
    let parse = |s: &str| u8::from_str_radix(s, 16).ok();
    let bytes = hex.strip_prefix('#').and_then(|h| {
        if h.len() != 6 {
            return None;
        }
        Some((parse(&h[0..2])?, parse(&h[2..4])?, parse(&h[4..6])?))
    });
    match bytes {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Cyan,
    }
}
