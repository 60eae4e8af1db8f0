use crossterm::style::Color;

/// Catppuccin Mocha-inspired palette with 24-bit RGB colors
pub struct Theme {
    pub fg: Color,
    pub fg_dim: Color,
    pub blue: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::Rgb { r: 205, g: 214, b: 244 },     // Text
            fg_dim: Color::Rgb { r: 166, g: 173, b: 200 }, // Subtext0
            blue: Color::Rgb { r: 137, g: 180, b: 250 },
            green: Color::Rgb { r: 166, g: 227, b: 161 },
            yellow: Color::Rgb { r: 249, g: 226, b: 175 },
            red: Color::Rgb { r: 243, g: 139, b: 168 },
        }
    }
}
