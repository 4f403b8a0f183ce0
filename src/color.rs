// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const CYAN: Color = Color::from_u32(0x00d4ffff);
    pub const MAGENTA: Color = Color::from_u32(0xff00ffff);
    // Connection lines are faint cyan, the per-line alpha is layered on top
    pub const LINK: Color = Color::from_u32(0x00d4ff1a);

    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // CSS color string for canvas stroke/fill styles
    pub fn to_css(&self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = (self.a as f64 / 255.0 * 100.0).round() / 100.0;
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
        }
    }
}

// The two hues a particle can be tinted with
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    Cyan,
    Magenta,
}

impl Palette {
    // Uniform pick from a [0, 1) draw
    pub fn pick(draw: f64) -> Palette {
        if draw > 0.5 {
            Palette::Magenta
        } else {
            Palette::Cyan
        }
    }

    pub fn color(self) -> Color {
        match self {
            Palette::Cyan => Color::CYAN,
            Palette::Magenta => Color::MAGENTA,
        }
    }
}
