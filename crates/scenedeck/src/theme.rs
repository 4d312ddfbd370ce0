use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub muted: Color32,
    pub progress_track: Color32,
    pub kicker_size: f32,
    pub heading_size: f32,
    pub body_size: f32,
    pub chrome_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x1A, 0x1A, 0x1A),
            foreground: Color32::from_rgb(0xC8, 0xC8, 0xC8),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0xE6, 0x33, 0x12),
            muted: Color32::from_rgb(0x80, 0x80, 0x80),
            progress_track: Color32::from_rgb(0x2A, 0x2A, 0x2A),
            kicker_size: 18.0,
            heading_size: 64.0,
            body_size: 24.0,
            chrome_size: 14.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0xF4, 0xF1, 0xEC),
            foreground: Color32::from_rgb(0x1A, 0x1A, 0x2E),
            heading_color: Color32::from_rgb(0x16, 0x21, 0x3E),
            accent: Color32::from_rgb(0xC7, 0x2B, 0x0E),
            muted: Color32::from_rgb(0x6B, 0x6B, 0x6B),
            progress_track: Color32::from_rgb(0xDD, 0xD8, 0xD0),
            kicker_size: 18.0,
            heading_size: 64.0,
            body_size: 24.0,
            chrome_size: 14.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(
            color.r(),
            color.g(),
            color.b(),
            (opacity.clamp(0.0, 1.0) * 255.0) as u8,
        )
    }
}

/// Brand palette shared by the scenes.
pub mod palette {
    use eframe::egui::Color32;

    pub const RED: Color32 = Color32::from_rgb(0xE6, 0x33, 0x12);
    pub const BLUE: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);
    pub const GREEN: Color32 = Color32::from_rgb(0x10, 0xB9, 0x81);
    pub const PURPLE: Color32 = Color32::from_rgb(0x8B, 0x5C, 0xF6);
    pub const AMBER: Color32 = Color32::from_rgb(0xF5, 0x9E, 0x0B);
    pub const CYAN: Color32 = Color32::from_rgb(0x06, 0xB6, 0xD4);

    pub const ALL: [Color32; 6] = [RED, BLUE, GREEN, PURPLE, AMBER, CYAN];
}
