use eframe::egui::{self, Color32};

/// Color tokens for the shell. One palette per look instead of one copy of
/// the shell per look.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub sidebar_bg: Color32,
    pub sidebar_fg: Color32,
    pub hover_bg: Color32,
    pub accent: Color32,
    pub button_bg: Color32,
    pub button_fg: Color32,
}

pub const DEFAULT_PRESET: &str = "navy";

impl Palette {
    pub fn preset(name: &str) -> Option<Self> {
        let palette = match name {
            "navy" => Palette {
                sidebar_bg: Color32::from_rgb(0x0f, 0x31, 0x69),
                sidebar_fg: Color32::WHITE,
                hover_bg: Color32::from_rgb(0x44, 0x44, 0x44),
                accent: Color32::from_rgb(0x7f, 0xb8, 0xff),
                button_bg: Color32::from_rgb(0x22, 0x22, 0x22),
                button_fg: Color32::WHITE,
            },
            "charcoal" => Palette {
                sidebar_bg: Color32::from_rgb(0x22, 0x22, 0x22),
                sidebar_fg: Color32::from_rgb(0xee, 0xee, 0xee),
                hover_bg: Color32::from_rgb(0x44, 0x44, 0x44),
                accent: Color32::from_rgb(0xff, 0xb3, 0x47),
                button_bg: Color32::from_rgb(0x11, 0x11, 0x11),
                button_fg: Color32::WHITE,
            },
            "forest" => Palette {
                sidebar_bg: Color32::from_rgb(0x1e, 0x3d, 0x2f),
                sidebar_fg: Color32::from_rgb(0xf1, 0xf5, 0xef),
                hover_bg: Color32::from_rgb(0x2f, 0x5d, 0x47),
                accent: Color32::from_rgb(0xa8, 0xe0, 0x63),
                button_bg: Color32::from_rgb(0x14, 0x2a, 0x20),
                button_fg: Color32::WHITE,
            },
            "slate" => Palette {
                sidebar_bg: Color32::from_rgb(0x33, 0x41, 0x55),
                sidebar_fg: Color32::from_rgb(0xe2, 0xe8, 0xf0),
                hover_bg: Color32::from_rgb(0x47, 0x55, 0x69),
                accent: Color32::from_rgb(0x38, 0xbd, 0xf8),
                button_bg: Color32::from_rgb(0x1e, 0x29, 0x3b),
                button_fg: Color32::WHITE,
            },
            _ => return None,
        };
        Some(palette)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::preset(DEFAULT_PRESET).unwrap_or(Palette {
            sidebar_bg: Color32::from_rgb(0x0f, 0x31, 0x69),
            sidebar_fg: Color32::WHITE,
            hover_bg: Color32::DARK_GRAY,
            accent: Color32::LIGHT_BLUE,
            button_bg: Color32::BLACK,
            button_fg: Color32::WHITE,
        })
    }
}

// --- Sizing ---
pub const SIDEBAR_WIDTH: f32 = 200.0;
pub const MENU_BUTTON_HEIGHT: f32 = 40.0;
pub const MENU_GAP: f32 = 12.0;
pub const SECTION_PADDING: f32 = 32.0;
pub const CONTENT_MAX_WIDTH: f32 = 700.0;
pub const PROFILE_SIZE: f32 = 200.0;
pub const SCROLL_TOP_SIZE: f32 = 40.0;
pub const AFFORDANCE_MARGIN: f32 = 16.0;

// --- Timing ---
pub const SCROLL_DURATION_MS: u64 = 350;
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

// --- Helper functions ---

pub fn heading_size(level: u8) -> f32 {
    match level {
        1 => 32.0,
        2 => 26.0,
        3 => 20.0,
        _ => 16.0,
    }
}

/// A filled button in the palette's affordance colors.
pub fn affordance_button(palette: &Palette, text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(palette.button_fg))
        .fill(palette.button_bg)
        .stroke(egui::Stroke::new(1.0, palette.button_fg))
}
