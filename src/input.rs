// Input handling for the portfolio shell
// Keyboard shortcuts mirroring the sidebar and the browser's history keys

use crate::app::Portfolio;
use eframe::egui;

/// Shortcut keys for the first nine sidebar entries.
const DIGIT_KEYS: [egui::Key; 9] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
    egui::Key::Num7,
    egui::Key::Num8,
    egui::Key::Num9,
];

/// Zero-based sidebar position selected by a digit key.
pub fn digit_index(key: egui::Key) -> Option<usize> {
    DIGIT_KEYS.iter().position(|k| *k == key)
}

impl Portfolio {
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        // Typing in the address bar owns the keyboard
        if self.ui.address_focused {
            return;
        }

        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft)) {
            self.go_back();
        }
        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight)) {
            self.go_forward();
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Home)) {
            self.scroll_to_top();
        }

        let pressed = ctx.input(|i| {
            DIGIT_KEYS
                .iter()
                .copied()
                .find(|key| i.key_pressed(*key) && !i.modifiers.any())
        });
        if let Some(index) = pressed.and_then(digit_index) {
            let target = self.controller.targets().nth(index).map(|t| t.id.clone());
            if let Some(target) = target {
                self.navigate(target.as_str());
            }
        }
    }
}
