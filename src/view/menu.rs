// Sidebar menu rendering
// One button per navigation target, the active one highlighted

use crate::app::Portfolio;
use crate::model::TargetId;
use crate::style;
use eframe::egui;

impl Portfolio {
    pub(crate) fn render_menu(&mut self, ctx: &egui::Context) {
        let palette = self.palette;
        let mut clicked: Option<TargetId> = None;

        egui::SidePanel::left("menu_panel")
            .resizable(false)
            .exact_width(style::SIDEBAR_WIDTH)
            .frame(
                egui::Frame::new()
                    .fill(palette.sidebar_bg)
                    .inner_margin(egui::Margin::symmetric(16, 32)),
            )
            .show(ctx, |ui| {
                let visuals = ui.visuals_mut();
                visuals.widgets.inactive.weak_bg_fill = egui::Color32::TRANSPARENT;
                visuals.widgets.hovered.weak_bg_fill = palette.hover_bg;
                visuals.widgets.active.weak_bg_fill = palette.hover_bg;

                let targets = self.controller.targets();
                let stack = targets.len() as f32 * (style::MENU_BUTTON_HEIGHT + style::MENU_GAP);

                ui.vertical_centered_justified(|ui| {
                    // Center the stack vertically, like the original flex column
                    ui.add_space(((ui.available_height() - stack) / 2.0).max(0.0));

                    for target in targets.iter() {
                        let is_active = self.controller.is_active(&target.id);
                        let text_color = if is_active {
                            palette.accent
                        } else {
                            palette.sidebar_fg
                        };

                        let mut button = egui::Button::new(
                            egui::RichText::new(&target.label).color(text_color).strong(),
                        )
                        .stroke(egui::Stroke::NONE)
                        .min_size(egui::vec2(ui.available_width(), style::MENU_BUTTON_HEIGHT));
                        if is_active {
                            button = button.fill(palette.hover_bg);
                        }

                        let response = ui.add(button);
                        if response.hovered() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        }
                        if response.clicked() {
                            clicked = Some(target.id.clone());
                        }
                        ui.add_space(style::MENU_GAP);
                    }
                });
            });

        // Apply deferred action
        if let Some(id) = clicked {
            self.navigate(id.as_str());
        }
    }
}
