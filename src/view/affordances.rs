// Floating buttons over the content: scroll-to-top and the download shown
// while its region is active

use crate::app::Portfolio;
use crate::model::{Content, Download, TargetId};
use crate::style;
use eframe::egui;
use tracing::{info, warn};

/// Download offered for the active screen, if its region declares one.
pub fn active_download<'a>(content: &'a Content, active: &TargetId) -> Option<&'a Download> {
    content.region(active)?.download.as_ref()
}

impl Portfolio {
    pub(crate) fn render_affordances(&mut self, ctx: &egui::Context) {
        let palette = self.palette;

        let mut to_top = false;
        egui::Area::new(egui::Id::new("scroll_top_button"))
            .anchor(
                egui::Align2::RIGHT_BOTTOM,
                egui::vec2(-style::AFFORDANCE_MARGIN, -2.0 * style::AFFORDANCE_MARGIN),
            )
            .show(ctx, |ui| {
                let button = style::affordance_button(&palette, "↑")
                    .min_size(egui::vec2(style::SCROLL_TOP_SIZE, style::SCROLL_TOP_SIZE));
                if ui.add(button).on_hover_text("Back to top (Home)").clicked() {
                    to_top = true;
                }
            });
        if to_top {
            self.scroll_to_top();
        }

        let Some(download) = active_download(&self.content, self.controller.active()).cloned()
        else {
            return;
        };

        let mut open = false;
        egui::Area::new(egui::Id::new("download_button"))
            .anchor(
                egui::Align2::RIGHT_TOP,
                egui::vec2(-style::AFFORDANCE_MARGIN, 3.0 * style::AFFORDANCE_MARGIN),
            )
            .show(ctx, |ui| {
                if ui
                    .add(style::affordance_button(&palette, &download.label))
                    .clicked()
                {
                    open = true;
                }
            });
        if open {
            self.open_download(&download);
        }
    }

    fn open_download(&mut self, download: &Download) {
        let path = self.content.resolve(&download.path);
        match open::that(&path) {
            Ok(()) => {
                info!(path = %path.display(), "download opened");
                self.ui.set_info(format!("Opened {}", path.display()));
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to open download");
                self.ui
                    .set_error(format!("Could not open {}: {}", path.display(), e));
            }
        }
    }
}
