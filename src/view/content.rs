// Content host rendering
// Regions stacked in one scroll area, each measured for the scroll-sync controller

use crate::app::Portfolio;
use crate::host::RegionLayout;
use crate::model::{Block, Content, ContentRegion};
use crate::style::{self, Palette};
use eframe::egui;
use std::path::Path;

impl Portfolio {
    pub(crate) fn render_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // Detect manual scrolling in the content area
            if ui.ui_contains_pointer()
                && ctx.input(|i| {
                    i.smooth_scroll_delta != egui::Vec2::ZERO
                        || i.raw_scroll_delta != egui::Vec2::ZERO
                        || i.pointer.primary_down()
                })
            {
                self.viewport.interrupt();
            } else {
                // Regions snap to their top once the user lets go
                self.viewport.snap_when_idle();
            }

            // Each region fills the visible height
            let section_height = ui.available_height();
            let dt = ctx.input(|i| i.stable_dt);

            let mut area = egui::ScrollArea::vertical()
                .id_salt("content_scroll")
                .auto_shrink([false, false]);
            if let Some(offset) = self.viewport.advance(dt) {
                area = area.vertical_scroll_offset(offset);
            }

            let content = &self.content;
            let viewport = &mut self.viewport;
            let palette = self.palette;

            let output = area.show(ui, |ui| {
                let item_spacing = ui.spacing().item_spacing;
                ui.spacing_mut().item_spacing.y = 0.0;
                let origin = ui.cursor().top();

                for region in content.regions() {
                    let response = ui
                        .scope(|ui| {
                            ui.spacing_mut().item_spacing = item_spacing;
                            ui.set_min_height(section_height);
                            ui.set_width(ui.available_width());
                            render_region(ui, content, region, &palette);
                        })
                        .response;

                    viewport.record_layout(
                        &region.id,
                        RegionLayout {
                            top: response.rect.top() - origin,
                            height: response.rect.height(),
                        },
                    );
                }
            });

            let max_offset = output.content_size.y - output.inner_rect.height();
            self.viewport.finish_layout_pass(max_offset);
            self.viewport.sync_offset(output.state.offset.y);
        });
    }
}

fn render_region(ui: &mut egui::Ui, content: &Content, region: &ContentRegion, palette: &Palette) {
    ui.add_space(style::SECTION_PADDING);
    ui.vertical_centered(|ui| {
        ui.set_max_width(style::CONTENT_MAX_WIDTH.min(ui.available_width()));
        for block in &region.blocks {
            render_block(ui, content, block, palette);
            ui.add_space(8.0);
        }
    });
    ui.add_space(style::SECTION_PADDING);
}

fn render_block(ui: &mut egui::Ui, content: &Content, block: &Block, palette: &Palette) {
    match block {
        Block::Heading { level, text } => {
            ui.label(
                egui::RichText::new(text)
                    .size(style::heading_size(*level))
                    .strong(),
            );
        }
        Block::Paragraph { text } => {
            ui.label(text);
        }
        Block::Bullets { items } => {
            for item in items {
                ui.label(format!("• {}", item));
            }
        }
        Block::Image { path, alt } => {
            let uri = format!("file://{}", content.resolve(Path::new(path)).display());
            ui.add(
                egui::Image::new(uri)
                    .max_size(egui::vec2(style::PROFILE_SIZE, style::PROFILE_SIZE)),
            )
            .on_hover_text(alt);
        }
        Block::Link { label, url } => {
            ui.hyperlink_to(egui::RichText::new(label).color(palette.accent), url);
        }
        Block::Contact { label, value } => {
            ui.label(egui::RichText::new(format!("{}: {}", label, value)).strong());
        }
    }
}
