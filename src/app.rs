use crate::controller::ScrollSyncController;
use crate::history::{HistoryMode, HistoryPort, MemoryHistory};
use crate::host::{RegionRegistry, Viewport};
use crate::model::{Content, TargetList};
use crate::state::UIState;
use crate::style::{self, Palette};
use eframe::egui;
use tracing::{debug, warn};

pub struct Portfolio {
    // Navigation
    pub controller: ScrollSyncController<MemoryHistory>,
    pub viewport: Viewport,

    // Content
    pub content: Content,
    pub palette: Palette,

    // UI State
    pub ui: UIState,
}

/// Everything the shell needs at startup, resolved from config and CLI.
pub struct ShellSettings {
    pub targets: TargetList,
    pub palette: Palette,
    pub content: Content,
    /// Location the shell was opened at, e.g. `#screen-3`
    pub location: String,
    pub scroll_duration: f32,
    pub top_history_mode: HistoryMode,
}

impl Portfolio {
    pub fn new(settings: ShellSettings) -> Self {
        let ShellSettings {
            targets,
            palette,
            content,
            location,
            scroll_duration,
            top_history_mode,
        } = settings;

        for target in targets.iter() {
            if content.region(&target.id).is_none() {
                warn!(screen = %target.id, "navigation target has no content region");
            }
        }

        let history = MemoryHistory::with_location(&location);
        let mut controller = ScrollSyncController::new(targets, history, top_history_mode);
        controller.attach();

        let viewport = Viewport::new(RegionRegistry::from_nodes(&content.nodes), scroll_duration);
        let mut ui = UIState::new();
        ui.sync_address(&controller.history().fragment());

        Self {
            controller,
            viewport,
            content,
            palette,
            ui,
        }
    }

    pub fn navigate(&mut self, id: &str) {
        if let Err(e) = self.controller.navigate_to(&mut self.viewport, id) {
            self.ui.set_error(e.to_string());
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.controller.scroll_to_top(&mut self.viewport);
    }

    pub fn go_back(&mut self) {
        if self.controller.history_mut().back().is_none() {
            self.ui.set_info("No earlier entry".into());
        }
    }

    pub fn go_forward(&mut self) {
        if self.controller.history_mut().forward().is_none() {
            self.ui.set_info("No later entry".into());
        }
    }

    /// Follow an edited address, like typing into a browser's location bar.
    pub fn open_location(&mut self, raw: &str) {
        if !self.controller.history_mut().set_location(raw) {
            debug!(location = raw, "location unchanged");
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let history = self.controller.history();
                let (can_back, can_forward) = (history.can_go_back(), history.can_go_forward());

                if ui
                    .add_enabled(can_back, egui::Button::new("⬅"))
                    .on_hover_text("Back (Alt+Left)")
                    .clicked()
                {
                    self.go_back();
                }
                if ui
                    .add_enabled(can_forward, egui::Button::new("➡"))
                    .on_hover_text("Forward (Alt+Right)")
                    .clicked()
                {
                    self.go_forward();
                }

                let response = ui.add_sized(
                    ui.available_size(),
                    egui::TextEdit::singleline(&mut self.ui.address),
                );
                self.ui.address_focused = response.has_focus();

                if response.lost_focus() && ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
                    let address = self.ui.address.clone();
                    self.open_location(&address);
                }
            });
            ui.add_space(4.0);
        });
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let active = self.controller.active();
                let label = self
                    .controller
                    .targets()
                    .get(active.as_str())
                    .map_or(active.as_str(), |t| t.label.as_str());
                ui.label(label);

                if let Some((err, _)) = &self.ui.error_message {
                    ui.colored_label(egui::Color32::RED, format!(" | {}", err));
                } else if let Some((info, _)) = &self.ui.info_message {
                    ui.label(format!(" | {}", info));
                }
            });
        });
    }
}

impl eframe::App for Portfolio {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);

        if let Some(target) = self.controller.poll(&mut self.viewport) {
            debug!(screen = %target, "fragment navigation applied");
        }

        self.handle_input(ctx);

        self.render_top_bar(ctx);
        self.render_status_bar(ctx);
        self.render_menu(ctx);
        self.render_affordances(ctx);
        self.render_content(ctx);

        for done in self.viewport.take_completed() {
            debug!(offset = done.offset, "scroll settled");
        }

        self.ui.sync_address(&self.controller.history().fragment());

        if self.viewport.is_animating()
            || self.viewport.is_settling()
            || self.controller.has_pending()
        {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.controller.detach();
    }
}
