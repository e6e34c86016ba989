//! Viewer window for the generated server source.
//!
//! The window is a pure presenter: the coordinator hands it a
//! [`GenerationShowParams`] snapshot each frame and it renders whichever of
//! spinner / error / code applies. Its only own state is the open flag and
//! the transient "Copied" indicator.

use super::window_focus::{FocusableWindow, GenerationShowParams};
use eframe::egui;
use egui::{Context, RichText, Ui};
use std::time::{Duration, Instant};

/// How long the Copy button shows its confirmation before reverting.
const COPIED_INDICATOR: Duration = Duration::from_millis(2000);

/// Window showing generation progress, errors, and the finished code.
#[derive(Default)]
pub struct CodeViewerWindow {
    pub open: bool,

    /// When the user last copied the output, for the timed indicator
    copied_at: Option<Instant>,
}

impl CodeViewerWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a copy so the indicator shows, then reverts on its own.
    pub fn mark_copied(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    /// True while the "Copied" confirmation should be visible.
    pub fn copy_indicator_active(&self) -> bool {
        self.copied_at
            .map(|at| at.elapsed() < COPIED_INDICATOR)
            .unwrap_or(false)
    }

    pub fn show(&mut self, ctx: &Context, params: &GenerationShowParams, bring_to_front: bool) {
        if !self.open {
            return;
        }

        let mut open = self.open;
        let mut window = egui::Window::new("Generated Code")
            .open(&mut open)
            .default_width(640.0)
            .default_height(480.0)
            .resizable(true);
        if bring_to_front {
            window = window.order(egui::Order::Foreground);
        }

        window.show(ctx, |ui| {
            self.ui_content(ui, params);
        });

        self.open = open;
    }

    fn ui_content(&mut self, ui: &mut Ui, params: &GenerationShowParams) {
        if params.loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Generating server code...");
            });
            return;
        }

        if let Some(error) = &params.error {
            ui.colored_label(egui::Color32::from_rgb(220, 80, 80), error);
            ui.add_space(4.0);
            ui.label(RichText::new("Fix the problem and trigger Generate again.").weak());
            return;
        }

        let Some(code) = &params.code else {
            ui.label(RichText::new("Nothing generated yet").weak());
            ui.label("Describe models and endpoints, then press Generate.");
            return;
        };

        ui.horizontal(|ui| {
            if self.copy_indicator_active() {
                ui.label(RichText::new("✔ Copied").strong());
                // Wake up once the indicator needs to revert
                ui.ctx().request_repaint_after(COPIED_INDICATOR);
            } else if ui.button("Copy Code").clicked() {
                ui.ctx().copy_text(code.clone());
                self.mark_copied();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("{} bytes", code.len())).weak());
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("code_viewer_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let mut shown = code.as_str();
                ui.add(
                    egui::TextEdit::multiline(&mut shown)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY),
                );
            });
    }
}

impl FocusableWindow for CodeViewerWindow {
    type ShowParams = GenerationShowParams;

    fn window_id(&self) -> &'static str {
        "code_viewer"
    }

    fn window_title(&self) -> String {
        "Generated Code".to_string()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn show_with_focus(
        &mut self,
        ctx: &egui::Context,
        params: Self::ShowParams,
        bring_to_front: bool,
    ) {
        self.show(ctx, &params, bring_to_front);
    }
}
