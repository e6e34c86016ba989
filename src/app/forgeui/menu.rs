use crate::app::forgeui::app::ThemeChoice;
use eframe::egui;
use egui::{Color32, RichText};

/// What the coordinator should do in response to this frame's menu
/// interaction. At most one action is reported per frame.
#[derive(Debug, PartialEq)]
pub enum MenuAction {
    None,
    ThemeChanged,
    AddModel,
    AddEndpoint,
    Generate,
    ShowCodeViewer,
    ShowHelp,
    Quit,
}

/// Renders the top menu bar and reports the chosen action.
///
/// Theme switches are applied to the context immediately; the returned
/// `ThemeChanged` only tells the coordinator to persist the new choice.
pub fn build_menu(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    theme: &mut ThemeChoice,
    log_window_open: &mut bool,
    generating: bool,
    model_count: usize,
    endpoint_count: usize,
) -> MenuAction {
    let mut menu_action = MenuAction::None;
    let original_theme = *theme;

    ui.menu_button("Forge", |ui| {
        if ui.button("Add Model").clicked() {
            menu_action = MenuAction::AddModel;
        }
        if ui.button("Add Endpoint").clicked() {
            menu_action = MenuAction::AddEndpoint;
        }
        ui.separator();
        let generate = ui.add_enabled(!generating, egui::Button::new("Generate Server Code"));
        if generate.clicked() {
            menu_action = MenuAction::Generate;
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            menu_action = MenuAction::Quit;
        }
    });

    ui.menu_button("View", |ui| {
        if ui.button("Generated Code").clicked() {
            menu_action = MenuAction::ShowCodeViewer;
        }
        if ui.button("Help").clicked() {
            menu_action = MenuAction::ShowHelp;
        }
    });

    ui.menu_button(RichText::new("🎨").size(18.0), |ui| {
        if ui.button("Latte").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE);
            *theme = ThemeChoice::Latte;
        }
        if ui.button("Frappe").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE);
            *theme = ThemeChoice::Frappe;
        }
        if ui.button("Macchiato").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO);
            *theme = ThemeChoice::Macchiato;
        }
        if ui.button("Mocha").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA);
            *theme = ThemeChoice::Mocha;
        }
    });

    // Log viewer toggle, to the right of the menus
    if ui.button(RichText::new("📜").size(16.0)).clicked() {
        *log_window_open = !*log_window_open;
        log_debug!("Log button clicked");
    }

    ui.add_space(16.0);

    ui.horizontal(|ui| {
        ui.label("Blueprint:");
        ui.label(
            RichText::new(format!("{} models", model_count))
                .color(Color32::from_rgb(180, 140, 220))
                .strong(),
        );
        ui.separator();
        ui.label(
            RichText::new(format!("{} endpoints", endpoint_count))
                .color(Color32::from_rgb(100, 170, 255))
                .strong(),
        );
        if generating {
            ui.separator();
            ui.spinner();
            ui.label(RichText::new("generating").weak());
        }
    });

    if menu_action != MenuAction::None {
        menu_action
    } else if original_theme != *theme {
        MenuAction::ThemeChanged
    } else {
        MenuAction::None
    }
}
