use super::window_focus::FocusableWindow;
use eframe::egui;
use egui::{Context, RichText, Ui};

#[derive(Default)]
pub struct HelpWindow {
    pub open: bool,
}

impl HelpWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_with_focus(&mut self, ctx: &Context, bring_to_front: bool) {
        if !self.open {
            return;
        }

        let central_panel_size = ctx.available_rect().size();
        let window_width = central_panel_size.x.min(600.0);
        let window_height = central_panel_size.y.min(500.0);

        let mut window = egui::Window::new("Help")
            .fixed_size([window_width, window_height])
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .resizable(false)
            .collapsible(false);

        if bring_to_front {
            window = window.order(egui::Order::Foreground);
        }

        window.show(ctx, |ui| {
            self.ui_content(ui);
        });
    }

    fn ui_content(&self, ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(5.0);

            ui.heading("Keyboard Shortcuts");
            ui.add_space(5.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Space").strong());
                ui.label("- Open command palette");
            });

            ui.horizontal(|ui| {
                ui.label(RichText::new("Escape").strong());
                ui.label("- Close the command palette");
            });

            ui.add_space(15.0);

            ui.heading("Command Palette");
            ui.add_space(5.0);

            ui.label("Press Space to open the command palette, then:");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("M").strong());
                ui.label("- Add a data model");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("E").strong());
                ui.label("- Add an API endpoint");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("G").strong());
                ui.label("- Generate the Express server");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("C").strong());
                ui.label("- Show the generated code");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("L").strong());
                ui.label("- Open the log viewer");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("H").strong());
                ui.label("- Show this help window");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("Q").strong());
                ui.label("- Quit application");
            });

            ui.add_space(15.0);

            ui.heading("Workflow");
            ui.add_space(5.0);

            ui.label("Backforge turns a blueprint of models and endpoints into a runnable Node.js server:");
            ui.add_space(10.0);

            ui.label("1. Add one or more data models (Forge > Add Model)");
            ui.label("2. Describe the REST endpoints the server should expose (Forge > Add Endpoint)");
            ui.label("3. Pick the persistence and auth options in the main panel");
            ui.label("4. Generate (Forge > Generate) and wait for Gemini to respond");
            ui.label("5. Copy the code from the viewer and drop it into an index.js");

            ui.add_space(15.0);

            ui.heading("Gemini Setup");
            ui.add_space(5.0);

            ui.label("Code generation calls the Google Gemini API and needs an API key:");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("GEMINI_API_KEY").strong().monospace());
                ui.label("- required, your Google AI Studio key");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("GEMINI_MODEL").strong().monospace());
                ui.label("- optional, overrides the default model");
            });

            ui.add_space(15.0);

            ui.label(
                RichText::new(format!("Backforge {}", env!("CARGO_PKG_VERSION")))
                    .weak()
                    .small(),
            );

            ui.add_space(20.0);
        });
    }
}

impl FocusableWindow for HelpWindow {
    type ShowParams = super::window_focus::SimpleShowParams;

    fn window_id(&self) -> &'static str {
        "help_window"
    }

    fn window_title(&self) -> String {
        "Help".to_string()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn show_with_focus(
        &mut self,
        ctx: &egui::Context,
        _params: Self::ShowParams,
        bring_to_front: bool,
    ) {
        HelpWindow::show_with_focus(self, ctx, bring_to_front);
    }
}
