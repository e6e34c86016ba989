use egui::{self, Align2, Context, FontId, Id, Pos2, Rect, RichText, Vec2};

/// Actions the command palette can dispatch back to the app.
pub enum CommandAction {
    AddModel,
    AddEndpoint,
    Generate,
    ShowCodeViewer,
    ShowLogs,
    ShowHelp,
    Quit,
}

// One keyboard-driven entry in the palette grid.
struct CommandEntry {
    key: egui::Key,
    key_char: char,
    label: &'static str,
    color: egui::Color32,
    description: &'static str,
}

#[derive(Default)]
pub struct CommandPalette {
    pub show: bool,
    palette_dimensions: Option<PaletteDimensions>,
    needs_recalculation: bool,
}

// Cached layout so the geometry is not recomputed every frame.
#[derive(Clone)]
struct PaletteDimensions {
    window_width: f32,
    window_height: f32,
    window_pos: Pos2,
    column_width: f32,
    column_spacing: f32,
    left_margin: f32,
}

fn action_for(key: egui::Key) -> Option<CommandAction> {
    match key {
        egui::Key::M => Some(CommandAction::AddModel),
        egui::Key::E => Some(CommandAction::AddEndpoint),
        egui::Key::G => Some(CommandAction::Generate),
        egui::Key::C => Some(CommandAction::ShowCodeViewer),
        egui::Key::L => Some(CommandAction::ShowLogs),
        egui::Key::H => Some(CommandAction::ShowHelp),
        egui::Key::Q => Some(CommandAction::Quit),
        _ => None,
    }
}

impl CommandPalette {
    pub fn new() -> Self {
        Self {
            show: false,
            palette_dimensions: None,
            needs_recalculation: true,
        }
    }

    // Layout is derived from the screen size, anchored to the bottom edge.
    fn calculate_dimensions(&mut self, ctx: &Context) {
        let screen_rect = ctx.screen_rect();

        let window_width = screen_rect.width() * 0.9;
        let window_height = screen_rect.height() * 0.3;

        let window_pos = Pos2::new(
            screen_rect.center().x - (window_width / 2.0),
            screen_rect.max.y - window_height - 20.0,
        );

        let column_width = (window_width * 0.35).min(400.0);
        let column_spacing = window_width * 0.1;
        let left_margin = (window_width - (2.0 * column_width + column_spacing)) / 2.0;

        self.palette_dimensions = Some(PaletteDimensions {
            window_width,
            window_height,
            window_pos,
            column_width,
            column_spacing,
            left_margin,
        });

        self.needs_recalculation = false;
    }

    pub fn on_window_resized(&mut self) {
        self.needs_recalculation = true;
    }

    pub fn on_font_size_changed(&mut self) {
        self.needs_recalculation = true;
    }

    // Key badge plus label/description, clickable as a whole row.
    fn draw_command_button(
        &self,
        ui: &mut egui::Ui,
        cmd: &CommandEntry,
        clicked: &mut bool,
        key_pressed: bool,
    ) {
        ui.horizontal(|ui| {
            let circle_size = Vec2::new(32.0, 32.0);
            let (rect, response) = ui.allocate_exact_size(circle_size, egui::Sense::click());

            if ui.is_rect_visible(rect) {
                let visuals = ui.style().interact(&response);
                let circle_stroke = egui::Stroke::new(1.5, visuals.fg_stroke.color);

                ui.painter().circle(
                    rect.center(),
                    rect.width() / 2.0,
                    cmd.color.linear_multiply(0.8),
                    circle_stroke,
                );

                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    cmd.key_char.to_string(),
                    FontId::proportional(16.0),
                    egui::Color32::WHITE,
                );
            }

            ui.add_space(8.0);

            ui.vertical(|ui| {
                ui.label(
                    RichText::new(cmd.label)
                        .size(16.0)
                        .color(cmd.color)
                        .strong(),
                );
                ui.label(RichText::new(cmd.description).size(13.0).weak());
            });

            if response.clicked() || key_pressed {
                *clicked = true;
            }
        });
    }

    pub fn show(&mut self, ctx: &Context) -> Option<CommandAction> {
        if !self.show {
            return None;
        }

        let mut result = None;

        if self.needs_recalculation || self.palette_dimensions.is_none() {
            self.calculate_dimensions(ctx);
        }

        let Some(dimensions) = self.palette_dimensions.clone() else {
            return None;
        };

        let commands = [
            CommandEntry {
                key: egui::Key::M,
                key_char: 'M',
                label: "Add Model",
                color: egui::Color32::from_rgb(180, 140, 220), // Purple
                description: "Define a data model for the generated API",
            },
            CommandEntry {
                key: egui::Key::E,
                key_char: 'E',
                label: "Add Endpoint",
                color: egui::Color32::from_rgb(100, 170, 255), // Blue
                description: "Describe a REST endpoint for the server",
            },
            CommandEntry {
                key: egui::Key::G,
                key_char: 'G',
                label: "Generate",
                color: egui::Color32::from_rgb(120, 200, 120), // Green
                description: "Send the blueprint to Gemini and build the server",
            },
            CommandEntry {
                key: egui::Key::C,
                key_char: 'C',
                label: "Generated Code",
                color: egui::Color32::from_rgb(90, 200, 190), // Teal
                description: "View and copy the generated Express code",
            },
            CommandEntry {
                key: egui::Key::L,
                key_char: 'L',
                label: "Logs",
                color: egui::Color32::from_rgb(255, 190, 70), // Orange
                description: "Open the application log viewer",
            },
            CommandEntry {
                key: egui::Key::H,
                key_char: 'H',
                label: "Help",
                color: egui::Color32::from_rgb(100, 180, 220), // Light Blue
                description: "Keyboard shortcuts and about",
            },
            CommandEntry {
                key: egui::Key::Q,
                key_char: 'Q',
                label: "Quit",
                color: egui::Color32::from_rgb(240, 130, 130), // Red
                description: "Exit the application",
            },
        ];

        let window_size = Vec2::new(dimensions.window_width, dimensions.window_height);

        egui::Area::new(Id::new("command_palette"))
            .fixed_pos(dimensions.window_pos)
            .movable(false)
            .show(ctx, |ui| {
                let frame = egui::Frame::NONE
                    .fill(ui.style().visuals.extreme_bg_color)
                    .stroke(egui::Stroke::new(
                        1.5,
                        ui.style().visuals.widgets.active.bg_fill,
                    ))
                    .inner_margin(egui::Margin {
                        left: 25,
                        right: 25,
                        top: 20,
                        bottom: 20,
                    })
                    .corner_radius(8.0);

                frame.show(ui, |ui| {
                    ui.set_min_size(window_size);
                    ui.add_space(10.0);

                    ui.horizontal(|ui| {
                        ui.add_space(dimensions.left_margin);

                        #[allow(clippy::manual_div_ceil)]
                        let mid = (commands.len() + 1) / 2;

                        ui.vertical(|ui| {
                            ui.set_width(dimensions.column_width);

                            for cmd in commands.iter().take(mid) {
                                let mut clicked = false;
                                let key_pressed = ctx.input(|input| input.key_pressed(cmd.key));

                                self.draw_command_button(ui, cmd, &mut clicked, key_pressed);

                                if clicked || key_pressed {
                                    self.show = false;
                                    result = action_for(cmd.key);
                                }

                                ui.add_space(20.0);
                            }
                        });

                        ui.add_space(dimensions.column_spacing);

                        ui.vertical(|ui| {
                            ui.set_width(dimensions.column_width);

                            for cmd in commands.iter().skip(mid) {
                                let mut clicked = false;
                                let key_pressed = ctx.input(|input| input.key_pressed(cmd.key));

                                self.draw_command_button(ui, cmd, &mut clicked, key_pressed);

                                if clicked || key_pressed {
                                    self.show = false;
                                    result = action_for(cmd.key);
                                }

                                ui.add_space(20.0);
                            }
                        });
                    });
                });
            });

        // Escape dismisses without dispatching anything.
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.show = false;
        }

        // Clicking outside the palette dismisses it too.
        if ctx.input(|i| i.pointer.any_click()) {
            let mouse_pos = ctx.input(|i| i.pointer.interact_pos());
            if let Some(pos) = mouse_pos {
                let rect = Rect::from_min_size(dimensions.window_pos, window_size);
                if !rect.contains(pos) {
                    self.show = false;
                }
            }
        }

        result
    }
}
