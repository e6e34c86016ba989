//! Application coordinator: owns the blueprint, the generation pipeline and
//! every window, and wires them together once per frame.
//!
//! All state is plain owned data on [`ForgeApp`]. Windows stage their own
//! edits and report results as values (save events, menu actions); the
//! coordinator is the only place that mutates the stores or talks to the
//! Gemini client.

use super::code_viewer_window::CodeViewerWindow;
use super::command_palette::{CommandAction, CommandPalette};
use super::endpoint_builder_window::{EndpointBuilderWindow, EndpointSaveEvent};
use super::help_window::HelpWindow;
use super::log_window::LogWindow;
use super::menu::{self, MenuAction};
use super::model_builder_window::{ModelBuilderWindow, ModelSaveEvent};
use super::window_focus::{FocusableWindow, GenerationShowParams, WindowFocusManager};
use crate::app::blueprint::{Endpoint, HttpMethod, IdAllocator, Model, RecordStore};
use crate::app::gemini_client::{GeminiClient, GenerationError};
use crate::app::prompt_builder::{self, GenerationOptions};
use eframe::egui;
use egui::RichText;
use std::sync::mpsc::{Receiver, TryRecvError};

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq, Default)]
pub enum ThemeChoice {
    #[default]
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}

fn default_gemini_client() -> Result<GeminiClient, GenerationError> {
    GeminiClient::from_env()
}

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ForgeApp {
    pub theme: ThemeChoice,

    #[serde(skip)]
    pub models: RecordStore<Model>,
    #[serde(skip)]
    pub endpoints: RecordStore<Endpoint>,
    /// One id source for both stores; ids only have to be unique, not dense.
    #[serde(skip)]
    ids: IdAllocator,
    #[serde(skip)]
    pub options: GenerationOptions,

    /// Client handle, or the configuration error to surface on Generate.
    #[serde(skip, default = "default_gemini_client")]
    gemini: Result<GeminiClient, GenerationError>,
    /// Present exactly while a generation request is in flight.
    #[serde(skip)]
    generation_rx: Option<Receiver<Result<String, GenerationError>>>,
    #[serde(skip)]
    pub generated_code: Option<String>,
    #[serde(skip)]
    pub generation_error: Option<String>,

    #[serde(skip)]
    pub command_palette: CommandPalette,
    #[serde(skip)]
    pub show_command_palette: bool,
    #[serde(skip)]
    pub model_builder_window: ModelBuilderWindow,
    #[serde(skip)]
    pub endpoint_builder_window: EndpointBuilderWindow,
    #[serde(skip)]
    pub code_viewer_window: CodeViewerWindow,
    #[serde(skip)]
    pub help_window: HelpWindow,
    #[serde(skip)]
    pub log_window: LogWindow,
    #[serde(skip)]
    previous_screen_size: Option<egui::Vec2>,
    #[serde(skip)]
    previous_pixels_per_point: Option<f32>,
    #[serde(skip)]
    window_focus_manager: WindowFocusManager,
}

impl Default for ForgeApp {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            models: RecordStore::new(),
            endpoints: RecordStore::new(),
            ids: IdAllocator::new(),
            options: GenerationOptions::default(),
            gemini: default_gemini_client(),
            generation_rx: None,
            generated_code: None,
            generation_error: None,
            command_palette: CommandPalette::new(),
            show_command_palette: false,
            model_builder_window: ModelBuilderWindow::new(),
            endpoint_builder_window: EndpointBuilderWindow::new(),
            code_viewer_window: CodeViewerWindow::new(),
            help_window: HelpWindow::new(),
            log_window: LogWindow::new(),
            previous_screen_size: None,
            previous_pixels_per_point: None,
            window_focus_manager: WindowFocusManager::new(),
        }
    }
}

impl ForgeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app: Self = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        match &app.gemini {
            Ok(client) => log_info!("Gemini client ready (model {})", client.model()),
            Err(e) => log_warn!("{}", e),
        }

        // Apply the saved theme
        app.apply_theme(&cc.egui_ctx);

        app
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        match self.theme {
            ThemeChoice::Latte => catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE),
            ThemeChoice::Frappe => catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE),
            ThemeChoice::Macchiato => catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO),
            ThemeChoice::Mocha => catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA),
        }

        // Squarer windows than the catppuccin default
        let mut style = (*ctx.style()).clone();
        style.visuals.window_corner_radius = egui::CornerRadius::same(2);
        ctx.set_style(style);
    }

    /// Check for window resize or font scale changes that invalidate the
    /// command palette's cached layout.
    fn check_ui_dimension_changes(&mut self, ctx: &egui::Context) {
        let current_screen_size = ctx.screen_rect().size();
        let current_pixels_per_point = ctx.pixels_per_point();

        if self.previous_screen_size != Some(current_screen_size) {
            self.command_palette.on_window_resized();
            self.previous_screen_size = Some(current_screen_size);
        }

        if self.previous_pixels_per_point != Some(current_pixels_per_point) {
            self.command_palette.on_font_size_changed();
            self.previous_pixels_per_point = Some(current_pixels_per_point);
        }
    }

    fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        // Space opens the command palette unless a text field has the keyboard.
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) && !ctx.wants_keyboard_input() {
            log_debug!("Space pressed, opening the command palette");
            self.show_command_palette = true;
        }
    }

    /// Kick off a generation request for the current blueprint.
    ///
    /// Ignored while a request is already in flight; a misconfigured client
    /// fails here, before any network activity.
    fn start_generation(&mut self) {
        if self.generation_rx.is_some() {
            log_debug!("Generate requested while a request is in flight, ignoring");
            return;
        }

        self.generated_code = None;
        self.generation_error = None;

        let client = match &self.gemini {
            Ok(client) => client.clone(),
            Err(e) => {
                log_error!("Cannot generate: {}", e);
                self.generation_error = Some(e.to_string());
                self.open_code_viewer();
                return;
            }
        };

        log_info!(
            "Requesting server generation ({} models, {} endpoints, database: {}, auth: {})",
            self.models.len(),
            self.endpoints.len(),
            self.options.use_database,
            self.options.use_auth
        );

        let prompt = prompt_builder::build_server_prompt(
            self.models.as_slice(),
            self.endpoints.as_slice(),
            self.options,
        );

        self.generation_rx = Some(client.generate_async(prompt));
        self.open_code_viewer();
    }

    /// Drain the in-flight generation request, if any has settled.
    fn poll_generation(&mut self) {
        let Some(rx) = &self.generation_rx else {
            return;
        };

        match rx.try_recv() {
            Ok(Ok(raw)) => {
                let code = strip_code_fences(&raw);
                log_info!("Generation finished ({} bytes)", code.len());
                self.generated_code = Some(code);
                self.generation_rx = None;
            }
            Ok(Err(e)) => {
                log_error!("Generation failed: {}", e);
                self.generation_error = Some(e.to_string());
                self.generation_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                log_error!("Generation worker exited without a result");
                self.generation_error =
                    Some("Code generation stopped without producing a result".to_string());
                self.generation_rx = None;
            }
        }
    }

    fn open_model_builder_for_new(&mut self) {
        self.model_builder_window.open_new();
        self.request_focus_for(self.model_builder_window.window_id());
    }

    fn open_model_builder_for_edit(&mut self, id: u64) {
        if let Some(model) = self.models.get(id) {
            self.model_builder_window.open_edit(model);
        }
        self.request_focus_for(self.model_builder_window.window_id());
    }

    fn open_endpoint_builder_for_new(&mut self) {
        self.endpoint_builder_window.open_new();
        self.request_focus_for(self.endpoint_builder_window.window_id());
    }

    fn open_endpoint_builder_for_edit(&mut self, id: u64) {
        if let Some(endpoint) = self.endpoints.get(id) {
            self.endpoint_builder_window.open_edit(endpoint);
        }
        self.request_focus_for(self.endpoint_builder_window.window_id());
    }

    fn open_code_viewer(&mut self) {
        self.code_viewer_window.open = true;
        self.request_focus_for(self.code_viewer_window.window_id());
    }

    fn open_help_window(&mut self) {
        self.help_window.open = true;
        self.request_focus_for(self.help_window.window_id());
    }

    fn open_log_window(&mut self) {
        self.log_window.open = true;
        self.request_focus_for(self.log_window.window_id());
    }

    fn request_focus_for(&mut self, window_id: &str) {
        self.window_focus_manager.request_focus(window_id.to_string());
    }

    /// Render the top menu bar
    fn render_top_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let action = menu::build_menu(
                    ui,
                    ctx,
                    &mut self.theme,
                    &mut self.log_window.open,
                    self.generation_rx.is_some(),
                    self.models.len(),
                    self.endpoints.len(),
                );
                self.dispatch_menu_action(action, ctx);
            });
        });
    }

    fn dispatch_menu_action(&mut self, action: MenuAction, ctx: &egui::Context) {
        match action {
            MenuAction::None => {}
            MenuAction::ThemeChanged => {
                log_info!("Theme changed to {}", self.theme);
                self.apply_theme(ctx);
            }
            MenuAction::AddModel => self.open_model_builder_for_new(),
            MenuAction::AddEndpoint => self.open_endpoint_builder_for_new(),
            MenuAction::Generate => self.start_generation(),
            MenuAction::ShowCodeViewer => self.open_code_viewer(),
            MenuAction::ShowHelp => self.open_help_window(),
            MenuAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Server Blueprint");
            ui.label(
                RichText::new("Describe the API, then let Gemini write the Express server.")
                    .weak(),
            );
            ui.add_space(8.0);

            let mut model_to_edit = None;
            let mut model_to_remove = None;
            let mut endpoint_to_edit = None;
            let mut endpoint_to_remove = None;
            let mut add_model = false;
            let mut add_endpoint = false;

            // Two-pane layout, models on the left and endpoints on the right
            use egui_extras::{Size, StripBuilder};

            StripBuilder::new(ui)
                .size(Size::remainder())
                .size(Size::remainder())
                .horizontal(|mut strip| {
                    strip.cell(|ui| {
                        ui.heading("Data Models");
                        ui.add_space(4.0);

                        if self.models.is_empty() {
                            ui.label(RichText::new("No models yet.").weak());
                        }
                        for model in &self.models {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&model.name).strong());
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.small_button("Delete").clicked() {
                                            model_to_remove = Some(model.id);
                                        }
                                        if ui.small_button("Edit").clicked() {
                                            model_to_edit = Some(model.id);
                                        }
                                    },
                                );
                            });
                            let fields = model
                                .fields
                                .iter()
                                .map(|f| format!("{}: {}", f.name, f.field_type))
                                .collect::<Vec<_>>()
                                .join(", ");
                            ui.label(RichText::new(fields).weak().small());
                            ui.add_space(4.0);
                        }

                        ui.add_space(4.0);
                        if ui.button("➕ Add Model").clicked() {
                            add_model = true;
                        }
                    });

                    strip.cell(|ui| {
                        ui.heading("API Endpoints");
                        ui.add_space(4.0);

                        if self.endpoints.is_empty() {
                            ui.label(RichText::new("No endpoints yet.").weak());
                        }
                        for endpoint in &self.endpoints {
                            ui.horizontal(|ui| {
                                ui.colored_label(
                                    method_color(endpoint.method),
                                    endpoint.method.as_str(),
                                );
                                ui.label(RichText::new(&endpoint.path).strong().monospace());
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.small_button("Delete").clicked() {
                                            endpoint_to_remove = Some(endpoint.id);
                                        }
                                        if ui.small_button("Edit").clicked() {
                                            endpoint_to_edit = Some(endpoint.id);
                                        }
                                    },
                                );
                            });
                            ui.label(RichText::new(&endpoint.description).weak().small());
                            ui.add_space(4.0);
                        }

                        ui.add_space(4.0);
                        if ui.button("➕ Add Endpoint").clicked() {
                            add_endpoint = true;
                        }
                    });
                });

            if let Some(id) = model_to_remove {
                log_info!("Removing model {}", id);
                self.models.remove(id);
            }
            if let Some(id) = model_to_edit {
                self.open_model_builder_for_edit(id);
            }
            if let Some(id) = endpoint_to_remove {
                log_info!("Removing endpoint {}", id);
                self.endpoints.remove(id);
            }
            if let Some(id) = endpoint_to_edit {
                self.open_endpoint_builder_for_edit(id);
            }
            if add_model {
                self.open_model_builder_for_new();
            }
            if add_endpoint {
                self.open_endpoint_builder_for_new();
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);
            ui.heading("Generation Options");
            ui.add_space(4.0);

            ui.checkbox(
                &mut self.options.use_database,
                "Persist data in MongoDB (Mongoose)",
            )
            .on_hover_text("Unchecked keeps all records in in-memory arrays");
            ui.checkbox(
                &mut self.options.use_auth,
                "Protect endpoints with bearer token auth",
            );

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let generating = self.generation_rx.is_some();
                let generate = ui
                    .add_enabled(!generating, egui::Button::new("⚡ Generate Server"))
                    .clicked();
                if generating {
                    ui.spinner();
                    ui.label("Waiting for Gemini...");
                }
                let view_code = self.generated_code.is_some()
                    && !generating
                    && ui.button("View Code").clicked();

                if generate {
                    self.start_generation();
                }
                if view_code {
                    self.open_code_viewer();
                }
            });
        });
    }

    fn render_debug_panel(&mut self, ctx: &egui::Context) {
        // Debug build warning in the bottom right corner
        egui::TopBottomPanel::bottom("bottom_panel")
            .show_separator_line(false)
            .resizable(false)
            .min_height(0.0)
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::RIGHT), |ui| {
                    egui::warn_if_debug_build(ui);
                });
            });
    }

    fn handle_model_builder_window(&mut self, ctx: &egui::Context) {
        if self.model_builder_window.is_open() {
            let window_id = self.model_builder_window.window_id();
            let bring_to_front = self.window_focus_manager.should_bring_to_front(window_id);
            if bring_to_front {
                self.window_focus_manager.clear_bring_to_front(window_id);
            }

            if let Some(event) = self.model_builder_window.show(ctx, bring_to_front) {
                let id = commit_model_event(&mut self.models, &mut self.ids, event);
                log_info!("Saved model {}", id);
            }
        }
    }

    fn handle_endpoint_builder_window(&mut self, ctx: &egui::Context) {
        if self.endpoint_builder_window.is_open() {
            let window_id = self.endpoint_builder_window.window_id();
            let bring_to_front = self.window_focus_manager.should_bring_to_front(window_id);
            if bring_to_front {
                self.window_focus_manager.clear_bring_to_front(window_id);
            }

            if let Some(event) = self.endpoint_builder_window.show(ctx, bring_to_front) {
                let id = commit_endpoint_event(&mut self.endpoints, &mut self.ids, event);
                log_info!("Saved endpoint {}", id);
            }
        }
    }

    fn handle_code_viewer_window(&mut self, ctx: &egui::Context) {
        if self.code_viewer_window.is_open() {
            let window_id = self.code_viewer_window.window_id();
            let bring_to_front = self.window_focus_manager.should_bring_to_front(window_id);
            if bring_to_front {
                self.window_focus_manager.clear_bring_to_front(window_id);
            }

            let params = GenerationShowParams {
                code: self.generated_code.clone(),
                error: self.generation_error.clone(),
                loading: self.generation_rx.is_some(),
            };
            self.code_viewer_window.show(ctx, &params, bring_to_front);
        }
    }

    fn handle_help_window(&mut self, ctx: &egui::Context) {
        if self.help_window.is_open() {
            let window_id = self.help_window.window_id();
            let bring_to_front = self.window_focus_manager.should_bring_to_front(window_id);
            if bring_to_front {
                self.window_focus_manager.clear_bring_to_front(window_id);
            }

            FocusableWindow::show_with_focus(&mut self.help_window, ctx, (), bring_to_front);
        }
    }

    fn handle_log_window(&mut self, ctx: &egui::Context) {
        if self.log_window.is_open() {
            let window_id = self.log_window.window_id();
            let bring_to_front = self.window_focus_manager.should_bring_to_front(window_id);
            if bring_to_front {
                self.window_focus_manager.clear_bring_to_front(window_id);
            }

            FocusableWindow::show_with_focus(&mut self.log_window, ctx, (), bring_to_front);
        }
    }

    fn handle_command_palette(&mut self, ctx: &egui::Context) {
        if self.show_command_palette {
            self.command_palette.show = true;

            if let Some(action) = self.command_palette.show(ctx) {
                // The palette closes itself once an action is chosen.
                self.show_command_palette = false;
                match action {
                    CommandAction::AddModel => self.open_model_builder_for_new(),
                    CommandAction::AddEndpoint => self.open_endpoint_builder_for_new(),
                    CommandAction::Generate => self.start_generation(),
                    CommandAction::ShowCodeViewer => self.open_code_viewer(),
                    CommandAction::ShowLogs => self.open_log_window(),
                    CommandAction::ShowHelp => self.open_help_window(),
                    CommandAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
                }
            }

            // The palette also closes on Escape or an outside click.
            if !self.command_palette.show {
                self.show_command_palette = false;
            }
        } else {
            self.command_palette.show = false;
        }
    }

    /// Handle continuous repainting logic
    fn handle_continuous_repainting(&mut self, ctx: &egui::Context) {
        // Poll the generation channel every frame while a request is pending;
        // the palette and log tail also stay live.
        if self.generation_rx.is_some() || self.show_command_palette || self.log_window.open {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for ForgeApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_ui_dimension_changes(ctx);
        self.handle_keyboard_input(ctx);
        self.poll_generation();

        self.render_top_menu_bar(ctx);
        self.render_central_panel(ctx);
        self.render_debug_panel(ctx);

        self.handle_model_builder_window(ctx);
        self.handle_endpoint_builder_window(ctx);
        self.handle_code_viewer_window(ctx);
        self.handle_help_window(ctx);
        self.handle_log_window(ctx);
        self.handle_command_palette(ctx);

        self.handle_continuous_repainting(ctx);
    }
}

fn method_color(method: HttpMethod) -> egui::Color32 {
    match method {
        HttpMethod::Get => egui::Color32::from_rgb(120, 200, 120),
        HttpMethod::Post => egui::Color32::from_rgb(100, 170, 255),
        HttpMethod::Put => egui::Color32::from_rgb(255, 190, 70),
        HttpMethod::Delete => egui::Color32::from_rgb(240, 130, 130),
    }
}

/// Commit a model save event to the store, allocating an id for drafts.
/// Returns the id of the affected record.
pub fn commit_model_event(
    store: &mut RecordStore<Model>,
    ids: &mut IdAllocator,
    event: ModelSaveEvent,
) -> u64 {
    match event {
        ModelSaveEvent::Created { name, fields } => {
            let id = ids.allocate();
            store.add(Model::new(id, name, fields));
            id
        }
        ModelSaveEvent::Updated(model) => {
            let id = model.id;
            store.replace(id, model);
            id
        }
    }
}

/// Commit an endpoint save event to the store, allocating an id for drafts.
/// Returns the id of the affected record.
pub fn commit_endpoint_event(
    store: &mut RecordStore<Endpoint>,
    ids: &mut IdAllocator,
    event: EndpointSaveEvent,
) -> u64 {
    match event {
        EndpointSaveEvent::Created {
            path,
            method,
            description,
        } => {
            let id = ids.allocate();
            store.add(Endpoint::new(id, path, method, description));
            id
        }
        EndpointSaveEvent::Updated(endpoint) => {
            let id = endpoint.id;
            store.replace(id, endpoint);
            id
        }
    }
}

/// Strip a surrounding markdown code fence from a model response.
///
/// Gemini regularly wraps the file in ```` ```javascript ... ``` ```` even
/// when told not to. The opening fence line is dropped together with its
/// language tag, a trailing fence is cut off, and surrounding whitespace is
/// trimmed. Text without fences passes through unchanged apart from the trim.
pub fn strip_code_fences(raw: &str) -> String {
    let trimmed = raw.trim();

    let without_open = match trimmed.strip_prefix("```") {
        Some(rest) => match rest.find('\n') {
            Some(newline) => &rest[newline + 1..],
            None => rest,
        },
        None => trimmed,
    };

    let without_close = match without_open.trim_end().strip_suffix("```") {
        Some(rest) => rest,
        None => without_open,
    };

    without_close.trim().to_string()
}
