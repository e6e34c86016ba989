//! Builder window for HTTP endpoints.
//!
//! Same staging discipline as the model builder: inputs live in the window
//! until a valid save, and editing works on a value copy of the record.

use super::window_focus::FocusableWindow;
use crate::app::blueprint::{Endpoint, HttpMethod};
use eframe::egui;
use egui::{Context, Ui};

/// Result of a committed save, handed to the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum EndpointSaveEvent {
    /// A new endpoint draft; the coordinator assigns the id when it commits
    /// the draft to the store.
    Created {
        path: String,
        method: HttpMethod,
        description: String,
    },

    /// An edited endpoint, id unchanged.
    Updated(Endpoint),
}

/// Form window for creating and editing endpoints.
#[derive(Default)]
pub struct EndpointBuilderWindow {
    /// Whether to show the window
    pub show: bool,

    /// Id of the record being edited; `None` while creating a new endpoint
    editing: Option<u64>,

    /// Staged route path, e.g. `/users`
    pub path: String,

    /// Staged HTTP method
    pub method: HttpMethod,

    /// Staged description
    pub description: String,

    /// Inline validation message shown under the form
    pub error_message: Option<String>,
}

impl EndpointBuilderWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the window empty, in create mode.
    pub fn open_new(&mut self) {
        self.reset();
        self.show = true;
    }

    /// Opens the window in edit mode with a value copy of `endpoint` staged.
    pub fn open_edit(&mut self, endpoint: &Endpoint) {
        self.reset();
        self.editing = Some(endpoint.id);
        self.path = endpoint.path.clone();
        self.method = endpoint.method;
        self.description = endpoint.description.clone();
        self.show = true;
    }

    /// Discards all staged state and closes the window.
    pub fn cancel(&mut self) {
        self.reset();
        self.show = false;
    }

    /// Validity predicate: trimmed path and trimmed description non-empty.
    pub fn can_save(&self) -> bool {
        !self.path.trim().is_empty() && !self.description.trim().is_empty()
    }

    /// Commits the staged state.
    ///
    /// Returns `None` and leaves the window open when the validity predicate
    /// fails. Path and description are saved as typed; only the predicate
    /// looks at the trimmed values.
    pub fn save(&mut self) -> Option<EndpointSaveEvent> {
        if !self.can_save() {
            self.error_message =
                Some("An endpoint needs a non-empty path and description".to_string());
            return None;
        }

        let event = match self.editing {
            Some(id) => EndpointSaveEvent::Updated(Endpoint::new(
                id,
                self.path.clone(),
                self.method,
                self.description.clone(),
            )),
            None => EndpointSaveEvent::Created {
                path: std::mem::take(&mut self.path),
                method: self.method,
                description: std::mem::take(&mut self.description),
            },
        };

        self.reset();
        self.show = false;
        Some(event)
    }

    fn reset(&mut self) {
        self.editing = None;
        self.path.clear();
        self.method = HttpMethod::default();
        self.description.clear();
        self.error_message = None;
    }

    /// Renders the window and returns a save event if one was committed
    /// this frame.
    pub fn show(&mut self, ctx: &Context, bring_to_front: bool) -> Option<EndpointSaveEvent> {
        if !self.show {
            return None;
        }

        let title = if self.editing.is_some() {
            "Edit Endpoint"
        } else {
            "Add Endpoint"
        };

        let mut open = self.show;
        let mut saved = None;

        let mut window = egui::Window::new(title)
            .open(&mut open)
            .default_width(380.0)
            .resizable(true)
            .collapsible(false);
        if bring_to_front {
            window = window.order(egui::Order::Foreground);
        }

        window.show(ctx, |ui| {
            saved = self.ui_content(ui);
        });

        if !open {
            self.cancel();
        }
        saved
    }

    fn ui_content(&mut self, ui: &mut Ui) -> Option<EndpointSaveEvent> {
        let mut saved = None;

        ui.horizontal(|ui| {
            ui.label("Method:");
            egui::ComboBox::from_id_salt("endpoint_method")
                .selected_text(self.method.as_str())
                .show_ui(ui, |ui| {
                    for method in HttpMethod::ALL {
                        ui.selectable_value(&mut self.method, method, method.as_str());
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("Path:");
            ui.text_edit_singleline(&mut self.path);
        });

        ui.horizontal(|ui| {
            ui.label("Description:");
            ui.text_edit_singleline(&mut self.description);
        });

        ui.add_space(8.0);
        if let Some(error) = &self.error_message {
            ui.colored_label(egui::Color32::from_rgb(220, 80, 80), error);
            ui.add_space(4.0);
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                saved = self.save();
            }
            if ui.button("Cancel").clicked() {
                self.cancel();
            }
        });

        saved
    }
}

impl FocusableWindow for EndpointBuilderWindow {
    type ShowParams = super::window_focus::SimpleShowParams;

    fn window_id(&self) -> &'static str {
        "endpoint_builder"
    }

    fn window_title(&self) -> String {
        if self.editing.is_some() {
            "Edit Endpoint".to_string()
        } else {
            "Add Endpoint".to_string()
        }
    }

    fn is_open(&self) -> bool {
        self.show
    }

    fn show_with_focus(
        &mut self,
        ctx: &egui::Context,
        _params: Self::ShowParams,
        bring_to_front: bool,
    ) {
        let _ = EndpointBuilderWindow::show(self, ctx, bring_to_front);
    }
}
