//! Builder window for data models.
//!
//! The window stages everything locally (name, field list, the
//! field-being-added inputs) and only hands a finished result to the
//! coordinator through [`ModelSaveEvent`]. Until save, nothing the user
//! types touches the model store; `open_edit` clones the record so edits
//! can be cancelled without a trace.

use super::window_focus::FocusableWindow;
use crate::app::blueprint::{Field, FieldType, Model};
use eframe::egui;
use egui::{Context, RichText, Ui};

/// Result of a committed save, handed to the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelSaveEvent {
    /// A new model draft; the coordinator assigns the id when it commits
    /// the draft to the store.
    Created { name: String, fields: Vec<Field> },

    /// An edited model, id unchanged.
    Updated(Model),
}

/// Form window for creating and editing models.
#[derive(Default)]
pub struct ModelBuilderWindow {
    /// Whether to show the window
    pub show: bool,

    /// Id of the record being edited; `None` while creating a new model
    editing: Option<u64>,

    /// Staged model name
    pub name: String,

    /// Staged field list. Always a value copy, never shared with the store.
    pub fields: Vec<Field>,

    /// Name input for the field about to be added
    pub field_name: String,

    /// Type selection for the field about to be added
    pub field_type: FieldType,

    /// Inline validation message shown under the form
    pub error_message: Option<String>,
}

impl ModelBuilderWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the window empty, in create mode.
    pub fn open_new(&mut self) {
        self.reset();
        self.show = true;
    }

    /// Opens the window in edit mode with a value copy of `model` staged.
    pub fn open_edit(&mut self, model: &Model) {
        self.reset();
        self.editing = Some(model.id);
        self.name = model.name.clone();
        self.fields = model.fields.clone();
        self.show = true;
    }

    /// Discards all staged state and closes the window.
    pub fn cancel(&mut self) {
        self.reset();
        self.show = false;
    }

    /// Stages the pending field input.
    ///
    /// Rejects (returns `false`, staged list unchanged) when the trimmed
    /// name is empty or an exact duplicate of an already-staged field. On
    /// success the name input is cleared; the type selection is kept so
    /// several fields of the same type can be added in a row.
    pub fn add_field(&mut self) -> bool {
        let name = self.field_name.trim();
        if name.is_empty() || self.fields.iter().any(|f| f.name == name) {
            return false;
        }
        self.fields.push(Field::new(name, self.field_type));
        self.field_name.clear();
        true
    }

    /// Removes the staged field with exactly this name.
    pub fn remove_field(&mut self, name: &str) {
        self.fields.retain(|f| f.name != name);
    }

    /// Validity predicate: trimmed name non-empty and at least one field.
    pub fn can_save(&self) -> bool {
        !self.name.trim().is_empty() && !self.fields.is_empty()
    }

    /// Commits the staged state.
    ///
    /// Returns `None` and leaves the window open when the validity
    /// predicate fails; otherwise closes the window and returns the event
    /// for the coordinator. The saved name is the trimmed one.
    pub fn save(&mut self) -> Option<ModelSaveEvent> {
        if !self.can_save() {
            self.error_message =
                Some("A model needs a non-empty name and at least one field".to_string());
            return None;
        }

        let name = self.name.trim().to_string();
        let event = match self.editing {
            Some(id) => ModelSaveEvent::Updated(Model::new(id, name, self.fields.clone())),
            None => ModelSaveEvent::Created {
                name,
                fields: std::mem::take(&mut self.fields),
            },
        };

        self.reset();
        self.show = false;
        Some(event)
    }

    fn reset(&mut self) {
        self.editing = None;
        self.name.clear();
        self.fields.clear();
        self.field_name.clear();
        self.field_type = FieldType::default();
        self.error_message = None;
    }

    /// Renders the window and returns a save event if one was committed
    /// this frame.
    pub fn show(&mut self, ctx: &Context, bring_to_front: bool) -> Option<ModelSaveEvent> {
        if !self.show {
            return None;
        }

        let title = if self.editing.is_some() {
            "Edit Model"
        } else {
            "Add Model"
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

        // Title-bar close behaves like Cancel
        if !open {
            self.cancel();
        }
        saved
    }

    fn ui_content(&mut self, ui: &mut Ui) -> Option<ModelSaveEvent> {
        let mut saved = None;

        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut self.name);
        });

        ui.add_space(8.0);
        ui.label(RichText::new("Fields").strong());
        ui.separator();

        if self.fields.is_empty() {
            ui.label(RichText::new("No fields yet").weak());
        } else {
            let mut field_to_remove: Option<String> = None;
            for field in &self.fields {
                ui.horizontal(|ui| {
                    ui.label(&field.name);
                    ui.label(RichText::new(field.field_type.as_str()).weak());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Remove").clicked() {
                            field_to_remove = Some(field.name.clone());
                        }
                    });
                });
            }
            if let Some(name) = field_to_remove {
                self.remove_field(&name);
            }
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.field_name);
            egui::ComboBox::from_id_salt("model_field_type")
                .selected_text(self.field_type.as_str())
                .show_ui(ui, |ui| {
                    for field_type in FieldType::ALL {
                        ui.selectable_value(&mut self.field_type, field_type, field_type.as_str());
                    }
                });
            if ui.button("Add Field").clicked() {
                self.add_field();
            }
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

impl FocusableWindow for ModelBuilderWindow {
    type ShowParams = super::window_focus::SimpleShowParams;

    fn window_id(&self) -> &'static str {
        "model_builder"
    }

    fn window_title(&self) -> String {
        if self.editing.is_some() {
            "Edit Model".to_string()
        } else {
            "Add Model".to_string()
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
        // Save events are consumed by the coordinator's handler, which calls
        // the concrete show method instead of this trait path.
        let _ = ModelBuilderWindow::show(self, ctx, bring_to_front);
    }
}
