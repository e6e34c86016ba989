//! Window focus system tests.
//!
//! Covers the focus manager's request/clear lifecycle and the
//! [`FocusableWindow`] implementations of the real windows, using a mock
//! window where actual rendering would otherwise be needed.

use backforge::app::forgeui::code_viewer_window::CodeViewerWindow;
use backforge::app::forgeui::endpoint_builder_window::EndpointBuilderWindow;
use backforge::app::forgeui::help_window::HelpWindow;
use backforge::app::forgeui::log_window::LogWindow;
use backforge::app::forgeui::model_builder_window::ModelBuilderWindow;
use backforge::app::forgeui::window_focus::{
    FocusableWindow, SimpleShowParams, WindowFocusManager,
};

/// Minimal window that records how it was shown.
struct MockWindow {
    id: &'static str,
    title: String,
    open: bool,
    last_bring_to_front: Option<bool>,
}

impl MockWindow {
    fn new(id: &'static str, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            open: false,
            last_bring_to_front: None,
        }
    }
}

impl FocusableWindow for MockWindow {
    type ShowParams = SimpleShowParams;

    fn window_id(&self) -> &'static str {
        self.id
    }

    fn window_title(&self) -> String {
        self.title.clone()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn show_with_focus(
        &mut self,
        _ctx: &egui::Context,
        _params: Self::ShowParams,
        bring_to_front: bool,
    ) {
        self.last_bring_to_front = Some(bring_to_front);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_manager_lifecycle() {
        let mut manager = WindowFocusManager::new();

        assert!(!manager.should_bring_to_front("any_window"));

        manager.request_focus("code_viewer".to_string());
        assert!(manager.should_bring_to_front("code_viewer"));
        assert!(!manager.should_bring_to_front("log_window"));

        manager.clear_bring_to_front("code_viewer");
        assert!(!manager.should_bring_to_front("code_viewer"));
    }

    #[test]
    fn test_newer_request_replaces_the_older_one() {
        let mut manager = WindowFocusManager::new();

        manager.request_focus("model_builder".to_string());
        manager.request_focus("endpoint_builder".to_string());

        assert!(!manager.should_bring_to_front("model_builder"));
        assert!(manager.should_bring_to_front("endpoint_builder"));
    }

    #[test]
    fn test_clearing_an_unfocused_window_changes_nothing() {
        let mut manager = WindowFocusManager::new();

        manager.request_focus("help_window".to_string());
        manager.clear_bring_to_front("log_window");

        assert!(manager.should_bring_to_front("help_window"));
    }

    #[test]
    fn test_similar_ids_are_distinct() {
        let mut manager = WindowFocusManager::new();
        let ids = ["window", "window_", "Window", "WINDOW"];

        for id in &ids {
            manager.request_focus(id.to_string());
            for other in &ids {
                assert_eq!(manager.should_bring_to_front(other), id == other);
            }
            manager.clear_bring_to_front(id);
        }
    }

    #[test]
    fn test_mock_window_receives_the_focus_flag() {
        let mut window = MockWindow::new("mock", "Mock Window");
        let ctx = egui::Context::default();

        assert!(window.last_bring_to_front.is_none());

        window.show_with_focus(&ctx, (), false);
        assert_eq!(window.last_bring_to_front, Some(false));

        window.show_with_focus(&ctx, (), true);
        assert_eq!(window.last_bring_to_front, Some(true));
    }

    #[test]
    fn test_focus_cycle_through_the_trait() {
        let mut manager = WindowFocusManager::new();
        let mut window = MockWindow::new("mock", "Mock Window");
        window.open = true;

        manager.request_focus(window.window_id().to_string());

        // The coordinator's handler pattern: check, clear, then show.
        let bring_to_front = manager.should_bring_to_front(window.window_id());
        assert!(bring_to_front);
        manager.clear_bring_to_front(window.window_id());

        let ctx = egui::Context::default();
        window.show_with_focus(&ctx, (), bring_to_front);
        assert_eq!(window.last_bring_to_front, Some(true));
        assert!(!manager.should_bring_to_front(window.window_id()));
    }

    #[test]
    fn test_window_ids_are_unique_across_the_app() {
        let ids = [
            ModelBuilderWindow::new().window_id(),
            EndpointBuilderWindow::new().window_id(),
            CodeViewerWindow::new().window_id(),
            HelpWindow::new().window_id(),
            LogWindow::new().window_id(),
        ];

        for (i, id) in ids.iter().enumerate() {
            for (j, other) in ids.iter().enumerate() {
                if i != j {
                    assert_ne!(id, other, "duplicate window id {}", id);
                }
            }
        }
    }

    #[test]
    fn test_builder_windows_report_mode_in_their_titles() {
        let mut model_window = ModelBuilderWindow::new();
        assert_eq!(model_window.window_title(), "Add Model");
        assert!(!model_window.is_open());

        model_window.open_edit(&backforge::app::blueprint::Model::new(
            1,
            "User",
            vec![backforge::app::blueprint::Field::new(
                "email",
                backforge::app::blueprint::FieldType::String,
            )],
        ));
        assert_eq!(model_window.window_title(), "Edit Model");
        assert!(model_window.is_open());

        let mut endpoint_window = EndpointBuilderWindow::new();
        assert_eq!(endpoint_window.window_title(), "Add Endpoint");
        endpoint_window.open_new();
        assert!(endpoint_window.is_open());
    }

    #[test]
    fn test_viewer_windows_expose_open_state() {
        let mut viewer = CodeViewerWindow::new();
        assert_eq!(viewer.window_title(), "Generated Code");
        assert!(!viewer.is_open());
        viewer.open = true;
        assert!(viewer.is_open());

        let mut help = HelpWindow::new();
        assert_eq!(help.window_title(), "Help");
        assert!(!help.is_open());
        help.open = true;
        assert!(help.is_open());
    }
}
