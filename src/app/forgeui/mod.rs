//! Desktop user interface implementation for Backforge.
//!
//! The UI follows a window-based architecture: each functional area is a
//! struct with an `open` flag and a `show` method, coordinated by
//! [`app::ForgeApp`]. Nothing in this layer blocks; the one slow operation
//! (code generation) runs on a worker thread and is polled each frame.
//!
//! # Window Management
//!
//! - **Trait-based Windows**: windows implement [`window_focus::FocusableWindow`]
//!   so the menu and command palette can raise them uniformly
//! - **Focus Coordination**: [`window_focus::WindowFocusManager`] tracks
//!   pending bring-to-front requests
//!
//! # Windows
//!
//! - [`app::ForgeApp`] - Main application coordinator and state owner
//! - [`model_builder_window::ModelBuilderWindow`] - Create/edit data models
//! - [`endpoint_builder_window::EndpointBuilderWindow`] - Create/edit endpoints
//! - [`code_viewer_window::CodeViewerWindow`] - Generated output, copy to clipboard
//! - [`log_window::LogWindow`] - Live view of the application log file
//! - [`help_window::HelpWindow`] - Keyboard shortcuts and about text
//!
//! # Navigation
//!
//! - [`menu::build_menu`] renders the top menu bar and returns a
//!   [`menu::MenuAction`] for the coordinator to dispatch
//! - [`command_palette::CommandPalette`] is a Space-activated, single-key
//!   launcher for the same actions
//!
//! Themes are the four Catppuccin palettes, applied through
//! `catppuccin_egui::set_theme` and persisted across sessions.

pub mod app;
pub mod code_viewer_window;
pub mod command_palette;
pub mod endpoint_builder_window;
pub mod help_window;
pub mod log_window;
pub mod menu;
pub mod model_builder_window;
pub mod window_focus;
