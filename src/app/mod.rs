//! Core application modules for Backforge.
//!
//! This module contains the blueprint data model and the generation pipeline
//! that turns a blueprint into server source code via the Gemini API.
//!
//! # Module Organization
//!
//! ## Blueprint and Generation
//! - [`blueprint`] - Models, endpoints, record stores, and id allocation
//! - [`prompt_builder`] - Pure prompt assembly from a blueprint
//! - [`gemini_client`] - The single-request Gemini REST client
//!
//! ## UI
//! - [`forgeui`] - Complete user interface implementation with window management
//!
//! # Architecture
//!
//! The layering is intentionally flat: [`forgeui`] owns all state and calls
//! down into [`prompt_builder`] and [`gemini_client`]; nothing below the UI
//! layer holds state or spawns work on its own, except the one worker thread
//! a generation request runs on.

pub mod blueprint;
pub mod forgeui;
pub mod gemini_client;
pub mod prompt_builder;

pub use forgeui::app::ForgeApp;
