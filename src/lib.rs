//! Backforge - Backend Blueprint Designer and Code Generator
//!
//! Backforge is a desktop application for sketching a backend API as a
//! blueprint of data models and HTTP endpoints, then generating a runnable
//! single-file Express.js server from that blueprint with Google's Gemini
//! API.
//!
//! # Core Features
//!
//! - **Model Builder**: Define named record schemas with typed fields
//! - **Endpoint Builder**: Describe HTTP routes (method, path, purpose)
//! - **Prompt Assembly**: Deterministic prompt construction from the blueprint
//! - **One-shot Generation**: A single Gemini request per trigger, no retries
//! - **Code Viewer**: Monospace output display with clipboard copy
//!
//! # Architecture Overview
//!
//! The application follows a layered architecture with clear separation of
//! concerns:
//!
//! - **UI Layer** ([`app::forgeui`]): egui-based desktop interface with
//!   window management
//! - **Generation Pipeline** ([`app::prompt_builder`], [`app::gemini_client`]):
//!   pure prompt assembly plus the one REST call
//! - **Data Model** ([`app::blueprint`]): models, endpoints, and their stores
//!
//! ## Key Architectural Patterns
//!
//! - **Trait-based Window System**: Polymorphic window management with
//!   [`app::forgeui::window_focus::FocusableWindow`]
//! - **Channel-polled Background Work**: the generation request runs on a
//!   worker thread and reports back over an `mpsc` channel the UI polls
//!   each frame
//! - **Explicit State Ownership**: all session state lives on
//!   [`ForgeApp`]; there are no module-level stores
//!
//! The main entry point is [`ForgeApp`], which owns the blueprint stores and
//! drives every window.

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;
pub use app::ForgeApp;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::OnceCell;
use tracing_subscriber::{reload, EnvFilter, Registry};

/// Filter directives used at startup and whenever verbose logging is off.
pub const DEFAULT_LOG_FILTER: &str =
    "backforge=info,eframe=info,egui=warn,wgpu=warn,winit=warn,reqwest=info,hyper=warn";

/// Filter directives applied while the log window's Verbose toggle is on.
pub const VERBOSE_LOG_FILTER: &str =
    "backforge=trace,eframe=info,egui=warn,wgpu=warn,winit=warn,reqwest=debug,hyper=warn";

type TracingReloadHandle = reload::Handle<EnvFilter, Registry>;

/// Handle for swapping the active log filter at runtime. Set once by
/// `init_logging` in `main`; never replaced.
static TRACING_RELOAD_HANDLE: OnceCell<TracingReloadHandle> = OnceCell::new();

/// Stores the reload handle produced during logging initialization.
/// A second call is a no-op.
pub fn set_tracing_reload_handle(handle: TracingReloadHandle) {
    let _ = TRACING_RELOAD_HANDLE.set(handle);
}

/// Switches the global filter between [`DEFAULT_LOG_FILTER`] and
/// [`VERBOSE_LOG_FILTER`]. Fails if logging was never initialized (e.g. no
/// writable log directory), which callers surface but do not treat as fatal.
pub fn set_verbose_logging(verbose: bool) -> Result<()> {
    let handle = TRACING_RELOAD_HANDLE
        .get()
        .ok_or_else(|| anyhow!("logging is not initialized"))?;

    let directives = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };

    let filter = EnvFilter::builder()
        .parse(directives)
        .context("failed to parse log filter directives")?;
    handle
        .reload(filter)
        .context("failed to swap the active log filter")?;

    log_info!("Log filter set to: {}", directives);
    Ok(())
}
