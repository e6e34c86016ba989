#![warn(clippy::all, rust_2018_idioms)]

/// Unified logging macros with file, module, and line context.
///
/// `log_*!` macros emit through both the `log` facade and `tracing`, so a
/// message lands in the file subscriber regardless of which ecosystem a
/// dependency listens on. `trace_*!` macros emit through `tracing` only; use
/// them for chatty diagnostics that do not need the `log` side.
///
/// Example output line:
///   [src/app/forgeui/app.rs:backforge::app::forgeui::app:210] Generation started
///
/// Level conventions in this codebase:
/// - trace: per-frame or per-item details (keep out of render paths)
/// - debug: UI interactions, request/response sizes, state transitions
/// - info: user-initiated actions and operation completions
/// - warn: fallbacks and recoverable oddities
/// - error: failed operations the user will see
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        log::trace!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::trace!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        log::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        log::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        log::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        log::error!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::error!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    }};
}

/// Tracing-only variants of the macros above, same context prefix.
#[macro_export]
macro_rules! trace_trace {
    ($($arg:tt)*) => {{
        tracing::trace!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! trace_debug {
    ($($arg:tt)*) => {{
        tracing::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! trace_info {
    ($($arg:tt)*) => {{
        tracing::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! trace_warn {
    ($($arg:tt)*) => {{
        tracing::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! trace_error {
    ($($arg:tt)*) => {{
        tracing::error!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    }};
}
