#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use tracing_subscriber::prelude::*;

fn init_logging() {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "", "backforge") {
        let log_dir = proj_dirs.data_dir().join("logs");
        let _ = std::fs::create_dir_all(&log_dir);

        let log_path = log_dir.join("backforge.log");

        let file = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&log_path)
            .expect("Failed to open log file");

        // Restrict the log file to the owner; prompts can quote user data.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Ok(metadata) = file.metadata() {
                let mut perms = metadata.permissions();
                perms.set_mode(0o600);
                if let Err(e) = std::fs::set_permissions(&log_path, perms) {
                    eprintln!("Failed to set log file permissions: {}", e);
                }
            }
        }

        // RUST_LOG wins over the built-in directives when it is set.
        let directives = std::env::var("RUST_LOG")
            .unwrap_or_else(|_| backforge::DEFAULT_LOG_FILTER.to_string());
        let filter = match tracing_subscriber::EnvFilter::builder().parse(&directives) {
            Ok(filter) => filter,
            Err(e) => {
                eprintln!(
                    "Invalid RUST_LOG directives ({}), falling back to the defaults",
                    e
                );
                tracing_subscriber::EnvFilter::new(backforge::DEFAULT_LOG_FILTER)
            }
        };

        let (filter, reload_handle) = tracing_subscriber::reload::Layer::new(filter);

        let subscriber = tracing_subscriber::registry().with(filter).with(
            tracing_subscriber::fmt::layer()
                .with_writer(move || file.try_clone().expect("Failed to clone file handle"))
                .with_ansi(false), // No ANSI colors in file
        );

        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");

        // Bridge log crate events to tracing (for eframe, egui, wgpu, etc.)
        // This must be done AFTER setting the tracing subscriber
        tracing_log::LogTracer::init().expect("Failed to initialize log-to-tracing bridge");

        // Store reload handle so the UI can toggle verbose logging later
        backforge::set_tracing_reload_handle(reload_handle);

        tracing::info!("Logging initialized to: {:?}", log_path);
        tracing::info!("Log directives: {}", directives);
    }
}

fn setup_panic_handler() {
    // Write panics to a crash log even when normal logging never came up.
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "Backforge crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| {
                    panic_info
                        .payload()
                        .downcast_ref::<String>()
                        .map(|s| s.as_str())
                })
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "", "backforge") {
            let log_dir = proj_dirs.data_dir().join("logs");
            let _ = std::fs::create_dir_all(&log_dir);
            let crash_log_path = log_dir.join("crash.log");

            if let Ok(mut file) = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&crash_log_path)
            {
                use std::io::Write;
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
            }

            eprintln!("\n{}", crash_msg);
            eprintln!("Crash log written to: {:?}", crash_log_path);
        } else {
            eprintln!("\n{}", crash_msg);
        }
    }));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up the panic handler before anything else to catch early crashes
    setup_panic_handler();

    init_logging();

    tracing::info!("backforge {} starting", env!("CARGO_PKG_VERSION"));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([800.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Backforge",
        native_options,
        Box::new(|cc| Ok(Box::new(backforge::ForgeApp::new(cc)))),
    )?;

    Ok(())
}
